//! Closed enumerations stored as plain `String` columns on entity rows.
//!
//! No corpus entity used `DeriveActiveEnum`, so these stay ordinary Rust
//! enums with hand-written `as_str`/`parse` and a thin `FromStr` impl;
//! repository code converts at the boundary when building or reading a
//! `Model`.

use std::fmt;
use std::str::FromStr;

macro_rules! string_enum {
    ($name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $str),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    other => Err(UnknownEnumValue { value: other.to_string(), enum_name: stringify!($name) }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnumValue {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {:?}", self.enum_name, self.value)
    }
}

impl std::error::Error for UnknownEnumValue {}

string_enum!(TrackArtistLinkType {
    Artist => "artist",
    ReleaseArtist => "release_artist",
    Composer => "composer",
    Conductor => "conductor",
    Lyricist => "lyricist",
    Mixer => "mixer",
    Performer => "performer",
    Producer => "producer",
    Remixer => "remixer",
    Writer => "writer",
});

string_enum!(TrackAdvisory {
    Unknown => "unknown",
    Clean => "clean",
    Explicit => "explicit",
});

string_enum!(UserRole {
    Admin => "admin",
    Regular => "regular",
    Demo => "demo",
});

string_enum!(ScrobblingBackend {
    None => "none",
    ListenBrainz => "listenbrainz",
    Internal => "internal",
});

string_enum!(FeedbackBackend {
    None => "none",
    ListenBrainz => "listenbrainz",
    Internal => "internal",
});

string_enum!(StarredSyncState {
    PendingAdd => "pending_add",
    Synchronized => "synchronized",
    PendingRemove => "pending_remove",
});

string_enum!(TrackListType {
    Playlist => "playlist",
    Internal => "internal",
});

string_enum!(PodcastEpisodeManualDownloadState {
    None => "none",
    DownloadRequested => "download_requested",
    DeleteRequested => "delete_requested",
});

string_enum!(ScanUpdatePeriod {
    Never => "never",
    Hourly => "hourly",
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
});

string_enum!(SimilarityEngineType {
    Clusters => "clusters",
    Features => "features",
    None => "none",
});

string_enum!(TrackSortMethod {
    None => "none",
    Name => "name",
    AddedDesc => "added_desc",
    LastWrittenDesc => "last_written_desc",
    Random => "random",
    TrackList => "tracklist",
    Release => "release",
    DateDescThenRelease => "date_desc_then_release",
});

string_enum!(ArtistSortMethod {
    None => "none",
    Name => "name",
    Random => "random",
});

string_enum!(ReleaseSortMethod {
    None => "none",
    Name => "name",
    Random => "random",
    ArtistNameThenDate => "artist_name_then_date",
});

string_enum!(ClusterSortMethod {
    None => "none",
    Name => "name",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        assert_eq!(TrackAdvisory::Explicit.as_str(), "explicit");
        assert_eq!(TrackAdvisory::from_str("explicit").unwrap(), TrackAdvisory::Explicit);
        assert!(TrackAdvisory::from_str("bogus").is_err());
    }
}

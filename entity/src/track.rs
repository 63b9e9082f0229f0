use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "track")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub absolute_path: String,
    pub file_size: i64,
    pub last_write_time: DateTimeUtc,
    pub added_time: DateTimeUtc,
    pub name: String,
    pub duration_ms: i64,
    pub bitrate: Option<i32>,
    pub bits_per_sample: Option<i32>,
    pub sample_rate: Option<i32>,
    pub channel_count: Option<i32>,
    pub track_number: Option<i32>,
    /// Partial date, e.g. "2021" or "2021-05"; empty string means unset.
    pub date: Option<String>,
    pub original_date: Option<String>,
    pub mbid: Option<String>,
    pub recording_mbid: Option<String>,
    pub copyright: Option<String>,
    pub copyright_url: Option<String>,
    /// TrackAdvisory::as_str()
    pub advisory: String,
    pub replay_gain: Option<f64>,
    pub artist_display_name: String,
    pub comment: Option<String>,
    pub release_id: Option<i64>,
    pub medium_id: Option<i64>,
    pub media_library_id: Option<i64>,
    pub directory_id: Option<i64>,
    pub preferred_artwork_id: Option<i64>,
    pub preferred_media_artwork_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::release::Entity",
        from = "Column::ReleaseId",
        to = "super::release::Column::Id",
        on_delete = "Cascade"
    )]
    Release,
    #[sea_orm(
        belongs_to = "super::medium::Entity",
        from = "Column::MediumId",
        to = "super::medium::Column::Id",
        on_delete = "Cascade"
    )]
    Medium,
    #[sea_orm(
        belongs_to = "super::media_library::Entity",
        from = "Column::MediaLibraryId",
        to = "super::media_library::Column::Id",
        on_delete = "SetNull"
    )]
    MediaLibrary,
    #[sea_orm(
        belongs_to = "super::directory::Entity",
        from = "Column::DirectoryId",
        to = "super::directory::Column::Id",
        on_delete = "Cascade"
    )]
    Directory,
    #[sea_orm(has_many = "super::track_artist_link::Entity")]
    TrackArtistLink,
    #[sea_orm(has_many = "super::track_cluster::Entity")]
    TrackCluster,
    #[sea_orm(has_many = "super::track_lyrics::Entity")]
    TrackLyrics,
    #[sea_orm(has_many = "super::track_embedded_image::Entity")]
    TrackEmbeddedImage,
    #[sea_orm(has_many = "super::track_embedded_image_link::Entity")]
    TrackEmbeddedImageLink,
    #[sea_orm(has_many = "super::tracklist_entry::Entity")]
    TrackListEntry,
    #[sea_orm(has_many = "super::starred_track::Entity")]
    StarredTrack,
    #[sea_orm(has_many = "super::track_bookmark::Entity")]
    TrackBookmark,
}

impl Related<super::release::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Release.def()
    }
}

impl Related<super::medium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medium.def()
    }
}

impl Related<super::media_library::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaLibrary.def()
    }
}

impl Related<super::directory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Directory.def()
    }
}

impl Related<super::track_artist_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackArtistLink.def()
    }
}

impl Related<super::track_lyrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackLyrics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

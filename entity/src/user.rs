use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub login_name: String,
    pub password_hash: String,
    pub password_salt: String,
    /// UserRole::as_str()
    pub role: String,
    pub transcode_enabled: bool,
    pub transcode_format: Option<String>,
    pub transcode_bitrate: Option<i32>,
    /// ScrobblingBackend::as_str()
    pub scrobbling_backend: String,
    /// FeedbackBackend::as_str()
    pub feedback_backend: String,
    pub listenbrainz_token: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_token::Entity")]
    AuthToken,
    #[sea_orm(has_many = "super::tracklist::Entity")]
    TrackList,
    #[sea_orm(has_many = "super::starred_artist::Entity")]
    StarredArtist,
    #[sea_orm(has_many = "super::starred_release::Entity")]
    StarredRelease,
    #[sea_orm(has_many = "super::starred_track::Entity")]
    StarredTrack,
    #[sea_orm(has_many = "super::track_bookmark::Entity")]
    TrackBookmark,
}

impl Related<super::auth_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthToken.def()
    }
}

impl Related<super::tracklist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

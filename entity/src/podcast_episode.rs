use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "podcast_episode")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub podcast_id: i64,
    /// Empty until the episode has been downloaded.
    pub audio_relative_path: String,
    /// PodcastEpisodeManualDownloadState::as_str()
    pub manual_download_state: String,
    pub enclosure_url: Option<String>,
    pub enclosure_length: Option<i64>,
    pub enclosure_type: Option<String>,
    pub pub_date: Option<DateTimeUtc>,
    pub duration_ms: Option<i64>,
    pub artwork_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::podcast::Entity",
        from = "Column::PodcastId",
        to = "super::podcast::Column::Id",
        on_delete = "Cascade"
    )]
    Podcast,
    #[sea_orm(
        belongs_to = "super::artwork::Entity",
        from = "Column::ArtworkId",
        to = "super::artwork::Column::Id",
        on_delete = "SetNull"
    )]
    Artwork,
}

impl Related<super::podcast::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Podcast.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "podcast")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub feed_url: String,
    pub title: String,
    pub link: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub last_build_date: Option<DateTimeUtc>,
    pub itunes_author: Option<String>,
    pub itunes_category: Option<String>,
    pub itunes_explicit: bool,
    pub itunes_image_url: Option<String>,
    pub itunes_owner_email: Option<String>,
    pub itunes_owner_name: Option<String>,
    pub itunes_subtitle: Option<String>,
    pub itunes_summary: Option<String>,
    pub artwork_id: Option<i64>,
    pub delete_requested: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::podcast_episode::Entity")]
    PodcastEpisode,
    #[sea_orm(
        belongs_to = "super::artwork::Entity",
        from = "Column::ArtworkId",
        to = "super::artwork::Column::Id",
        on_delete = "SetNull"
    )]
    Artwork,
}

impl Related<super::podcast_episode::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PodcastEpisode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

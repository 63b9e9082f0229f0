use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "release")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub sort_name: String,
    pub mbid: Option<String>,
    pub release_group_mbid: Option<String>,
    pub total_disc_count: Option<i32>,
    pub compilation: bool,
    pub artist_display_name: String,
    pub barcode: Option<String>,
    pub comment: Option<String>,
    pub preferred_artwork_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::track::Entity")]
    Track,
    #[sea_orm(has_many = "super::medium::Entity")]
    Medium,
    #[sea_orm(has_many = "super::release_label::Entity")]
    ReleaseLabel,
    #[sea_orm(has_many = "super::release_release_type::Entity")]
    ReleaseReleaseType,
    #[sea_orm(has_many = "super::starred_release::Entity")]
    StarredRelease,
    #[sea_orm(
        belongs_to = "super::artwork::Entity",
        from = "Column::PreferredArtworkId",
        to = "super::artwork::Column::Id",
        on_delete = "SetNull"
    )]
    PreferredArtwork,
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl Related<super::medium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medium.def()
    }
}

// Label and ReleaseType are reached through the join tables explicitly
// (see query::release) rather than through `Related` m2m plumbing: the
// join tables carry no extra columns, so a manual join keeps the query
// composer in one place instead of split across three files.

impl ActiveModelBehavior for ActiveModel {}

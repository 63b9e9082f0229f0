use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub sort_name: String,
    pub mbid: Option<String>,
    pub preferred_artwork_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::track_artist_link::Entity")]
    TrackArtistLink,
    #[sea_orm(has_many = "super::starred_artist::Entity")]
    StarredArtist,
    #[sea_orm(
        belongs_to = "super::artwork::Entity",
        from = "Column::PreferredArtworkId",
        to = "super::artwork::Column::Id",
        on_delete = "SetNull"
    )]
    PreferredArtwork,
}

impl Related<super::track_artist_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackArtistLink.def()
    }
}

impl Related<super::starred_artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StarredArtist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

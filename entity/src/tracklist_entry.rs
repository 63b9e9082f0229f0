use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tracklist_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tracklist_id: i64,
    pub track_id: i64,
    /// Set for history-style entries (an Internal tracklist used as listen history).
    pub date_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tracklist::Entity",
        from = "Column::TracklistId",
        to = "super::tracklist::Column::Id",
        on_delete = "Cascade"
    )]
    TrackList,
    #[sea_orm(
        belongs_to = "super::track::Entity",
        from = "Column::TrackId",
        to = "super::track::Column::Id",
        on_delete = "Cascade"
    )]
    Track,
}

impl Related<super::tracklist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrackList.def()
    }
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

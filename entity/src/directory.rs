use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "directory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub absolute_path: String,
    pub name: String,
    pub parent_directory_id: Option<i64>,
    pub media_library_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_library::Entity",
        from = "Column::MediaLibraryId",
        to = "super::media_library::Column::Id",
        on_delete = "Cascade"
    )]
    MediaLibrary,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentDirectoryId",
        to = "Column::Id",
        on_delete = "Cascade"
    )]
    ParentDirectory,
    #[sea_orm(has_many = "super::track::Entity")]
    Track,
}

impl Related<super::media_library::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaLibrary.def()
    }
}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Track.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

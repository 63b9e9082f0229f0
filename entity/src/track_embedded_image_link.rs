use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Orders a track's embedded images (a container can carry more than one picture).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "track_embedded_image_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub track_id: i64,
    pub track_embedded_image_id: i64,
    pub index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::track::Entity",
        from = "Column::TrackId",
        to = "super::track::Column::Id",
        on_delete = "Cascade"
    )]
    Track,
    #[sea_orm(
        belongs_to = "super::track_embedded_image::Entity",
        from = "Column::TrackEmbeddedImageId",
        to = "super::track_embedded_image::Column::Id",
        on_delete = "Cascade"
    )]
    TrackEmbeddedImage,
}

impl ActiveModelBehavior for ActiveModel {}

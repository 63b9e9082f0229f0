use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Polymorphic artwork reference: exactly one of `image_id` /
/// `track_embedded_image_id` is set. See `catalog_core::artwork` for the
/// tagged accessor and the invariant-preserving constructors.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artwork")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub image_id: Option<i64>,
    pub track_embedded_image_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_delete = "Cascade"
    )]
    Image,
    #[sea_orm(
        belongs_to = "super::track_embedded_image::Entity",
        from = "Column::TrackEmbeddedImageId",
        to = "super::track_embedded_image::Column::Id",
        on_delete = "Cascade"
    )]
    TrackEmbeddedImage,
}

impl ActiveModelBehavior for ActiveModel {}

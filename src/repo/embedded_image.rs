//! `TrackEmbeddedImage` (the extracted picture) and the `TrackEmbeddedImageLink`
//! row ordering it among a track's embedded pictures. Deliberately separate
//! from `repo::artwork`: `Artwork` is the polymorphic "preferred picture"
//! pointer, these two are the track's own raw picture set it is built from.

use entity::prelude::{TrackEmbeddedImage, TrackEmbeddedImageLink};
use entity::{track_embedded_image, track_embedded_image_link};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewEmbeddedImage {
    pub track_id: Id<entity::track::Model>,
    pub mime_type: String,
    pub description: Option<String>,
}

pub async fn create(
    txn: &WriteTransaction<'_>,
    new: NewEmbeddedImage,
    index: i32,
) -> StorageResult<track_embedded_image::Model> {
    let image_active = track_embedded_image::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        track_id: Set(new.track_id.get()),
        mime_type: Set(new.mime_type),
        description: Set(new.description),
    };
    let image = image_active.insert(txn.connection()).await?;

    let link_active = track_embedded_image_link::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        track_id: Set(new.track_id.get()),
        track_embedded_image_id: Set(image.id),
        index: Set(index),
    };
    link_active.insert(txn.connection()).await?;

    Ok(image)
}

pub async fn find_by_id(
    access: &impl ReadAccess,
    id: Id<track_embedded_image::Model>,
) -> StorageResult<Option<track_embedded_image::Model>> {
    let row = TrackEmbeddedImage::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

/// In embedding order (the container's own picture order, migration 3's
/// `track_embedded_image_link.index`).
pub async fn find_for_track(
    access: &impl ReadAccess,
    track_id: Id<entity::track::Model>,
) -> StorageResult<Vec<track_embedded_image::Model>> {
    let links = TrackEmbeddedImageLink::find()
        .filter(track_embedded_image_link::Column::TrackId.eq(track_id.get()))
        .order_by_asc(track_embedded_image_link::Column::Index)
        .all(access.connection())
        .await?;

    let mut images = Vec::with_capacity(links.len());
    for link in links {
        if let Some(image) = TrackEmbeddedImage::find_by_id(link.track_embedded_image_id)
            .one(access.connection())
            .await?
        {
            images.push(image);
        }
    }
    Ok(images)
}

/// Cascades its link row (migration 4: `fk_track_embedded_image_link_image`).
pub async fn remove(txn: &WriteTransaction<'_>, id: Id<track_embedded_image::Model>) -> StorageResult<()> {
    TrackEmbeddedImage::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

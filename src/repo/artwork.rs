use entity::artwork::{ActiveModel, Model};
use entity::image::{self, ActiveModel as ImageActiveModel};
use entity::prelude::{Artist, Artwork, Image, Release, Track};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::error::StorageError;
use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

/// Tagged view over an `Artwork` row's polymorphic invariant: exactly one
/// of `Image` / `TrackEmbeddedImage` is ever set.
pub enum ArtworkSource {
    Image(Id<image::Model>),
    TrackEmbeddedImage(Id<entity::track_embedded_image::Model>),
}

pub fn source_of(model: &Model) -> Option<ArtworkSource> {
    match (model.image_id, model.track_embedded_image_id) {
        (Some(image_id), None) => Some(ArtworkSource::Image(Id::new(image_id))),
        (None, Some(track_embedded_image_id)) => {
            Some(ArtworkSource::TrackEmbeddedImage(Id::new(track_embedded_image_id)))
        }
        _ => None,
    }
}

pub async fn create_from_image(txn: &WriteTransaction<'_>, image_id: Id<image::Model>) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        image_id: Set(Some(image_id.get())),
        track_embedded_image_id: Set(None),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn create_from_track_embedded_image(
    txn: &WriteTransaction<'_>,
    track_embedded_image_id: Id<entity::track_embedded_image::Model>,
) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        image_id: Set(None),
        track_embedded_image_id: Set(Some(track_embedded_image_id.get())),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = Artwork::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    Artwork::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

pub async fn create_image(
    txn: &WriteTransaction<'_>,
    absolute_path: String,
    file_last_write_time: chrono::DateTime<chrono::Utc>,
) -> StorageResult<image::Model> {
    let active = ImageActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        absolute_path: Set(absolute_path),
        file_last_write_time: Set(file_last_write_time),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_image_by_path(access: &impl ReadAccess, absolute_path: &str) -> StorageResult<Option<image::Model>> {
    let row = Image::find()
        .filter(image::Column::AbsolutePath.eq(absolute_path.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

/// Deletes `image_id` (cascading its `Artwork` rows, migration 4) and then
/// nulls the preferred-artwork column of every Artist/Release/Track that
/// pointed at one of those now-gone artwork rows. Those back-references
/// carry no DB-level FK (see DESIGN.md), so the set-null behavior §8
/// requires of an image removal is implemented here rather than by the
/// schema.
pub async fn remove_image(txn: &WriteTransaction<'_>, image_id: Id<image::Model>) -> StorageResult<()> {
    let orphaned: Vec<i64> = Artwork::find()
        .filter(entity::artwork::Column::ImageId.eq(image_id.get()))
        .all(txn.connection())
        .await?
        .into_iter()
        .map(|row| row.id)
        .collect();

    Image::delete_by_id(image_id.get()).exec(txn.connection()).await?;

    if orphaned.is_empty() {
        return Ok(());
    }

    Artist::update_many()
        .col_expr(entity::artist::Column::PreferredArtworkId, sea_orm::sea_query::Expr::value(None::<i64>))
        .filter(entity::artist::Column::PreferredArtworkId.is_in(orphaned.clone()))
        .exec(txn.connection())
        .await?;

    Release::update_many()
        .col_expr(entity::release::Column::PreferredArtworkId, sea_orm::sea_query::Expr::value(None::<i64>))
        .filter(entity::release::Column::PreferredArtworkId.is_in(orphaned.clone()))
        .exec(txn.connection())
        .await?;

    Track::update_many()
        .col_expr(entity::track::Column::PreferredArtworkId, sea_orm::sea_query::Expr::value(None::<i64>))
        .filter(entity::track::Column::PreferredArtworkId.is_in(orphaned.clone()))
        .exec(txn.connection())
        .await?;

    Track::update_many()
        .col_expr(entity::track::Column::PreferredMediaArtworkId, sea_orm::sea_query::Expr::value(None::<i64>))
        .filter(entity::track::Column::PreferredMediaArtworkId.is_in(orphaned))
        .exec(txn.connection())
        .await?;

    Ok(())
}

/// Sets an entity's preferred-artwork column after checking the target
/// artwork actually exists — there is no DB-level FK on these back-reference
/// columns (see DESIGN.md, the artist/artwork/track-embedded-image cycle),
/// so this check is the repository layer's substitute for one.
pub async fn ensure_exists(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<()> {
    let exists = Artwork::find_by_id(id.get()).one(access.connection()).await?.is_some();
    if exists {
        Ok(())
    } else {
        Err(StorageError::IntegrityViolation(format!("artwork {id} does not exist")))
    }
}

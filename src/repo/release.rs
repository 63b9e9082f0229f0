use entity::release::{ActiveModel, Model};
use entity::prelude::{Label, Medium, Release, ReleaseLabel, ReleaseReleaseType, ReleaseType};
use entity::{medium, release, release_label, release_release_type};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::ids::Id;
use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewRelease {
    pub name: String,
    pub sort_name: String,
    pub mbid: Option<String>,
    pub release_group_mbid: Option<String>,
    pub total_disc_count: Option<i32>,
    pub compilation: bool,
    pub artist_display_name: String,
    pub barcode: Option<String>,
    pub comment: Option<String>,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewRelease) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(new.name),
        sort_name: Set(new.sort_name),
        mbid: Set(new.mbid),
        release_group_mbid: Set(new.release_group_mbid),
        total_disc_count: Set(new.total_disc_count),
        compilation: Set(new.compilation),
        artist_display_name: Set(new.artist_display_name),
        barcode: Set(new.barcode),
        comment: Set(new.comment),
        preferred_artwork_id: Set(None),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = Release::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn find_by_mbid(access: &impl ReadAccess, mbid: &str) -> StorageResult<Option<Model>> {
    let row = Release::find()
        .filter(release::Column::Mbid.eq(mbid.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn set_name(
    txn: &WriteTransaction<'_>,
    model: Model,
    name: String,
    sort_name: String,
) -> StorageResult<Model> {
    modify::<entity::release::Entity, _>(txn, model, |active| {
        active.name = Set(name);
        active.sort_name = Set(sort_name);
    })
    .await
}

pub async fn set_preferred_artwork(
    txn: &WriteTransaction<'_>,
    model: Model,
    artwork_id: Option<Id<entity::artwork::Model>>,
) -> StorageResult<Model> {
    modify::<entity::release::Entity, _>(txn, model, |active| {
        active.preferred_artwork_id = Set(artwork_id.map(Id::get));
    })
    .await
}

/// Cascades Medium, ReleaseLabel, ReleaseReleaseType, and every Track that
/// belongs to this release (migration 2 / 3: `fk_track_release` is
/// `ON DELETE CASCADE`, matching §8's "deleting a Release deletes its Tracks").
pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    Release::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

pub struct NewMedium {
    pub release_id: Id<Model>,
    pub position: i32,
    pub name: Option<String>,
}

pub async fn create_medium(txn: &WriteTransaction<'_>, new: NewMedium) -> StorageResult<medium::Model> {
    let active = medium::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        release_id: Set(new.release_id.get()),
        position: Set(new.position),
        name: Set(new.name),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_media(access: &impl ReadAccess, release_id: Id<Model>) -> StorageResult<Vec<medium::Model>> {
    use sea_orm::QueryOrder;
    let rows = Medium::find()
        .filter(medium::Column::ReleaseId.eq(release_id.get()))
        .order_by_asc(medium::Column::Position)
        .all(access.connection())
        .await?;
    Ok(rows)
}

pub async fn remove_medium(txn: &WriteTransaction<'_>, id: Id<medium::Model>) -> StorageResult<()> {
    Medium::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

/// Idempotent: does nothing if the link already exists.
pub async fn add_label(
    txn: &WriteTransaction<'_>,
    release_id: Id<Model>,
    label_id: Id<entity::label::Model>,
) -> StorageResult<()> {
    let existing = ReleaseLabel::find()
        .filter(release_label::Column::ReleaseId.eq(release_id.get()))
        .filter(release_label::Column::LabelId.eq(label_id.get()))
        .one(txn.connection())
        .await?;
    if existing.is_none() {
        let active = release_label::ActiveModel {
            release_id: Set(release_id.get()),
            label_id: Set(label_id.get()),
        };
        active.insert(txn.connection()).await?;
    }
    Ok(())
}

pub async fn remove_label(
    txn: &WriteTransaction<'_>,
    release_id: Id<Model>,
    label_id: Id<entity::label::Model>,
) -> StorageResult<()> {
    ReleaseLabel::delete_many()
        .filter(release_label::Column::ReleaseId.eq(release_id.get()))
        .filter(release_label::Column::LabelId.eq(label_id.get()))
        .exec(txn.connection())
        .await?;
    Ok(())
}

pub async fn find_labels(
    access: &impl ReadAccess,
    release_id: Id<Model>,
) -> StorageResult<Vec<entity::label::Model>> {
    let links = ReleaseLabel::find()
        .filter(release_label::Column::ReleaseId.eq(release_id.get()))
        .all(access.connection())
        .await?;
    let label_ids: Vec<i64> = links.into_iter().map(|l| l.label_id).collect();
    let rows = Label::find()
        .filter(entity::label::Column::Id.is_in(label_ids))
        .all(access.connection())
        .await?;
    Ok(rows)
}

pub async fn add_release_type(
    txn: &WriteTransaction<'_>,
    release_id: Id<Model>,
    release_type_id: Id<entity::release_type::Model>,
) -> StorageResult<()> {
    let existing = ReleaseReleaseType::find()
        .filter(release_release_type::Column::ReleaseId.eq(release_id.get()))
        .filter(release_release_type::Column::ReleaseTypeId.eq(release_type_id.get()))
        .one(txn.connection())
        .await?;
    if existing.is_none() {
        let active = release_release_type::ActiveModel {
            release_id: Set(release_id.get()),
            release_type_id: Set(release_type_id.get()),
        };
        active.insert(txn.connection()).await?;
    }
    Ok(())
}

pub async fn remove_release_type(
    txn: &WriteTransaction<'_>,
    release_id: Id<Model>,
    release_type_id: Id<entity::release_type::Model>,
) -> StorageResult<()> {
    ReleaseReleaseType::delete_many()
        .filter(release_release_type::Column::ReleaseId.eq(release_id.get()))
        .filter(release_release_type::Column::ReleaseTypeId.eq(release_type_id.get()))
        .exec(txn.connection())
        .await?;
    Ok(())
}

pub async fn find_release_types(
    access: &impl ReadAccess,
    release_id: Id<Model>,
) -> StorageResult<Vec<entity::release_type::Model>> {
    let links = ReleaseReleaseType::find()
        .filter(release_release_type::Column::ReleaseId.eq(release_id.get()))
        .all(access.connection())
        .await?;
    let type_ids: Vec<i64> = links.into_iter().map(|l| l.release_type_id).collect();
    let rows = ReleaseType::find()
        .filter(entity::release_type::Column::Id.is_in(type_ids))
        .all(access.connection())
        .await?;
    Ok(rows)
}

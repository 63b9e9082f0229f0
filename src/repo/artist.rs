use entity::artist::{self, ActiveModel, Model};
use entity::prelude::Artist;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};

use crate::ids::Id;
use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewArtist {
    pub name: String,
    pub sort_name: String,
    pub mbid: Option<String>,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewArtist) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(new.name),
        sort_name: Set(new.sort_name),
        mbid: Set(new.mbid),
        preferred_artwork_id: Set(None),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = Artist::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn find_by_mbid(access: &impl ReadAccess, mbid: &str) -> StorageResult<Option<Model>> {
    use sea_orm::{ColumnTrait, QueryFilter};
    let row = Artist::find()
        .filter(artist::Column::Mbid.eq(mbid.to_string()))
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
    modify::<entity::artist::Entity, _>(txn, model, |active| {
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
    modify::<entity::artist::Entity, _>(txn, model, |active| {
        active.preferred_artwork_id = Set(artwork_id.map(Id::get));
    })
    .await
}

/// Removing an artist cascades its `TrackArtistLink` and starring rows at
/// the database level (see migration 2 / 5); callers should only call this
/// on rows surfaced by orphan collection.
pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    Artist::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

use entity::media_library::{ActiveModel, Model};
use entity::prelude::MediaLibrary;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub async fn create(txn: &WriteTransaction<'_>, root_path: String, name: String) -> StorageResult<Model> {
    let active =
        ActiveModel { id: sea_orm::ActiveValue::NotSet, root_path: Set(root_path), name: Set(name) };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = MediaLibrary::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn find_by_root_path(access: &impl ReadAccess, root_path: &str) -> StorageResult<Option<Model>> {
    let row = MediaLibrary::find()
        .filter(entity::media_library::Column::RootPath.eq(root_path.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn list_all(access: &impl ReadAccess) -> StorageResult<Vec<Model>> {
    let rows = MediaLibrary::find().all(access.connection()).await?;
    Ok(rows)
}

/// Cascades to `directory` and `track` rows under this library (migration 1
/// / 3 foreign keys); tracks outside this library keep a null
/// `media_library_id` via `SetNull` on the track side.
pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    MediaLibrary::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

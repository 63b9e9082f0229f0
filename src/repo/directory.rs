use entity::directory::{ActiveModel, Model};
use entity::prelude::Directory;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewDirectory {
    pub absolute_path: String,
    pub name: String,
    pub parent_directory_id: Option<Id<Model>>,
    pub media_library_id: Id<entity::media_library::Model>,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewDirectory) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        absolute_path: Set(new.absolute_path),
        name: Set(new.name),
        parent_directory_id: Set(new.parent_directory_id.map(Id::get)),
        media_library_id: Set(new.media_library_id.get()),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = Directory::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn find_by_path(access: &impl ReadAccess, absolute_path: &str) -> StorageResult<Option<Model>> {
    let row = Directory::find()
        .filter(entity::directory::Column::AbsolutePath.eq(absolute_path.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

/// Cascades to child directories and tracks (self-referential FK plus
/// `fk_track_directory`, both `Cascade` in migration 1/3).
pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    Directory::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

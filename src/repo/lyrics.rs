use entity::prelude::TrackLyrics;
use entity::track_lyrics::{ActiveModel, Model};
use entity::track_lyrics;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewLyrics {
    pub track_id: Id<entity::track::Model>,
    pub language: String,
    pub offset_ms: Option<i64>,
    pub content: String,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewLyrics) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        track_id: Set(new.track_id.get()),
        language: Set(new.language),
        offset_ms: Set(new.offset_ms),
        content: Set(new.content),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_for_track(
    access: &impl ReadAccess,
    track_id: Id<entity::track::Model>,
) -> StorageResult<Vec<Model>> {
    let rows = TrackLyrics::find()
        .filter(track_lyrics::Column::TrackId.eq(track_id.get()))
        .all(access.connection())
        .await?;
    Ok(rows)
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    TrackLyrics::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

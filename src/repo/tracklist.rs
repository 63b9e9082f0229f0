use chrono::{DateTime, Utc};
use entity::prelude::{TrackList, TrackListEntry};
use entity::tracklist::{ActiveModel, Model};
use entity::tracklist_entry;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder};

use crate::enums::TrackListType;
use crate::ids::Id;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub async fn create(
    txn: &WriteTransaction<'_>,
    user_id: Id<entity::user::Model>,
    name: String,
    list_type: TrackListType,
    is_public: bool,
) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        user_id: Set(user_id.get()),
        name: Set(name),
        list_type: Set(list_type.as_str().to_string()),
        is_public: Set(is_public),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = TrackList::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

/// A user's single `Internal` tracklist used as listen history (§3's
/// "Listen" concept — see DESIGN.md for why this isn't a separate entity).
pub async fn find_internal(access: &impl ReadAccess, user_id: Id<entity::user::Model>) -> StorageResult<Option<Model>> {
    use entity::tracklist::Column;
    let row = TrackList::find()
        .filter(Column::UserId.eq(user_id.get()))
        .filter(Column::ListType.eq(TrackListType::Internal.as_str()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    TrackList::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

/// Appends a track. `date_time` set means this is a history-style entry
/// (e.g. a listen timestamp); `None` means an ordinary playlist position,
/// ordered by insertion id as §3 specifies.
pub async fn append_entry(
    txn: &WriteTransaction<'_>,
    tracklist_id: Id<Model>,
    track_id: Id<entity::track::Model>,
    date_time: Option<DateTime<Utc>>,
) -> StorageResult<tracklist_entry::Model> {
    let active = tracklist_entry::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        tracklist_id: Set(tracklist_id.get()),
        track_id: Set(track_id.get()),
        date_time: Set(date_time),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn list_entries(
    access: &impl ReadAccess,
    tracklist_id: Id<Model>,
) -> StorageResult<Vec<tracklist_entry::Model>> {
    let rows = TrackListEntry::find()
        .filter(tracklist_entry::Column::TracklistId.eq(tracklist_id.get()))
        .order_by(tracklist_entry::Column::Id, Order::Asc)
        .all(access.connection())
        .await?;
    Ok(rows)
}

pub async fn remove_entry(txn: &WriteTransaction<'_>, entry_id: Id<tracklist_entry::Model>) -> StorageResult<()> {
    TrackListEntry::delete_by_id(entry_id.get()).exec(txn.connection()).await?;
    Ok(())
}

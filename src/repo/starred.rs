//! `Starred{Artist,Release,Track}` and `TrackBookmark` repositories. The
//! three starred tables are structurally identical (user, target, backend,
//! date, sync state); each gets its own thin module rather than a generic
//! one, matching how the mapping layer declares each as its own entity.

use chrono::{DateTime, Utc};
use entity::prelude::{StarredArtist, StarredRelease, StarredTrack, TrackBookmark};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use crate::enums::StarredSyncState;
use crate::ids::Id;
use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

macro_rules! starred_repo {
    ($module:ident, $entity_mod:ident, $entity:ident, $target_col:ident, $target_model:path) => {
        pub mod $module {
            use super::*;
            use entity::$entity_mod::{ActiveModel, Column, Model};

            pub async fn star(
                txn: &WriteTransaction<'_>,
                user_id: Id<entity::user::Model>,
                target_id: Id<$target_model>,
                backend: String,
                date: DateTime<Utc>,
            ) -> StorageResult<Model> {
                let active = ActiveModel {
                    id: sea_orm::ActiveValue::NotSet,
                    user_id: Set(user_id.get()),
                    $target_col: Set(target_id.get()),
                    backend: Set(backend),
                    date: Set(date),
                    sync_state: Set(StarredSyncState::PendingAdd.as_str().to_string()),
                };
                let saved = active.insert(txn.connection()).await?;
                Ok(saved)
            }

            pub async fn find(
                access: &impl ReadAccess,
                user_id: Id<entity::user::Model>,
                target_id: Id<$target_model>,
                backend: &str,
            ) -> StorageResult<Option<Model>> {
                let row = $entity::find()
                    .filter(Column::UserId.eq(user_id.get()))
                    .filter(Column::$target_col.eq(target_id.get()))
                    .filter(Column::Backend.eq(backend.to_string()))
                    .one(access.connection())
                    .await?;
                Ok(row)
            }

            /// Advances the sync state machine: `PendingAdd` and
            /// `PendingRemove` are transient, reconciled by the backend
            /// sync job into `Synchronized` or an actual row deletion.
            pub async fn set_sync_state(
                txn: &WriteTransaction<'_>,
                model: Model,
                state: StarredSyncState,
            ) -> StorageResult<Model> {
                modify::<entity::$entity_mod::Entity, _>(txn, model, |active| {
                    active.sync_state = Set(state.as_str().to_string());
                })
                .await
            }

            pub async fn unstar(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
                $entity::delete_by_id(id.get()).exec(txn.connection()).await?;
                Ok(())
            }
        }
    };
}

starred_repo!(artist, starred_artist, StarredArtist, ArtistId, entity::artist::Model);
starred_repo!(release, starred_release, StarredRelease, ReleaseId, entity::release::Model);
starred_repo!(track, starred_track, StarredTrack, TrackId, entity::track::Model);

pub mod bookmark {
    use super::*;
    use entity::track_bookmark::{ActiveModel, Column, Model};

    pub async fn create(
        txn: &WriteTransaction<'_>,
        user_id: Id<entity::user::Model>,
        track_id: Id<entity::track::Model>,
        offset_ms: i64,
        comment: Option<String>,
    ) -> StorageResult<Model> {
        let active = ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(user_id.get()),
            track_id: Set(track_id.get()),
            offset_ms: Set(offset_ms),
            comment: Set(comment),
        };
        let saved = active.insert(txn.connection()).await?;
        Ok(saved)
    }

    pub async fn find(
        access: &impl ReadAccess,
        user_id: Id<entity::user::Model>,
        track_id: Id<entity::track::Model>,
    ) -> StorageResult<Option<Model>> {
        let row = TrackBookmark::find()
            .filter(Column::UserId.eq(user_id.get()))
            .filter(Column::TrackId.eq(track_id.get()))
            .one(access.connection())
            .await?;
        Ok(row)
    }

    pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
        TrackBookmark::delete_by_id(id.get()).exec(txn.connection()).await?;
        Ok(())
    }
}

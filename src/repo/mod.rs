//! Per-entity repository functions: create, find-by-id, modify, remove.
//!
//! Accessors take `&impl ReadAccess` (either transaction kind); mutators take
//! `&WriteTransaction` specifically, so a caller literally cannot name an
//! argument that would let them mutate under a read-only transaction.

pub mod artist;
pub mod artwork;
pub mod cluster;
pub mod directory;
pub mod embedded_image;
pub mod lookup;
pub mod lyrics;
pub mod media_library;
pub mod podcast;
pub mod release;
pub mod scan_settings;
pub mod starred;
pub mod track;
pub mod tracklist;
pub mod user;

use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};

use crate::transaction::WriteTransaction;
use crate::StorageResult;

/// Re-fetch-to-mutate: takes an already-loaded `Model`, turns it into its
/// `ActiveModel`, lets `mutate` set the changed columns, and saves it. There
/// is no long-lived handle tying a `Model` to its transaction; callers
/// re-fetch when they need the latest state (Design Notes, entity handles).
pub(crate) async fn modify<E, F>(
    txn: &WriteTransaction<'_>,
    model: E::Model,
    mutate: F,
) -> StorageResult<E::Model>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    F: FnOnce(&mut E::ActiveModel),
{
    let mut active = model.into_active_model();
    mutate(&mut active);
    let saved = active.update(txn.connection()).await?;
    Ok(saved)
}

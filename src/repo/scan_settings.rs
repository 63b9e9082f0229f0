use entity::prelude::ScanSettings;
use entity::scan_settings::Model;
use sea_orm::EntityTrait;

use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

const SINGLETON_ID: i64 = 1;

/// The settings row is seeded by migration 7 and always has id 1; there is
/// no `create`, only `get`/`modify`.
pub async fn get(access: &impl ReadAccess) -> StorageResult<Model> {
    let row = ScanSettings::find_by_id(SINGLETON_ID)
        .one(access.connection())
        .await?
        .expect("scan_settings singleton row is seeded by migration and never removed");
    Ok(row)
}

pub async fn set_audio_scan_version(txn: &WriteTransaction<'_>, model: Model, version: i32) -> StorageResult<Model> {
    modify::<entity::scan_settings::Entity, _>(txn, model, |active| {
        active.audio_scan_version = sea_orm::ActiveValue::Set(version);
    })
    .await
}

pub async fn set_start_time_of_day_minutes(
    txn: &WriteTransaction<'_>,
    model: Model,
    minutes: i32,
) -> StorageResult<Model> {
    modify::<entity::scan_settings::Entity, _>(txn, model, |active| {
        active.start_time_of_day_minutes = sea_orm::ActiveValue::Set(minutes);
    })
    .await
}

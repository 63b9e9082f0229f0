use chrono::{DateTime, Utc};
use entity::prelude::{Track, TrackArtistLink, TrackCluster};
use entity::track::{ActiveModel, Model};
use entity::{track, track_artist_link, track_cluster};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

use crate::enums::{TrackAdvisory, TrackArtistLinkType};
use crate::ids::Id;
use crate::range::IdRange;
use crate::repo::modify;
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub struct NewTrack {
    pub absolute_path: String,
    pub file_size: i64,
    pub last_write_time: DateTime<Utc>,
    pub added_time: DateTime<Utc>,
    pub name: String,
    pub duration_ms: i64,
    pub bitrate: Option<i32>,
    pub bits_per_sample: Option<i32>,
    pub sample_rate: Option<i32>,
    pub channel_count: Option<i32>,
    pub track_number: Option<i32>,
    pub date: Option<String>,
    pub original_date: Option<String>,
    pub mbid: Option<String>,
    pub recording_mbid: Option<String>,
    pub copyright: Option<String>,
    pub copyright_url: Option<String>,
    pub advisory: TrackAdvisory,
    pub replay_gain: Option<f64>,
    pub artist_display_name: String,
    pub comment: Option<String>,
    pub release_id: Option<Id<entity::release::Model>>,
    pub medium_id: Option<Id<entity::medium::Model>>,
    pub media_library_id: Option<Id<entity::media_library::Model>>,
    pub directory_id: Option<Id<entity::directory::Model>>,
}

pub async fn create(txn: &WriteTransaction<'_>, new: NewTrack) -> StorageResult<Model> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        absolute_path: Set(new.absolute_path),
        file_size: Set(new.file_size),
        last_write_time: Set(new.last_write_time),
        added_time: Set(new.added_time),
        name: Set(new.name),
        duration_ms: Set(new.duration_ms),
        bitrate: Set(new.bitrate),
        bits_per_sample: Set(new.bits_per_sample),
        sample_rate: Set(new.sample_rate),
        channel_count: Set(new.channel_count),
        track_number: Set(new.track_number),
        date: Set(new.date),
        original_date: Set(new.original_date),
        mbid: Set(new.mbid),
        recording_mbid: Set(new.recording_mbid),
        copyright: Set(new.copyright),
        copyright_url: Set(new.copyright_url),
        advisory: Set(new.advisory.as_str().to_string()),
        replay_gain: Set(new.replay_gain),
        artist_display_name: Set(new.artist_display_name),
        comment: Set(new.comment),
        release_id: Set(new.release_id.map(Id::get)),
        medium_id: Set(new.medium_id.map(Id::get)),
        media_library_id: Set(new.media_library_id.map(Id::get)),
        directory_id: Set(new.directory_id.map(Id::get)),
        preferred_artwork_id: Set(None),
        preferred_media_artwork_id: Set(None),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn find_by_id(access: &impl ReadAccess, id: Id<Model>) -> StorageResult<Option<Model>> {
    let row = Track::find_by_id(id.get()).one(access.connection()).await?;
    Ok(row)
}

pub async fn find_by_path(access: &impl ReadAccess, absolute_path: &str) -> StorageResult<Option<Model>> {
    let row = Track::find()
        .filter(track::Column::AbsolutePath.eq(absolute_path.to_string()))
        .one(access.connection())
        .await?;
    Ok(row)
}

pub async fn set_release(
    txn: &WriteTransaction<'_>,
    model: Model,
    release_id: Option<Id<entity::release::Model>>,
) -> StorageResult<Model> {
    modify::<entity::track::Entity, _>(txn, model, |active| {
        active.release_id = Set(release_id.map(Id::get));
    })
    .await
}

pub async fn set_preferred_artwork(
    txn: &WriteTransaction<'_>,
    model: Model,
    artwork_id: Option<Id<entity::artwork::Model>>,
) -> StorageResult<Model> {
    modify::<entity::track::Entity, _>(txn, model, |active| {
        active.preferred_artwork_id = Set(artwork_id.map(Id::get));
    })
    .await
}

pub async fn remove(txn: &WriteTransaction<'_>, id: Id<Model>) -> StorageResult<()> {
    Track::delete_by_id(id.get()).exec(txn.connection()).await?;
    Ok(())
}

/// Links `artist` to `track` with `link_type`; deleting either side cascades
/// the link (migration 3: `fk_track_artist_link_track` / `_artist`).
pub async fn link_artist(
    txn: &WriteTransaction<'_>,
    track_id: Id<Model>,
    artist_id: Id<entity::artist::Model>,
    link_type: TrackArtistLinkType,
    raw_artist_name: String,
    raw_sort_name: String,
    mbid_matched: bool,
) -> StorageResult<entity::track_artist_link::Model> {
    let active = entity::track_artist_link::ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        track_id: Set(track_id.get()),
        artist_id: Set(artist_id.get()),
        link_type: Set(link_type.as_str().to_string()),
        subtype: Set(None),
        raw_artist_name: Set(raw_artist_name),
        raw_sort_name: Set(raw_sort_name),
        mbid_matched: Set(mbid_matched),
    };
    let saved = active.insert(txn.connection()).await?;
    Ok(saved)
}

pub async fn unlink_artist(txn: &WriteTransaction<'_>, link_id: Id<entity::track_artist_link::Model>) -> StorageResult<()> {
    TrackArtistLink::delete_by_id(link_id.get()).exec(txn.connection()).await?;
    Ok(())
}

pub async fn add_to_cluster(
    txn: &WriteTransaction<'_>,
    track_id: Id<Model>,
    cluster_id: Id<entity::cluster::Model>,
) -> StorageResult<()> {
    let active = entity::track_cluster::ActiveModel {
        track_id: Set(track_id.get()),
        cluster_id: Set(cluster_id.get()),
    };
    active.insert(txn.connection()).await?;
    Ok(())
}

pub async fn remove_from_cluster(
    txn: &WriteTransaction<'_>,
    track_id: Id<Model>,
    cluster_id: Id<entity::cluster::Model>,
) -> StorageResult<()> {
    TrackCluster::delete_many()
        .filter(track_cluster::Column::TrackId.eq(track_id.get()))
        .filter(track_cluster::Column::ClusterId.eq(cluster_id.get()))
        .exec(txn.connection())
        .await?;
    Ok(())
}

/// `find(session, lastRetrievedId, count, fn)`: the simple keyset loop.
pub async fn find_after_id(
    access: &impl ReadAccess,
    last_id: Id<Model>,
    count: u64,
) -> StorageResult<Vec<Model>> {
    let rows = Track::find()
        .filter(track::Column::Id.gt(last_id.get()))
        .order_by(track::Column::Id, Order::Asc)
        .limit(count)
        .all(access.connection())
        .await?;
    Ok(rows)
}

/// `findNextIdRange`: the two-step variant's first half. Computes the
/// `[first, last]` id window the next `count` rows occupy without loading
/// the rows themselves, so the scanner can close this read transaction
/// before opening one to visit the range.
pub async fn find_next_id_range(
    access: &impl ReadAccess,
    last_id: Id<Model>,
    count: u64,
) -> StorageResult<Option<IdRange<Model>>> {
    let rows = Track::find()
        .select_only()
        .column(track::Column::Id)
        .filter(track::Column::Id.gt(last_id.get()))
        .order_by(track::Column::Id, Order::Asc)
        .limit(count)
        .into_tuple::<i64>()
        .all(access.connection())
        .await?;

    match (rows.first(), rows.last()) {
        (Some(&first), Some(&last)) => Ok(Some(IdRange { first: Id::new(first), last: Id::new(last) })),
        _ => Ok(None),
    }
}

/// `find(session, IdRange, fn)`: the two-step variant's second half.
pub async fn find_in_id_range(access: &impl ReadAccess, range: IdRange<Model>) -> StorageResult<Vec<Model>> {
    let rows = Track::find()
        .filter(track::Column::Id.gte(range.first.get()))
        .filter(track::Column::Id.lte(range.last.get()))
        .order_by(track::Column::Id, Order::Asc)
        .all(access.connection())
        .await?;
    Ok(rows)
}

//! Orphan collection (§4.4): rows whose defining references have gone
//! empty, safe to delete because nothing needs them anymore. Each finder
//! returns ids via `NOT EXISTS` subqueries rather than a `GROUP BY`/count,
//! matching the composer's preference for subqueries elsewhere.
//!
//! The scanner runs the sweep at end-of-scan in one write transaction, in a
//! fixed order so a reference never dangles mid-sweep: `TrackArtistLink`-
//! dependent leaves first (Artist), then Cluster → ClusterType, then
//! Release, then Directory. If the transaction aborts partway, nothing is
//! deleted and the next scan retries idempotently — callers get this for
//! free by doing the whole sweep inside one `WriteTransaction`.

use entity::prelude::{Artist, Cluster, ClusterType, Directory, Release};
use entity::{artist, cluster, cluster_type, directory, release, track, track_artist_link, track_cluster};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::ids::Id;
use crate::range::{Range, RangeResults};
use crate::transaction::{ReadAccess, WriteTransaction};
use crate::StorageResult;

pub async fn find_orphan_release_ids(
    access: &impl ReadAccess,
    range: Range,
) -> StorageResult<RangeResults<Id<release::Model>>> {
    let subquery = sea_orm::sea_query::Query::select()
        .expr(Expr::val(1))
        .from(track::Entity)
        .and_where(Expr::col((track::Entity, track::Column::ReleaseId)).equals((release::Entity, release::Column::Id)))
        .to_owned();

    let rows: Vec<i64> = Release::find()
        .select_only()
        .column(release::Column::Id)
        .filter(Expr::exists(subquery).not())
        .offset(range.offset)
        .limit(range.size + 1)
        .into_tuple()
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows.into_iter().map(Id::new).collect(), range))
}

pub async fn find_orphan_artist_ids(
    access: &impl ReadAccess,
    range: Range,
) -> StorageResult<RangeResults<Id<artist::Model>>> {
    let subquery = sea_orm::sea_query::Query::select()
        .expr(Expr::val(1))
        .from(track_artist_link::Entity)
        .and_where(
            Expr::col((track_artist_link::Entity, track_artist_link::Column::ArtistId))
                .equals((artist::Entity, artist::Column::Id)),
        )
        .to_owned();

    let rows: Vec<i64> = Artist::find()
        .select_only()
        .column(artist::Column::Id)
        .filter(Expr::exists(subquery).not())
        .offset(range.offset)
        .limit(range.size + 1)
        .into_tuple()
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows.into_iter().map(Id::new).collect(), range))
}

pub async fn find_orphan_cluster_ids(
    access: &impl ReadAccess,
    range: Range,
) -> StorageResult<RangeResults<Id<cluster::Model>>> {
    let subquery = sea_orm::sea_query::Query::select()
        .expr(Expr::val(1))
        .from(track_cluster::Entity)
        .and_where(
            Expr::col((track_cluster::Entity, track_cluster::Column::ClusterId))
                .equals((cluster::Entity, cluster::Column::Id)),
        )
        .to_owned();

    let rows: Vec<i64> = Cluster::find()
        .select_only()
        .column(cluster::Column::Id)
        .filter(Expr::exists(subquery).not())
        .offset(range.offset)
        .limit(range.size + 1)
        .into_tuple()
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows.into_iter().map(Id::new).collect(), range))
}

pub async fn find_orphan_cluster_type_ids(
    access: &impl ReadAccess,
    range: Range,
) -> StorageResult<RangeResults<Id<cluster_type::Model>>> {
    let subquery = sea_orm::sea_query::Query::select()
        .expr(Expr::val(1))
        .from(cluster::Entity)
        .and_where(
            Expr::col((cluster::Entity, cluster::Column::ClusterTypeId))
                .equals((cluster_type::Entity, cluster_type::Column::Id)),
        )
        .to_owned();

    let rows: Vec<i64> = ClusterType::find()
        .select_only()
        .column(cluster_type::Column::Id)
        .filter(Expr::exists(subquery).not())
        .offset(range.offset)
        .limit(range.size + 1)
        .into_tuple()
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows.into_iter().map(Id::new).collect(), range))
}

/// No track and no child directory references it.
pub async fn find_orphan_directory_ids(
    access: &impl ReadAccess,
    range: Range,
) -> StorageResult<RangeResults<Id<directory::Model>>> {
    let has_track = sea_orm::sea_query::Query::select()
        .expr(Expr::val(1))
        .from(track::Entity)
        .and_where(
            Expr::col((track::Entity, track::Column::DirectoryId)).equals((directory::Entity, directory::Column::Id)),
        )
        .to_owned();
    let has_child = sea_orm::sea_query::Query::select()
        .expr(Expr::val(1))
        .from(directory::Entity)
        .and_where(
            Expr::col((directory::Entity, directory::Column::ParentDirectoryId))
                .equals((directory::Entity, directory::Column::Id)),
        )
        .to_owned();

    let rows: Vec<i64> = Directory::find()
        .select_only()
        .column(directory::Column::Id)
        .filter(Expr::exists(has_track).not())
        .filter(Expr::exists(has_child).not())
        .offset(range.offset)
        .limit(range.size + 1)
        .into_tuple()
        .all(access.connection())
        .await?;

    Ok(RangeResults::from_overfetch(rows.into_iter().map(Id::new).collect(), range))
}

/// Runs the full sweep under one write transaction in the fixed order
/// (Artist, then Cluster, then ClusterType, then Release, then Directory)
/// and deletes everything each pass finds. Pages through `find_orphan_*`
/// repeatedly until a pass comes back empty, so a library with more orphans
/// than fit in one page is still fully collected.
pub async fn run_sweep(txn: &WriteTransaction<'_>) -> StorageResult<SweepCounts> {
    let mut counts = SweepCounts::default();
    let page_size = 500;

    loop {
        let page = find_orphan_artist_ids(txn, Range::first(page_size)).await?;
        if page.results.is_empty() {
            break;
        }
        for id in &page.results {
            Artist::delete_by_id(id.get()).exec(txn.connection()).await?;
            counts.artists += 1;
        }
    }

    loop {
        let page = find_orphan_cluster_ids(txn, Range::first(page_size)).await?;
        if page.results.is_empty() {
            break;
        }
        for id in &page.results {
            Cluster::delete_by_id(id.get()).exec(txn.connection()).await?;
            counts.clusters += 1;
        }
    }

    loop {
        let page = find_orphan_cluster_type_ids(txn, Range::first(page_size)).await?;
        if page.results.is_empty() {
            break;
        }
        for id in &page.results {
            ClusterType::delete_by_id(id.get()).exec(txn.connection()).await?;
            counts.cluster_types += 1;
        }
    }

    loop {
        let page = find_orphan_release_ids(txn, Range::first(page_size)).await?;
        if page.results.is_empty() {
            break;
        }
        for id in &page.results {
            Release::delete_by_id(id.get()).exec(txn.connection()).await?;
            counts.releases += 1;
        }
    }

    loop {
        let page = find_orphan_directory_ids(txn, Range::first(page_size)).await?;
        if page.results.is_empty() {
            break;
        }
        for id in &page.results {
            Directory::delete_by_id(id.get()).exec(txn.connection()).await?;
            counts.directories += 1;
        }
    }

    Ok(counts)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepCounts {
    pub artists: u64,
    pub clusters: u64,
    pub cluster_types: u64,
    pub releases: u64,
    pub directories: u64,
}

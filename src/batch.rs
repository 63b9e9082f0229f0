//! Generic keyset iteration (§4.6), reusable for any entity whose
//! identifier column is the usual auto-increment primary key. `repo::track`
//! hand-writes the same three functions against `track::Column::Id`
//! directly, since it is the entity batch scans actually run over; this
//! module exists for the other aggregate roots a future export/reindex job
//! might need without copy-pasting the pattern again.

use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect};

use crate::ids::Id;
use crate::range::IdRange;
use crate::transaction::ReadAccess;
use crate::StorageResult;

/// `find(session, lastRetrievedId, count, fn)`'s one-step form.
pub async fn find_after_id<E>(
    access: &impl ReadAccess,
    id_column: E::Column,
    last_id: Id<E::Model>,
    count: u64,
) -> StorageResult<Vec<E::Model>>
where
    E: EntityTrait,
{
    let rows = E::find()
        .filter(id_column.gt(last_id.get()))
        .order_by(id_column, Order::Asc)
        .limit(count)
        .all(access.connection())
        .await?;
    Ok(rows)
}

/// `findNextIdRange`: computes the `[first, last]` window without loading
/// rows, so the caller can close this read transaction before visiting.
pub async fn find_next_id_range<E>(
    access: &impl ReadAccess,
    id_column: E::Column,
    last_id: Id<E::Model>,
    count: u64,
) -> StorageResult<Option<IdRange<E::Model>>>
where
    E: EntityTrait,
{
    let ids = E::find()
        .select_only()
        .column(id_column)
        .filter(id_column.gt(last_id.get()))
        .order_by(id_column, Order::Asc)
        .limit(count)
        .into_tuple::<i64>()
        .all(access.connection())
        .await?;

    match (ids.first(), ids.last()) {
        (Some(&first), Some(&last)) => Ok(Some(IdRange { first: Id::new(first), last: Id::new(last) })),
        _ => Ok(None),
    }
}

/// `find(session, IdRange, fn)`: visits every row in a previously computed
/// range, inclusive on both ends.
pub async fn find_in_id_range<E>(
    access: &impl ReadAccess,
    id_column: E::Column,
    range: IdRange<E::Model>,
) -> StorageResult<Vec<E::Model>>
where
    E: EntityTrait,
{
    let rows = E::find()
        .filter(id_column.gte(range.first.get()))
        .filter(id_column.lte(range.last.get()))
        .order_by(id_column, Order::Asc)
        .all(access.connection())
        .await?;
    Ok(rows)
}

use sea_orm::DatabaseTransaction;
use tokio::sync::MutexGuard;

use crate::error::StorageResult;

/// A scoped read transaction. Readers never contend with each other or with
/// writers at this layer; SQLite's WAL mode gives concurrent readers a
/// consistent snapshot without blocking.
///
/// Every accessor in the repository modules takes `&impl ReadAccess` rather
/// than a bare connection, so a caller who hasn't opened a transaction can't
/// even name the argument it would need to pass — the "every accessor
/// touching the row graph runs under at least a read transaction" rule is
/// caught by the type checker instead of a debug-only runtime assertion.
pub struct ReadTransaction<'a> {
    txn: DatabaseTransaction,
    _marker: std::marker::PhantomData<&'a ()>,
}

impl<'a> ReadTransaction<'a> {
    pub(crate) fn new(txn: DatabaseTransaction) -> Self {
        ReadTransaction { txn, _marker: std::marker::PhantomData }
    }

    pub async fn commit(self) -> StorageResult<()> {
        self.txn.commit().await?;
        Ok(())
    }
}

/// A scoped write transaction. Holding one implies holding the database's
/// application-level write mutex for as long as the guard is alive;
/// dropping or committing the transaction releases it.
pub struct WriteTransaction<'a> {
    txn: DatabaseTransaction,
    _write_guard: MutexGuard<'a, ()>,
}

impl<'a> WriteTransaction<'a> {
    pub(crate) fn new(txn: DatabaseTransaction, guard: MutexGuard<'a, ()>) -> Self {
        WriteTransaction { txn, _write_guard: guard }
    }

    pub async fn commit(self) -> StorageResult<()> {
        self.txn.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> StorageResult<()> {
        self.txn.rollback().await?;
        Ok(())
    }
}

/// Implemented by both transaction kinds. Repository accessors (`find_*`,
/// queries, orphan scans) are generic over `impl ReadAccess` so they can run
/// under either a read or a write transaction; mutators (`create_*`,
/// `modify`, `remove`) take `&WriteTransaction` specifically.
pub trait ReadAccess {
    fn connection(&self) -> &DatabaseTransaction;
}

impl ReadAccess for ReadTransaction<'_> {
    fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }
}

impl ReadAccess for WriteTransaction<'_> {
    fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }
}

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, TransactionTrait};
use tokio::sync::Mutex;

use crate::error::{StorageError, StorageResult};
use crate::transaction::{ReadTransaction, WriteTransaction};

/// Storage-layer configuration. Everything the database handle needs to
/// open and pool a connection to the embedded SQLite file.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Path to the SQLite database file. Opened in WAL mode with
    /// `mode=rwc` so a missing file is created on first run.
    pub database_path: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    /// How long a caller waits for a pooled connection before
    /// `StorageError::PoolExhausted`.
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            database_path: "catalog.db".to_string(),
            max_connections: 8,
            connect_timeout: Duration::from_secs(8),
            acquire_timeout: Duration::from_secs(10),
            sqlx_logging: false,
        }
    }
}

/// Owns the connection pool and the application-level write mutex that
/// serializes `WriteTransaction`s. SQLite in WAL mode tolerates many
/// concurrent readers but only one writer at a time; readers never touch
/// `write_lock`.
pub struct Database {
    conn: DatabaseConnection,
    write_lock: Arc<Mutex<()>>,
    acquire_timeout: Duration,
}

impl Database {
    pub async fn connect(config: StorageConfig) -> StorageResult<Self> {
        let url = format!("sqlite://{}?mode=rwc", config.database_path);
        let mut options = ConnectOptions::new(url);
        options
            .max_connections(config.max_connections)
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.acquire_timeout)
            .sqlx_logging(config.sqlx_logging);

        let conn = SeaDatabase::connect(options).await?;
        migration::Migrator::up(&conn, None)
            .await
            .map_err(|e| StorageError::SchemaMigrationFailed(e.to_string()))?;

        Ok(Database {
            conn,
            write_lock: Arc::new(Mutex::new(())),
            acquire_timeout: config.acquire_timeout,
        })
    }

    /// Opens a read transaction. Multiple readers may hold one concurrently.
    pub async fn begin_read(&self) -> StorageResult<ReadTransaction<'_>> {
        let txn = self.conn.begin().await?;
        Ok(ReadTransaction::new(txn))
    }

    /// Acquires the write mutex (bounded by `acquire_timeout`) and opens a
    /// write transaction. Only one `WriteTransaction` is live at a time.
    pub async fn begin_write(&self) -> StorageResult<WriteTransaction<'_>> {
        let guard = tokio::time::timeout(self.acquire_timeout, self.write_lock.lock())
            .await
            .map_err(|_| StorageError::PoolExhausted)?;
        let txn = self.conn.begin().await?;
        Ok(WriteTransaction::new(txn, guard))
    }

    pub fn raw(&self) -> &DatabaseConnection {
        &self.conn
    }
}

//! Shared test harness: each test gets its own on-disk SQLite file (tempfile
//! gives every test a fresh path, avoiding the shared-state pitfalls of a
//! single `:memory:` connection pool) migrated up to the current schema.

use catalog_core::{Database, StorageConfig};
use tempfile::NamedTempFile;

/// Keeps the backing tempfile alive for as long as the database handle;
/// dropping it deletes the file.
pub struct TestDb {
    pub db: Database,
    _file: NamedTempFile,
}

impl std::ops::Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

pub async fn open() -> TestDb {
    let file = NamedTempFile::new().expect("create temp db file");
    let config = StorageConfig {
        database_path: file.path().to_str().unwrap().to_string(),
        ..Default::default()
    };
    let db = Database::connect(config).await.expect("open and migrate test database");
    TestDb { db, _file: file }
}

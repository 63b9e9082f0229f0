use sea_orm::sqlx::error::DatabaseError;
use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

/// Errors surfaced by the storage layer. `NotFound` is intentionally absent:
/// accessors report a missing row as `Option::None`, not as an error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no connection became available within the configured timeout")]
    PoolExhausted,

    #[error("write transaction conflicted with a concurrent writer: {0}")]
    TransactionConflict(String),

    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("schema migration failed: {0}")]
    SchemaMigrationFailed(String),

    #[error(transparent)]
    Database(DbErr),
}

/// Classifies SQLite constraint and busy/locked errors into the declared
/// variants instead of letting them fall through as an opaque `Database`.
/// Everything else (connection errors, internal driver errors) stays
/// `Database`.
impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        classify(&err).unwrap_or(StorageError::Database(err))
    }
}

fn classify(err: &DbErr) -> Option<StorageError> {
    let sqlx_err = match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e,
        _ => return None,
    };
    let db_err = sqlx_err.as_database_error()?;

    use sea_orm::sqlx::error::ErrorKind;
    match db_err.kind() {
        ErrorKind::UniqueViolation
        | ErrorKind::ForeignKeyViolation
        | ErrorKind::NotNullViolation
        | ErrorKind::CheckViolation => Some(StorageError::IntegrityViolation(db_err.message().to_string())),
        _ => {
            // SQLite reports busy/locked as a constraint-unrelated error code
            // rather than a `DatabaseError::kind()` variant. The primary
            // result code is the extended code masked with 0xff (SQLite docs).
            let code = db_err.code()?.parse::<i32>().ok()?;
            matches!(code & 0xff, 5 | 6).then(|| StorageError::TransactionConflict(db_err.message().to_string()))
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

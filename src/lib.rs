pub mod batch;
pub mod config;
pub mod db;
pub mod enums;
pub mod error;
pub mod ids;
pub mod logger;
pub mod orphan;
pub mod query;
pub mod range;
pub mod repo;
pub mod transaction;

pub use config::Config;
pub use db::{Database, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use ids::Id;
pub use range::{IdRange, Range, RangeResults};
pub use transaction::{ReadAccess, ReadTransaction, WriteTransaction};

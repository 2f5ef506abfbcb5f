// ============================================================================
// Store Persistence - Durable key-value slots
// ============================================================================

mod errors;
mod file;
mod redis_storage;
mod snapshot;
mod storage;
mod writer;

use std::path::PathBuf;
use std::sync::Arc;

pub use errors::StorageError;
pub use file::FileStorage;
pub use redis_storage::RedisStorage;
pub use snapshot::{StoredSnapshot, SNAPSHOT_VERSION};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use writer::SnapshotWriter;

/// Which storage implementation backs the durable stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File { dir: PathBuf },
    Redis { url: String },
}

impl StorageBackend {
    /// Open the configured backend
    pub async fn open(&self) -> Result<Arc<dyn KeyValueStorage>, StorageError> {
        let storage: Arc<dyn KeyValueStorage> = match self {
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
            StorageBackend::File { dir } => Arc::new(FileStorage::new(dir.clone())),
            StorageBackend::Redis { url } => Arc::new(RedisStorage::connect(url).await?),
        };

        tracing::info!(backend = storage.backend_name(), "Storage backend ready");
        Ok(storage)
    }
}

use std::path::PathBuf;

// ============================================================================
// Persistence Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Store Infrastructure
// ============================================================================
//
// Generic, reusable state-container and persistence infrastructure.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;
pub mod persistence;

pub use self::core::*;
pub use persistence::{
    KeyValueStorage, SnapshotWriter, StorageBackend, StorageError, StoredSnapshot,
};

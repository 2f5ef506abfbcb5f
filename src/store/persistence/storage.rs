use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StorageError;

// ============================================================================
// Durable Key-Value Storage
// ============================================================================
//
// The only persistence contract stores rely on: get/set a string blob by key.
//
// ============================================================================

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the blob stored under `key`, `None` if nothing was written yet
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;
}

/// Process-local storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("orders-storage").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "first").await.unwrap();
        storage.set("k", "second").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("second"));
    }
}

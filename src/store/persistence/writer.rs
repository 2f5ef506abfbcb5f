use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use super::storage::KeyValueStorage;
use crate::metrics::Metrics;

// ============================================================================
// Snapshot Writer - Fire-and-forget persistence
// ============================================================================
//
// Stores hand serialized snapshots to a background task and return at once.
// The task writes them in the order received. A failed write is logged and
// counted, never retried: the next mutation writes the full state again.
//
// ============================================================================

enum WriteRequest {
    Save(String),
    Flush(oneshot::Sender<()>),
}

#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    tx: mpsc::UnboundedSender<WriteRequest>,
}

impl SnapshotWriter {
    /// Spawn the writer task on the current tokio runtime
    pub fn spawn(
        storage: Arc<dyn KeyValueStorage>,
        key: impl Into<String>,
        metrics: Arc<Metrics>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(storage, key.into(), metrics, rx));
        Self { tx }
    }

    /// Queue a snapshot for writing (non-blocking)
    pub fn save(&self, json: String) {
        if self.tx.send(WriteRequest::Save(json)).is_err() {
            tracing::warn!("Snapshot writer has stopped, dropping write");
        }
    }

    /// Wait until every snapshot queued before this call has been attempted
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(WriteRequest::Flush(done_tx)).is_ok() {
            let _ = done_rx.await;
        }
    }
}

impl std::fmt::Debug for WriteRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteRequest::Save(json) => write!(f, "Save({} bytes)", json.len()),
            WriteRequest::Flush(_) => write!(f, "Flush"),
        }
    }
}

async fn run_writer(
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    metrics: Arc<Metrics>,
    mut rx: mpsc::UnboundedReceiver<WriteRequest>,
) {
    tracing::debug!(key = %key, backend = storage.backend_name(), "Snapshot writer started");

    while let Some(request) = rx.recv().await {
        match request {
            WriteRequest::Save(json) => match storage.set(&key, &json).await {
                Ok(()) => {
                    metrics.record_persist_write(true);
                    tracing::debug!(key = %key, bytes = json.len(), "Snapshot persisted");
                }
                Err(e) => {
                    metrics.record_persist_write(false);
                    tracing::warn!(
                        key = %key,
                        backend = storage.backend_name(),
                        error = %e,
                        "Failed to persist snapshot"
                    );
                }
            },
            WriteRequest::Flush(done) => {
                let _ = done.send(());
            }
        }
    }

    tracing::debug!(key = %key, "Snapshot writer stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::persistence::{MemoryStorage, StorageError};
    use async_trait::async_trait;

    struct FailingStorage;

    #[async_trait]
    impl KeyValueStorage for FailingStorage {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        async fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }

        fn backend_name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_writes_apply_in_order() {
        let storage = Arc::new(MemoryStorage::new());
        let metrics = Arc::new(Metrics::new().unwrap());
        let writer = SnapshotWriter::spawn(storage.clone(), "slot", metrics.clone());

        writer.save("one".to_string());
        writer.save("two".to_string());
        writer.save("three".to_string());
        writer.flush().await;

        assert_eq!(storage.get("slot").await.unwrap().as_deref(), Some("three"));
        assert_eq!(metrics.persist_writes("ok"), 3);
    }

    #[tokio::test]
    async fn test_failed_write_is_counted_not_retried() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let writer = SnapshotWriter::spawn(Arc::new(FailingStorage), "slot", metrics.clone());

        writer.save("payload".to_string());
        writer.flush().await;

        assert_eq!(metrics.persist_writes("error"), 1);
        assert_eq!(metrics.persist_writes("ok"), 0);
    }
}

use std::sync::Arc;

use crate::metrics::Metrics;
use crate::store::core::{Container, EventEnvelope, SubscriptionId};
use crate::store::persistence::{KeyValueStorage, SnapshotWriter, StorageError, StoredSnapshot};
use crate::utils::{Clock, IdGenerator};
use super::aggregate::OrderHistory;
use super::commands::OrderCommand;
use super::events::OrderEvent;
use super::value_objects::{NewOrder, Order, OrderStatus};

/// Storage key used when none is configured.
pub const DEFAULT_ORDERS_KEY: &str = "orders-storage";

// ============================================================================
// Order History Store
// ============================================================================
//
// Durable, most-recent-first log of completed orders. The full history is
// read once on open and written back after every mutation through a
// fire-and-forget snapshot writer.
//
// ============================================================================

pub struct OrderHistoryStore {
    container: Container<OrderHistory>,
    writer: SnapshotWriter,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl OrderHistoryStore {
    /// Load the persisted history under `key` (empty when nothing was saved)
    /// and start the background writer.
    pub async fn open(
        storage: Arc<dyn KeyValueStorage>,
        key: &str,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        metrics: Arc<Metrics>,
    ) -> Result<Self, StorageError> {
        let history = match storage.get(key).await? {
            None => OrderHistory::default(),
            Some(raw) => match StoredSnapshot::<OrderHistory>::from_json(&raw) {
                Ok(snapshot) => snapshot.state,
                Err(e) => {
                    tracing::warn!(
                        key = %key,
                        error = %e,
                        "Stored order history is unreadable, starting empty"
                    );
                    OrderHistory::default()
                }
            },
        };

        tracing::info!(
            key = %key,
            backend = storage.backend_name(),
            orders = history.len(),
            "Order history loaded"
        );

        let writer = SnapshotWriter::spawn(storage, key, metrics);

        Ok(Self {
            container: Container::new(history),
            writer,
            ids,
            clock,
        })
    }

    /// Record a completed order at the front of the history
    pub fn add_order(&mut self, new_order: NewOrder) -> Order {
        let order = Order {
            id: self.ids.next_order_id(),
            items: new_order.items,
            total_price: new_order.total_price,
            address: new_order.address,
            date: self.clock.now(),
            status: OrderStatus::Processing,
        };

        self.dispatch(OrderCommand::RecordOrder(order.clone()));

        tracing::info!(
            order_id = %order.id,
            lines = order.items.len(),
            total_price = order.total_price,
            "✅ Order recorded"
        );

        order
    }

    /// Most recent first
    pub fn orders(&self) -> &[Order] {
        self.container.state().orders()
    }

    pub fn history(&self) -> &OrderHistory {
        self.container.state()
    }

    pub fn clear_orders(&mut self) {
        let events = self.dispatch(OrderCommand::ClearOrders);
        if !events.is_empty() {
            tracing::info!("Order history cleared");
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&EventEnvelope<OrderEvent>) + Send + Sync + 'static,
    {
        self.container.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.container.unsubscribe(id)
    }

    /// Wait for queued snapshot writes to be attempted
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn dispatch(&mut self, command: OrderCommand) -> Vec<OrderEvent> {
        let events = self.container.dispatch(&command);
        if !events.is_empty() {
            self.persist();
        }
        events
    }

    fn persist(&self) {
        match StoredSnapshot::new(self.container.state()).to_json() {
            Ok(json) => self.writer.save(json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize order history"),
        }
    }
}

impl std::fmt::Debug for OrderHistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderHistoryStore")
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

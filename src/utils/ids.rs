use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::domain::orders::OrderId;

/// Source of order identifiers. Uniqueness is the only requirement.
pub trait IdGenerator: Send + Sync {
    fn next_order_id(&self) -> OrderId;
}

/// `order-<unix millis>-<9 random chars>`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_order_id(&self) -> OrderId {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(9).collect();
        OrderId::new(format!("order-{}-{}", Utc::now().timestamp_millis(), suffix))
    }
}

/// `order-1`, `order-2`, … ; deterministic, for tests and demos.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_order_id(&self) -> OrderId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        OrderId::new(format!("order-{n}"))
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

use crate::domain::cart::CartLine;

// ============================================================================
// Order Value Objects
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every order is created as `Processing`; no transition operation exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Label shown on the order history badge
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Caller-supplied part of an order; id, date and status are synthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub items: Vec<CartLine>,
    pub total_price: f64,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Snapshot of the cart at checkout time
    pub items: Vec<CartLine>,
    /// Final charged amount, delivery fee and discount included
    pub total_price: f64,
    pub address: String,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

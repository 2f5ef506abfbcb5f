use serde::{Deserialize, Serialize};

use crate::store::core::Aggregate;
use super::commands::OrderCommand;
use super::events::OrderEvent;
use super::value_objects::{Order, OrderId};

// ============================================================================
// Order History Aggregate
// ============================================================================
//
// Append-only, most recent first. Orders never change once recorded; the
// only other mutation is clearing the whole history.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == *id)
    }
}

impl Aggregate for OrderHistory {
    type Event = OrderEvent;
    type Command = OrderCommand;

    fn handle_command(&self, command: &Self::Command) -> Vec<Self::Event> {
        match command {
            OrderCommand::RecordOrder(order) => vec![OrderEvent::Recorded(order.clone())],
            OrderCommand::ClearOrders if self.orders.is_empty() => vec![],
            OrderCommand::ClearOrders => vec![OrderEvent::Cleared],
        }
    }

    fn apply_event(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::Recorded(order) => self.orders.insert(0, order.clone()),
            OrderEvent::Cleared => self.orders.clear(),
        }
    }
}

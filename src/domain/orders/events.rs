use serde::{Deserialize, Serialize};

use crate::store::core::DomainEvent;
use super::value_objects::Order;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    Recorded(Order),
    Cleared,
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Recorded(_) => "OrderRecorded",
            OrderEvent::Cleared => "OrdersCleared",
        }
    }
}

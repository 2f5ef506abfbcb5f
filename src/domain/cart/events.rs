use serde::{Deserialize, Serialize};

use crate::store::core::DomainEvent;
use super::value_objects::{CartLine, LineKey};

// ============================================================================
// Cart Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CartEvent {
    /// A new line was appended with quantity 1
    LineAdded(CartLine),
    QuantityChanged { key: LineKey, quantity: u32 },
    LineRemoved(LineKey),
    Cleared,
}

impl DomainEvent for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "CartLineAdded",
            CartEvent::QuantityChanged { .. } => "CartQuantityChanged",
            CartEvent::LineRemoved(_) => "CartLineRemoved",
            CartEvent::Cleared => "CartCleared",
        }
    }
}

// ============================================================================
// Orders Domain - Completed order history
// ============================================================================
//
// - Value objects (Order, OrderId, OrderStatus, NewOrder)
// - Commands and events
// - Aggregate (OrderHistory, most recent first)
// - Store (OrderHistoryStore, persisted through a key-value slot)
//
// ============================================================================

pub mod aggregate;
pub mod commands;
pub mod events;
pub mod store;
pub mod value_objects;

pub use aggregate::*;
pub use commands::*;
pub use events::*;
pub use store::*;
pub use value_objects::*;

// ============================================================================
// Cart Domain - The order in progress
// ============================================================================
//
// - Value objects (CartItem, CartLine, Customization, LineKey)
// - Commands and events
// - Aggregate (Cart, dedup and quantity rules)
// - Store (CartStore, the typed operation set handed to UI code)
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

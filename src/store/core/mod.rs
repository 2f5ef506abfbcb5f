// ============================================================================
// Store Core - Generic State Container Abstractions
// ============================================================================
//
// This module contains GENERIC store infrastructure that works with ANY
// aggregate state (no Cart, Order, etc.).
//
// ============================================================================

pub mod aggregate;
pub mod container;
pub mod event;
pub mod listener;

// Re-export core types for convenience
pub use aggregate::Aggregate;
pub use container::Container;
pub use event::{DomainEvent, EventEnvelope};
pub use listener::{Listener, Listeners, SubscriptionId};

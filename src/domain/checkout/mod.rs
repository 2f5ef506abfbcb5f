// ============================================================================
// Checkout Domain - Turning the cart into an order
// ============================================================================

pub mod errors;
pub mod pricing;
pub mod service;

pub use errors::*;
pub use pricing::*;
pub use service::*;

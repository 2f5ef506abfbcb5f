// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each store-backed domain has its own subdirectory with:
// - Value objects
// - Commands
// - Events
// - Aggregate implementation
// - Store façade
//
// Menu, checkout and account sit on top of those stores.
//
// ============================================================================

pub mod account;
pub mod cart;
pub mod checkout;
pub mod menu;
pub mod orders;

// ============================================================================
// Account Domain - Profile and sign-in against the hosted backend
// ============================================================================

pub mod gateway;
pub mod profile;
pub mod sign_in;
pub mod sign_up;

#[cfg(test)]
mod testing;

pub use gateway::*;
pub use profile::*;
pub use sign_in::*;
pub use sign_up::*;

//! Client-side state for a food ordering app: an ephemeral cart, a persisted
//! order history, and the checkout flow that turns one into the other.

pub mod config;
pub mod domain;
pub mod metrics;
pub mod session;
pub mod store;
pub mod utils;

pub use config::{load_app_config, AppConfig, ConfigError};
pub use session::{SharedSession, ShopSession};

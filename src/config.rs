use std::path::PathBuf;
use std::time::Duration;

use crate::domain::account::DEFAULT_DELIVERY_ADDRESS;
use crate::domain::checkout::PricingPolicy;
use crate::domain::orders::DEFAULT_ORDERS_KEY;
use crate::store::persistence::StorageBackend;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime settings for a shop session
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub orders_key: String,
    pub checkout_delay_ms: u64,
    pub delivery_fee: f64,
    pub discount: f64,
    pub default_address: String,
    pub log_filter: String,
}

impl AppConfig {
    pub fn pricing(&self) -> PricingPolicy {
        PricingPolicy {
            delivery_fee: self.delivery_fee,
            discount: self.discount,
        }
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }
}

/// Load configuration from the environment, reading `.env` first if present.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from the process environment only.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parse configuration through `lookup` so it can be driven from a map in tests.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_amount = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;

        if !value.is_finite() || value < 0.0 {
            return Err(invalid(var, format!("expected a non-negative amount, got {value}")));
        }
        Ok(value)
    };

    let storage = match or_default("FOOD_STORAGE_BACKEND", "file").trim() {
        "memory" => StorageBackend::Memory,
        "file" => StorageBackend::File {
            dir: PathBuf::from(or_default("FOOD_DATA_DIR", "./data")),
        },
        "redis" => StorageBackend::Redis {
            url: or_default("FOOD_REDIS_URL", "redis://127.0.0.1:6379"),
        },
        other => {
            return Err(invalid(
                "FOOD_STORAGE_BACKEND",
                format!("unknown backend '{other}' (expected memory, file or redis)"),
            ))
        }
    };

    let orders_key = or_default("FOOD_ORDERS_KEY", DEFAULT_ORDERS_KEY);
    if orders_key.trim().is_empty() {
        return Err(invalid("FOOD_ORDERS_KEY", "must not be empty".to_string()));
    }

    Ok(AppConfig {
        storage,
        orders_key,
        checkout_delay_ms: parse_u64("FOOD_CHECKOUT_DELAY_MS", "2000")?,
        delivery_fee: parse_amount("FOOD_DELIVERY_FEE", "5.00")?,
        discount: parse_amount("FOOD_DISCOUNT", "0.50")?,
        default_address: or_default("FOOD_DEFAULT_ADDRESS", DEFAULT_DELIVERY_ADDRESS),
        log_filter: or_default("FOOD_LOG", "info,food_ordering=debug"),
    })
}

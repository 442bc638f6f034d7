use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::warn;

use crate::services::pricing::{GroupDiscount, PricingConfig, PricingPolicy};

pub mod cors;
pub mod request_id;
pub mod security;

pub use cors::create_cors_layer;
pub use request_id::{UuidRequestId, REQUEST_ID_HEADER};
pub use security::create_security_headers_layer;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ML_SERVICE_URL: &str = "http://localhost:5000";
const DEFAULT_ML_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub ml_service_url: String,
    pub ml_service_timeout: Duration,
    pub catalog_path: Option<PathBuf>,
    pub pricing: PricingConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Invalid values
    /// are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = PricingConfig::default();
        let default_discount = defaults.group.group_discount.unwrap_or(GroupDiscount {
            rate: Decimal::new(10, 2),
            threshold: 4,
        });

        let pricing = PricingConfig {
            standard: PricingPolicy {
                service_fee_rate: rate(
                    &lookup,
                    "STANDARD_SERVICE_FEE_RATE",
                    defaults.standard.service_fee_rate,
                ),
                group_discount: None,
            },
            group: PricingPolicy {
                service_fee_rate: rate(
                    &lookup,
                    "GROUP_SERVICE_FEE_RATE",
                    defaults.group.service_fee_rate,
                ),
                group_discount: Some(GroupDiscount {
                    rate: rate(&lookup, "GROUP_DISCOUNT_RATE", default_discount.rate),
                    threshold: parsed(
                        &lookup,
                        "GROUP_DISCOUNT_THRESHOLD",
                        default_discount.threshold,
                    ),
                }),
            },
        };

        Self {
            port: parsed(&lookup, "PORT", DEFAULT_PORT),
            ml_service_url: lookup("ML_SERVICE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ML_SERVICE_URL.to_string()),
            ml_service_timeout: timeout(&lookup, "ML_SERVICE_TIMEOUT_SECS", DEFAULT_ML_TIMEOUT_SECS),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            pricing,
        }
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default {default}");
            default
        }),
    }
}

/// Timeouts must be at least one second.
fn timeout(lookup: &impl Fn(&str) -> Option<String>, key: &str, default_secs: u64) -> Duration {
    let secs = parsed(lookup, key, default_secs);
    if secs == 0 {
        warn!("{key} must be at least 1 second; using default {default_secs}");
        return Duration::from_secs(default_secs);
    }
    Duration::from_secs(secs)
}

/// Rates must fall within `[0, 1]`.
fn rate(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Decimal) -> Decimal {
    let value = parsed(lookup, key, default);
    if value < Decimal::ZERO || value > Decimal::ONE {
        warn!("{key} must be between 0 and 1, got {value}; using default {default}");
        return default;
    }
    value
}

//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{NegativeTotals, PayloadRounding};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// REST backend configuration.
    pub backend: BackendConfig,
    /// Tax defaults.
    pub tax: TaxConfig,
    /// Summary snapshot policies.
    pub summary: SummaryConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

/// REST backend configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend, without the `/api` suffix.
    pub base_url: String,
    /// Optional bearer token sent with every request.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            api_token: None,
            timeout_secs: 10,
        }
    }
}

/// Tax defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// VAT rate (percent) used when company settings are unavailable.
    pub default_vat_rate: Decimal,
    /// How long fetched company settings stay fresh.
    pub settings_ttl_secs: u64,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            default_vat_rate: Decimal::from(7),
            settings_ttl_secs: 300, // 5 minutes
        }
    }
}

/// Policies applied when a summary is snapshotted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Rounding of saved and printed values.
    pub rounding: PayloadRounding,
    /// Treatment of totals below zero.
    pub negative_totals: NegativeTotals,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "bizdocs=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("BIZDOCS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

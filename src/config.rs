//! Configuration types for dex-view

use crate::format::DEFAULT_TIMESTAMP_FORMAT;
use crate::model::Address;
use crate::telemetry::LogFormat;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Display and unit conversion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Address that stands for native ether in order records
    #[serde(default)]
    pub ether_address: Address,

    /// Fixed-point decimals of ether and the token
    #[serde(default = "default_token_decimals")]
    pub token_decimals: u32,

    /// Fractional digits kept in token prices
    #[serde(default = "default_price_precision")]
    pub price_precision: u32,

    /// Fractional digits kept in balance strings
    #[serde(default = "default_balance_precision")]
    pub balance_precision: u32,

    /// Display offset from UTC, in minutes
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// strftime pattern for order timestamps
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_token_decimals() -> u32 {
    18
}
fn default_price_precision() -> u32 {
    6
}
fn default_balance_precision() -> u32 {
    2
}
fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ether_address: Address::ZERO,
            token_decimals: 18,
            price_precision: 6,
            balance_precision: 2,
            utc_offset_minutes: 0,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

//! Display formatting
//!
//! Fixed-point base units to display decimals and back, balance strings,
//! and timestamp formatting in the configured display offset.

mod time;
mod units;

pub use time::{format_timestamp, hour_start};
pub use units::{format_balance, parse_units, to_display_units};
pub(crate) use units::{pow10, scaled_decimal};

use crate::config::DisplayConfig;
use crate::model::{Address, ModelError};
use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Offset, Utc};

/// Largest scale a `Decimal` can carry
const MAX_DECIMALS: u32 = 28;

/// Validated display settings shared by every stage of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Address standing for native ether
    pub ether_address: Address,
    /// Fixed-point decimals of both ether and the token
    pub token_decimals: u32,
    /// Fractional digits kept in token prices
    pub price_precision: u32,
    /// Fractional digits kept in balance strings
    pub balance_precision: u32,
    /// Offset used for timestamps and hour buckets
    pub offset: FixedOffset,
    /// strftime pattern for order timestamps
    pub timestamp_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            ether_address: Address::ZERO,
            token_decimals: 18,
            price_precision: 6,
            balance_precision: 2,
            offset: Utc.fix(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// `3:04:05 pm 6/7`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-I:%M:%S %P %-m/%-d";

impl TryFrom<&DisplayConfig> for DisplaySettings {
    type Error = ModelError;

    fn try_from(config: &DisplayConfig) -> Result<Self, Self::Error> {
        if config.token_decimals > MAX_DECIMALS {
            return Err(ModelError::InvalidSettings(format!(
                "token_decimals {} exceeds {}",
                config.token_decimals, MAX_DECIMALS
            )));
        }
        for (name, value) in [
            ("price_precision", config.price_precision),
            ("balance_precision", config.balance_precision),
        ] {
            if value > MAX_DECIMALS {
                return Err(ModelError::InvalidSettings(format!(
                    "{} {} exceeds {}",
                    name, value, MAX_DECIMALS
                )));
            }
        }

        let offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ModelError::InvalidSettings(format!(
                    "utc_offset_minutes {} out of range",
                    config.utc_offset_minutes
                ))
            })?;

        if StrftimeItems::new(&config.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ModelError::InvalidSettings(format!(
                "bad timestamp_format {:?}",
                config.timestamp_format
            )));
        }

        Ok(Self {
            ether_address: config.ether_address,
            token_decimals: config.token_decimals,
            price_precision: config.price_precision,
            balance_precision: config.balance_precision,
            offset,
            timestamp_format: config.timestamp_format.clone(),
        })
    }
}

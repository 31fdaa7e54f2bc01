//! Model error types

use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised while validating or transforming exchange records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Display amount could not be converted to base units
    #[error("Invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: &'static str },
    /// Base-unit amount does not fit the decimal range
    #[error("Amount out of range: {0} base units")]
    AmountOutOfRange(U256),
    /// Record is structurally valid but semantically broken
    #[error("Malformed order {id}: {reason}")]
    MalformedOrder { id: u64, reason: &'static str },
    /// Unix timestamp cannot be represented
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
    /// Price division overflowed
    #[error("Price overflow for order {0}")]
    PriceOverflow(u64),
    /// Display settings are out of range
    #[error("Invalid display settings: {0}")]
    InvalidSettings(String),
}

//! Exchange data model
//!
//! Raw on-chain records as delivered by the contract event layer, plus the
//! small enums shared by every view-model.

mod draft;
mod order;
mod types;

pub use alloy_primitives::{Address, U256};
pub use draft::OrderDraft;
pub use order::{NumberOrString, Order};
pub use types::ModelError;

use serde::{Deserialize, Serialize};

/// Convenience alias for model results
pub type Result<T> = std::result::Result<T, ModelError>;

/// Direction of an order from the point of view of the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Gives ether, receives tokens
    Buy,
    /// Gives tokens, receives ether
    Sell,
}

impl OrderType {
    /// Get the opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            OrderType::Buy => OrderType::Sell,
            OrderType::Sell => OrderType::Buy,
        }
    }

    /// Visual class for this direction
    pub fn class(&self) -> PriceClass {
        match self {
            OrderType::Buy => PriceClass::Positive,
            OrderType::Sell => PriceClass::Negative,
        }
    }

    /// Ledger sign for this direction
    pub fn sign(&self) -> Sign {
        match self {
            OrderType::Buy => Sign::Plus,
            OrderType::Sell => Sign::Minus,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Buy => write!(f, "buy"),
            OrderType::Sell => write!(f, "sell"),
        }
    }
}

/// Visual class attached to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceClass {
    Positive,
    Negative,
}

/// Sign glyph for the personal trade ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

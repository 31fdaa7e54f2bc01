//! Order drafts built from form input
//!
//! Turns a display amount and price into the raw parameters of a
//! `makeOrder` call. Nothing here signs or submits anything.

use super::{Address, ModelError, OrderType, Result, U256};
use crate::format::{parse_units, DisplaySettings};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use std::str::FromStr;

/// Raw parameters of a new order
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_type: OrderType,
    pub token_get: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub amount_get: U256,
    pub token_give: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub amount_give: U256,
}

impl OrderDraft {
    /// Buy `amount` tokens at `price` ether each
    pub fn buy(
        token: Address,
        amount: &str,
        price: &str,
        settings: &DisplaySettings,
    ) -> Result<Self> {
        let (token_units, ether_units) = Self::units(amount, price, settings)?;
        Ok(Self {
            order_type: OrderType::Buy,
            token_get: token,
            amount_get: token_units,
            token_give: settings.ether_address,
            amount_give: ether_units,
        })
    }

    /// Sell `amount` tokens at `price` ether each
    pub fn sell(
        token: Address,
        amount: &str,
        price: &str,
        settings: &DisplaySettings,
    ) -> Result<Self> {
        let (token_units, ether_units) = Self::units(amount, price, settings)?;
        Ok(Self {
            order_type: OrderType::Sell,
            token_get: settings.ether_address,
            amount_get: ether_units,
            token_give: token,
            amount_give: token_units,
        })
    }

    /// Base units of `(token amount, ether total)`
    fn units(amount: &str, price: &str, settings: &DisplaySettings) -> Result<(U256, U256)> {
        let amount_value = positive(amount)?;
        let price_value = positive(price)?;
        let total = amount_value
            .checked_mul(price_value)
            .ok_or_else(|| ModelError::InvalidAmount {
                input: format!("{} * {}", amount, price),
                reason: "total overflows",
            })?;

        let token_units = parse_units(amount, settings.token_decimals)?;
        let ether_units = parse_units(&total.normalize().to_string(), settings.token_decimals)?;
        Ok((token_units, ether_units))
    }
}

fn positive(input: &str) -> Result<Decimal> {
    let value = Decimal::from_str(input.trim()).map_err(|_| ModelError::InvalidAmount {
        input: input.to_string(),
        reason: "not a decimal number",
    })?;
    if value <= Decimal::ZERO {
        return Err(ModelError::InvalidAmount {
            input: input.to_string(),
            reason: "must be positive",
        });
    }
    Ok(value)
}

//! Order decoration

use crate::format::{format_timestamp, pow10, scaled_decimal, to_display_units, DisplaySettings};
use crate::model::{ModelError, Order, Result, U256};
use rust_decimal::Decimal;
use serde::Serialize;

/// An order annotated with display amounts, price and formatted time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub ether_amount: Decimal,
    pub token_amount: Decimal,
    /// Ether per token; `None` when the token side is zero
    pub token_price: Option<Decimal>,
    pub formatted_timestamp: String,
}

impl DecoratedOrder {
    pub fn id(&self) -> u64 {
        self.order.id
    }

    pub fn timestamp(&self) -> i64 {
        self.order.timestamp
    }
}

/// Decorates raw orders using a fixed set of display settings
#[derive(Debug, Clone, Default)]
pub struct OrderDecorator {
    settings: DisplaySettings,
}

impl OrderDecorator {
    /// Create a decorator with the given settings
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    /// Display settings in use
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Validate and decorate a single order
    pub fn decorate(&self, order: &Order) -> Result<DecoratedOrder> {
        let settings = &self.settings;
        order.validate(&settings.ether_address)?;

        let (ether_units, token_units) = order.sides(&settings.ether_address);
        let ether_amount = to_display_units(ether_units, settings.token_decimals)?;
        let token_amount = to_display_units(token_units, settings.token_decimals)?;
        let token_price = self.price(order.id, ether_units, token_units)?;

        let formatted_timestamp =
            format_timestamp(order.timestamp, &settings.offset, &settings.timestamp_format)?;

        Ok(DecoratedOrder {
            order: order.clone(),
            ether_amount,
            token_amount,
            token_price,
            formatted_timestamp,
        })
    }

    /// Decorate a batch, failing on the first malformed record
    pub fn decorate_all<'a, I>(&self, orders: I) -> Result<Vec<DecoratedOrder>>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        orders.into_iter().map(|order| self.decorate(order)).collect()
    }

    /// Ether per token from the raw base units, rounded half away from zero
    ///
    /// Both sides share the token decimals, so the ratio of base units is the
    /// display price and no intermediate `Decimal` has to hold either amount.
    fn price(&self, id: u64, ether_units: U256, token_units: U256) -> Result<Option<Decimal>> {
        if token_units.is_zero() {
            return Ok(None);
        }
        let overflow = || ModelError::PriceOverflow(id);
        let precision = self.settings.price_precision;

        let scaled = pow10(precision)
            .and_then(|factor| ether_units.checked_mul(factor))
            .ok_or_else(overflow)?;
        let (mut quotient, remainder) = scaled.div_rem(token_units);
        if remainder >= token_units - remainder {
            quotient += U256::from(1u64);
        }

        scaled_decimal(quotient, precision)
            .map(|price| Some(price.normalize()))
            .ok_or_else(overflow)
    }
}

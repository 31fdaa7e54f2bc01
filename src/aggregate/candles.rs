//! Price chart aggregation
//!
//! Hourly OHLC candles over decorated fills, plus a last-price summary
//! taken from the two most recent fills.

use crate::decorate::{DecoratedOrder, OrderDecorator};
use crate::format::hour_start;
use crate::model::{Order, Result};
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

/// Open/high/low/close summary of one hour of fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candle {
    /// Start of the hour bucket
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Candle {
    fn new(timestamp: DateTime<Utc>, price: Decimal) -> Self {
        Self {
            timestamp,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    fn push(&mut self, price: Decimal) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
    }
}

/// Direction of the latest price move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Up,
    Down,
    /// Fewer than two fills
    Indeterminate,
}

/// Last price and how it moved from the fill before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub last_price: Decimal,
    pub second_last_price: Decimal,
    pub last_price_change: PriceDirection,
}

/// Everything the price chart renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChart {
    #[serde(flatten)]
    pub summary: PriceSummary,
    pub candles: Vec<Candle>,
}

/// Bucket time-ascending fills into hourly candles
///
/// Hours are measured in `offset`. Unpriced fills do not contribute.
pub fn build_candles(fills: &[DecoratedOrder], offset: &FixedOffset) -> Result<Vec<Candle>> {
    let mut buckets: BTreeMap<DateTime<Utc>, Candle> = BTreeMap::new();

    for fill in fills {
        let Some(price) = fill.token_price else {
            continue;
        };
        let bucket = hour_start(fill.timestamp(), offset)?;
        buckets
            .entry(bucket)
            .and_modify(|candle| candle.push(price))
            .or_insert_with(|| Candle::new(bucket, price));
    }

    Ok(buckets.into_values().collect())
}

/// Summarize the two most recent fills of a time-ascending sequence
///
/// A missing or unpriced fill counts as a price of zero. With fewer than two
/// fills the direction is indeterminate.
pub fn price_summary(fills: &[DecoratedOrder]) -> PriceSummary {
    let price_at = |index: Option<usize>| {
        index
            .and_then(|i| fills.get(i))
            .and_then(|fill| fill.token_price)
            .unwrap_or(dec!(0))
    };

    let last_price = price_at(fills.len().checked_sub(1));
    let second_last_price = price_at(fills.len().checked_sub(2));
    let last_price_change = if fills.len() < 2 {
        PriceDirection::Indeterminate
    } else if last_price >= second_last_price {
        PriceDirection::Up
    } else {
        PriceDirection::Down
    };

    PriceSummary {
        last_price,
        second_last_price,
        last_price_change,
    }
}

/// Build the full price chart from raw fills in any order
pub fn price_chart(decorator: &OrderDecorator, fills: &[Order]) -> Result<PriceChart> {
    let ether = decorator.settings().ether_address;
    let mut sorted: Vec<&Order> = fills.iter().collect();
    sorted.sort_by_key(|order| order.timestamp);

    let decorated = sorted
        .into_iter()
        .map(|order| {
            order.validate_fill(&ether)?;
            decorator.decorate(order)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PriceChart {
        summary: price_summary(&decorated),
        candles: build_candles(&decorated, &decorator.settings().offset)?,
    })
}

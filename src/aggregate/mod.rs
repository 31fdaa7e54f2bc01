//! Aggregators over decorated orders
//!
//! Each aggregator is a pure function of its inputs:
//! - open-order filtering and order book bucketing
//! - trade history colored by price trend
//! - hourly candles and the last-price summary
//! - per-account filled and open orders

mod account;
mod book;
mod candles;
mod trades;

pub use account::{my_filled_orders, my_open_orders};
pub use book::{open_orders, OrderBook};
pub use candles::{
    build_candles, price_chart, price_summary, Candle, PriceChart, PriceDirection, PriceSummary,
};
pub use trades::trade_history;

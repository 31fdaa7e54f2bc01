//! dex-view: derived views over a decentralized exchange's order history
//!
//! This library provides the core components for:
//! - Typed order records with fixed-point amounts
//! - Order decoration with display amounts, prices and timestamps
//! - Classification for the order book, trade history and account views
//! - Order book, trade history, hourly candles and per-account aggregation
//! - Memoized selectors over a typed application state
//! - Order drafts built from form input
//! - Structured logging and selector metrics

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod decorate;
pub mod format;
pub mod model;
pub mod store;
pub mod telemetry;

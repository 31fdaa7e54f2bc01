//! CLI interface for dex-view
//!
//! Provides subcommands for:
//! - `book`, `trades`, `chart`: market views over a state snapshot
//! - `my-trades`, `my-orders`, `balances`: views for the connected account
//! - `draft`: build the raw parameters of a new order
//! - `config`: show the effective configuration

mod draft;
mod render;
mod view;

pub use draft::{DraftArgs, DraftSide};
pub use render::{
    render_balances, render_book, render_chart, render_my_orders, render_my_trades,
    render_trades,
};
pub use view::{load_snapshot, OutputFormat, View, ViewArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dex-view")]
#[command(about = "Derived views over a decentralized exchange's order history")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open orders split into buys and sells
    Book(ViewArgs),
    /// Trade history, newest first
    Trades(ViewArgs),
    /// Hourly candles and last price
    Chart(ViewArgs),
    /// Fills the account took part in
    MyTrades(ViewArgs),
    /// Open orders the account placed
    MyOrders(ViewArgs),
    /// Wallet and exchange balances
    Balances(ViewArgs),
    /// Build a new order from an amount and price
    Draft(DraftArgs),
    /// Show configuration
    Config,
}

//! View commands over a state snapshot

use super::render;
use crate::config::DisplayConfig;
use crate::model::Address;
use crate::store::{AppState, ExchangeEvent, Selectors};
use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format for rendered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Which derived view to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    OrderBook,
    Trades,
    PriceChart,
    MyTrades,
    MyOrders,
    Balances,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// JSON snapshot of the application state
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Account to view as, replacing the snapshot's connected account
    #[arg(long)]
    pub account: Option<Address>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Read a state snapshot from disk
pub fn load_snapshot(path: impl AsRef<Path>) -> anyhow::Result<AppState> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    Ok(state)
}

impl ViewArgs {
    pub fn execute(&self, view: View, config: &DisplayConfig) -> anyhow::Result<()> {
        let output = self.render(view, config)?;
        println!("{}", output);
        Ok(())
    }

    /// Load the snapshot and render `view` to a string
    pub fn render(&self, view: View, config: &DisplayConfig) -> anyhow::Result<String> {
        let mut state = load_snapshot(&self.snapshot)?;
        if let Some(account) = self.account {
            state.apply(ExchangeEvent::AccountChanged(Some(account)));
        }

        let mut selectors =
            Selectors::from_config(config).context("Invalid display configuration")?;
        warn_if_loading(view, &state);

        let table = self.format == OutputFormat::Table;
        let output = match view {
            View::OrderBook => {
                let book = selectors.order_book(&state)?;
                if table {
                    render::render_book(&book)
                } else {
                    to_json(&*book)?
                }
            }
            View::Trades => {
                let trades = selectors.filled_orders(&state)?;
                if table {
                    render::render_trades(&trades)
                } else {
                    to_json(&*trades)?
                }
            }
            View::PriceChart => {
                let chart = selectors.price_chart(&state)?;
                if table {
                    render::render_chart(&chart)
                } else {
                    to_json(&*chart)?
                }
            }
            View::MyTrades => {
                let trades = selectors.my_filled_orders(&state)?;
                if table {
                    render::render_my_trades(&trades)
                } else {
                    to_json(&*trades)?
                }
            }
            View::MyOrders => {
                let orders = selectors.my_open_orders(&state)?;
                if table {
                    render::render_my_orders(&orders)
                } else {
                    to_json(&*orders)?
                }
            }
            View::Balances => {
                let balances = selectors.balances(&state)?;
                if table {
                    render::render_balances(&balances)
                } else {
                    to_json(&balances)?
                }
            }
        };

        Ok(output)
    }
}

fn warn_if_loading(view: View, state: &AppState) {
    let loaded = match view {
        View::OrderBook => state.order_book_loaded(),
        View::Trades | View::PriceChart | View::MyTrades => state.filled_orders_loaded(),
        View::MyOrders => state.my_open_orders_loaded(),
        View::Balances => !state.balances_loading(),
    };
    if !loaded {
        tracing::warn!(?view, "Snapshot marks this view as still loading");
    }
    if matches!(view, View::MyTrades | View::MyOrders) && state.account().is_none() {
        tracing::warn!(?view, "No connected account, nothing to show");
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

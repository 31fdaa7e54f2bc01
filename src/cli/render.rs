//! Plain-text tables for the view commands

use crate::aggregate::{OrderBook, PriceChart, PriceDirection};
use crate::decorate::{FilledOrder, MyFilledOrder, MyOpenOrder, OrderBookOrder};
use crate::store::Balances;
use rust_decimal::Decimal;

const HEAVY_RULE: &str = "══════════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────────";

fn title(name: &str) -> String {
    format!("{rule}\n{name:^54}\n{rule}", rule = HEAVY_RULE, name = name)
}

fn price(value: Option<Decimal>) -> String {
    value.map_or_else(|| "-".to_string(), |p| p.to_string())
}

/// Header line followed by one line per row
fn table<T>(header: String, rows: &[T], row: impl Fn(&T) -> String) -> String {
    std::iter::once(header)
        .chain(rows.iter().map(row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn book_rows(orders: &[OrderBookOrder]) -> String {
    if orders.is_empty() {
        return "(none)".to_string();
    }
    table(
        format!("{:>20} {:>12} {:>20}", "TOKEN", "PRICE", "ETH"),
        orders,
        |o| {
            format!(
                "{:>20} {:>12} {:>20}",
                o.order.token_amount,
                price(o.order.token_price),
                o.order.ether_amount
            )
        },
    )
}

/// Order book with sells on top, the way the book is usually read
pub fn render_book(book: &OrderBook) -> String {
    format!(
        r#"{title}

SELL
{light}
{sells}

BUY
{light}
{buys}

Spread:           {spread}
{rule}"#,
        title = title("ORDER BOOK"),
        sells = book_rows(&book.sell_orders),
        buys = book_rows(&book.buy_orders),
        spread = price(book.spread()),
        light = LIGHT_RULE,
        rule = HEAVY_RULE,
    )
}

/// Trade history with the trend class of each fill
pub fn render_trades(trades: &[FilledOrder]) -> String {
    let rows = table(
        format!(
            "{:<22} {:>20} {:>12} {:>9}",
            "TIME", "TOKEN", "PRICE", "TREND"
        ),
        trades,
        |t| {
            format!(
                "{:<22} {:>20} {:>12} {:>9}",
                t.order.formatted_timestamp,
                t.order.token_amount,
                price(t.order.token_price),
                format!("{:?}", t.token_price_class).to_lowercase()
            )
        },
    );
    format!("{}\n{}\n{}", title("TRADES"), rows, HEAVY_RULE)
}

/// Last price followed by the hourly candles
pub fn render_chart(chart: &PriceChart) -> String {
    let arrow = match chart.summary.last_price_change {
        PriceDirection::Up => "▲",
        PriceDirection::Down => "▼",
        PriceDirection::Indeterminate => "-",
    };
    let candles = table(
        format!(
            "{:<17} {:>10} {:>10} {:>10} {:>10}",
            "HOUR (UTC)", "OPEN", "HIGH", "LOW", "CLOSE"
        ),
        &chart.candles,
        |c| {
            format!(
                "{:<17} {:>10} {:>10} {:>10} {:>10}",
                c.timestamp.format("%Y-%m-%d %H:%M"),
                c.open,
                c.high,
                c.low,
                c.close
            )
        },
    );

    format!(
        r#"{title}
Last Price:       {last} {arrow}
Previous Price:   {previous}

CANDLES
{light}
{candles}
{rule}"#,
        title = title("PRICE CHART"),
        last = chart.summary.last_price,
        arrow = arrow,
        previous = chart.summary.second_last_price,
        candles = candles,
        light = LIGHT_RULE,
        rule = HEAVY_RULE,
    )
}

/// The account's fills with signed token amounts
pub fn render_my_trades(trades: &[MyFilledOrder]) -> String {
    let rows = table(
        format!("{:<22} {:>21} {:>12}", "TIME", "TOKEN", "PRICE"),
        trades,
        |t| {
            format!(
                "{:<22} {:>21} {:>12}",
                t.order.formatted_timestamp,
                format!("{}{}", t.order_sign, t.order.token_amount),
                price(t.order.token_price)
            )
        },
    );
    format!("{}\n{}\n{}", title("MY TRADES"), rows, HEAVY_RULE)
}

/// The account's open orders
pub fn render_my_orders(orders: &[MyOpenOrder]) -> String {
    let rows = table(
        format!("{:>8} {:<5} {:>20} {:>12}", "ID", "SIDE", "TOKEN", "PRICE"),
        orders,
        |o| {
            format!(
                "{:>8} {:<5} {:>20} {:>12}",
                o.order.id(),
                o.order_type.to_string(),
                o.order.token_amount,
                price(o.order.token_price)
            )
        },
    );
    format!("{}\n{}\n{}", title("MY ORDERS"), rows, HEAVY_RULE)
}

/// Wallet and exchange balances side by side
pub fn render_balances(balances: &Balances) -> String {
    format!(
        r#"{title}

{:<10} {:>20} {:>20}
{light}
{:<10} {:>20} {:>20}
{:<10} {:>20} {:>20}
{rule}"#,
        "",
        "WALLET",
        "EXCHANGE",
        "ETH",
        balances.ether,
        balances.exchange_ether,
        "TOKEN",
        balances.token,
        balances.exchange_token,
        title = title("BALANCES"),
        rule = HEAVY_RULE,
        light = LIGHT_RULE,
    )
}

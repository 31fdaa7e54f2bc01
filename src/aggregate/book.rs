//! Open orders and order book construction

use crate::decorate::{classify_book_order, OrderBookOrder, OrderDecorator};
use crate::model::{Order, OrderType, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Orders neither filled nor cancelled, matched by id
pub fn open_orders(all: &[Order], filled: &[Order], cancelled: &[Order]) -> Vec<Order> {
    let closed: HashSet<u64> = filled
        .iter()
        .chain(cancelled.iter())
        .map(|order| order.id)
        .collect();

    all.iter()
        .filter(|order| !closed.contains(&order.id))
        .cloned()
        .collect()
}

/// Open orders split by direction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    /// Buy orders, highest price first
    pub buy_orders: Vec<OrderBookOrder>,
    /// Sell orders, highest price first
    pub sell_orders: Vec<OrderBookOrder>,
}

impl OrderBook {
    /// Decorate, classify and bucket open orders
    ///
    /// Each bucket is stably sorted by price, highest first. Unpriced orders
    /// sort after every priced one.
    pub fn build(decorator: &OrderDecorator, open: &[Order]) -> Result<Self> {
        let ether = decorator.settings().ether_address;
        let mut book = OrderBook::default();

        for order in open {
            let classified = classify_book_order(decorator.decorate(order)?, &ether);
            match classified.order_type {
                OrderType::Buy => book.buy_orders.push(classified),
                OrderType::Sell => book.sell_orders.push(classified),
            }
        }

        book.buy_orders.sort_by_key(|o| Reverse(o.order.token_price));
        book.sell_orders.sort_by_key(|o| Reverse(o.order.token_price));

        Ok(book)
    }

    /// Highest buy price
    pub fn best_buy_price(&self) -> Option<Decimal> {
        self.buy_orders.first().and_then(|o| o.order.token_price)
    }

    /// Lowest sell price
    pub fn best_sell_price(&self) -> Option<Decimal> {
        self.sell_orders.iter().rev().find_map(|o| o.order.token_price)
    }

    /// Gap between the best sell and best buy
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_buy_price(), self.best_sell_price()) {
            (Some(buy), Some(sell)) => Some(sell - buy),
            _ => None,
        }
    }

    /// Total number of orders
    pub fn len(&self) -> usize {
        self.buy_orders.len() + self.sell_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

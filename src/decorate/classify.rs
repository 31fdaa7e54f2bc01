//! Order classification
//!
//! Attaches direction, visual class and ledger sign to decorated orders.
//! Which tags apply depends on the view the order is shown in.

use super::DecoratedOrder;
use crate::model::{Address, OrderType, PriceClass, Sign};
use serde::Serialize;

/// A fill in the trade history, colored by price trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilledOrder {
    #[serde(flatten)]
    pub order: DecoratedOrder,
    pub token_price_class: PriceClass,
}

/// An open order in the order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookOrder {
    #[serde(flatten)]
    pub order: DecoratedOrder,
    pub order_type: OrderType,
    pub order_type_class: PriceClass,
    /// What a counterparty does to fill this order
    pub order_fill_action: OrderType,
}

/// A fill the account took part in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyFilledOrder {
    #[serde(flatten)]
    pub order: DecoratedOrder,
    pub order_type: OrderType,
    pub order_type_class: PriceClass,
    pub order_sign: Sign,
}

/// An open order placed by the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyOpenOrder {
    #[serde(flatten)]
    pub order: DecoratedOrder,
    pub order_type: OrderType,
    pub order_type_class: PriceClass,
}

/// Price trend of `current` against the fill before it
fn trend_class(previous: &DecoratedOrder, current: &DecoratedOrder) -> PriceClass {
    if previous.id() == current.id() {
        return PriceClass::Positive;
    }
    if current.token_price >= previous.token_price {
        PriceClass::Positive
    } else {
        PriceClass::Negative
    }
}

/// Color a time-ascending run of fills by price trend
///
/// Each fill is compared with its predecessor. The first fill has none and
/// is paired with itself, which makes it positive. Input order is kept.
pub fn classify_fills(orders: Vec<DecoratedOrder>) -> Vec<FilledOrder> {
    let classes: Vec<PriceClass> = orders
        .first()
        .into_iter()
        .chain(orders.iter())
        .zip(orders.iter())
        .map(|(previous, current)| trend_class(previous, current))
        .collect();

    orders
        .into_iter()
        .zip(classes)
        .map(|(order, token_price_class)| FilledOrder {
            order,
            token_price_class,
        })
        .collect()
}

/// Tag an open order for the order book
pub fn classify_book_order(order: DecoratedOrder, ether: &Address) -> OrderBookOrder {
    let order_type = order.order.order_type(ether);
    OrderBookOrder {
        order,
        order_type,
        order_type_class: order_type.class(),
        order_fill_action: order_type.opposite(),
    }
}

/// Tag a fill from the account's point of view
///
/// When the account filled someone else's order, its own direction is the
/// opposite of the stored one.
pub fn classify_my_fill(
    order: DecoratedOrder,
    account: &Address,
    ether: &Address,
) -> MyFilledOrder {
    let stored = order.order.order_type(ether);
    let order_type = if order.order.user == *account {
        stored
    } else {
        stored.opposite()
    };
    MyFilledOrder {
        order,
        order_type,
        order_type_class: order_type.class(),
        order_sign: order_type.sign(),
    }
}

/// Tag an open order placed by the account
pub fn classify_my_open(order: DecoratedOrder, ether: &Address) -> MyOpenOrder {
    let order_type = order.order.order_type(ether);
    MyOpenOrder {
        order,
        order_type,
        order_type_class: order_type.class(),
    }
}

//! Per-account order views

use crate::decorate::{
    classify_my_fill, classify_my_open, MyFilledOrder, MyOpenOrder, OrderDecorator,
};
use crate::model::{Address, Order, Result};
use std::cmp::Reverse;

/// Fills the account made or took, oldest first
pub fn my_filled_orders(
    decorator: &OrderDecorator,
    fills: &[Order],
    account: &Address,
) -> Result<Vec<MyFilledOrder>> {
    let ether = decorator.settings().ether_address;
    for fill in fills {
        fill.validate_fill(&ether)?;
    }

    let mut mine: Vec<&Order> = fills.iter().filter(|o| o.involves(account)).collect();
    mine.sort_by_key(|order| order.timestamp);

    mine.into_iter()
        .map(|order| {
            let decorated = decorator.decorate(order)?;
            Ok(classify_my_fill(decorated, account, &ether))
        })
        .collect()
}

/// Open orders the account placed, newest first
pub fn my_open_orders(
    decorator: &OrderDecorator,
    open: &[Order],
    account: &Address,
) -> Result<Vec<MyOpenOrder>> {
    let ether = decorator.settings().ether_address;
    let mut mine = open
        .iter()
        .filter(|order| order.user == *account)
        .map(|order| Ok(classify_my_open(decorator.decorate(order)?, &ether)))
        .collect::<Result<Vec<_>>>()?;
    mine.sort_by_key(|o| Reverse(o.order.timestamp()));
    Ok(mine)
}

//! Trade history

use crate::decorate::{classify_fills, FilledOrder, OrderDecorator};
use crate::model::{Order, Result};

/// Decorate fills and color them by price trend
///
/// Fills are sorted by time ascending before classification and returned in
/// that order.
pub fn trade_history(decorator: &OrderDecorator, fills: &[Order]) -> Result<Vec<FilledOrder>> {
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

    Ok(classify_fills(decorated))
}

//! Order decoration and classification
//!
//! Raw records become `DecoratedOrder`s (display amounts, price, formatted
//! time), which the classifiers then tag for a specific view.

mod classify;
mod order;

pub use classify::{
    classify_book_order, classify_fills, classify_my_fill, classify_my_open, FilledOrder,
    MyFilledOrder, MyOpenOrder, OrderBookOrder,
};
pub use order::{DecoratedOrder, OrderDecorator};

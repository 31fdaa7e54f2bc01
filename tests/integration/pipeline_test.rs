//! Event-driven walk through the selector graph

use dex_view::aggregate::PriceDirection;
use dex_view::model::{Address, Order, OrderType, PriceClass, U256};
use dex_view::store::{AppState, ExchangeEvent, Selector, Selectors};
use rust_decimal_macros::dec;
use std::sync::Arc;

const WEI: u128 = 1_000_000_000_000_000_000;
const HOUR: i64 = 3600;
const START: i64 = 1_591_542_000; // 2020-06-07 15:00:00 UTC

fn token() -> Address {
    "0x5b1869d9a4c187f2eaa108f3062412ecf0526b24".parse().unwrap()
}

fn maker() -> Address {
    "0x90f8bf6a479f320ead074411a4b0e7944ea8c9c1".parse().unwrap()
}

fn taker() -> Address {
    "0xffcf8fdee72ac11b5c542428b35eef5769c409f0".parse().unwrap()
}

/// Buy 100 tokens for `ether_milli` thousandths of an ether
fn buy(id: u64, ether_milli: u128, timestamp: i64) -> Order {
    Order {
        id,
        user: maker(),
        token_get: token(),
        amount_get: U256::from(100 * WEI),
        token_give: Address::ZERO,
        amount_give: U256::from(ether_milli * WEI / 1000),
        timestamp,
        user_fill: None,
    }
}

fn fill(order: Order, at: i64) -> Order {
    Order {
        timestamp: at,
        user_fill: Some(taker()),
        ..order
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState::default();
    state.apply(ExchangeEvent::AccountChanged(Some(maker())));
    state.apply(ExchangeEvent::AllOrdersLoaded(vec![
        buy(1, 1000, START),
        buy(2, 1200, START + 60),
        buy(3, 900, START + 120),
        buy(4, 1100, START + HOUR + 60),
        buy(5, 500, START + HOUR + 120),
    ]));
    state.apply(ExchangeEvent::CancelledOrdersLoaded(vec![]));
    state.apply(ExchangeEvent::FilledOrdersLoaded(vec![
        fill(buy(4, 1100, START + HOUR + 60), START + HOUR + 60),
        fill(buy(1, 1000, START), START + 10),
        fill(buy(3, 900, START + 120), START + 130),
        fill(buy(2, 1200, START + 60), START + 70),
    ]));
    state
}

#[test]
fn test_hourly_candles_and_summary() {
    let mut selectors = Selectors::default();
    let chart = selectors.price_chart(&loaded_state()).unwrap();

    assert_eq!(chart.candles.len(), 2);
    let first = &chart.candles[0];
    assert_eq!(first.timestamp.timestamp(), START);
    assert_eq!(
        (first.open, first.high, first.low, first.close),
        (dec!(0.01), dec!(0.012), dec!(0.009), dec!(0.009))
    );
    let second = &chart.candles[1];
    assert_eq!(second.timestamp.timestamp(), START + HOUR);
    assert_eq!(second.open, dec!(0.011));

    assert_eq!(chart.summary.last_price, dec!(0.011));
    assert_eq!(chart.summary.second_last_price, dec!(0.009));
    assert_eq!(chart.summary.last_price_change, PriceDirection::Up);
}

#[test]
fn test_trade_history_newest_first() {
    let mut selectors = Selectors::default();
    let trades = selectors.filled_orders(&loaded_state()).unwrap();

    let ids: Vec<u64> = trades.iter().map(|t| t.order.id()).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
    let classes: Vec<PriceClass> = trades.iter().map(|t| t.token_price_class).collect();
    assert_eq!(
        classes,
        vec![
            PriceClass::Positive,
            PriceClass::Negative,
            PriceClass::Positive,
            PriceClass::Positive,
        ]
    );
}

#[test]
fn test_live_events_flow_through_selectors() {
    let mut selectors = Selectors::default();
    let mut state = loaded_state();

    let book = selectors.order_book(&state).unwrap();
    let ids: Vec<u64> = book.buy_orders.iter().map(|o| o.order.id()).collect();
    assert_eq!(ids, vec![5]);
    assert!(book.sell_orders.is_empty());

    // A new sell arrives from the maker
    state.apply(ExchangeEvent::OrderMade(Order {
        id: 6,
        user: maker(),
        token_get: Address::ZERO,
        amount_get: U256::from(2 * WEI),
        token_give: token(),
        amount_give: U256::from(100 * WEI),
        timestamp: START + 2 * HOUR,
        user_fill: None,
    }));
    let book = selectors.order_book(&state).unwrap();
    assert_eq!(book.sell_orders.len(), 1);
    assert_eq!(book.best_sell_price(), Some(dec!(0.02)));
    assert_eq!(book.spread(), Some(dec!(0.015)));

    let mine = selectors.my_open_orders(&state).unwrap();
    let ids: Vec<u64> = mine.iter().map(|o| o.order.id()).collect();
    assert_eq!(ids, vec![6, 5]);
    assert_eq!(mine[0].order_type, OrderType::Sell);

    // Cancelling order 5 leaves the chart untouched
    let chart_before = selectors.price_chart(&state).unwrap();
    state.apply(ExchangeEvent::OrderCancelled(buy(5, 500, START + HOUR + 120)));
    let book = selectors.order_book(&state).unwrap();
    assert!(book.buy_orders.is_empty());
    let chart_after = selectors.price_chart(&state).unwrap();
    assert!(Arc::ptr_eq(&chart_before, &chart_after));
    assert_eq!(selectors.recomputes(Selector::PriceChart), 1);
}

#[test]
fn test_my_trades_for_maker() {
    let mut selectors = Selectors::default();
    let trades = selectors.my_filled_orders(&loaded_state()).unwrap();
    assert_eq!(trades.len(), 4);
    assert!(trades.iter().all(|t| t.order_type == OrderType::Buy));
    let times: Vec<i64> = trades.iter().map(|t| t.order.timestamp()).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[test]
fn test_loading_flags_track_events() {
    let mut state = AppState::default();
    assert!(!state.order_book_loaded());
    assert!(!state.filled_orders_loaded());

    state.apply(ExchangeEvent::FilledOrdersLoaded(vec![]));
    assert!(state.filled_orders_loaded());
    assert!(!state.order_book_loaded());

    state.apply(ExchangeEvent::AllOrdersLoaded(vec![]));
    state.apply(ExchangeEvent::CancelledOrdersLoaded(vec![]));
    assert!(state.order_book_loaded());
    assert!(state.my_open_orders_loaded());
}

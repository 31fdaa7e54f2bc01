//! State transitions driven by contract events and loaders
//!
//! Each transition replaces the touched list with a fresh `Arc`, so the
//! selectors see a new input only for the slices that actually changed.

use super::state::{AppState, Loadable};
use crate::model::{Address, Order, U256};
use std::sync::Arc;

/// Something the provider or contract layer delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeEvent {
    /// Wallet account switched or disconnected
    AccountChanged(Option<Address>),
    /// Historical order lists fetched
    AllOrdersLoaded(Vec<Order>),
    CancelledOrdersLoaded(Vec<Order>),
    FilledOrdersLoaded(Vec<Order>),
    /// Live `Order` event
    OrderMade(Order),
    /// Live `Cancel` event
    OrderCancelled(Order),
    /// Live `Trade` event
    OrderFilled(Order),
    /// Balance refresh started
    BalancesLoading,
    /// Balance refresh finished, all in base units
    BalancesLoaded {
        ether: U256,
        token: U256,
        exchange_ether: U256,
        exchange_token: U256,
    },
}

/// Append `order` unless a record with the same id is already present
fn append_unique(list: &mut Loadable<Order>, order: Order) -> bool {
    if list.data.iter().any(|o| o.id == order.id) {
        return false;
    }
    let mut data: Vec<Order> = list.data.to_vec();
    data.push(order);
    list.data = Arc::from(data);
    true
}

impl AppState {
    /// Apply an event, returning whether any slice changed
    pub fn apply(&mut self, event: ExchangeEvent) -> bool {
        let exchange = &mut self.exchange;
        match event {
            ExchangeEvent::AccountChanged(account) => {
                let changed = self.web3.account != account;
                self.web3.account = account;
                changed
            }
            ExchangeEvent::AllOrdersLoaded(orders) => {
                exchange.all_orders = Loadable::loaded(orders);
                true
            }
            ExchangeEvent::CancelledOrdersLoaded(orders) => {
                exchange.cancelled_orders = Loadable::loaded(orders);
                true
            }
            ExchangeEvent::FilledOrdersLoaded(orders) => {
                exchange.filled_orders = Loadable::loaded(orders);
                true
            }
            ExchangeEvent::OrderMade(order) => {
                exchange.buy_order.making = false;
                exchange.sell_order.making = false;
                append_unique(&mut exchange.all_orders, order)
            }
            ExchangeEvent::OrderCancelled(order) => {
                exchange.order_cancelling = false;
                append_unique(&mut exchange.cancelled_orders, order)
            }
            ExchangeEvent::OrderFilled(order) => {
                exchange.order_filling = false;
                append_unique(&mut exchange.filled_orders, order)
            }
            ExchangeEvent::BalancesLoading => {
                let changed = !exchange.balances_loading;
                exchange.balances_loading = true;
                changed
            }
            ExchangeEvent::BalancesLoaded {
                ether,
                token,
                exchange_ether,
                exchange_token,
            } => {
                self.web3.balance = ether;
                self.token.balance = token;
                exchange.ether_balance = exchange_ether;
                exchange.token_balance = exchange_token;
                exchange.balances_loading = false;
                true
            }
        }
    }
}

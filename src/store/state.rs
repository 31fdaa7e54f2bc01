//! Typed store slices
//!
//! Missing fields take the same defaults the front-end store used: nothing
//! loaded, empty lists, zero balances, balances still loading.

use crate::model::{Address, NumberOrString, Order, U256};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::sync::Arc;

/// A list plus its loaded flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loadable<T> {
    pub loaded: bool,
    pub data: Arc<[T]>,
}

impl<T> Loadable<T> {
    /// A loaded list
    pub fn loaded(data: Vec<T>) -> Self {
        Self {
            loaded: true,
            data: data.into(),
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            loaded: false,
            data: Vec::new().into(),
        }
    }
}

/// Wallet connection slice
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Web3State {
    /// Connected account, if any
    pub account: Option<Address>,
    /// Wallet ether balance in base units
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub balance: U256,
}

/// Token contract slice
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenState {
    pub loaded: bool,
    /// Token contract address
    pub address: Option<Address>,
    /// Wallet token balance in base units
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub balance: U256,
}

/// Buy or sell form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderForm {
    pub amount: Option<String>,
    pub price: Option<String>,
    /// A make-order transaction is in flight
    pub making: bool,
}

/// Exchange contract slice
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeState {
    pub loaded: bool,
    pub all_orders: Loadable<Order>,
    pub cancelled_orders: Loadable<Order>,
    pub filled_orders: Loadable<Order>,
    pub order_cancelling: bool,
    pub order_filling: bool,
    pub balances_loading: bool,
    /// Ether deposited on the exchange, base units
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub ether_balance: U256,
    /// Tokens deposited on the exchange, base units
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub token_balance: U256,
    pub ether_deposit_amount: Option<String>,
    pub ether_withdraw_amount: Option<String>,
    pub token_deposit_amount: Option<String>,
    pub token_withdraw_amount: Option<String>,
    pub buy_order: OrderForm,
    pub sell_order: OrderForm,
}

impl Default for ExchangeState {
    fn default() -> Self {
        Self {
            loaded: false,
            all_orders: Loadable::default(),
            cancelled_orders: Loadable::default(),
            filled_orders: Loadable::default(),
            order_cancelling: false,
            order_filling: false,
            balances_loading: true,
            ether_balance: U256::ZERO,
            token_balance: U256::ZERO,
            ether_deposit_amount: None,
            ether_withdraw_amount: None,
            token_deposit_amount: None,
            token_withdraw_amount: None,
            buy_order: OrderForm::default(),
            sell_order: OrderForm::default(),
        }
    }
}

/// Whole application state handed to the selectors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub web3: Web3State,
    pub token: TokenState,
    pub exchange: ExchangeState,
}

impl AppState {
    /// Connected account
    pub fn account(&self) -> Option<Address> {
        self.web3.account
    }

    /// Both contracts are loaded
    pub fn contracts_loaded(&self) -> bool {
        self.token.loaded && self.exchange.loaded
    }

    /// All three order lists are loaded
    pub fn order_book_loaded(&self) -> bool {
        let exchange = &self.exchange;
        exchange.all_orders.loaded
            && exchange.filled_orders.loaded
            && exchange.cancelled_orders.loaded
    }

    /// Fill history is loaded; gates trade history, price chart and my trades
    pub fn filled_orders_loaded(&self) -> bool {
        self.exchange.filled_orders.loaded
    }

    /// Open orders of the account depend on every order list
    pub fn my_open_orders_loaded(&self) -> bool {
        self.order_book_loaded()
    }

    pub fn order_cancelling(&self) -> bool {
        self.exchange.order_cancelling
    }

    pub fn order_filling(&self) -> bool {
        self.exchange.order_filling
    }

    pub fn balances_loading(&self) -> bool {
        self.exchange.balances_loading
    }
}

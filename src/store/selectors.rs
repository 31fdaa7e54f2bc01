//! Memoized selector graph
//!
//! Each derived view-model has its own memo keyed on exactly the slices it
//! reads. Open orders are an intermediate node shared by the order book and
//! the account's open orders.

use super::memo::Memo;
use super::state::{AppState, OrderForm};
use crate::aggregate::{
    my_filled_orders, my_open_orders, open_orders, price_chart, trade_history, OrderBook,
    PriceChart,
};
use crate::config::DisplayConfig;
use crate::decorate::{FilledOrder, MyFilledOrder, MyOpenOrder, OrderDecorator};
use crate::format::{format_balance, DisplaySettings};
use crate::model::{Address, Order, OrderDraft, OrderType, Result, U256};
use serde::Serialize;
use std::cmp::Reverse;
use std::sync::Arc;

type OrderList = Arc<[Order]>;

/// Names of the memoized selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    OpenOrders,
    FilledOrders,
    OrderBook,
    MyFilledOrders,
    MyOpenOrders,
    PriceChart,
    EtherBalance,
    TokenBalance,
    ExchangeEtherBalance,
    ExchangeTokenBalance,
}

impl Selector {
    /// Label used in logs and metrics
    pub fn name(&self) -> &'static str {
        match self {
            Selector::OpenOrders => "open_orders",
            Selector::FilledOrders => "filled_orders",
            Selector::OrderBook => "order_book",
            Selector::MyFilledOrders => "my_filled_orders",
            Selector::MyOpenOrders => "my_open_orders",
            Selector::PriceChart => "price_chart",
            Selector::EtherBalance => "ether_balance",
            Selector::TokenBalance => "token_balance",
            Selector::ExchangeEtherBalance => "exchange_ether_balance",
            Selector::ExchangeTokenBalance => "exchange_token_balance",
        }
    }
}

/// Formatted wallet and exchange balances
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    pub ether: Arc<String>,
    pub token: Arc<String>,
    pub exchange_ether: Arc<String>,
    pub exchange_token: Arc<String>,
}

/// Memoized view-model selectors over `AppState`
#[derive(Debug)]
pub struct Selectors {
    decorator: OrderDecorator,
    open_orders: Memo<(OrderList, OrderList, OrderList), Vec<Order>>,
    filled_orders: Memo<OrderList, Vec<FilledOrder>>,
    order_book: Memo<Arc<Vec<Order>>, OrderBook>,
    my_filled_orders: Memo<(Option<Address>, OrderList), Vec<MyFilledOrder>>,
    my_open_orders: Memo<(Option<Address>, Arc<Vec<Order>>), Vec<MyOpenOrder>>,
    price_chart: Memo<OrderList, PriceChart>,
    ether_balance: Memo<U256, String>,
    token_balance: Memo<U256, String>,
    exchange_ether_balance: Memo<U256, String>,
    exchange_token_balance: Memo<U256, String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl Selectors {
    /// Create a selector graph with the given display settings
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            decorator: OrderDecorator::new(settings),
            open_orders: Memo::new(Selector::OpenOrders.name()),
            filled_orders: Memo::new(Selector::FilledOrders.name()),
            order_book: Memo::new(Selector::OrderBook.name()),
            my_filled_orders: Memo::new(Selector::MyFilledOrders.name()),
            my_open_orders: Memo::new(Selector::MyOpenOrders.name()),
            price_chart: Memo::new(Selector::PriceChart.name()),
            ether_balance: Memo::new(Selector::EtherBalance.name()),
            token_balance: Memo::new(Selector::TokenBalance.name()),
            exchange_ether_balance: Memo::new(Selector::ExchangeEtherBalance.name()),
            exchange_token_balance: Memo::new(Selector::ExchangeTokenBalance.name()),
        }
    }

    /// Create from the `[display]` config section
    pub fn from_config(config: &DisplayConfig) -> Result<Self> {
        Ok(Self::new(DisplaySettings::try_from(config)?))
    }

    /// Display settings in use
    pub fn settings(&self) -> &DisplaySettings {
        self.decorator.settings()
    }

    /// How many times a selector rebuilt its output
    pub fn recomputes(&self, selector: Selector) -> u64 {
        match selector {
            Selector::OpenOrders => self.open_orders.recomputes(),
            Selector::FilledOrders => self.filled_orders.recomputes(),
            Selector::OrderBook => self.order_book.recomputes(),
            Selector::MyFilledOrders => self.my_filled_orders.recomputes(),
            Selector::MyOpenOrders => self.my_open_orders.recomputes(),
            Selector::PriceChart => self.price_chart.recomputes(),
            Selector::EtherBalance => self.ether_balance.recomputes(),
            Selector::TokenBalance => self.token_balance.recomputes(),
            Selector::ExchangeEtherBalance => self.exchange_ether_balance.recomputes(),
            Selector::ExchangeTokenBalance => self.exchange_token_balance.recomputes(),
        }
    }

    /// Orders that are neither filled nor cancelled
    pub fn open_orders(&mut self, state: &AppState) -> Arc<Vec<Order>> {
        let exchange = &state.exchange;
        let key = (
            Arc::clone(&exchange.all_orders.data),
            Arc::clone(&exchange.filled_orders.data),
            Arc::clone(&exchange.cancelled_orders.data),
        );
        let result = self
            .open_orders
            .get_or_try_compute(key, |(all, filled, cancelled)| {
                Ok::<_, std::convert::Infallible>(open_orders(all, filled, cancelled))
            });
        match result {
            Ok(open) => open,
            Err(never) => match never {},
        }
    }

    /// Trade history, newest first
    pub fn filled_orders(&mut self, state: &AppState) -> Result<Arc<Vec<FilledOrder>>> {
        let decorator = &self.decorator;
        let key = Arc::clone(&state.exchange.filled_orders.data);
        self.filled_orders.get_or_try_compute(key, |fills| {
            let mut history = trade_history(decorator, fills)?;
            history.sort_by_key(|f| Reverse(f.order.timestamp()));
            Ok(history)
        })
    }

    /// Open orders bucketed into buys and sells
    pub fn order_book(&mut self, state: &AppState) -> Result<Arc<OrderBook>> {
        let open = self.open_orders(state);
        let decorator = &self.decorator;
        self.order_book
            .get_or_try_compute(open, |open| OrderBook::build(decorator, open))
    }

    /// Fills the connected account took part in, oldest first
    pub fn my_filled_orders(&mut self, state: &AppState) -> Result<Arc<Vec<MyFilledOrder>>> {
        let decorator = &self.decorator;
        let key = (state.account(), Arc::clone(&state.exchange.filled_orders.data));
        self.my_filled_orders
            .get_or_try_compute(key, |(account, fills)| match account {
                Some(account) => my_filled_orders(decorator, fills, account),
                None => Ok(Vec::new()),
            })
    }

    /// Open orders of the connected account, newest first
    pub fn my_open_orders(&mut self, state: &AppState) -> Result<Arc<Vec<MyOpenOrder>>> {
        let open = self.open_orders(state);
        let decorator = &self.decorator;
        self.my_open_orders
            .get_or_try_compute((state.account(), open), |(account, open)| match account {
                Some(account) => my_open_orders(decorator, open, account),
                None => Ok(Vec::new()),
            })
    }

    /// Candles and last-price summary
    pub fn price_chart(&mut self, state: &AppState) -> Result<Arc<PriceChart>> {
        let decorator = &self.decorator;
        let key = Arc::clone(&state.exchange.filled_orders.data);
        self.price_chart
            .get_or_try_compute(key, |fills| price_chart(decorator, fills))
    }

    /// Wallet ether balance
    pub fn ether_balance(&mut self, state: &AppState) -> Result<Arc<String>> {
        let settings = self.decorator.settings();
        balance(&mut self.ether_balance, state.web3.balance, settings)
    }

    /// Wallet token balance
    pub fn token_balance(&mut self, state: &AppState) -> Result<Arc<String>> {
        let settings = self.decorator.settings();
        balance(&mut self.token_balance, state.token.balance, settings)
    }

    /// Ether deposited on the exchange
    pub fn exchange_ether_balance(&mut self, state: &AppState) -> Result<Arc<String>> {
        let settings = self.decorator.settings();
        balance(
            &mut self.exchange_ether_balance,
            state.exchange.ether_balance,
            settings,
        )
    }

    /// Tokens deposited on the exchange
    pub fn exchange_token_balance(&mut self, state: &AppState) -> Result<Arc<String>> {
        let settings = self.decorator.settings();
        balance(
            &mut self.exchange_token_balance,
            state.exchange.token_balance,
            settings,
        )
    }

    /// All four balances
    pub fn balances(&mut self, state: &AppState) -> Result<Balances> {
        Ok(Balances {
            ether: self.ether_balance(state)?,
            token: self.token_balance(state)?,
            exchange_ether: self.exchange_ether_balance(state)?,
            exchange_token: self.exchange_token_balance(state)?,
        })
    }

    /// Draft from the buy form, once the token and both inputs are known
    pub fn buy_order_draft(&self, state: &AppState) -> Result<Option<OrderDraft>> {
        self.draft(state, &state.exchange.buy_order, OrderType::Buy)
    }

    /// Draft from the sell form, once the token and both inputs are known
    pub fn sell_order_draft(&self, state: &AppState) -> Result<Option<OrderDraft>> {
        self.draft(state, &state.exchange.sell_order, OrderType::Sell)
    }

    fn draft(
        &self,
        state: &AppState,
        form: &OrderForm,
        order_type: OrderType,
    ) -> Result<Option<OrderDraft>> {
        let (Some(token), Some(amount), Some(price)) =
            (state.token.address, form.amount.as_deref(), form.price.as_deref())
        else {
            return Ok(None);
        };

        let settings = self.decorator.settings();
        let draft = match order_type {
            OrderType::Buy => OrderDraft::buy(token, amount, price, settings)?,
            OrderType::Sell => OrderDraft::sell(token, amount, price, settings)?,
        };
        Ok(Some(draft))
    }
}

fn balance(
    memo: &mut Memo<U256, String>,
    base_units: U256,
    settings: &DisplaySettings,
) -> Result<Arc<String>> {
    memo.get_or_try_compute(base_units, |units| {
        format_balance(*units, settings.token_decimals, settings.balance_precision)
    })
}

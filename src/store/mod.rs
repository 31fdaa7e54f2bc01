//! Application state and the memoized selectors that read it

mod events;
mod memo;
mod selectors;
mod state;

pub use events::ExchangeEvent;
pub use memo::Memo;
pub use selectors::{Balances, Selector, Selectors};
pub use state::{AppState, ExchangeState, Loadable, OrderForm, TokenState, Web3State};

//! Draft command implementation

use crate::config::DisplayConfig;
use crate::format::DisplaySettings;
use crate::model::{Address, OrderDraft};
use clap::{Args, ValueEnum};

/// Direction of the drafted order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DraftSide {
    Buy,
    Sell,
}

#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Buy or sell
    #[arg(value_enum)]
    pub side: DraftSide,

    /// Token contract address
    #[arg(long)]
    pub token: Address,

    /// Token amount in display units
    #[arg(long)]
    pub amount: String,

    /// Price in ether per token
    #[arg(long)]
    pub price: String,
}

impl DraftArgs {
    pub fn execute(&self, config: &DisplayConfig) -> anyhow::Result<()> {
        let draft = self.draft(config)?;
        println!("{}", serde_json::to_string_pretty(&draft)?);
        Ok(())
    }

    pub fn draft(&self, config: &DisplayConfig) -> anyhow::Result<OrderDraft> {
        let settings = DisplaySettings::try_from(config)?;
        let draft = match self.side {
            DraftSide::Buy => OrderDraft::buy(self.token, &self.amount, &self.price, &settings)?,
            DraftSide::Sell => OrderDraft::sell(self.token, &self.amount, &self.price, &settings)?,
        };
        tracing::info!(
            side = ?self.side,
            amount_get = %draft.amount_get,
            amount_give = %draft.amount_give,
            "Order drafted"
        );
        Ok(draft)
    }
}

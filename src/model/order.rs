//! Raw order and fill records

use super::{Address, ModelError, OrderType, Result, U256};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DeserializeAs, DisplayFromStr};
use std::fmt::Display;
use std::str::FromStr;

/// An order or fill record decoded from a contract event
///
/// Amounts are integer base units. `user_fill` is only present on fill
/// records, where `timestamp` is the time of the fill.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub id: u64,
    pub user: Address,
    pub token_get: Address,
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub amount_get: U256,
    pub token_give: Address,
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub amount_give: U256,
    /// Unix seconds
    #[serde_as(serialize_as = "DisplayFromStr", deserialize_as = "NumberOrString")]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_fill: Option<Address>,
}

impl Order {
    /// Direction as stored: giving ether means buying tokens
    pub fn order_type(&self, ether: &Address) -> OrderType {
        if self.token_give == *ether {
            OrderType::Buy
        } else {
            OrderType::Sell
        }
    }

    /// Base-unit amounts as `(ether, token)`
    pub fn sides(&self, ether: &Address) -> (U256, U256) {
        if self.token_give == *ether {
            (self.amount_give, self.amount_get)
        } else {
            (self.amount_get, self.amount_give)
        }
    }

    /// Check whether `account` took part in this record
    pub fn involves(&self, account: &Address) -> bool {
        self.user == *account || self.user_fill.as_ref() == Some(account)
    }

    /// Reject records that cannot be priced against ether
    pub fn validate(&self, ether: &Address) -> Result<()> {
        let malformed = |reason| ModelError::MalformedOrder {
            id: self.id,
            reason,
        };

        if self.token_get == self.token_give {
            return Err(malformed("both sides trade the same token"));
        }
        if self.token_get != *ether && self.token_give != *ether {
            return Err(malformed("neither side is ether"));
        }
        if self.timestamp < 0 {
            return Err(ModelError::InvalidTimestamp(self.timestamp));
        }
        Ok(())
    }

    /// Reject fill records that lost their filler
    pub fn validate_fill(&self, ether: &Address) -> Result<()> {
        self.validate(ether)?;
        if self.user_fill.is_none() {
            return Err(ModelError::MalformedOrder {
                id: self.id,
                reason: "fill record has no filler",
            });
        }
        Ok(())
    }
}

/// Reads an integer sent either as a JSON number or as a decimal string
///
/// web3 hands out uint256 values as strings while hand-written snapshots use
/// plain numbers. Numbers are read through `serde_json::Value`, whose
/// `arbitrary_precision` representation keeps every digit, so amounts above
/// `u64::MAX` survive intact.
pub struct NumberOrString;

impl<'de, T> DeserializeAs<'de, T> for NumberOrString
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let digits = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            other => {
                return Err(D::Error::custom(format!(
                    "expected an integer or a decimal string, found {}",
                    other
                )))
            }
        };
        digits.trim().parse().map_err(D::Error::custom)
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trade direction
///
/// The broker has no side field on orders; the side is carried by the sign of
/// the unit count. A long order sends `"1"`, a short order sends `"-1"`.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Buy the base currency
    #[default]
    Long,
    /// Sell the base currency
    Short,
}

impl Direction {
    /// Parses the sign convention: `""` or `"+"` is long, `"-"` is short
    pub fn from_sign(sign: &str) -> Result<Self, AppError> {
        match sign.trim() {
            "" | "+" => Ok(Direction::Long),
            "-" => Ok(Direction::Short),
            other => Err(AppError::InvalidInput(format!(
                "direction sign must be \"\", \"+\" or \"-\", got {other:?}"
            ))),
        }
    }

    /// Sign prefix used in the unit count
    #[must_use]
    pub fn sign(&self) -> &'static str {
        match self {
            Direction::Long => "",
            Direction::Short => "-",
        }
    }

    /// Signed unit count as the broker expects it, e.g. `"-1000"`
    #[must_use]
    pub fn signed_units(&self, units: u32) -> String {
        format!("{}{}", self.sign(), units)
    }
}

impl FromStr for Direction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(Direction::Long),
            "short" | "sell" => Ok(Direction::Short),
            other => Direction::from_sign(other),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Filled immediately at the current market price
    #[default]
    Market,
    /// Filled at the given price or better
    Limit,
    /// Filled once the market reaches the given price
    Stop,
    /// Closes a trade once the price moves against it
    StopLoss,
}

/// Order duration (time in force)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeInForce {
    /// Good until cancelled
    #[serde(rename = "GTC")]
    #[default]
    GoodTillCancelled,
    /// Good until a date
    #[serde(rename = "GTD")]
    GoodTillDate,
    /// Good for the trading day
    #[serde(rename = "GFD")]
    GoodForDay,
    /// Filled completely or cancelled
    #[serde(rename = "FOK")]
    FillOrKill,
    /// Filled partially or cancelled
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
}

/// How a filled order interacts with existing positions
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionFill {
    /// Account default (reduce first on non-hedging accounts)
    #[default]
    Default,
    /// Only open new trades
    OpenOnly,
    /// Reduce existing trades first, open with the remainder
    ReduceFirst,
    /// Only reduce existing trades
    ReduceOnly,
}

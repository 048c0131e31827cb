/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of `GET /v3/accounts/{accountID}/pricing`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct PricingResponse {
    /// One entry per requested instrument
    #[serde(default)]
    pub prices: Vec<ClientPrice>,
    /// Server time of the snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PricingResponse {
    /// Price entry for the given instrument, if the broker returned one
    #[must_use]
    pub fn price_for(&self, instrument: &str) -> Option<&ClientPrice> {
        self.prices.iter().find(|p| p.instrument == instrument)
    }
}

/// Current price of one instrument as seen by the account
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct ClientPrice {
    /// Instrument symbol
    pub instrument: String,
    /// Whether the instrument can be traded right now
    #[serde(default)]
    pub tradeable: bool,
    /// Time of the price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Bid side of the book
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    /// Ask side of the book
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
    /// Price a long position would be closed at
    #[serde(rename = "closeoutBid", default, skip_serializing_if = "Option::is_none")]
    pub closeout_bid: Option<String>,
    /// Price a short position would be closed at
    #[serde(rename = "closeoutAsk", default, skip_serializing_if = "Option::is_none")]
    pub closeout_ask: Option<String>,
}

impl ClientPrice {
    /// Best bid, parsed
    #[must_use]
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().and_then(|b| b.price.parse().ok())
    }

    /// Best ask, parsed
    #[must_use]
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().and_then(|a| a.price.parse().ok())
    }
}

/// Price level with the liquidity available at it
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct PriceBucket {
    /// Price as a decimal string
    pub price: String,
    /// Units available at this price
    #[serde(default)]
    pub liquidity: i64,
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    MARKET_ORDER_DONE_MESSAGE, MARKET_ORDER_FAILED_MESSAGE, MARKET_ORDER_WITHOUT_STOPLOSS,
    TRADE_CLOSED_MESSAGE,
};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether the configured instrument can be traded right now
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeableStatus {
    /// Instrument symbol
    pub instrument: String,
    /// Tradeable flag from the pricing snapshot
    pub tradeable: bool,
}

/// Raw response of `GET /v3/accounts/{accountID}/openTrades`
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct OpenTradesResponse {
    /// Open trades, untouched
    #[serde(default)]
    pub trades: Vec<Value>,
    /// Most recent transaction on the account
    #[serde(rename = "lastTransactionID")]
    pub last_transaction_id: String,
}

/// Open trades together with the last transaction ID
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenTrades {
    /// Open trades as returned by the broker
    pub positions: Vec<Value>,
    /// Most recent transaction on the account
    pub last_transaction_id: String,
}

impl From<OpenTradesResponse> for OpenTrades {
    fn from(response: OpenTradesResponse) -> Self {
        Self {
            positions: response.trades,
            last_transaction_id: response.last_transaction_id,
        }
    }
}

/// Outcome of a market order
///
/// Serializes without a tag, so each variant keeps the shape callers branch
/// on: `message`/`order`/`response`, `message`/`result` or `error`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OrderResult {
    /// The broker created the order
    Done {
        /// Human readable outcome
        message: String,
        /// The `orderCreateTransaction`
        order: Value,
        /// Full broker response
        response: Value,
    },
    /// The broker answered but did not create an order
    Failed {
        /// Human readable outcome
        message: String,
        /// Full broker response
        result: Value,
    },
    /// The order was refused locally and never sent
    Rejected {
        /// Reason the order was refused
        error: String,
    },
}

impl OrderResult {
    /// Classifies a broker response by its `orderCreateTransaction`
    #[must_use]
    pub fn from_response(response: Value) -> Self {
        let created = response
            .get("orderCreateTransaction")
            .filter(|tx| !is_empty_value(tx))
            .cloned();

        match created {
            Some(order) => OrderResult::Done {
                message: MARKET_ORDER_DONE_MESSAGE.to_string(),
                order,
                response,
            },
            None => OrderResult::Failed {
                message: MARKET_ORDER_FAILED_MESSAGE.to_string(),
                result: response,
            },
        }
    }

    /// Result for an order attempted without a stop-loss
    #[must_use]
    pub fn without_stoploss() -> Self {
        OrderResult::Rejected {
            error: MARKET_ORDER_WITHOUT_STOPLOSS.to_string(),
        }
    }

    /// True when the broker created the order
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, OrderResult::Done { .. })
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Outcome of closing a trade
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloseTradeResult {
    /// Human readable outcome
    pub message: String,
    /// Caller supplied reason
    pub reason: String,
    /// Full broker response
    pub response: Value,
}

impl CloseTradeResult {
    /// Wraps a close response with the caller's reason
    #[must_use]
    pub fn new(reason: &str, response: Value) -> Self {
        Self {
            message: TRADE_CLOSED_MESSAGE.to_string(),
            reason: reason.to_string(),
            response,
        }
    }
}

/// Oldest and newest transaction IDs in a time window
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionIdRange {
    /// Oldest ID
    pub from: String,
    /// Newest ID
    pub to: String,
}

impl TransactionIdRange {
    /// The range as a `(from, to)` pair
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.from, self.to)
    }
}

impl From<(u64, u64)> for TransactionIdRange {
    fn from((from, to): (u64, u64)) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

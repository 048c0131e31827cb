/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Transaction filter accepted by the transaction endpoints
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionFilter {
    /// Any order related transaction
    Order,
    /// Deposits and withdrawals
    Funding,
    /// Administrative transactions
    Admin,
    /// Market order creation
    MarketOrder,
    /// Stop-loss order creation
    StopLossOrder,
    /// Order fills
    OrderFill,
    /// Order cancellations
    OrderCancel,
    /// Daily financing charges
    DailyFinancing,
}

impl TransactionFilter {
    /// Wire name of the filter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionFilter::Order => "ORDER",
            TransactionFilter::Funding => "FUNDING",
            TransactionFilter::Admin => "ADMIN",
            TransactionFilter::MarketOrder => "MARKET_ORDER",
            TransactionFilter::StopLossOrder => "STOP_LOSS_ORDER",
            TransactionFilter::OrderFill => "ORDER_FILL",
            TransactionFilter::OrderCancel => "ORDER_CANCEL",
            TransactionFilter::DailyFinancing => "DAILY_FINANCING",
        }
    }

    /// Joins filters the way the broker expects them in a query string
    #[must_use]
    pub fn join(filters: &[TransactionFilter]) -> String {
        filters
            .iter()
            .map(TransactionFilter::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Response of `GET /v3/accounts/{accountID}/transactions`
///
/// The broker does not return transactions here, only the URLs of the
/// `idrange` pages that hold them.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct TransactionPages {
    /// Start of the requested time range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the requested time range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Page size the pages were split with
    #[serde(rename = "pageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Number of transactions in the range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// `idrange` URLs, one per page
    #[serde(default)]
    pub pages: Vec<String>,
    /// Most recent transaction on the account
    #[serde(
        rename = "lastTransactionID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_transaction_id: Option<String>,
}

impl TransactionPages {
    /// Smallest and largest transaction IDs referenced by the page URLs
    #[must_use]
    pub fn id_bounds(&self) -> Option<(u64, u64)> {
        let ids: Vec<u64> = self
            .pages
            .iter()
            .flat_map(|page| page_ids(page))
            .collect();
        let min = ids.iter().min()?;
        let max = ids.iter().max()?;
        Some((*min, *max))
    }
}

/// Reads the numeric `from` and `to` query parameters of an `idrange` URL
fn page_ids(url: &str) -> Vec<u64> {
    let Some((_, query)) = url.split_once('?') else {
        return Vec::new();
    };
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == "from" || *key == "to")
        .filter_map(|(_, value)| value.parse().ok())
        .collect()
}

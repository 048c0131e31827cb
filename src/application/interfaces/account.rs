use crate::error::AppError;
use crate::model::responses::{OpenTrades, TransactionIdRange};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for trades and transaction history
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets open trades and the last transaction ID
    async fn open_positions(&self) -> Result<OpenTrades, AppError>;

    /// Gets one page of order transactions between two IDs, both inclusive
    async fn fetch_transactions_once(&self, from_id: u64, to_id: u64) -> Result<Value, AppError>;

    /// Finds the oldest and newest transaction IDs between two timestamps
    ///
    /// # Arguments
    /// * `from_time` - Start of the window, RFC 3339
    /// * `to_time` - End of the window, RFC 3339
    async fn resolve_transaction_id_range(
        &self,
        from_time: &str,
        to_time: &str,
    ) -> Result<TransactionIdRange, AppError>;

    /// Gets the `count` most recent order transactions
    ///
    /// `count` is capped at one transaction page (1000 ids).
    async fn latest_transactions(&self, count: u64) -> Result<Vec<Value>, AppError>;
}

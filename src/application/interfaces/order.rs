use crate::error::AppError;
use crate::model::responses::{CloseTradeResult, OrderResult};
use crate::presentation::order::Direction;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Service for placing market orders and managing open trades
///
/// Orders that the broker answers but does not create, and orders refused
/// locally, come back as [`OrderResult`] values rather than errors.
pub trait OrderService: Send + Sync {
    /// Places a market order protected by a stop-loss
    ///
    /// Without a stop-loss price nothing is sent and [`OrderResult::Rejected`] is returned.
    async fn place_market_order(
        &self,
        direction: Direction,
        stoploss_price: Option<f64>,
    ) -> Result<OrderResult, AppError>;

    /// Moves the stop-loss of an open trade
    async fn set_trailing_stoploss(
        &self,
        trade_id: &str,
        stoploss_price: f64,
    ) -> Result<Value, AppError>;

    /// Closes an open trade
    async fn close_trade(&self, trade_id: &str, reason: &str)
    -> Result<CloseTradeResult, AppError>;
}

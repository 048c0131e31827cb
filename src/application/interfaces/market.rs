use crate::error::AppError;
use crate::model::responses::TradeableStatus;
use crate::presentation::candle::{Candle, Granularity};
use crate::presentation::price::PricingResponse;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Interface for pricing and candle data
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets the current pricing snapshot of the configured instrument
    async fn get_pricing(&self) -> Result<PricingResponse, AppError>;

    /// Tells whether the configured instrument can be traded right now
    async fn check_instrument_tradeable(&self) -> Result<TradeableStatus, AppError>;

    /// Gets candles of the configured instrument, untouched
    ///
    /// # Arguments
    /// * `granularity` - Candle bucket size
    /// * `count` - Number of most recent candles; takes precedence over the range
    /// * `start` - Start of the range (RFC 3339), required when `count` is `None`
    /// * `end` - End of the range (RFC 3339)
    ///
    /// # Returns
    /// * The raw candles response
    async fn query_candles(
        &self,
        granularity: Granularity,
        count: Option<u32>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Loads every candle between `start` and `end`, splitting the range into
    /// as many requests as the broker's per-request limit requires
    async fn load_candles_by_duration(
        &self,
        granularity: Granularity,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, AppError>;
}

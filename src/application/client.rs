/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the OANDA v20 REST API
//!
//! One [`Client`] is bound to one account, one instrument and one
//! environment. Each method performs a single broker operation.
//!
//! # Example
//! ```ignore
//! use oanda_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let candles = client.query_candles(Granularity::M5, Some(100), None, None).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::application::interfaces::order::OrderService;
use crate::constants::TRANSACTION_PAGE_SIZE;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    CandlesRequest, MarketOrderRequest, PricingQuery, TradeStopLossRequest,
    TransactionIdRangeQuery, TransactionListQuery,
};
use crate::model::responses::{
    CloseTradeResult, OpenTrades, OpenTradesResponse, OrderResult, TradeableStatus,
    TransactionIdRange,
};
use crate::presentation::candle::{Candle, CandlesResponse, Granularity};
use crate::presentation::order::Direction;
use crate::presentation::price::PricingResponse;
use crate::presentation::transaction::TransactionPages;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the OANDA v20 REST API
pub struct Client {
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client after validating the configuration
    ///
    /// # Arguments
    /// * `config` - Credentials, environment and instrument
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the configuration is incomplete or the transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let config = Arc::new(config);
        let http_client = HttpClient::new(config.clone())?;
        debug!(
            "Client created for {} on {:?}",
            config.instrument, config.environment
        );
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Instrument every call is bound to
    pub fn instrument(&self) -> &str {
        &self.config.instrument
    }

    fn account_path(&self, suffix: &str) -> String {
        format!(
            "accounts/{}/{}",
            self.config.credentials.account_id,
            suffix.trim_start_matches('/')
        )
    }
}

fn validate_stoploss_price(price: f64) -> Result<(), AppError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "stop-loss price must be a positive number, got {price}"
        )))
    }
}

#[async_trait]
impl MarketService for Client {
    async fn get_pricing(&self) -> Result<PricingResponse, AppError> {
        let path = self.account_path("pricing");
        let query = PricingQuery {
            instruments: &self.config.instrument,
        };
        debug!("Getting pricing for {}", self.config.instrument);
        self.http_client.get(&path, Some(&query)).await
    }

    async fn check_instrument_tradeable(&self) -> Result<TradeableStatus, AppError> {
        let pricing = self.get_pricing().await?;
        let price = pricing
            .price_for(&self.config.instrument)
            .ok_or(AppError::NotFound)?;

        info!(
            "Instrument {} tradeable: {}",
            self.config.instrument, price.tradeable
        );
        Ok(TradeableStatus {
            instrument: self.config.instrument.clone(),
            tradeable: price.tradeable,
        })
    }

    async fn query_candles(
        &self,
        granularity: Granularity,
        count: Option<u32>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Value, AppError> {
        let request = match (count, start) {
            (Some(count), _) => CandlesRequest::by_count(granularity, count),
            (None, Some(start)) => CandlesRequest::by_range(granularity, start, end),
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "either a candle count or a start time is required".to_string(),
                ));
            }
        };

        let path = format!("instruments/{}/candles", self.config.instrument);
        debug!("Querying candles: {}", request);
        self.http_client.get(&path, Some(&request)).await
    }

    async fn load_candles_by_duration(
        &self,
        granularity: Granularity,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, AppError> {
        let windows = granularity.windows(start, end);
        if windows.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "start {start} must be before end {end}"
            )));
        }

        info!(
            "Loading {} candles of {} in {} request(s)",
            granularity.as_str(),
            self.config.instrument,
            windows.len()
        );

        let mut candles: Vec<Candle> = Vec::new();
        for (from, to) in windows {
            let from = from.to_rfc3339_opts(SecondsFormat::Secs, true);
            let to = to.to_rfc3339_opts(SecondsFormat::Secs, true);
            let raw = self
                .query_candles(granularity, None, Some(from.as_str()), Some(to.as_str()))
                .await?;
            let batch: CandlesResponse = serde_json::from_value(raw)?;
            debug!("{} candles between {} and {}", batch.candles.len(), from, to);

            // Window edges are inclusive on the broker side
            for candle in batch.candles {
                if candles.last().is_none_or(|last| candle.time > last.time) {
                    candles.push(candle);
                }
            }
        }

        Ok(candles)
    }
}

#[async_trait]
impl AccountService for Client {
    async fn open_positions(&self) -> Result<OpenTrades, AppError> {
        let path = self.account_path("openTrades");
        let response: OpenTradesResponse = self.http_client.get(&path, None::<&()>).await?;
        let trades = OpenTrades::from(response);
        debug!("Open trades obtained: {} trades", trades.positions.len());
        Ok(trades)
    }

    async fn fetch_transactions_once(&self, from_id: u64, to_id: u64) -> Result<Value, AppError> {
        let path = self.account_path("transactions/idrange");
        let query = TransactionIdRangeQuery::orders(from_id, to_id);
        info!("Getting transactions {} to {}", from_id, to_id);
        self.http_client.get(&path, Some(&query)).await
    }

    async fn resolve_transaction_id_range(
        &self,
        from_time: &str,
        to_time: &str,
    ) -> Result<TransactionIdRange, AppError> {
        let path = self.account_path("transactions");
        let query = TransactionListQuery::new(from_time, to_time);
        let pages: TransactionPages = self.http_client.get(&path, Some(&query)).await?;

        let (from_id, to_id) = pages.id_bounds().ok_or_else(|| {
            warn!("No transactions between {} and {}", from_time, to_time);
            AppError::NotFound
        })?;
        debug!("Transaction ids between {} and {}: {}..{}", from_time, to_time, from_id, to_id);
        Ok(TransactionIdRange::from((from_id, to_id)))
    }

    async fn latest_transactions(&self, count: u64) -> Result<Vec<Value>, AppError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let last_id = self.open_positions().await?.last_transaction_id;
        let to_id: u64 = last_id.parse().map_err(|_| {
            AppError::InvalidInput(format!("unexpected lastTransactionID: {last_id}"))
        })?;
        if to_id == 0 {
            return Ok(Vec::new());
        }
        let count = count.min(u64::from(TRANSACTION_PAGE_SIZE));
        let from_id = to_id.saturating_sub(count - 1).max(1);

        let page = self.fetch_transactions_once(from_id, to_id).await?;
        let transactions = page
            .get("transactions")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Ok(transactions)
    }
}

#[async_trait]
impl OrderService for Client {
    async fn place_market_order(
        &self,
        direction: Direction,
        stoploss_price: Option<f64>,
    ) -> Result<OrderResult, AppError> {
        let Some(stoploss_price) = stoploss_price else {
            warn!("Market order refused: no stop-loss price");
            return Ok(OrderResult::without_stoploss());
        };
        validate_stoploss_price(stoploss_price)?;

        let request = MarketOrderRequest::new(
            &self.config.instrument,
            direction,
            self.config.units,
            stoploss_price,
        );
        let path = self.account_path("orders");
        info!("Placing market order: {}", request);

        let response: Value = self.http_client.post(&path, &request).await?;
        let result = OrderResult::from_response(response);
        if result.is_done() {
            info!("Market order created");
        } else {
            warn!("Market order was not created");
        }
        Ok(result)
    }

    async fn set_trailing_stoploss(
        &self,
        trade_id: &str,
        stoploss_price: f64,
    ) -> Result<Value, AppError> {
        validate_stoploss_price(stoploss_price)?;
        let status = self.check_instrument_tradeable().await?;
        if !status.tradeable {
            warn!(
                "{} is not tradeable, stop-loss update for trade {} may be rejected",
                status.instrument, trade_id
            );
        }

        let request = TradeStopLossRequest::new(stoploss_price);
        let path = self.account_path(&format!("trades/{trade_id}/orders"));
        info!("Moving stop-loss of trade {} to {}", trade_id, request.stop_loss.price);
        self.http_client.put(&path, Some(&request)).await
    }

    async fn close_trade(
        &self,
        trade_id: &str,
        reason: &str,
    ) -> Result<CloseTradeResult, AppError> {
        let path = self.account_path(&format!("trades/{trade_id}/close"));
        info!("Closing trade {}: {}", trade_id, reason);
        let response: Value = self.http_client.put(&path, None::<&()>).await?;
        Ok(CloseTradeResult::new(reason, response))
    }
}

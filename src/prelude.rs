/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # OANDA Client Prelude
//!
//! Brings the client, its service traits, the request and response models and
//! the usual external types into scope with a single import.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oanda_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the OANDA client
pub use crate::application::config::{Config, Credentials, Environment, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every broker operation
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::market::MarketService;
pub use crate::application::interfaces::order::OrderService;

/// HTTP transport
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    CandlesRequest, MarketOrderRequest, StopLossDetails, TradeStopLossRequest,
    format_stoploss_price,
};

/// Response models
pub use crate::model::responses::{
    CloseTradeResult, OpenTrades, OrderResult, TradeableStatus, TransactionIdRange,
};

/// Broker domain models
pub use crate::presentation::{
    Candle, CandleData, CandlesResponse, ClientPrice, Direction, Granularity, Ohlc, OrderType,
    PositionFill, PriceBucket, PricingResponse, TimeInForce, TransactionFilter, TransactionPages,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # OANDA Client
//!
//! A thin async client for the OANDA v20 REST API. It covers instrument pricing,
//! market orders with a stop-loss, trade management, transaction history and
//! candle retrieval for a single account and instrument.
//!
//! ## Example
//!
//! ```ignore
//! use oanda_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let status = client.check_instrument_tradeable().await?;
//! if status.tradeable {
//!     let result = client.place_market_order(Direction::Long, Some(109.512)).await?;
//!     info!("{}", result);
//! }
//! ```

/// Application layer: configuration, client and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport, request and response models
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Domain models returned by the broker
pub mod presentation;
/// Helpers for environment parsing and logging
pub mod utils;

/// Configuration re-export, so `oanda_client::config::Config` works as a short path
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

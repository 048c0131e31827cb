/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// User agent string used in HTTP requests to identify this client to the OANDA API
pub const USER_AGENT: &str = "oanda-client/0.1.0";
/// REST endpoint for fxTrade Practice accounts
pub const PRACTICE_REST_URL: &str = "https://api-fxpractice.oanda.com";
/// REST endpoint for fxTrade live accounts
pub const LIVE_REST_URL: &str = "https://api-fxtrade.oanda.com";
/// Instrument used when `OANDA_INSTRUMENT` is not set
pub const DEFAULT_INSTRUMENT: &str = "USD_JPY";
/// Units per market order when `OANDA_UNITS` is not set
pub const DEFAULT_UNITS: u32 = 1;
/// Default REST timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Page size used when listing transactions between two timestamps
pub const TRANSACTION_PAGE_SIZE: u32 = 1000;
/// Number of characters kept from a formatted stop-loss price
pub const STOPLOSS_PRICE_WIDTH: usize = 7;
/// Upper bound the broker accepts for a single candles request
pub const MAX_CANDLES_PER_REQUEST: i64 = 5000;
/// Candle alignment timezone sent with every candles request
pub const CANDLE_ALIGNMENT_TIMEZONE: &str = "Etc/GMT";
/// Hour of day used to align daily candles
pub const CANDLE_DAILY_ALIGNMENT: u8 = 0;
/// Price component requested for candles (mid)
pub const CANDLE_PRICE_COMPONENT: &str = "M";
/// Message attached to a successful market order
pub const MARKET_ORDER_DONE_MESSAGE: &str = "Market order is done !";
/// Message attached to a market order without a create transaction
pub const MARKET_ORDER_FAILED_MESSAGE: &str = "Market order is failed.";
/// Error returned when a market order is attempted without a stop-loss
pub const MARKET_ORDER_WITHOUT_STOPLOSS: &str =
    "[Client] It is restricted to execute market order without stoploss.";
/// Message attached to a closed trade
pub const TRADE_CLOSED_MESSAGE: &str = "[Client] Position is closed";

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    CANDLE_ALIGNMENT_TIMEZONE, CANDLE_DAILY_ALIGNMENT, CANDLE_PRICE_COMPONENT,
    STOPLOSS_PRICE_WIDTH, TRANSACTION_PAGE_SIZE,
};
use crate::presentation::candle::Granularity;
use crate::presentation::order::{Direction, OrderType, PositionFill, TimeInForce};
use crate::presentation::transaction::TransactionFilter;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Formats a stop-loss price the way it is sent to the broker
///
/// The price is rendered as its shortest decimal form, always with a
/// fractional part, then cut to [`STOPLOSS_PRICE_WIDTH`] characters.
/// `109.51234` becomes `"109.512"`, `110.0` becomes `"110.0"`.
#[must_use]
pub fn format_stoploss_price(price: f64) -> String {
    let mut text = price.to_string();
    if price.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text.chars().take(STOPLOSS_PRICE_WIDTH).collect()
}

/// Stop-loss attached to an order or a trade
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct StopLossDetails {
    /// How long the stop-loss stays active
    #[serde(rename = "timeInForce")]
    pub time_in_force: TimeInForce,
    /// Trigger price, already formatted
    pub price: String,
}

impl StopLossDetails {
    /// Good-till-cancelled stop-loss at the given price
    #[must_use]
    pub fn at(price: f64) -> Self {
        Self {
            time_in_force: TimeInForce::GoodTillCancelled,
            price: format_stoploss_price(price),
        }
    }
}

/// Body of `POST /v3/accounts/{accountID}/orders`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderRequest {
    /// The order to create
    pub order: MarketOrder,
}

/// Market order specification
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketOrder {
    /// Instrument to trade
    pub instrument: String,
    /// Signed unit count; negative for short
    pub units: String,
    /// Always `MARKET`
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Interaction with existing positions
    #[serde(rename = "positionFill")]
    pub position_fill: PositionFill,
    /// Stop-loss created on fill
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    pub stop_loss_on_fill: Option<StopLossDetails>,
}

impl MarketOrderRequest {
    /// Market order for `units` of `instrument` in `direction`, protected by a stop-loss
    #[must_use]
    pub fn new(instrument: &str, direction: Direction, units: u32, stoploss_price: f64) -> Self {
        Self {
            order: MarketOrder {
                instrument: instrument.to_string(),
                units: direction.signed_units(units),
                order_type: OrderType::Market,
                position_fill: PositionFill::Default,
                stop_loss_on_fill: Some(StopLossDetails::at(stoploss_price)),
            },
        }
    }
}

/// Body of `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/orders`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TradeStopLossRequest {
    /// Replacement stop-loss for the trade
    #[serde(rename = "stopLoss")]
    pub stop_loss: StopLossDetails,
}

impl TradeStopLossRequest {
    /// Moves the trade's stop-loss to `price`
    #[must_use]
    pub fn new(price: f64) -> Self {
        Self {
            stop_loss: StopLossDetails::at(price),
        }
    }
}

/// Query of `GET /v3/accounts/{accountID}/pricing`
#[derive(Debug, Clone, Serialize)]
pub struct PricingQuery<'a> {
    /// Comma separated instruments
    pub instruments: &'a str,
}

/// Query of `GET /v3/instruments/{instrument}/candles`
///
/// Either `count` or `from` is set, never both.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CandlesRequest {
    /// Candle bucket size
    pub granularity: Granularity,
    /// Number of most recent candles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Start of the range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Price component, mid only
    pub price: String,
    /// Timezone candles are aligned to
    #[serde(rename = "alignmentTimezone")]
    pub alignment_timezone: String,
    /// Hour of the day daily candles start at
    #[serde(rename = "dailyAlignment")]
    pub daily_alignment: u8,
}

impl CandlesRequest {
    fn base(granularity: Granularity) -> Self {
        Self {
            granularity,
            count: None,
            from: None,
            to: None,
            price: CANDLE_PRICE_COMPONENT.to_string(),
            alignment_timezone: CANDLE_ALIGNMENT_TIMEZONE.to_string(),
            daily_alignment: CANDLE_DAILY_ALIGNMENT,
        }
    }

    /// The `count` most recent candles
    #[must_use]
    pub fn by_count(granularity: Granularity, count: u32) -> Self {
        Self {
            count: Some(count),
            ..Self::base(granularity)
        }
    }

    /// Candles from `from`, up to `to` when given
    #[must_use]
    pub fn by_range(granularity: Granularity, from: &str, to: Option<&str>) -> Self {
        Self {
            from: Some(from.to_string()),
            to: to.map(str::to_string),
            ..Self::base(granularity)
        }
    }
}

/// Query of `GET /v3/accounts/{accountID}/transactions/idrange`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionIdRangeQuery {
    /// First transaction ID, inclusive
    pub from: u64,
    /// Last transaction ID, inclusive
    pub to: u64,
    /// Comma separated filters
    #[serde(rename = "type")]
    pub filter: String,
}

impl TransactionIdRangeQuery {
    /// Order transactions between two IDs
    #[must_use]
    pub fn orders(from: u64, to: u64) -> Self {
        Self {
            from,
            to,
            filter: TransactionFilter::join(&[TransactionFilter::Order]),
        }
    }
}

/// Query of `GET /v3/accounts/{accountID}/transactions`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TransactionListQuery<'a> {
    /// Start time, RFC 3339
    pub from: &'a str,
    /// End time, RFC 3339
    pub to: &'a str,
    /// Transactions per page
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl<'a> TransactionListQuery<'a> {
    /// Time range query with the fixed page size
    #[must_use]
    pub fn new(from: &'a str, to: &'a str) -> Self {
        Self {
            from,
            to,
            page_size: TRANSACTION_PAGE_SIZE,
        }
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::MAX_CANDLES_PER_REQUEST;
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Candle bucket size
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// 5 seconds
    S5,
    /// 10 seconds
    S10,
    /// 15 seconds
    S15,
    /// 30 seconds
    S30,
    /// 1 minute
    M1,
    /// 2 minutes
    M2,
    /// 4 minutes
    M4,
    /// 5 minutes
    M5,
    /// 10 minutes
    M10,
    /// 15 minutes
    M15,
    /// 30 minutes
    M30,
    /// 1 hour
    H1,
    /// 2 hours
    H2,
    /// 3 hours
    H3,
    /// 4 hours
    H4,
    /// 6 hours
    H6,
    /// 8 hours
    H8,
    /// 12 hours
    H12,
    /// 1 day
    #[serde(rename = "D")]
    Day,
    /// 1 week
    #[serde(rename = "W")]
    Week,
    /// 1 month
    #[serde(rename = "M")]
    Month,
}

impl Granularity {
    /// Wire name of the granularity
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::S5 => "S5",
            Granularity::S10 => "S10",
            Granularity::S15 => "S15",
            Granularity::S30 => "S30",
            Granularity::M1 => "M1",
            Granularity::M2 => "M2",
            Granularity::M4 => "M4",
            Granularity::M5 => "M5",
            Granularity::M10 => "M10",
            Granularity::M15 => "M15",
            Granularity::M30 => "M30",
            Granularity::H1 => "H1",
            Granularity::H2 => "H2",
            Granularity::H3 => "H3",
            Granularity::H4 => "H4",
            Granularity::H6 => "H6",
            Granularity::H8 => "H8",
            Granularity::H12 => "H12",
            Granularity::Day => "D",
            Granularity::Week => "W",
            Granularity::Month => "M",
        }
    }

    /// Nominal length of one candle in seconds; a month counts as 30 days
    #[must_use]
    pub fn seconds(&self) -> i64 {
        match self {
            Granularity::S5 => 5,
            Granularity::S10 => 10,
            Granularity::S15 => 15,
            Granularity::S30 => 30,
            Granularity::M1 => 60,
            Granularity::M2 => 120,
            Granularity::M4 => 240,
            Granularity::M5 => 300,
            Granularity::M10 => 600,
            Granularity::M15 => 900,
            Granularity::M30 => 1_800,
            Granularity::H1 => 3_600,
            Granularity::H2 => 7_200,
            Granularity::H3 => 10_800,
            Granularity::H4 => 14_400,
            Granularity::H6 => 21_600,
            Granularity::H8 => 28_800,
            Granularity::H12 => 43_200,
            Granularity::Day => 86_400,
            Granularity::Week => 604_800,
            Granularity::Month => 2_592_000,
        }
    }

    /// Splits `[start, end]` into consecutive windows that each hold at most
    /// [`MAX_CANDLES_PER_REQUEST`] candles of this granularity
    ///
    /// Both edges of a window are inclusive, so neighbouring windows share
    /// their boundary candle.
    #[must_use]
    pub fn windows(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        let step = Duration::seconds(self.seconds() * (MAX_CANDLES_PER_REQUEST - 1));
        let mut windows = Vec::new();
        let mut cursor = start;
        while cursor < end {
            let next = (cursor + step).min(end);
            windows.push((cursor, next));
            cursor = next;
        }
        windows
    }
}

impl FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.trim().to_string()))
            .map_err(|_| AppError::InvalidInput(format!("unknown granularity: {s}")))
    }
}

/// Response of `GET /v3/instruments/{instrument}/candles`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, Default)]
pub struct CandlesResponse {
    /// Instrument the candles belong to
    #[serde(default)]
    pub instrument: String,
    /// Granularity as sent back by the broker
    #[serde(default)]
    pub granularity: String,
    /// Candles in ascending time order
    #[serde(default)]
    pub candles: Vec<Candle>,
}

/// One candle as returned by the broker
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    /// Start of the candle
    pub time: DateTime<Utc>,
    /// Number of prices created during the candle
    #[serde(default)]
    pub volume: u64,
    /// Whether the candle is closed
    #[serde(default)]
    pub complete: bool,
    /// Midpoint prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<CandleData>,
    /// Bid prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<CandleData>,
    /// Ask prices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<CandleData>,
}

impl Candle {
    /// Midpoint OHLC with parsed prices; `None` when mid prices were not requested
    #[must_use]
    pub fn mid_ohlc(&self) -> Option<Ohlc> {
        let mid = self.mid.as_ref()?;
        Some(Ohlc {
            time: self.time,
            open: mid.o.parse().ok()?,
            high: mid.h.parse().ok()?,
            low: mid.l.parse().ok()?,
            close: mid.c.parse().ok()?,
            volume: self.volume,
            complete: self.complete,
        })
    }
}

/// Open, high, low and close as decimal strings
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CandleData {
    /// Open
    pub o: String,
    /// High
    pub h: String,
    /// Low
    pub l: String,
    /// Close
    pub c: String,
}

/// Candle with numeric prices
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ohlc {
    /// Start of the candle
    pub time: DateTime<Utc>,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Tick volume
    pub volume: u64,
    /// Whether the candle is closed
    pub complete: bool,
}

use crate::common::fixture;
use oanda_client::presentation::candle::{CandlesResponse, Granularity};

#[test]
fn test_candles_fixture_parses() {
    let response: CandlesResponse = serde_json::from_value(fixture("candles.json")).unwrap();

    assert_eq!(response.instrument, "USD_JPY");
    assert_eq!(response.granularity, "M5");
    assert_eq!(response.candles.len(), 3);
    assert!(!response.candles[2].complete);
    assert!(response.candles[0].bid.is_none());
}

#[test]
fn test_candle_ohlc_values() {
    let response: CandlesResponse = serde_json::from_value(fixture("candles.json")).unwrap();
    let ohlc = response.candles[1].mid_ohlc().unwrap();

    assert_eq!(ohlc.open, 107.641);
    assert_eq!(ohlc.high, 107.66);
    assert_eq!(ohlc.low, 107.635);
    assert_eq!(ohlc.close, 107.651);
    assert_eq!(ohlc.volume, 74);
}

#[test]
fn test_granularity_seconds() {
    assert_eq!(Granularity::S5.seconds(), 5);
    assert_eq!(Granularity::M5.seconds(), 300);
    assert_eq!(Granularity::H4.seconds(), 14_400);
    assert_eq!(Granularity::Day.seconds(), 86_400);
    assert_eq!(Granularity::Week.seconds(), 7 * 86_400);
}

#[test]
fn test_granularity_parse_trims_input() {
    assert_eq!(" H1 ".parse::<Granularity>().unwrap(), Granularity::H1);
    assert!("hourly".parse::<Granularity>().is_err());
}

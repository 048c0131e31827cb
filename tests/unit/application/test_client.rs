use crate::common::{account_path, create_test_config, fixture, fixture_text};
use assert_json_diff::assert_json_eq;
use chrono::{Duration, TimeZone, Utc};
use mockito::{Matcher, Server};
use oanda_client::application::client::Client;
use oanda_client::application::interfaces::account::AccountService;
use oanda_client::application::interfaces::market::MarketService;
use oanda_client::error::AppError;
use oanda_client::presentation::candle::Granularity;
use serde_json::json;

fn client_for(server: &Server) -> Client {
    Client::new(create_test_config(&server.url())).expect("valid test config")
}

#[tokio::test]
async fn check_instrument_tradeable_reads_pricing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("pricing").as_str())
        .match_query(Matcher::UrlEncoded(
            "instruments".into(),
            "USD_JPY".into(),
        ))
        .match_header("authorization", "Bearer test_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("pricing_info.json"))
        .create_async()
        .await;

    let status = client_for(&server)
        .check_instrument_tradeable()
        .await
        .expect("pricing should succeed");

    assert_json_eq!(
        serde_json::to_value(&status).unwrap(),
        json!({"instrument": "USD_JPY", "tradeable": true})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn get_pricing_returns_book_for_instrument() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("pricing").as_str())
        .match_query(Matcher::UrlEncoded(
            "instruments".into(),
            "USD_JPY".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("pricing_info.json"))
        .create_async()
        .await;

    let pricing = client_for(&server).get_pricing().await.unwrap();

    let price = pricing.price_for("USD_JPY").expect("USD_JPY price");
    assert!(price.tradeable);
    assert_eq!(price.best_bid(), Some(109.528));
    assert_eq!(price.best_ask(), Some(109.532));
    assert_eq!(price.closeout_ask.as_deref(), Some("109.533"));
    mock.assert_async().await;
}

#[tokio::test]
async fn check_instrument_tradeable_without_matching_price_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", account_path("pricing").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"prices": [], "time": "2020-04-22T08:04:25.316046853Z"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .check_instrument_tradeable()
        .await
        .expect_err("no price for the instrument");
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn pricing_errors_propagate() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", account_path("pricing").as_str())
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"errorMessage": "Insufficient authorization to perform request."}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .check_instrument_tradeable()
        .await
        .expect_err("401 must surface");
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn open_positions_extracts_trades_and_last_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("openTrades").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("open_trades.json"))
        .create_async()
        .await;

    let trades = client_for(&server).open_positions().await.unwrap();

    assert!(trades.positions[0].is_object());
    assert_eq!(trades.positions[0]["id"], "6395");
    assert_eq!(trades.last_transaction_id, "6397");
    assert!(trades.last_transaction_id.parse::<u64>().is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_transactions_once_requests_order_type_range() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("transactions/idrange").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "1".into()),
            Matcher::UrlEncoded("to".into(), "5".into()),
            Matcher::UrlEncoded("type".into(), "ORDER".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("transactions_idrange.json"))
        .create_async()
        .await;

    let page = client_for(&server).fetch_transactions_once(1, 5).await.unwrap();

    assert_json_eq!(page, fixture("transactions_idrange.json"));
    mock.assert_async().await;
}

#[tokio::test]
async fn resolve_transaction_id_range_returns_min_and_max() {
    let from = "2020-04-20T00:00:00.123456789Z";
    let to = "2020-04-22T00:00:00.123456789Z";

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", account_path("transactions").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), from.into()),
            Matcher::UrlEncoded("to".into(), to.into()),
            Matcher::UrlEncoded("pageSize".into(), "1000".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("transaction_pages.json"))
        .create_async()
        .await;

    let range = client_for(&server)
        .resolve_transaction_id_range(from, to)
        .await
        .unwrap();

    assert_eq!(range.into_pair(), ("2".to_string(), "400".to_string()));
    mock.assert_async().await;
}

#[tokio::test]
async fn resolve_transaction_id_range_without_pages_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", account_path("transactions").as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count": 0, "pages": [], "pageSize": 1000}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .resolve_transaction_id_range("a", "b")
        .await
        .expect_err("empty window");
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn latest_transactions_counts_back_from_last_id() {
    let mut server = Server::new_async().await;
    let trades = server
        .mock("GET", account_path("openTrades").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("open_trades.json"))
        .create_async()
        .await;
    let page = server
        .mock("GET", account_path("transactions/idrange").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "6393".into()),
            Matcher::UrlEncoded("to".into(), "6397".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("transactions_idrange.json"))
        .create_async()
        .await;

    let transactions = client_for(&server).latest_transactions(5).await.unwrap();

    assert_eq!(transactions.len(), 3);
    assert_eq!(transactions[0]["id"], "2");
    trades.assert_async().await;
    page.assert_async().await;
}

#[tokio::test]
async fn latest_transactions_caps_count_at_page_size() {
    let mut server = Server::new_async().await;
    let _trades = server
        .mock("GET", account_path("openTrades").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("open_trades.json"))
        .create_async()
        .await;
    let page = server
        .mock("GET", account_path("transactions/idrange").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "5398".into()),
            Matcher::UrlEncoded("to".into(), "6397".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("transactions_idrange.json"))
        .create_async()
        .await;

    let transactions = client_for(&server).latest_transactions(50_000).await.unwrap();

    assert_eq!(transactions.len(), 3);
    page.assert_async().await;
}

#[tokio::test]
async fn query_candles_by_count_sends_count_only() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/instruments/USD_JPY/candles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("granularity".into(), "M5".into()),
            Matcher::UrlEncoded("count".into(), "399".into()),
            Matcher::UrlEncoded("alignmentTimezone".into(), "Etc/GMT".into()),
            Matcher::UrlEncoded("dailyAlignment".into(), "0".into()),
            Matcher::UrlEncoded("price".into(), "M".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("candles.json"))
        .create_async()
        .await;
    let with_range = server
        .mock("GET", "/v3/instruments/USD_JPY/candles")
        .match_query(Matcher::Regex("(^|&)(from|to)=".into()))
        .expect(0)
        .create_async()
        .await;

    let candles = client_for(&server)
        .query_candles(Granularity::M5, Some(399), None, None)
        .await
        .unwrap();

    assert_json_eq!(candles, fixture("candles.json"));
    mock.assert_async().await;
    with_range.assert_async().await;
}

#[tokio::test]
async fn query_candles_by_range_sends_from_and_to_only() {
    let start = "2020-04-22T00:00:00.123456789Z";
    let end = "2020-04-22T12:34:56.123456789Z";

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/instruments/USD_JPY/candles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("granularity".into(), "M5".into()),
            Matcher::UrlEncoded("from".into(), start.into()),
            Matcher::UrlEncoded("to".into(), end.into()),
            Matcher::UrlEncoded("alignmentTimezone".into(), "Etc/GMT".into()),
            Matcher::UrlEncoded("dailyAlignment".into(), "0".into()),
            Matcher::UrlEncoded("price".into(), "M".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("candles.json"))
        .create_async()
        .await;
    let with_count = server
        .mock("GET", "/v3/instruments/USD_JPY/candles")
        .match_query(Matcher::Regex("(^|&)count=".into()))
        .expect(0)
        .create_async()
        .await;

    let candles = client_for(&server)
        .query_candles(Granularity::M5, None, Some(start), Some(end))
        .await
        .unwrap();

    assert_json_eq!(candles, fixture("candles.json"));
    mock.assert_async().await;
    with_count.assert_async().await;
}

#[tokio::test]
async fn query_candles_without_count_or_start_is_invalid() {
    let server = Server::new_async().await;
    let err = client_for(&server)
        .query_candles(Granularity::M5, None, None, None)
        .await
        .expect_err("nothing to query");
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn load_candles_by_duration_single_window() {
    let start = Utc.with_ymd_and_hms(2020, 4, 22, 0, 0, 0).unwrap();
    let end = start + Duration::minutes(15);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/instruments/USD_JPY/candles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2020-04-22T00:00:00Z".into()),
            Matcher::UrlEncoded("to".into(), "2020-04-22T00:15:00Z".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("candles.json"))
        .create_async()
        .await;

    let candles = client_for(&server)
        .load_candles_by_duration(Granularity::M5, start, end)
        .await
        .unwrap();

    assert_eq!(candles.len(), 3);
    assert!(candles.windows(2).all(|w| w[0].time < w[1].time));
    assert_eq!(candles[0].mid_ohlc().unwrap().close, 107.64);
    mock.assert_async().await;
}

#[tokio::test]
async fn load_candles_by_duration_splits_and_drops_overlap() {
    let start = Utc.with_ymd_and_hms(2020, 4, 22, 0, 0, 0).unwrap();
    // S5 windows span 24_995 seconds, so eight hours need two requests
    let end = start + Duration::hours(8);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v3/instruments/USD_JPY/candles")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture_text("candles.json"))
        .expect(2)
        .create_async()
        .await;

    let candles = client_for(&server)
        .load_candles_by_duration(Granularity::S5, start, end)
        .await
        .unwrap();

    // Both windows returned the same candles; duplicates are skipped
    assert_eq!(candles.len(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn load_candles_by_duration_rejects_empty_range() {
    let server = Server::new_async().await;
    let t = Utc.with_ymd_and_hms(2020, 4, 22, 0, 0, 0).unwrap();
    let err = client_for(&server)
        .load_candles_by_duration(Granularity::M5, t, t)
        .await
        .expect_err("empty range");
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn client_new_rejects_incomplete_config() {
    let mut config = create_test_config("http://127.0.0.1:1");
    config.credentials.access_token = String::new();
    assert!(matches!(Client::new(config), Err(AppError::Config(_))));
}

#[test]
fn client_exposes_its_instrument() {
    let client = Client::new(create_test_config("http://127.0.0.1:1")).unwrap();
    assert_eq!(client.instrument(), "USD_JPY");
    assert_eq!(client.config().units, 1);
}

use chrono::Duration;
use oanda_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new())?;

    let latest = client
        .query_candles(Granularity::M5, Some(12), None, None)
        .await?;
    info!("Latest candles: {}", serde_json::to_string_pretty(&latest)?);

    let end = Utc::now();
    let start = end - Duration::days(30);
    let candles = client
        .load_candles_by_duration(Granularity::M5, start, end)
        .await?;
    info!("Loaded {} candles over the last 30 days", candles.len());

    if let Some(last) = candles.last().and_then(Candle::mid_ohlc) {
        info!("Last candle: {}", last);
    }

    Ok(())
}

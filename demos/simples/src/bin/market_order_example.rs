use oanda_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::for_instrument("USD_JPY", Environment::Practice))?;

    let pricing = client.get_pricing().await?;
    let Some(price) = pricing.price_for(client.instrument()) else {
        warn!("No price for {}", client.instrument());
        return Ok(());
    };
    if !price.tradeable {
        warn!("{} is not tradeable right now", client.instrument());
        return Ok(());
    }

    let bid = price.best_bid().ok_or("empty bid side")?;
    let stoploss = bid - 0.5;

    match client.place_market_order(Direction::Long, Some(stoploss)).await? {
        OrderResult::Done { order, .. } => {
            info!("Order created: {}", order);
            let trades = client.open_positions().await?;
            if let Some(trade_id) = trades
                .positions
                .first()
                .and_then(|t| t.get("id"))
                .and_then(Value::as_str)
            {
                let moved = client.set_trailing_stoploss(trade_id, bid - 0.3).await?;
                info!("Stop-loss moved: {}", moved);
                let closed = client.close_trade(trade_id, "demo finished").await?;
                info!("{}", closed);
            }
        }
        OrderResult::Failed { message, result } => warn!("{}: {}", message, result),
        OrderResult::Rejected { error } => warn!("{}", error),
    }

    let range = client
        .resolve_transaction_id_range("2024-01-01T00:00:00Z", &Utc::now().to_rfc3339())
        .await?;
    info!("Transactions this year: {} .. {}", range.from, range.to);

    Ok(())
}

use oanda_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting simple client example");
    let client = Client::new(Config::new())?;
    info!("Client created for {}", client.instrument());

    let status = client.check_instrument_tradeable().await?;
    info!("Tradeable status: {}", status);

    let trades = client.open_positions().await?;
    info!(
        "{} open trade(s), last transaction {}",
        trades.positions.len(),
        trades.last_transaction_id
    );

    Ok(())
}

/// Account service interface: trades and transactions
pub mod account;
/// Market service interface: pricing and candles
pub mod market;
/// Order service interface: orders, stop-losses and closing
pub mod order;

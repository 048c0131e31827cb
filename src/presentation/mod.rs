/// Candle models and granularities
pub mod candle;
/// Order placement models
pub mod order;
/// Pricing models
pub mod price;
/// Transaction history models
pub mod transaction;

pub use candle::*;
pub use order::*;
pub use price::*;
pub use transaction::*;

//! Value types exchanged between the trading view and the curve engine.
//!
//! All types use validated constructors, so a value that exists is a value
//! the engine can quote.

mod decimal_places;
mod price;
mod trade_estimate;
mod trade_request;
mod trade_side;

pub use decimal_places::DecimalPlaces;
pub use price::Price;
pub use trade_estimate::TradeEstimate;
pub use trade_request::TradeRequest;
pub use trade_side::TradeSide;

pub(crate) use trade_request::validate_amount;

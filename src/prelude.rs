//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use tokenforge_curve::prelude::*;
//! ```

pub use crate::config::{CurveConfig, SellPricing};
pub use crate::curve::{
    estimate_currency_for_tokens, estimate_tokens_for_currency, quote, BondingCurve,
};
pub use crate::domain::{Price, TradeEstimate, TradeRequest, TradeSide};
pub use crate::error::{CurveError, Result};
pub use crate::session::{Identity, MockWalletSession};
pub use crate::traits::{FromConfig, IdentityProvider, TradeQuoter};

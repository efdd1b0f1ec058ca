//! Quote seam between a trading view and a pricing engine.
//!
//! [`TradeQuoter`] is what the trading view depends on: hand it a
//! [`TradeRequest`], get back a [`TradeEstimate`].  Quoting is read-only;
//! implementations hold no mutable state, so a quoter can be shared across
//! threads freely.

use crate::domain::{Price, TradeEstimate, TradeRequest};
use crate::error::CurveError;

/// Produces non-binding trade estimates.
///
/// # Implementors
///
/// - `BondingCurve` — geometric bonding curve
///
/// # Errors
///
/// - [`CurveError::InvalidAmount`] — the request cannot be quoted.
/// - [`CurveError::Overflow`] — an intermediate value left the finite range.
pub trait TradeQuoter {
    /// Quotes `request` in its own direction.
    ///
    /// A zero-sized request yields a zero estimate, never an error.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn quote(&self, request: &TradeRequest) -> Result<TradeEstimate, CurveError>;

    /// Returns the marginal price of the next unit bought, in currency
    /// per token.
    #[must_use]
    fn spot_price(&self) -> Price;
}

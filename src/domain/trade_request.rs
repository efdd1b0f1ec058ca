//! A single requested trade: a direction and an input amount.

use core::fmt;

use serde::Serialize;

use super::TradeSide;
use crate::error::{CurveError, Result};

/// A validated trade request.
///
/// The amount is denominated in the side's input asset: base currency for
/// a [`Buy`](TradeSide::Buy), tokens for a [`Sell`](TradeSide::Sell).
///
/// # Invariants
///
/// The amount is finite and `>= 0`.  A zero amount is valid and quotes to
/// a zero estimate.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::domain::{TradeRequest, TradeSide};
///
/// let req = TradeRequest::buy(1.0).expect("valid amount");
/// assert_eq!(req.side(), TradeSide::Buy);
/// assert!(TradeRequest::sell(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeRequest {
    side: TradeSide,
    amount: f64,
}

impl TradeRequest {
    /// Creates a trade request after validating the amount.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidAmount`] if `amount` is negative, NaN,
    /// or infinite.
    pub fn new(side: TradeSide, amount: f64) -> Result<Self> {
        validate_amount(amount)?;
        Ok(Self { side, amount })
    }

    /// Shorthand for a buy spending `currency_in`.
    ///
    /// # Errors
    ///
    /// See [`TradeRequest::new`].
    pub fn buy(currency_in: f64) -> Result<Self> {
        Self::new(TradeSide::Buy, currency_in)
    }

    /// Shorthand for a sell of `tokens_in`.
    ///
    /// # Errors
    ///
    /// See [`TradeRequest::new`].
    pub fn sell(tokens_in: f64) -> Result<Self> {
        Self::new(TradeSide::Sell, tokens_in)
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn side(&self) -> TradeSide {
        self.side
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns `true` if the input amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

impl fmt::Display for TradeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} {})", self.side, self.amount, self.side.input_asset())
    }
}

/// Rejects amounts a quote cannot start from.
///
/// # Errors
///
/// Returns [`CurveError::InvalidAmount`] if `amount` is NaN, infinite, or
/// negative.
pub(crate) fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(CurveError::InvalidAmount("amount must be finite"));
    }
    if amount < 0.0 {
        return Err(CurveError::InvalidAmount("amount must be non-negative"));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn buy_valid() {
        let Ok(req) = TradeRequest::buy(1.5) else {
            panic!("expected Ok");
        };
        assert_eq!(req.side(), TradeSide::Buy);
        assert!((req.amount() - 1.5).abs() < f64::EPSILON);
        assert!(!req.is_zero());
    }

    #[test]
    fn sell_zero_is_valid() {
        let Ok(req) = TradeRequest::sell(0.0) else {
            panic!("expected Ok");
        };
        assert!(req.is_zero());
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(
            TradeRequest::buy(-0.01),
            Err(CurveError::InvalidAmount("amount must be non-negative"))
        ));
    }

    #[test]
    fn non_finite_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                TradeRequest::sell(bad),
                Err(CurveError::InvalidAmount("amount must be finite"))
            ));
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        let Ok(req) = TradeRequest::buy(-0.0) else {
            panic!("expected Ok");
        };
        assert!(req.is_zero());
    }

    #[test]
    fn display() {
        let Ok(req) = TradeRequest::sell(100.0) else {
            panic!("expected Ok");
        };
        assert_eq!(req.to_string(), "Sell(100 tokens)");
    }
}

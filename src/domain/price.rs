//! Currency-per-token (or token-per-currency) ratio.

use core::fmt;

use crate::error::{CurveError, Result};

/// A finite, non-negative exchange ratio.
///
/// Used for marginal curve prices (currency per token), implied quote
/// rates, and average execution prices.  The unit depends on where the
/// value came from and is documented at each producer.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::domain::Price;
///
/// let price = Price::new(22.0155);
/// assert!(price.is_ok());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidAmount`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(CurveError::InvalidAmount(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes `numerator / denominator`.
    ///
    /// Returns [`None`] when the ratio is undefined: a zero denominator or
    /// a non-finite / negative quotient.
    #[must_use]
    pub fn ratio(numerator: f64, denominator: f64) -> Option<Self> {
        if denominator == 0.0 {
            return None;
        }
        Self::new(numerator / denominator).ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

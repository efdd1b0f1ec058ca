//! Output precision, expressed as a count of decimal places.

use crate::error::{CurveError, Result};

/// Largest number of decimal places an `f64` can meaningfully carry.
const MAX_PLACES: u8 = 15;

/// Number of decimal places a quote is truncated to.
///
/// Valid range is `0..=15`; beyond that an `f64` no longer has the
/// significant digits to make the truncation observable.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::domain::DecimalPlaces;
///
/// let dp = DecimalPlaces::new(2).expect("2 is valid");
/// assert_eq!(dp.get(), 2);
/// assert!(DecimalPlaces::new(16).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalPlaces(u8);

impl DecimalPlaces {
    /// Precision of token quantities returned by a buy quote.
    pub const TOKENS: Self = Self(2);

    /// Precision of currency proceeds returned by a sell quote.
    pub const CURRENCY: Self = Self(6);

    /// Display precision of a buy rate (tokens per currency unit).
    pub const BUY_RATE: Self = Self(6);

    /// Display precision of a sell rate (currency per token).
    pub const SELL_RATE: Self = Self(8);

    /// Creates a new `DecimalPlaces` after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Configuration`] if `places` exceeds 15.
    pub const fn new(places: u8) -> Result<Self> {
        if places > MAX_PLACES {
            return Err(CurveError::Configuration("decimal places must be 0..=15"));
        }
        Ok(Self(places))
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^places` as `f64`.
    #[must_use]
    pub fn factor(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_quote_policy() {
        assert_eq!(DecimalPlaces::TOKENS.get(), 2);
        assert_eq!(DecimalPlaces::CURRENCY.get(), 6);
        assert_eq!(DecimalPlaces::BUY_RATE.get(), 6);
        assert_eq!(DecimalPlaces::SELL_RATE.get(), 8);
    }

    #[test]
    fn upper_bound_accepted() {
        let Ok(d) = DecimalPlaces::new(15) else {
            panic!("expected Ok");
        };
        assert_eq!(d.get(), 15);
    }

    #[test]
    fn above_upper_bound_rejected() {
        assert!(DecimalPlaces::new(16).is_err());
    }

    #[test]
    fn factor_is_power_of_ten() {
        assert!((DecimalPlaces::TOKENS.factor() - 100.0).abs() < f64::EPSILON);
        assert!((DecimalPlaces::CURRENCY.factor() - 1_000_000.0).abs() < f64::EPSILON);
        let Ok(zero) = DecimalPlaces::new(0) else {
            panic!("expected Ok");
        };
        assert!((zero.factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ordering() {
        assert!(DecimalPlaces::TOKENS < DecimalPlaces::CURRENCY);
    }
}

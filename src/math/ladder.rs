//! Geometric price-ladder helpers.
//!
//! The curve prices the unit at supply `s` as `base · g^s`.  These helpers
//! evaluate single rungs of that ladder and the closed-form area under it;
//! the walk itself lives in [`curve`](crate::curve).

use super::checked::{checked_div, checked_mul, checked_powf};
use crate::error::{CurveError, Result};

/// Price of the unit at supply `supply`: `base_price · growth_factor^supply`.
///
/// `supply` may be negative (a sell walking below the anchor); the result
/// is then smaller than `base_price`.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the price is not finite.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::math::price_at_supply;
///
/// let p = price_at_supply(0.001, 2.0, 3.0).expect("finite");
/// assert!((p - 0.008).abs() < 1e-15);
/// ```
pub fn price_at_supply(base_price: f64, growth_factor: f64, supply: f64) -> Result<f64> {
    let scale = checked_powf(growth_factor, supply)?;
    checked_mul(base_price, scale)
}

/// Area under the continuous ladder between `anchor_supply - width` and
/// `anchor_supply`, given the price at the anchor:
///
/// ```text
/// ∫ base · g^s ds  over [S0 − w, S0]  =  anchor_price · (1 − g^(−w)) / ln g
/// ```
///
/// Evaluated with `exp_m1` so that narrow widths on a flat curve keep their
/// significant digits.
///
/// # Errors
///
/// - [`CurveError::Configuration`] if `growth_factor <= 1`.
/// - [`CurveError::Overflow`] if the result is not finite.
pub fn integral_below_anchor(anchor_price: f64, growth_factor: f64, width: f64) -> Result<f64> {
    if growth_factor <= 1.0 {
        return Err(CurveError::Configuration("growth factor must exceed 1"));
    }
    if width <= 0.0 {
        return Ok(0.0);
    }
    let ln_growth = growth_factor.ln();
    let fraction = -(-width * ln_growth).exp_m1();
    let area = checked_mul(anchor_price, fraction)?;
    checked_div(area, ln_growth)
}

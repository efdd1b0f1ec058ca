//! Truncation of quote outputs to a fixed number of decimal places.
//!
//! # Convention
//!
//! Quote outputs are always **floored**: the estimate never promises more
//! than the curve would deliver.
//!
//! | Quantity | Precision |
//! |----------|-----------|
//! | Tokens out (buy) | [`DecimalPlaces::TOKENS`] |
//! | Currency out (sell) | [`DecimalPlaces::CURRENCY`] |
//!
//! The truncation is `floor(value · 10^places) / 10^places` in `f64`.  A
//! value whose scaled form lands a hair under an integer because of binary
//! representation (`0.29 · 100 = 28.999…`) is floored to the lower step.
//!
//! Values at or above `2^53 / 10^places` carry no fractional digits at the
//! requested precision and are returned unchanged, so scaling never
//! overflows near the top of the `f64` range.
//!
//! # Examples
//!
//! ```
//! use tokenforge_curve::domain::DecimalPlaces;
//! use tokenforge_curve::math::floor_to_places;
//!
//! assert_eq!(floor_to_places(1.239, DecimalPlaces::TOKENS), 1.23);
//! assert_eq!(floor_to_places(0.0, DecimalPlaces::CURRENCY), 0.0);
//! ```

use crate::domain::DecimalPlaces;

/// First power of two above which every `f64` is an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Floors a non-negative `value` to `places` decimal places.
///
/// Negative inputs are clamped to zero; a quote output is never negative.
#[must_use]
pub fn floor_to_places(value: f64, places: DecimalPlaces) -> f64 {
    if value <= 0.0 || value.is_nan() {
        return 0.0;
    }
    let factor = places.factor();
    if value >= EXACT_INTEGER_LIMIT / factor {
        return value;
    }
    (value * factor).floor() / factor
}

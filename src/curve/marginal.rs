//! Marginal prices along the curve.

use crate::config::CurveConfig;
use crate::domain::Price;
use crate::error::Result;
use crate::math::price_at_supply;

/// Price, in currency per token, of the unit at offset `k` above the
/// anchor: `base_price · growth_factor ^ (reference_supply + k)`.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`](crate::error::CurveError::Overflow) if
/// the price is not finite.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::config::CurveConfig;
/// use tokenforge_curve::curve::{marginal_price, spot_price};
///
/// let cfg = CurveConfig::reference();
/// let p0 = marginal_price(&cfg, 0).expect("finite");
/// let p1 = marginal_price(&cfg, 1).expect("finite");
/// assert_eq!(p0, spot_price(&cfg));
/// assert!(p1 > p0);
/// ```
pub fn marginal_price(config: &CurveConfig, k: u64) -> Result<Price> {
    if k == 0 {
        return Ok(spot_price(config));
    }
    #[allow(clippy::cast_precision_loss)]
    let supply = config.reference_supply() + k as f64;
    let raw = price_at_supply(config.base_price(), config.growth_factor(), supply)?;
    Price::new(raw)
}

/// Marginal price of the next unit bought at the anchor (`k = 0`).
#[must_use]
pub fn spot_price(config: &CurveConfig) -> Price {
    config.anchor_price()
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn offset_zero_is_anchor() {
        let cfg = CurveConfig::reference();
        let Ok(p) = marginal_price(&cfg, 0) else {
            panic!("expected Ok");
        };
        assert!((p.get() - 22.015_456_048_527_955).abs() < 1e-9);
    }

    #[test]
    fn each_unit_multiplies_by_growth_factor() {
        let Ok(cfg) = CurveConfig::new(1.0, 2.0, 3.0) else {
            panic!("expected Ok");
        };
        let Ok(p4) = marginal_price(&cfg, 4) else {
            panic!("expected Ok");
        };
        assert!((p4.get() - 128.0).abs() < 1e-12);
    }

    #[test]
    fn prices_strictly_increase() {
        let cfg = CurveConfig::reference();
        let mut last = spot_price(&cfg);
        for k in 1..50 {
            let Ok(p) = marginal_price(&cfg, k) else {
                panic!("expected Ok");
            };
            assert!(p > last, "price at k={k} did not increase");
            last = p;
        }
    }

    #[test]
    fn far_offset_overflows() {
        let Ok(cfg) = CurveConfig::new(1.0, 2.0, 0.0) else {
            panic!("expected Ok");
        };
        assert!(marginal_price(&cfg, 2_000).is_err());
    }
}

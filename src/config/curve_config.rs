//! Configuration for a geometric bonding curve.

use serde::{Deserialize, Serialize};

use super::SellPricing;
use crate::domain::Price;
use crate::error::{CurveError, Result};
use crate::math::price_at_supply;

/// Default ceiling on whole units a single buy may walk.
pub const DEFAULT_MAX_UNITS_PER_CALL: u32 = 10_000;

/// Immutable parameters of a geometric bonding curve.
///
/// The marginal price of the unit at offset `k` above the anchor is
///
/// ```text
/// price(k) = base_price · growth_factor ^ (reference_supply + k)
/// ```
///
/// # Validation
///
/// - `base_price` is finite and `> 0`.
/// - `growth_factor` is finite and `> 1`.
/// - `reference_supply` is finite and `>= 0`.
/// - `max_units_per_call` is at least 1.
/// - The anchor price `price(0)` is finite.
///
/// A config that exists has passed all of these, so it can be shared
/// across any number of quotes without re-checking.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::config::CurveConfig;
///
/// let cfg = CurveConfig::new(0.001, 1.0001, 100_000.0).expect("valid curve");
/// assert_eq!(cfg.max_units_per_call(), 10_000);
/// assert!(CurveConfig::new(0.001, 1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurveConfig")]
pub struct CurveConfig {
    base_price: f64,
    growth_factor: f64,
    reference_supply: f64,
    max_units_per_call: u32,
    sell_pricing: SellPricing,
    #[serde(skip)]
    anchor_price: f64,
}

/// Pre-validated parameters behind [`CurveConfig::reference`].
const REFERENCE_CURVE: CurveConfig = CurveConfig {
    base_price: 0.001,
    growth_factor: 1.0001,
    reference_supply: 100_000.0,
    max_units_per_call: DEFAULT_MAX_UNITS_PER_CALL,
    sell_pricing: SellPricing::Continuous,
    // 0.001 · 1.0001^100000
    anchor_price: 22.015_456_048_527_955,
};

/// Unchecked mirror of [`CurveConfig`] used as the deserialization target.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCurveConfig {
    base_price: f64,
    growth_factor: f64,
    reference_supply: f64,
    #[serde(default = "default_max_units")]
    max_units_per_call: u32,
    #[serde(default)]
    sell_pricing: SellPricing,
}

const fn default_max_units() -> u32 {
    DEFAULT_MAX_UNITS_PER_CALL
}

impl TryFrom<RawCurveConfig> for CurveConfig {
    type Error = CurveError;

    fn try_from(raw: RawCurveConfig) -> Result<Self> {
        Self::build(
            raw.base_price,
            raw.growth_factor,
            raw.reference_supply,
            raw.max_units_per_call,
            raw.sell_pricing,
        )
    }
}

impl CurveConfig {
    /// Creates a curve with the default unit ceiling and sell policy.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Configuration`] if any invariant listed on
    /// [`CurveConfig`] is violated.
    pub fn new(base_price: f64, growth_factor: f64, reference_supply: f64) -> Result<Self> {
        Self::build(
            base_price,
            growth_factor,
            reference_supply,
            DEFAULT_MAX_UNITS_PER_CALL,
            SellPricing::default(),
        )
    }

    /// The demonstration curve: first unit at `0.001`, `+0.01 %` per unit,
    /// anchored at a circulating supply of `100 000`.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(0.001, 1.0001, 100_000.0).unwrap_or(REFERENCE_CURVE)
    }

    fn build(
        base_price: f64,
        growth_factor: f64,
        reference_supply: f64,
        max_units_per_call: u32,
        sell_pricing: SellPricing,
    ) -> Result<Self> {
        let mut config = Self {
            base_price,
            growth_factor,
            reference_supply,
            max_units_per_call,
            sell_pricing,
            anchor_price: 0.0,
        };
        config.anchor_price = config.validate()?;
        tracing::trace!(
            base_price,
            growth_factor,
            reference_supply,
            max_units_per_call,
            %sell_pricing,
            anchor_price = config.anchor_price,
            "curve configuration validated"
        );
        Ok(config)
    }

    /// Validates all configuration invariants and returns the anchor price.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Configuration`] naming the first violated
    /// invariant.
    pub fn validate(&self) -> Result<f64> {
        if !self.base_price.is_finite() || self.base_price <= 0.0 {
            return Err(CurveError::Configuration(
                "base price must be finite and positive",
            ));
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(CurveError::Configuration(
                "growth factor must be finite and greater than 1",
            ));
        }
        if !self.reference_supply.is_finite() || self.reference_supply < 0.0 {
            return Err(CurveError::Configuration(
                "reference supply must be finite and non-negative",
            ));
        }
        if self.max_units_per_call == 0 {
            return Err(CurveError::Configuration(
                "max units per call must be at least 1",
            ));
        }
        price_at_supply(self.base_price, self.growth_factor, self.reference_supply)
            .map_err(|_| CurveError::Configuration("anchor price is not finite"))
    }

    /// Returns a copy with a different per-call unit ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Configuration`] if `max_units` is zero.
    pub fn with_max_units_per_call(self, max_units: u32) -> Result<Self> {
        Self::build(
            self.base_price,
            self.growth_factor,
            self.reference_supply,
            max_units,
            self.sell_pricing,
        )
    }

    /// Returns a copy using a different sell-side policy.
    #[must_use]
    pub const fn with_sell_pricing(mut self, sell_pricing: SellPricing) -> Self {
        self.sell_pricing = sell_pricing;
        self
    }

    /// Returns a copy re-anchored at `reference_supply`.
    ///
    /// The engine keeps no supply state; a caller that wants to follow the
    /// curve after a simulated trade re-anchors its config with this.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Configuration`] if the new supply is negative,
    /// not finite, or pushes the anchor price out of the finite range.
    pub fn with_reference_supply(self, reference_supply: f64) -> Result<Self> {
        Self::build(
            self.base_price,
            self.growth_factor,
            reference_supply,
            self.max_units_per_call,
            self.sell_pricing,
        )
    }

    /// Returns the price of the very first unit on the curve.
    #[must_use]
    pub const fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the per-unit multiplicative price increase.
    #[must_use]
    pub const fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Returns the circulating-supply anchor.
    #[must_use]
    pub const fn reference_supply(&self) -> f64 {
        self.reference_supply
    }

    /// Returns the ceiling on whole units one call may walk.
    #[must_use]
    pub const fn max_units_per_call(&self) -> u32 {
        self.max_units_per_call
    }

    /// Returns the sell-side policy.
    #[must_use]
    pub const fn sell_pricing(&self) -> SellPricing {
        self.sell_pricing
    }

    /// Returns the marginal price at the anchor (`price(0)`), in currency
    /// per token.
    #[must_use]
    pub fn anchor_price(&self) -> Price {
        Price::new(self.anchor_price).unwrap_or(Price::ZERO)
    }

    pub(crate) const fn anchor_price_raw(&self) -> f64 {
        self.anchor_price
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let Ok(cfg) = CurveConfig::new(0.001, 1.0001, 100_000.0) else {
            panic!("expected Ok");
        };
        assert!((cfg.base_price() - 0.001).abs() < f64::EPSILON);
        assert!((cfg.growth_factor() - 1.0001).abs() < f64::EPSILON);
        assert!((cfg.reference_supply() - 100_000.0).abs() < f64::EPSILON);
        assert_eq!(cfg.max_units_per_call(), DEFAULT_MAX_UNITS_PER_CALL);
        assert_eq!(cfg.sell_pricing(), SellPricing::Continuous);
    }

    #[test]
    fn reference_matches_validated_build() {
        let Ok(built) = CurveConfig::new(0.001, 1.0001, 100_000.0) else {
            panic!("expected Ok");
        };
        assert_eq!(CurveConfig::reference(), built);
        assert!((built.anchor_price().get() - 22.015_456_048_527_955).abs() < 1e-9);
    }

    #[test]
    fn reference_fallback_passes_validation() {
        let Ok(anchor) = REFERENCE_CURVE.validate() else {
            panic!("expected Ok");
        };
        assert!((anchor - REFERENCE_CURVE.anchor_price_raw()).abs() < 1e-12);
        let reference = CurveConfig::reference();
        assert_eq!(reference.max_units_per_call(), REFERENCE_CURVE.max_units_per_call());
        assert_eq!(reference.sell_pricing(), REFERENCE_CURVE.sell_pricing());
        assert!((reference.anchor_price_raw() - anchor).abs() < 1e-12);
    }

    #[test]
    fn zero_supply_is_valid() {
        let Ok(cfg) = CurveConfig::new(2.0, 1.5, 0.0) else {
            panic!("expected Ok");
        };
        assert!((cfg.anchor_price().get() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn growth_factor_of_one_rejected() {
        assert!(matches!(
            CurveConfig::new(0.001, 1.0, 0.0),
            Err(CurveError::Configuration(_))
        ));
    }

    #[test]
    fn shrinking_curve_rejected() {
        assert!(CurveConfig::new(0.001, 0.99, 0.0).is_err());
    }

    #[test]
    fn non_positive_base_price_rejected() {
        assert!(CurveConfig::new(0.0, 1.1, 0.0).is_err());
        assert!(CurveConfig::new(-0.001, 1.1, 0.0).is_err());
    }

    #[test]
    fn negative_supply_rejected() {
        assert!(CurveConfig::new(0.001, 1.1, -1.0).is_err());
    }

    #[test]
    fn non_finite_parameters_rejected() {
        assert!(CurveConfig::new(f64::NAN, 1.1, 0.0).is_err());
        assert!(CurveConfig::new(0.001, f64::INFINITY, 0.0).is_err());
        assert!(CurveConfig::new(0.001, 1.1, f64::INFINITY).is_err());
    }

    #[test]
    fn overflowing_anchor_rejected() {
        assert!(matches!(
            CurveConfig::new(1.0, 2.0, 5_000.0),
            Err(CurveError::Configuration("anchor price is not finite"))
        ));
    }

    #[test]
    fn zero_ceiling_rejected() {
        let cfg = CurveConfig::reference();
        assert!(cfg.with_max_units_per_call(0).is_err());
        let Ok(cfg) = cfg.with_max_units_per_call(5) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.max_units_per_call(), 5);
    }

    #[test]
    fn re_anchoring_moves_the_price() {
        let cfg = CurveConfig::reference();
        let Ok(later) = cfg.with_reference_supply(100_010.0) else {
            panic!("expected Ok");
        };
        assert!(later.anchor_price() > cfg.anchor_price());
        assert!(cfg.with_reference_supply(-5.0).is_err());
    }

    #[test]
    fn sell_pricing_override() {
        let cfg = CurveConfig::reference().with_sell_pricing(SellPricing::UnitSteps);
        assert_eq!(cfg.sell_pricing(), SellPricing::UnitSteps);
    }
}

//! Curve configuration.
//!
//! [`CurveConfig`] is the validated, immutable description of a bonding
//! curve; [`SellPricing`] selects how the sell side integrates fractional
//! amounts.  Configurations can be built in code or loaded from TOML.

mod curve_config;
mod loader;
mod sell_pricing;

pub use curve_config::{CurveConfig, DEFAULT_MAX_UNITS_PER_CALL};
pub use sell_pricing::SellPricing;

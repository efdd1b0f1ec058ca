//! How the sell side prices a token amount.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Integration policy for [`estimate_currency_for_tokens`](crate::curve::estimate_currency_for_tokens).
///
/// Both policies price the tokens on the stretch of curve just below the
/// anchor, `[S0 − tokens_in, S0]`.  They differ in how a fractional amount
/// is handled.
///
/// | Policy | Fractional input | Monotonic | Cost |
/// |--------|------------------|-----------|------|
/// | [`Continuous`](SellPricing::Continuous) | exact area under the curve | yes | O(1) |
/// | [`UnitSteps`](SellPricing::UnitSteps) | iterates `ceil(tokens_in)` whole steps | whole amounts only | O(n) |
///
/// `UnitSteps` is the legacy step-by-step walk, kept bit for bit: each
/// iteration books one full unit price and decrements the remaining count
/// by exactly one, even when less than one unit remains.  Selling `100.5`
/// therefore books 101 prices starting from `S0 − 100.5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellPricing {
    /// Closed-form integral of the price curve.
    #[default]
    Continuous,
    /// Literal per-unit walk, bounded by the per-call unit ceiling.
    UnitSteps,
}

impl SellPricing {
    /// Returns `true` for [`SellPricing::Continuous`].
    #[must_use]
    pub const fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous)
    }
}

impl fmt::Display for SellPricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous => write!(f, "continuous"),
            Self::UnitSteps => write!(f, "unit_steps"),
        }
    }
}

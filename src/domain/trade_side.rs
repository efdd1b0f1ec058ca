//! Direction of a trade against the curve.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which way a trade moves along the curve.
///
/// | Side | Input | Output |
/// |------|-------|--------|
/// | [`Buy`](TradeSide::Buy) | base currency | tokens |
/// | [`Sell`](TradeSide::Sell) | tokens | base currency |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    /// Spend base currency, receive tokens.
    Buy,
    /// Spend tokens, receive base currency.
    Sell,
}

impl TradeSide {
    /// Returns `true` for [`TradeSide::Buy`].
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns `true` for [`TradeSide::Sell`].
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Name of the asset the caller hands in.
    #[must_use]
    pub const fn input_asset(&self) -> &'static str {
        match self {
            Self::Buy => "currency",
            Self::Sell => "tokens",
        }
    }

    /// Name of the asset the caller receives.
    #[must_use]
    pub const fn output_asset(&self) -> &'static str {
        self.opposite().input_asset()
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

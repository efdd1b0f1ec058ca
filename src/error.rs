//! Unified error types for the bonding-curve engine.
//!
//! Every fallible operation in the crate returns [`CurveError`], so callers
//! (typically a trading view) can reject bad input with a single match.
//!
//! | Variant | Raised | Meaning |
//! |---------|--------|---------|
//! | [`InvalidAmount`](CurveError::InvalidAmount) | per call | negative, NaN, infinite, or over the unit ceiling |
//! | [`Configuration`](CurveError::Configuration) | at construction | curve parameters violate an invariant |
//! | [`Overflow`](CurveError::Overflow) | per call | an intermediate value left the finite `f64` range |
//! | [`ConfigParse`](CurveError::ConfigParse) | at load | TOML text could not be decoded |
//! | [`Io`](CurveError::Io) | at load | configuration file could not be read |

use thiserror::Error;

/// Error returned by configuration, quoting, and session operations.
#[derive(Error, Debug)]
pub enum CurveError {
    /// The trade amount is negative, not finite, or exceeds the
    /// per-call iteration ceiling.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The curve configuration violates one of its invariants.
    #[error("invalid curve configuration: {0}")]
    Configuration(&'static str),

    /// An intermediate result overflowed to a non-finite value.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// The configuration text is not valid TOML for a [`CurveConfig`](crate::config::CurveConfig).
    #[error("failed to parse curve configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read curve configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A session operation was given an unusable identity.
    #[error("invalid identity: {0}")]
    InvalidIdentity(&'static str),
}

impl CurveError {
    /// Returns `true` if the error was caused by the caller's trade amount.
    #[must_use]
    pub const fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Returns `true` if the error stems from the curve configuration,
    /// whether built in code or loaded from a file.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::ConfigParse(_) | Self::Io(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, CurveError>;

//! Generic construction trait for building a quoter from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed value is guaranteed to quote
//! without re-checking its parameters.

use crate::error::CurveError;

/// Builds a value from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<CurveConfig> for BondingCurve`
///
/// # Errors
///
/// Returns [`CurveError::Configuration`] if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference because callers commonly
    /// keep it around to re-anchor later.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Configuration`] if any parameter is out of range.
    fn from_config(config: &C) -> Result<Self, CurveError>
    where
        Self: Sized;
}

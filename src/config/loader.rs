//! Loading curve configurations from TOML.
//!
//! ```toml
//! base_price = 0.001
//! growth_factor = 1.0001
//! reference_supply = 100000
//! # optional
//! max_units_per_call = 10000
//! sell_pricing = "continuous"   # or "unit_steps"
//! ```
//!
//! Files go through the same validation as [`CurveConfig::new`], so a
//! loaded config is as trustworthy as one built in code.

use std::path::Path;

use super::CurveConfig;
use crate::error::Result;

impl CurveConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ConfigParse`](crate::error::CurveError::ConfigParse)
    /// if the text is not valid TOML, has unknown or missing fields, or
    /// violates a curve invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenforge_curve::config::CurveConfig;
    ///
    /// let cfg = CurveConfig::from_toml_str(
    ///     "base_price = 0.001\ngrowth_factor = 1.0001\nreference_supply = 100000.0\n",
    /// )
    /// .expect("valid toml");
    /// assert_eq!(cfg, CurveConfig::reference());
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Io`](crate::error::CurveError::Io) if the file cannot be read.
    /// - Anything [`CurveConfig::from_toml_str`] returns.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading curve configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "rejected curve configuration");
            err
        })
    }
}

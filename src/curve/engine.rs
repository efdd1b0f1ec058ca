//! Geometric bonding curve quoter.

use super::{estimate_currency_for_tokens, estimate_tokens_for_currency, marginal_price};
use crate::config::CurveConfig;
use crate::domain::{Price, TradeEstimate, TradeRequest, TradeSide};
use crate::error::{CurveError, Result};
use crate::traits::{FromConfig, TradeQuoter};

/// Quotes `request` against `config`, dispatching on its direction.
///
/// # Errors
///
/// Propagates errors from [`estimate_tokens_for_currency`] or
/// [`estimate_currency_for_tokens`].
///
/// # Examples
///
/// ```
/// use tokenforge_curve::config::CurveConfig;
/// use tokenforge_curve::curve::quote;
/// use tokenforge_curve::domain::TradeRequest;
///
/// let cfg = CurveConfig::reference();
/// let req = TradeRequest::buy(0.0).expect("valid");
/// assert!(quote(&cfg, &req).expect("quoted").is_zero());
/// ```
pub fn quote(config: &CurveConfig, request: &TradeRequest) -> Result<TradeEstimate> {
    match request.side() {
        TradeSide::Buy => estimate_tokens_for_currency(config, request.amount()),
        TradeSide::Sell => estimate_currency_for_tokens(config, request.amount()),
    }
}

/// A bonding curve ready to quote.
///
/// Created from a [`CurveConfig`] via [`FromConfig`].  Holds nothing but
/// the validated configuration: every quote starts from the configured
/// anchor, and the caller re-anchors with [`BondingCurve::reanchored`]
/// if it wants to follow the supply.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::config::CurveConfig;
/// use tokenforge_curve::curve::BondingCurve;
/// use tokenforge_curve::domain::TradeRequest;
/// use tokenforge_curve::traits::{FromConfig, TradeQuoter};
///
/// let curve = BondingCurve::from_config(&CurveConfig::reference()).expect("valid");
/// let est = curve.quote(&TradeRequest::buy(100.0).expect("valid")).expect("quoted");
/// assert_eq!(est.amount_out(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondingCurve {
    config: CurveConfig,
}

impl FromConfig<CurveConfig> for BondingCurve {
    /// Creates a curve from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CurveConfig::validate`].
    fn from_config(config: &CurveConfig) -> core::result::Result<Self, CurveError> {
        config.validate()?;
        Ok(Self { config: *config })
    }
}

impl BondingCurve {
    /// Returns the configuration this curve quotes against.
    #[must_use]
    pub const fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Estimates the tokens `currency_in` buys.
    ///
    /// # Errors
    ///
    /// See [`estimate_tokens_for_currency`].
    pub fn buy(&self, currency_in: f64) -> Result<TradeEstimate> {
        estimate_tokens_for_currency(&self.config, currency_in)
    }

    /// Estimates the currency `tokens_in` sells for.
    ///
    /// # Errors
    ///
    /// See [`estimate_currency_for_tokens`].
    pub fn sell(&self, tokens_in: f64) -> Result<TradeEstimate> {
        estimate_currency_for_tokens(&self.config, tokens_in)
    }

    /// Price of the unit at offset `k` above the anchor.
    ///
    /// # Errors
    ///
    /// See [`marginal_price`].
    pub fn marginal_price(&self, k: u64) -> Result<Price> {
        marginal_price(&self.config, k)
    }

    /// Returns the curve the market would be on after `estimate` settled:
    /// anchored higher after a buy, lower after a sell.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Configuration`] if the new anchor is invalid.
    pub fn reanchored(&self, estimate: &TradeEstimate) -> Result<Self> {
        let supply = self.config.reference_supply();
        let next = match estimate.side() {
            TradeSide::Buy => supply + estimate.amount_out(),
            TradeSide::Sell => supply - estimate.amount_in(),
        };
        Ok(Self {
            config: self.config.with_reference_supply(next)?,
        })
    }
}

impl TradeQuoter for BondingCurve {
    fn quote(&self, request: &TradeRequest) -> core::result::Result<TradeEstimate, CurveError> {
        quote(&self.config, request)
    }

    fn spot_price(&self) -> Price {
        self.config.anchor_price()
    }
}

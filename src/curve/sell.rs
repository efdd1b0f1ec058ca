//! Sell direction: tokens in, currency out.

use crate::config::{CurveConfig, SellPricing};
use crate::domain::{validate_amount, DecimalPlaces, TradeEstimate, TradeSide};
use crate::error::{CurveError, Result};
use crate::math::{ensure_finite, floor_to_places, integral_below_anchor, price_at_supply};

/// Estimates the currency proceeds of selling `tokens_in` back to the curve.
///
/// The tokens are priced on the stretch of curve just below the anchor,
/// from effective supply `reference_supply − tokens_in` up to
/// `reference_supply`, using the config's [`SellPricing`] policy.  The
/// proceeds are floored to [`DecimalPlaces::CURRENCY`].
///
/// # Asymmetry with buys
///
/// A buy walks *up* from the anchor while a sell walks *down* from it, so
/// the two are not inverses: selling `n` tokens and spending the proceeds
/// on a buy at the same anchor returns fewer than `n` tokens.
///
/// # Errors
///
/// - [`CurveError::InvalidAmount`] if `tokens_in` is negative, NaN, or
///   infinite, or if a [`SellPricing::UnitSteps`] walk would need more
///   iterations than [`max_units_per_call`](CurveConfig::max_units_per_call).
/// - [`CurveError::Overflow`] if the proceeds are not finite.  A valid
///   config whose anchor price sits near `f64::MAX` can hit this on a
///   large sell, since the area under the curve exceeds the anchor price
///   by up to `1 / ln g`.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::config::CurveConfig;
/// use tokenforge_curve::curve::estimate_currency_for_tokens;
///
/// let cfg = CurveConfig::reference();
/// let est = estimate_currency_for_tokens(&cfg, 100.0).expect("valid amount");
/// assert_eq!(est.amount_out(), 2190.575024);
/// ```
pub fn estimate_currency_for_tokens(config: &CurveConfig, tokens_in: f64) -> Result<TradeEstimate> {
    validate_amount(tokens_in)?;
    if tokens_in == 0.0 {
        return Ok(TradeEstimate::zero(TradeSide::Sell));
    }

    let proceeds = match config.sell_pricing() {
        SellPricing::Continuous => continuous_proceeds(config, tokens_in)?,
        SellPricing::UnitSteps => unit_step_proceeds(config, tokens_in)?,
    };
    let currency = floor_to_places(proceeds, DecimalPlaces::CURRENCY);

    let estimate = TradeEstimate::new(TradeSide::Sell, tokens_in, currency, tokens_in, false)?;
    tracing::debug!(
        tokens_in,
        currency,
        pricing = %config.sell_pricing(),
        "sell quoted"
    );
    Ok(estimate)
}

fn continuous_proceeds(config: &CurveConfig, tokens_in: f64) -> Result<f64> {
    integral_below_anchor(config.anchor_price_raw(), config.growth_factor(), tokens_in)
}

/// One full price step per iteration, decrementing the remaining count by
/// exactly one even when less than a unit is left.
fn unit_step_proceeds(config: &CurveConfig, tokens_in: f64) -> Result<f64> {
    if tokens_in.ceil() > f64::from(config.max_units_per_call()) {
        return Err(CurveError::InvalidAmount(
            "sell amount exceeds the per-call unit ceiling",
        ));
    }

    let growth = config.growth_factor();
    let mut price = price_at_supply(
        config.base_price(),
        growth,
        config.reference_supply() - tokens_in,
    )?;
    let mut proceeds = 0.0;
    let mut remaining = tokens_in;

    while remaining > 0.0 {
        proceeds += price;
        remaining -= 1.0;
        price *= growth;
    }

    ensure_finite(proceeds, "sell proceeds overflow")
}

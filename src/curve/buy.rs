//! Buy direction: currency in, whole tokens out.

use crate::config::CurveConfig;
use crate::domain::{validate_amount, DecimalPlaces, TradeEstimate, TradeSide};
use crate::error::Result;
use crate::math::{checked_add, floor_to_places};

/// Estimates how many tokens `currency_in` buys at the curve's anchor.
///
/// Walks the price ladder upward from `k = 0`, buying one whole unit at a
/// time while the remaining balance covers the next marginal price.  The
/// walk stops when the balance runs short or after
/// [`max_units_per_call`](CurveConfig::max_units_per_call) units, whichever
/// comes first.  The token count is floored to
/// [`DecimalPlaces::TOKENS`].
///
/// The estimate never spends more than `currency_in` and never returns
/// fractional units; the leftover is reported by
/// [`TradeEstimate::unspent`].
///
/// # Errors
///
/// - [`CurveError::InvalidAmount`](crate::error::CurveError::InvalidAmount)
///   if `currency_in` is negative, NaN, or infinite.
/// - [`CurveError::Overflow`](crate::error::CurveError::Overflow) if the
///   running spend leaves the finite range.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::config::CurveConfig;
/// use tokenforge_curve::curve::estimate_tokens_for_currency;
///
/// let cfg = CurveConfig::reference();
/// let est = estimate_tokens_for_currency(&cfg, 100.0).expect("valid amount");
/// assert_eq!(est.amount_out(), 4.0);
/// assert!(est.unspent() > 0.0);
/// ```
pub fn estimate_tokens_for_currency(config: &CurveConfig, currency_in: f64) -> Result<TradeEstimate> {
    validate_amount(currency_in)?;
    if currency_in == 0.0 {
        return Ok(TradeEstimate::zero(TradeSide::Buy));
    }

    let growth = config.growth_factor();
    let ceiling = config.max_units_per_call();
    let mut price = config.anchor_price_raw();
    let mut remaining = currency_in;
    // Tracked on its own: for a huge budget `remaining -= price` is a no-op.
    let mut spent = 0.0;
    let mut units: u32 = 0;

    while remaining > 0.0 && units < ceiling {
        if remaining < price {
            break;
        }
        remaining -= price;
        spent = checked_add(spent, price)?;
        units += 1;
        price *= growth;
    }

    let ceiling_reached = units == ceiling && remaining >= price;
    if ceiling_reached {
        tracing::warn!(
            currency_in,
            ceiling,
            unspent = remaining,
            "buy truncated at the per-call unit ceiling"
        );
    }

    let tokens = floor_to_places(f64::from(units), DecimalPlaces::TOKENS);
    let estimate = TradeEstimate::new(
        TradeSide::Buy,
        currency_in,
        tokens,
        spent.min(currency_in),
        ceiling_reached,
    )?;
    tracing::debug!(currency_in, tokens, spent = estimate.consumed(), "buy quoted");
    Ok(estimate)
}

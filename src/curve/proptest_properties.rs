//! Property-based tests using `proptest` for curve invariants.
//!
//! 1. **Zero in, zero out** — both directions, any valid curve.
//! 2. **Well-formed outputs** — non-negative and finite.
//! 3. **Monotonicity** — more input never yields less output.
//! 4. **Budget respected** — a buy never spends more than offered.
//! 5. **Ceiling respected** — a buy never exceeds `max_units_per_call`.
//! 6. **Round-trip loss** — selling `n` then buying back yields `< n`.
//! 7. **Average above spot** — multi-unit buys average above the anchor.
//! 8. **Bad input rejected** — negative amounts fail with `InvalidAmount`.

use proptest::prelude::*;

use super::{estimate_currency_for_tokens, estimate_tokens_for_currency};
use crate::config::{CurveConfig, SellPricing};
use crate::error::CurveError;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Curves whose anchor price stays in a sane range.
fn curve() -> impl Strategy<Value = CurveConfig> {
    (1e-4f64..10.0, 1.000_01f64..1.01, 0.0f64..5_000.0).prop_map(|(base, growth, supply)| {
        let Ok(cfg) = CurveConfig::new(base, growth, supply) else {
            panic!("strategy produced an invalid curve");
        };
        cfg
    })
}

fn pricing() -> impl Strategy<Value = SellPricing> {
    prop_oneof![Just(SellPricing::Continuous), Just(SellPricing::UnitSteps)]
}

fn buy_out(cfg: &CurveConfig, currency: f64) -> f64 {
    let Ok(e) = estimate_tokens_for_currency(cfg, currency) else {
        panic!("buy of {currency} failed");
    };
    e.amount_out()
}

fn sell_out(cfg: &CurveConfig, tokens: f64) -> f64 {
    let Ok(e) = estimate_currency_for_tokens(cfg, tokens) else {
        panic!("sell of {tokens} failed");
    };
    e.amount_out()
}

proptest! {
    // -- 1. Zero in, zero out ----------------------------------------------

    #[test]
    fn zero_in_zero_out(cfg in curve(), sp in pricing()) {
        let cfg = cfg.with_sell_pricing(sp);
        prop_assert!(buy_out(&cfg, 0.0) == 0.0);
        prop_assert!(sell_out(&cfg, 0.0) == 0.0);
    }

    // -- 2. Well-formed outputs --------------------------------------------

    #[test]
    fn outputs_are_finite_and_non_negative(
        cfg in curve(),
        currency in 0.0f64..1e6,
        tokens in 0.0f64..5_000.0,
    ) {
        let b = buy_out(&cfg, currency);
        let s = sell_out(&cfg, tokens);
        prop_assert!(b.is_finite() && b >= 0.0);
        prop_assert!(s.is_finite() && s >= 0.0);
    }

    // -- 3. Monotonicity ----------------------------------------------------

    #[test]
    fn buy_is_monotonic(cfg in curve(), a in 0.0f64..1e4, b in 0.0f64..1e4) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(buy_out(&cfg, lo) <= buy_out(&cfg, hi));
    }

    #[test]
    fn continuous_sell_is_monotonic(cfg in curve(), a in 0.0f64..5_000.0, b in 0.0f64..5_000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sell_out(&cfg, lo) <= sell_out(&cfg, hi));
    }

    #[test]
    fn unit_step_sell_is_monotonic_on_whole_units(cfg in curve(), a in 0u32..2_000, b in 0u32..2_000) {
        let cfg = cfg.with_sell_pricing(SellPricing::UnitSteps);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sell_out(&cfg, f64::from(lo)) <= sell_out(&cfg, f64::from(hi)));
    }

    // -- 4. Budget respected ------------------------------------------------

    #[test]
    fn buy_never_overspends(cfg in curve(), currency in 0.0f64..1e6) {
        let Ok(e) = estimate_tokens_for_currency(&cfg, currency) else {
            panic!("buy failed");
        };
        prop_assert!(e.consumed() <= currency);
        prop_assert!(e.unspent() >= 0.0);
    }

    // -- 5. Ceiling respected -----------------------------------------------

    #[test]
    fn buy_never_exceeds_ceiling(cfg in curve(), ceiling in 1u32..500, currency in 0.0f64..1e9) {
        let Ok(cfg) = cfg.with_max_units_per_call(ceiling) else {
            panic!("valid ceiling");
        };
        prop_assert!(buy_out(&cfg, currency) <= f64::from(ceiling));
    }

    // -- 6. Round-trip loss -------------------------------------------------

    #[test]
    fn sell_then_buy_returns_fewer_tokens(cfg in curve(), sp in pricing(), n in 1u32..500) {
        let cfg = cfg.with_sell_pricing(sp);
        let proceeds = sell_out(&cfg, f64::from(n));
        prop_assert!(buy_out(&cfg, proceeds) < f64::from(n));
    }

    // -- 7. Average above spot ----------------------------------------------

    #[test]
    fn multi_unit_buys_average_above_spot(cfg in curve(), currency in 0.0f64..1e5) {
        let Ok(e) = estimate_tokens_for_currency(&cfg, currency) else {
            panic!("buy failed");
        };
        if e.amount_out() >= 2.0 {
            let Some(avg) = e.average_unit_price() else {
                panic!("tokens bought but no average price");
            };
            prop_assert!(avg > cfg.anchor_price());
        }
    }

    // -- 8. Bad input rejected ----------------------------------------------

    #[test]
    fn negative_amounts_rejected(cfg in curve(), amount in -1e9f64..-1e-9) {
        prop_assert!(matches!(
            estimate_tokens_for_currency(&cfg, amount),
            Err(CurveError::InvalidAmount(_))
        ));
        prop_assert!(matches!(
            estimate_currency_for_tokens(&cfg, amount),
            Err(CurveError::InvalidAmount(_))
        ));
    }
}

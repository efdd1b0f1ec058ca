//! # TokenForge Curve
//!
//! Bonding-curve pricing engine: estimate how many tokens a currency
//! amount buys, and how much currency a token amount sells for, on a
//! geometric price ladder.
//!
//! Every quote is a pure function of an immutable [`CurveConfig`](config::CurveConfig)
//! and a single amount.  Nothing is settled, stored, or mutated; the
//! caller owns any notion of "after the trade".
//!
//! # Quick Start
//!
//! ```rust
//! use tokenforge_curve::config::CurveConfig;
//! use tokenforge_curve::curve::{estimate_currency_for_tokens, estimate_tokens_for_currency};
//!
//! // price(k) = 0.001 · 1.0001^(100000 + k)
//! let cfg = CurveConfig::new(0.001, 1.0001, 100_000.0).expect("valid curve");
//!
//! let buy = estimate_tokens_for_currency(&cfg, 100.0).expect("valid amount");
//! assert_eq!(buy.amount_out(), 4.0);
//!
//! let sell = estimate_currency_for_tokens(&cfg, 100.0).expect("valid amount");
//! assert!(sell.amount_out() > 2_190.0);
//! ```
//!
//! # Numeric Policy
//!
//! | Quantity | Type | Rounding |
//! |----------|------|----------|
//! | Tokens out (buy) | whole units, `f64` | floored to 2 decimal places |
//! | Currency out (sell) | `f64` | floored to 6 decimal places |
//! | Inputs | `f64` | must be finite and `>= 0`; zero quotes to zero |
//!
//! Buys walk at most [`DEFAULT_MAX_UNITS_PER_CALL`](config::DEFAULT_MAX_UNITS_PER_CALL)
//! units per call unless configured otherwise.  Buys and sells are not
//! exact inverses; see [`curve::estimate_currency_for_tokens`].
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`curve`] | The pricing engine: buy walk, sell integration, [`BondingCurve`](curve::BondingCurve) |
//! | [`config`] | [`CurveConfig`](config::CurveConfig), [`SellPricing`](config::SellPricing), TOML loading |
//! | [`domain`] | Value types: [`TradeRequest`](domain::TradeRequest), [`TradeEstimate`](domain::TradeEstimate), [`Price`](domain::Price) |
//! | [`traits`] | [`TradeQuoter`](traits::TradeQuoter), [`FromConfig`](traits::FromConfig), [`IdentityProvider`](traits::IdentityProvider) |
//! | [`session`] | Opaque identity and an in-memory wallet session |
//! | [`math`] | Finite-checked arithmetic, ladder helpers, truncation |
//! | [`error`] | [`CurveError`](error::CurveError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` per quote, `warn` when a buy
//! hits the unit ceiling) and never installs a subscriber.

pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod session;
pub mod traits;

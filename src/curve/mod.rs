//! The bonding-curve pricing engine.
//!
//! Two pure functions do the work:
//!
//! - [`estimate_tokens_for_currency`] — greedy whole-unit walk up the price
//!   ladder from the anchor, capped at the per-call unit ceiling.
//! - [`estimate_currency_for_tokens`] — integration of the ladder just below
//!   the anchor, continuous or step-wise per [`SellPricing`](crate::config::SellPricing).
//!
//! [`quote`] dispatches a [`TradeRequest`](crate::domain::TradeRequest) to
//! the right one, and [`BondingCurve`] wraps a config behind the
//! [`TradeQuoter`](crate::traits::TradeQuoter) trait.
//!
//! Nothing here holds state, blocks, or allocates beyond the returned
//! value, so every function is safe to call from any number of threads.

mod buy;
mod engine;
mod marginal;
mod sell;

#[cfg(test)]
mod proptest_properties;

pub use buy::estimate_tokens_for_currency;
pub use engine::{quote, BondingCurve};
pub use marginal::{marginal_price, spot_price};
pub use sell::estimate_currency_for_tokens;

//! Core trait abstractions.
//!
//! [`TradeQuoter`] is the quoting seam consumed by a trading view,
//! [`FromConfig`] is the validated-construction contract, and
//! [`IdentityProvider`] models the session the application runs in.

mod from_config;
mod identity_provider;
mod trade_quoter;

pub use from_config::FromConfig;
pub use identity_provider::IdentityProvider;
pub use trade_quoter::TradeQuoter;

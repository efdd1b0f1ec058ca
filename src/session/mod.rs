//! Session and identity model.
//!
//! The engine never looks at who is trading.  This module gives the
//! surrounding application an [`Identity`] type and an in-memory
//! [`MockWalletSession`] implementing
//! [`IdentityProvider`](crate::traits::IdentityProvider), standing in for
//! a real wallet connection.

mod identity;
mod wallet_session;

pub use identity::Identity;
pub use wallet_session::MockWalletSession;

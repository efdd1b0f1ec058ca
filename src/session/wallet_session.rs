//! In-memory wallet session.

use super::Identity;
use crate::error::Result;
use crate::traits::IdentityProvider;

/// A wallet connection held purely in memory.
///
/// Connecting stores the wallet address as the current [`Identity`];
/// disconnecting clears it.  Nothing is verified or persisted.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::session::MockWalletSession;
/// use tokenforge_curve::traits::IdentityProvider;
///
/// let mut session = MockWalletSession::new();
/// assert!(!session.is_authenticated());
/// session.connect("0x742d35Cc6634C0532925a3b8D4C0532925a3b8D4").expect("address");
/// assert!(session.is_authenticated());
/// session.disconnect();
/// assert!(session.current_identity().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockWalletSession {
    identity: Option<Identity>,
}

impl MockWalletSession {
    /// Creates a disconnected session.
    #[must_use]
    pub const fn new() -> Self {
        Self { identity: None }
    }

    /// Connects `address`, replacing any previous connection.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidIdentity`](crate::error::CurveError::InvalidIdentity)
    /// if the address is empty; the previous connection is kept.
    pub fn connect(&mut self, address: impl Into<String>) -> Result<&Identity> {
        let identity = Identity::new(address)?;
        tracing::info!(wallet = %identity.short_address(), "wallet connected");
        Ok(self.identity.insert(identity))
    }

    /// Drops the current connection, returning it if there was one.
    pub fn disconnect(&mut self) -> Option<Identity> {
        let previous = self.identity.take();
        if let Some(identity) = &previous {
            tracing::info!(wallet = %identity.short_address(), "wallet disconnected");
        }
        previous
    }
}

impl IdentityProvider for MockWalletSession {
    fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

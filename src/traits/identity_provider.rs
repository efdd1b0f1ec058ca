//! Opaque session seam.
//!
//! Quoting does not depend on who is asking, but the surrounding
//! application only shows trading to a signed-in user.  Anything that
//! needs to know exposes itself through [`IdentityProvider`], which reveals
//! nothing beyond the current identity and whether there is one.

use crate::session::Identity;

/// Source of the current user's identity.
pub trait IdentityProvider {
    /// Returns the signed-in identity, if any.
    fn current_identity(&self) -> Option<&Identity>;

    /// Returns `true` if an identity is present.
    fn is_authenticated(&self) -> bool {
        self.current_identity().is_some()
    }
}

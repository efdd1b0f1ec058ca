//! Opaque user identity.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};

/// Characters kept at the start of a shortened address.
const SHORT_PREFIX: usize = 6;
/// Characters kept at the end of a shortened address.
const SHORT_SUFFIX: usize = 4;

/// The signed-in party, identified by an opaque string such as a wallet
/// address.
///
/// # Examples
///
/// ```
/// use tokenforge_curve::session::Identity;
///
/// let id = Identity::new("0x742d35Cc6634C0532925a3b8D4C0532925a3b8D4").expect("non-empty");
/// assert_eq!(id.short_address(), "0x742d...b8D4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    display_name: Option<String>,
}

impl Identity {
    /// Creates an identity from its opaque id.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidIdentity`] if `id` is empty or only
    /// whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CurveError::InvalidIdentity("identity id must not be empty"));
        }
        Ok(Self {
            id,
            display_name: None,
        })
    }

    /// Attaches a human-readable name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Returns the opaque id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name, if one was set.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Shortens the id to `first6...last4` for display.
    ///
    /// Ids too short to shorten are returned whole.
    #[must_use]
    pub fn short_address(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        if chars.len() <= SHORT_PREFIX + SHORT_SUFFIX {
            return self.id.clone();
        }
        let head: String = chars[..SHORT_PREFIX].iter().collect();
        let tail: String = chars[chars.len() - SHORT_SUFFIX..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{name} ({})", self.short_address()),
            None => write!(f, "{}", self.short_address()),
        }
    }
}

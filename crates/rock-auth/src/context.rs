//! The signed-in state handed to the listing.

use serde::{Deserialize, Serialize};

use crate::{AuthError, User};

/// Who is looking at the listing.
///
/// Passed explicitly to the controller. `Unknown` covers the window before
/// the identity provider has answered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum AuthContext {
    #[default]
    Unknown,
    SignedOut,
    SignedIn(User),
}

impl AuthContext {
    pub fn signed_in(user: User) -> Self {
        AuthContext::SignedIn(user)
    }

    /// Whether the identity provider has answered.
    pub fn is_loaded(&self) -> bool {
        !matches!(self, AuthContext::Unknown)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthContext::SignedIn(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthContext::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    /// The AI search is for signed-in users only.
    pub fn can_search(&self) -> bool {
        self.is_signed_in()
    }

    /// Like [`can_search`](Self::can_search), as a `Result`.
    pub fn require_signed_in(&self) -> Result<&User, AuthError> {
        self.user().ok_or(AuthError::SignInRequired)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user().map(User::display_name)
    }
}

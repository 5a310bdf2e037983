//! User types.

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// A signed-in user as reported by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Name shown in the header and greetings.
    pub name: String,
}

impl User {
    /// Create a user with the given display name.
    pub fn new(name: impl Into<String>) -> Result<Self, AuthError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }
        Ok(Self {
            name: name.trim().to_string(),
        })
    }

    /// Get display name.
    pub fn display_name(&self) -> &str {
        &self.name
    }
}

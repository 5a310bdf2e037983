//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signed-in users need a non-empty display name.
    #[error("a signed-in user needs a name")]
    MissingName,

    /// The action requires a signed-in user.
    #[error("sign in to use the AI search")]
    SignInRequired,
}

//! Identity types for Rock4Code.
//!
//! Users and the [`AuthContext`] that gates the AI search.

mod context;
mod error;
mod user;

pub use context::AuthContext;
pub use error::AuthError;
pub use user::User;

//! HTTP client error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be built or sent.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The remote host could not be reached (DNS, refused connection, TLS).
    #[error("Connection to {url} failed: {message}")]
    Connection { url: String, message: String },

    /// The request did not complete in time.
    #[error("Request to {url} timed out after {after:?}")]
    Timeout { url: String, after: Duration },

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to read or parse the response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FetchError::Connection { .. } | FetchError::RequestError(_) | FetchError::InvalidUrl(_)
        )
    }

    /// Whether the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }

    /// HTTP status, when the server answered with an error.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

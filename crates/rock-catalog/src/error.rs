//! Catalog error types.
//!
//! Catalog loading and AI search fail independently and are shown in
//! different places, so each has its own error type.

use std::time::Duration;

use rock_data::FetchError;
use serde::Serialize;
use thiserror::Error;

/// Broad failure class shared by both error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    Timeout,
    HttpStatus,
    Decode,
    Validation,
}

/// Errors from loading the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The API could not be reached at all.
    #[error(
        "Connection error: {detail}. Check that the catalog API is running at {base_url} \
         and that it allows cross-origin requests."
    )]
    Connection { base_url: String, detail: String },

    /// The API did not answer in time.
    #[error("The catalog API did not respond within {0:?}")]
    Timeout(Duration),

    /// Non-2xx response.
    #[error("Error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request could not be encoded or the response could not be read.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Map a transport error, attaching the configured base URL to connection hints.
    pub fn from_fetch(err: FetchError, base_url: &str) -> Self {
        match err {
            FetchError::Connection { message, .. } | FetchError::RequestError(message) => {
                CatalogError::Connection {
                    base_url: base_url.to_string(),
                    detail: message,
                }
            }
            FetchError::InvalidUrl(message) => CatalogError::Connection {
                base_url: base_url.to_string(),
                detail: format!("invalid URL ({})", message),
            },
            FetchError::Timeout { after, .. } => CatalogError::Timeout(after),
            FetchError::HttpError { status, message } => CatalogError::HttpStatus {
                status,
                body: message,
            },
            FetchError::ParseError(message) | FetchError::JsonError(message) => {
                CatalogError::Decode(message)
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Connection { .. } => ErrorKind::Transport,
            CatalogError::Timeout(_) => ErrorKind::Timeout,
            CatalogError::HttpStatus { .. } => ErrorKind::HttpStatus,
            CatalogError::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// Errors from the natural-language search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Blank input, rejected locally.
    #[error("Enter a description of the laptop you are looking for")]
    EmptyQuery,

    /// Signed-out users cannot search; nothing was sent.
    #[error("Sign in to use the AI search")]
    SignInRequired,

    #[error("Connection error while searching: {0}")]
    Connection(String),

    #[error("The search service did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Search failed with error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The search endpoint answered with an unexpected shape.
    #[error("Unexpected search response: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::EmptyQuery | SearchError::SignInRequired => ErrorKind::Validation,
            SearchError::Connection(_) => ErrorKind::Transport,
            SearchError::Timeout(_) => ErrorKind::Timeout,
            SearchError::HttpStatus { .. } => ErrorKind::HttpStatus,
            SearchError::Decode(_) => ErrorKind::Decode,
        }
    }
}

impl From<FetchError> for SearchError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Connection { message, .. } | FetchError::RequestError(message) => {
                SearchError::Connection(message)
            }
            FetchError::InvalidUrl(message) => SearchError::Connection(format!("invalid URL ({})", message)),
            FetchError::Timeout { after, .. } => SearchError::Timeout(after),
            FetchError::HttpError { status, message } => SearchError::HttpStatus {
                status,
                body: message,
            },
            FetchError::ParseError(message) | FetchError::JsonError(message) => {
                SearchError::Decode(message)
            }
        }
    }
}

/// Invalid configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api.base_url must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("timeouts must be at least one second")]
    ZeroTimeout,

    #[error("listing.page_size must be greater than zero")]
    ZeroPageSize,

    #[error("category '{0}' clashes with the all-categories key")]
    ReservedCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_hint_mentions_base_url_and_cors() {
        let err = CatalogError::from_fetch(
            FetchError::Connection {
                url: "http://localhost:8000/api/Laptop".into(),
                message: "connection refused".into(),
            },
            "http://localhost:8000/api/Laptop",
        );
        let text = err.to_string();
        assert!(text.contains("connection refused"));
        assert!(text.contains("http://localhost:8000/api/Laptop"));
        assert!(text.contains("cross-origin"));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_http_status_mapping() {
        let err = CatalogError::from_fetch(
            FetchError::HttpError {
                status: 500,
                message: "Internal Server Error".into(),
            },
            "http://x",
        );
        assert_eq!(
            err,
            CatalogError::HttpStatus {
                status: 500,
                body: "Internal Server Error".into()
            }
        );
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
    }

    #[test]
    fn test_search_error_from_timeout() {
        let err: SearchError = FetchError::Timeout {
            url: "http://x".into(),
            after: Duration::from_secs(8),
        }
        .into();
        assert_eq!(err, SearchError::Timeout(Duration::from_secs(8)));
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }
}

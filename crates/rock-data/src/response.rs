//! HTTP response handling.

use serde::de::DeserializeOwned;

use crate::FetchError;

/// Longest body excerpt kept in error messages.
pub const BODY_EXCERPT_LIMIT: usize = 300;

/// An HTTP response, fully buffered.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers, in arrival order.
    pub headers: Vec<(String, String)>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response was a server error (5xx status).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Canonical reason phrase for the status, e.g. "Not Found".
    pub fn status_text(&self) -> &'static str {
        http::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body decoded as UTF-8, failing on invalid sequences.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Trimmed body text cut to [`BODY_EXCERPT_LIMIT`] characters.
    pub fn body_excerpt(&self) -> String {
        excerpt(self.text_lossy().trim(), BODY_EXCERPT_LIMIT)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error message carries the status text and a body excerpt.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let body = self.body_excerpt();
        let message = match (self.status_text(), body.is_empty()) {
            ("", true) => "Unknown error".to_string(),
            (reason, true) => reason.to_string(),
            ("", false) => body,
            (reason, false) => format!("{} - {}", reason, body),
        };
        Err(FetchError::HttpError {
            status: self.status,
            message,
        })
    }
}

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis.
pub fn excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

//! Outbound HTTP client utilities for the Rock4Code catalog.
//!
//! Provides a small builder API for talking to the Catalog API with JSON
//! bodies, per-request timeouts and a pluggable [`Transport`] so that the
//! network can be swapped out in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use rock_data::{FetchClient, TimeoutConfig};
//!
//! let client = FetchClient::with_reqwest(TimeoutConfig::default())?
//!     .with_base_url("https://api.example.com/api/Laptop");
//!
//! // GET on the base URL itself
//! let response = client.get("").accept("application/json").send().await?;
//!
//! // POST with JSON body
//! let response = client
//!     .post("/Gemini/buscar-laptops")
//!     .json(&serde_json::json!({ "consulta": "gaming" }))?
//!     .send()
//!     .await?
//!     .error_for_status()?;
//! ```

mod error;
mod request;
mod response;
mod timeout;
mod transport;

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::{excerpt, Response, BODY_EXCERPT_LIMIT};
pub use timeout::TimeoutConfig;
pub use transport::{ReqwestTransport, Transport};

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client over an arbitrary transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: Vec::new(),
            transport,
        }
    }

    /// Create a client that uses `reqwest` with the given timeouts.
    pub fn with_reqwest(timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(timeouts)?)))
    }

    /// Create a client with a base URL that will be prepended to relative URLs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a HEAD request.
    pub fn head(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Head, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let full_url = self.resolve(url.into());

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }

    fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(_) if url.starts_with("http://") || url.starts_with("https://") => url,
            Some(base) if url.is_empty() => base.clone(),
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches('/')
            ),
            None => url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append a query-string parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Bound this request to `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.builder = self.builder.timeout(timeout);
        self
    }

    /// The request as it will be handed to the transport.
    pub fn as_request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the buffered response.
    pub async fn send(self) -> Result<Response, FetchError> {
        debug!(method = %self.builder.method, url = %self.builder.url, "sending request");
        self.transport.execute(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response, TimeoutConfig, Transport};
}

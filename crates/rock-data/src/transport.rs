//! Pluggable transports that actually put requests on the wire.

use async_trait::async_trait;
use tracing::debug;

use crate::{FetchError, RequestBuilder, Response, TimeoutConfig};

/// Executes a request and buffers the full response.
///
/// Non-2xx statuses are returned as `Ok`; callers decide how to treat them.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeouts: TimeoutConfig,
}

impl ReqwestTransport {
    pub fn new(timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.total)
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;
        Ok(Self { client, timeouts })
    }

    pub fn timeouts(&self) -> TimeoutConfig {
        self.timeouts
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = request.full_url()?;
        let after = request.timeout.unwrap_or(self.timeouts.total);

        let mut builder = self.client.request(request.method.to_http(), &url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| classify(e, &url, after))?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = resp
            .bytes()
            .await
            .map_err(|e| classify(e, &url, after))?
            .to_vec();

        debug!(method = %request.method, url = %url, status, bytes = body.len(), "response received");
        Ok(Response::new(status, headers, body))
    }
}

fn classify(err: reqwest::Error, url: &str, after: std::time::Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            after,
        }
    } else if err.is_connect() || err.is_request() {
        FetchError::Connection {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_decode() || err.is_body() {
        FetchError::ParseError(err.to_string())
    } else {
        FetchError::RequestError(err.to_string())
    }
}

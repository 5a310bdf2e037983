//! [`LaptopRepository`] over HTTP.

use async_trait::async_trait;
use rock_data::{FetchClient, FetchError};
use tracing::{debug, info, warn};

use super::{decode_catalog, AiSearchRequest, AiSearchResponse, CatalogQuery, HealthStatus, LaptopRepository, SearchQuery};
use crate::catalog::ExternalLaptopRecord;
use crate::config::ApiConfig;
use crate::error::{CatalogError, SearchError};

const JSON: &str = "application/json";

/// Talks to the Catalog API through a [`FetchClient`].
#[derive(Debug, Clone)]
pub struct HttpLaptopRepository {
    client: FetchClient,
    api: ApiConfig,
}

impl HttpLaptopRepository {
    /// Build a repository backed by `reqwest`.
    pub fn new(api: ApiConfig) -> Result<Self, CatalogError> {
        let client = FetchClient::with_reqwest(api.timeouts())
            .map_err(|e| CatalogError::from_fetch(e, &api.base_url))?;
        Ok(Self::with_client(client, api))
    }

    /// Build a repository over an existing client. The client's base URL is
    /// replaced with the configured one.
    pub fn with_client(client: FetchClient, api: ApiConfig) -> Self {
        let client = client.with_base_url(api.base_url.clone());
        Self { client, api }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

#[async_trait]
impl LaptopRepository for HttpLaptopRepository {
    async fn fetch_catalog(&self, query: &CatalogQuery) -> Result<Vec<ExternalLaptopRecord>, CatalogError> {
        let mut request = self
            .client
            .get("")
            .accept(JSON)
            .timeout(self.api.timeouts().total);
        for (key, value) in query.params() {
            request = request.query(key, value);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(error = %e, base_url = %self.api.base_url, "catalog request failed");
                CatalogError::from_fetch(e, &self.api.base_url)
            })?;

        let records = decode_catalog(&response.body);
        info!(count = records.len(), "catalog loaded");
        Ok(records)
    }

    async fn search(&self, query: &SearchQuery) -> Result<AiSearchResponse, SearchError> {
        debug!(query = %query, "running AI search");
        let response = self
            .client
            .post(self.api.search_path.clone())
            .accept(JSON)
            .timeout(self.api.timeouts().total)
            .json(&AiSearchRequest::new(query))?
            .send()
            .await?
            .error_for_status()?;

        let result: AiSearchResponse = response
            .json()
            .map_err(|e: FetchError| SearchError::Decode(e.to_string()))?;

        if result.total_found as usize != result.laptops.len() {
            warn!(
                total_found = result.total_found,
                returned = result.laptops.len(),
                "search total does not match returned laptops"
            );
        }
        info!(query = %query, results = result.laptops.len(), "AI search finished");
        Ok(result)
    }

    async fn check_health(&self) -> HealthStatus {
        let outcome = self
            .client
            .head("")
            .timeout(self.api.health_timeout())
            .send()
            .await;

        let status = match outcome {
            Ok(response) if response.is_success() => HealthStatus::Healthy {
                status: response.status,
            },
            Ok(response) => HealthStatus::Unhealthy {
                status: response.status,
            },
            Err(e) if e.is_timeout() => HealthStatus::TimedOut,
            Err(e) => HealthStatus::Unreachable { message: e.to_string() },
        };
        debug!(?status, "health probe finished");
        status
    }
}

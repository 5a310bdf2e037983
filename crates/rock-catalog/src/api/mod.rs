//! Access to the Catalog API.
//!
//! Everything that talks to the backend goes through [`LaptopRepository`].
//! UI code never builds requests itself, which keeps the backing service
//! swappable and lets tests run on in-memory data.

mod http;
mod search;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::catalog::ExternalLaptopRecord;
use crate::error::{CatalogError, SearchError};

pub use self::http::HttpLaptopRepository;
pub use self::search::{AiSearchRequest, AiSearchResponse, SearchQuery};

/// Optional server-side filters for the catalog GET.
///
/// Client-side filtering in the listing engine is authoritative; these only
/// narrow what is transferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub brand: Option<String>,
}

impl CatalogQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Query-string pairs using the API's parameter names.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(c) = self.category.as_deref() {
            params.push(("categoria", c));
        }
        if let Some(b) = self.brand.as_deref() {
            params.push(("marca", b));
        }
        params
    }
}

/// Outcome of a liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy { status: u16 },
    Unhealthy { status: u16 },
    Unreachable { message: String },
    TimedOut,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }
}

/// The single gateway to laptop data.
#[async_trait]
pub trait LaptopRepository: Send + Sync {
    /// GET the whole collection. Safe to call again after a failure.
    async fn fetch_catalog(&self, query: &CatalogQuery) -> Result<Vec<ExternalLaptopRecord>, CatalogError>;

    /// Run a natural-language search; results come back ranked.
    async fn search(&self, query: &SearchQuery) -> Result<AiSearchResponse, SearchError>;

    /// Probe the API. Never fails; failures are reported in the status.
    async fn check_health(&self) -> HealthStatus;
}

/// Decode a catalog body leniently.
///
/// Malformed JSON or a non-array body yields an empty catalog. Array items
/// that do not decode are skipped.
pub fn decode_catalog(body: &[u8]) -> Vec<ExternalLaptopRecord> {
    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "catalog body is not valid JSON; using an empty catalog");
            return Vec::new();
        }
    };

    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            warn!(kind = json_kind(&other), "catalog body is not an array; using an empty catalog");
            return Vec::new();
        }
    };

    let total = items.len();
    let records: Vec<ExternalLaptopRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping undecodable laptop record");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!(kept = records.len(), total, "some laptop records were skipped");
    }
    records
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"{"id":"a1","image":"","categoria":"gaming","marca":"MSI","modelo":"Katana",
        "procesador":"i7","ramgb":16,"almacenamientogb":512,"precio":999,"pulgadas":15.6}"#;

    #[test]
    fn test_decode_array() {
        let body = format!("[{}]", ONE);
        assert_eq!(decode_catalog(body.as_bytes()).len(), 1);
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(decode_catalog(br#"{"laptops": []}"#).is_empty());
        assert!(decode_catalog(b"null").is_empty());
    }

    #[test]
    fn test_malformed_is_empty() {
        assert!(decode_catalog(b"<html>oops</html>").is_empty());
        assert!(decode_catalog(b"").is_empty());
    }

    #[test]
    fn test_bad_items_skipped() {
        let body = format!(r#"[{}, {{"id": 7}}, "junk"]"#, ONE);
        let records = decode_catalog(body.as_bytes());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].brand, "MSI");
    }

    #[test]
    fn test_query_params() {
        assert!(CatalogQuery::all().params().is_empty());
        let q = CatalogQuery::all().with_category("gaming").with_brand("Asus");
        assert_eq!(q.params(), vec![("categoria", "gaming"), ("marca", "Asus")]);
    }
}

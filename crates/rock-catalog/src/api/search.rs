//! Natural-language search request and response types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ExternalLaptopRecord;
use crate::error::SearchError;

/// A validated, trimmed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate user input. Blank input never reaches the network.
    pub fn parse(raw: &str) -> Result<Self, SearchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of the search POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AiSearchRequest<'a> {
    pub consulta: &'a str,
}

impl<'a> AiSearchRequest<'a> {
    pub fn new(query: &'a SearchQuery) -> Self {
        Self {
            consulta: query.as_str(),
        }
    }
}

/// Response of the search endpoint. Decoded strictly: every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSearchResponse {
    #[serde(rename = "consultaOriginal")]
    pub original_query: String,

    #[serde(rename = "totalEncontrados")]
    pub total_found: u32,

    /// Ranked best match first.
    pub laptops: Vec<ExternalLaptopRecord>,

    pub timestamp: String,
}

impl AiSearchResponse {
    /// The server timestamp, accepting RFC 3339 or a zone-less ISO form (read as UTC).
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

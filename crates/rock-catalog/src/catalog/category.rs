//! Laptop categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lower-cased category key, e.g. `gaming`.
///
/// Constructing one always lower-cases and trims, so equality between two
/// keys is the case-insensitive comparison the filters need.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw category string names this key.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().to_lowercase() == self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CategoryKey::new(&raw))
    }
}

/// One entry of the category filter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

//! Laptop identifiers.
//!
//! The Catalog API hands out opaque string identifiers (GUIDs). Those are the
//! only keys used for lists and lookups; the numeric form exists for older
//! presentation code and is allowed to collide.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned by the Catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaptopId(String);

impl LaptopId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Numeric presentation id, see [`synthesize_numeric_id`].
    pub fn numeric(&self) -> Option<u32> {
        synthesize_numeric_id(&self.0)
    }
}

impl fmt::Display for LaptopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LaptopId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LaptopId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for LaptopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive a numeric id from an opaque identifier.
///
/// Separators are stripped, the first 8 remaining characters are kept and
/// their leading run of hex digits is read as base 16. Returns `None` when
/// that run is empty. Lossy; never use the result as a join key.
pub fn synthesize_numeric_id(raw: &str) -> Option<u32> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(8)
        .take_while(|c| c.is_ascii_hexdigit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_prefix() {
        assert_eq!(
            synthesize_numeric_id("3fa85f64-5717-4562-b3fc-2c963f66afa6"),
            Some(0x3fa85f64)
        );
    }

    #[test]
    fn test_separators_inside_prefix() {
        // "1a2b-3c4d-..." strips to "1a2b3c4d"
        assert_eq!(synthesize_numeric_id("1a2b-3c4d-ffff"), Some(0x1a2b3c4d));
    }

    #[test]
    fn test_short_and_partial_ids() {
        assert_eq!(synthesize_numeric_id("42"), Some(0x42));
        assert_eq!(synthesize_numeric_id("12abzz99"), Some(0x12ab));
        assert_eq!(synthesize_numeric_id("zz"), None);
        assert_eq!(synthesize_numeric_id(""), None);
    }

    #[test]
    fn test_collisions_are_possible() {
        let a = LaptopId::new("deadbeef-0000-0000-0000-000000000001");
        let b = LaptopId::new("deadbeef-0000-0000-0000-000000000002");
        assert_eq!(a.numeric(), b.numeric());
        assert_ne!(a, b);
    }
}

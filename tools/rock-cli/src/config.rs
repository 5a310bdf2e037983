//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use rock_catalog::config::{ApiConfig, ListingConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "ROCK4CODE_API_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog API connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Listing behaviour.
    #[serde(default)]
    pub listing: ListingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            debug!(base_url = %url, "base URL taken from {}", API_URL_ENV);
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Check both sections, collecting every problem.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(e) = self.api.validate() {
            problems.push(e.to_string());
        }
        if let Err(e) = self.listing.validate() {
            problems.push(e.to_string());
        }
        problems
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default rock4code.toml config file.
pub fn generate_default_config() -> String {
    r#"# Rock4Code catalog configuration

[api]
# Collection URL; GET returns every laptop. ROCK4CODE_API_URL overrides it.
base_url = "http://localhost:8000/api/Laptop"
search_path = "/Gemini/buscar-laptops"
timeout_secs = 8
health_timeout_secs = 5

[listing]
page_size = 6
locale = "es"
all_category = "todos"

[[listing.categories]]
key = "gaming"
label = "Gaming"

[[listing.categories]]
key = "trabajo"
label = "Trabajo"

[[listing.categories]]
key = "estudiantes"
label = "Estudiantes"

[[listing.categories]]
key = "creadores"
label = "Creadores"

[[listing.categories]]
key = "otros"
label = "Otros"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed = CliConfig::parse(&generate_default_config(), false).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed = CliConfig::parse("[listing]\npage_size = 9\n", false).unwrap();
        assert_eq!(parsed.listing.page_size, 9);
        assert_eq!(parsed.api, ApiConfig::default());
    }

    #[test]
    fn test_json_config() {
        let parsed = CliConfig::parse(r#"{"api": {"base_url": "https://api.rock4code.es/api/Laptop"}}"#, true).unwrap();
        assert_eq!(parsed.api.base_url, "https://api.rock4code.es/api/Laptop");
    }

    #[test]
    fn test_api_url_override() {
        let config = CliConfig::default().with_api_url(Some(" https://staging.test/api/Laptop ".into()));
        assert_eq!(config.api.base_url, "https://staging.test/api/Laptop");
        let untouched = CliConfig::default().with_api_url(Some("  ".into()));
        assert_eq!(untouched, CliConfig::default());
    }

    #[test]
    fn test_problems() {
        assert!(CliConfig::default().problems().is_empty());
        let mut config = CliConfig::default();
        config.api.timeout_secs = 0;
        config.listing.page_size = 0;
        assert_eq!(config.problems().len(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("rock4code-test-{}.toml", std::process::id()));
        let mut config = CliConfig::default();
        config.listing.page_size = 12;
        config.save(&path).unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}

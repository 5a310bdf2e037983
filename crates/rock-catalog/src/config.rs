//! Catalog API and listing configuration.

use std::time::Duration;

use rock_data::TimeoutConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryOption;
use crate::error::ConfigError;

/// Display language for generated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Label used when a laptop has no dedicated graphics card.
    pub fn integrated_graphics(&self) -> &'static str {
        match self {
            Locale::Es => "Integrada",
            Locale::En => "Integrated",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

/// Where and how to reach the Catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection URL; GET returns every laptop.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the natural-language search endpoint, relative to `base_url`.
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// Total timeout for catalog and search calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total timeout for the health probe.
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/Laptop".to_string()
}

fn default_search_path() -> String {
    "/Gemini/buscar-laptops".to_string()
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_health_timeout_secs() -> u64 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            timeout_secs: default_timeout_secs(),
            health_timeout_secs: default_health_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::from_total(Duration::from_secs(self.timeout_secs))
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 || self.health_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Listing behaviour: page size, categories and language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub locale: Locale,

    /// Key of the pseudo-category that shows everything.
    #[serde(default = "default_all_category")]
    pub all_category: String,

    /// Category filter buttons, in display order (excluding the "all" entry).
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryOption>,
}

fn default_page_size() -> usize {
    6
}

fn default_all_category() -> String {
    "todos".to_string()
}

fn default_categories() -> Vec<CategoryOption> {
    vec![
        CategoryOption::new("gaming", "Gaming"),
        CategoryOption::new("trabajo", "Trabajo"),
        CategoryOption::new("estudiantes", "Estudiantes"),
        CategoryOption::new("creadores", "Creadores"),
        CategoryOption::new("otros", "Otros"),
    ]
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            locale: Locale::default(),
            all_category: default_all_category(),
            categories: default_categories(),
        }
    }
}

impl ListingConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Whether `key` selects every category.
    pub fn is_all(&self, key: &str) -> bool {
        let key = key.trim();
        key.is_empty() || key.eq_ignore_ascii_case("all") || key.eq_ignore_ascii_case(&self.all_category)
    }

    /// Display label for a category key, falling back to the key itself.
    pub fn category_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.key.eq_ignore_ascii_case(key))
            .map(|c| c.label.as_str())
            .unwrap_or(key)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if let Some(c) = self.categories.iter().find(|c| self.is_all(&c.key)) {
            return Err(ConfigError::ReservedCategory(c.key.clone()));
        }
        Ok(())
    }
}

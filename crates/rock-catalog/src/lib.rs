//! Laptop catalog domain for Rock4Code.
//!
//! - **Catalog**: API records, display laptops and categories
//! - **Normalize**: API record to display laptop conversion
//! - **Api**: the [`LaptopRepository`](api::LaptopRepository) gateway and its HTTP implementation
//! - **Listing**: category and AI filtering, pagination, stale-response guards
//!
//! # Example
//!
//! ```rust,ignore
//! use rock_catalog::prelude::*;
//!
//! let repo = HttpLaptopRepository::new(ApiConfig::default())?;
//! let records = repo.fetch_catalog(&CatalogQuery::all()).await?;
//!
//! let mut engine = ListingEngine::new(ListingConfig::default());
//! engine.catalog_refreshed(normalize_all(&records, Locale::Es));
//! engine.select_category("gaming");
//!
//! for laptop in engine.current_page_items() {
//!     println!("{} {}", laptop.title(), laptop.price);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod api;
pub mod catalog;
pub mod config;
pub mod listing;
pub mod normalize;

pub use error::{CatalogError, ConfigError, ErrorKind, SearchError};
pub use ids::*;
pub use money::{Currency, Money};
pub use normalize::{normalize, normalize_all};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, ConfigError, ErrorKind, SearchError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::normalize::{normalize, normalize_all};

    // Catalog
    pub use crate::catalog::{CategoryKey, CategoryOption, DisplayLaptop, ExternalLaptopRecord};
    pub use crate::config::{ApiConfig, ListingConfig, Locale};

    // Api
    pub use crate::api::{
        AiSearchResponse, CatalogQuery, HealthStatus, HttpLaptopRepository, LaptopRepository,
        SearchQuery,
    };

    // Listing
    pub use crate::listing::{
        EmptyState, FilterMode, ListingEngine, PageItem, Pagination, Recovery, RequestSequence,
        Ticket,
    };
}

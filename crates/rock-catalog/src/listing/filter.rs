//! Listing filter modes and empty states.

use serde::Serialize;

use crate::api::SearchQuery;
use crate::catalog::{CategoryKey, DisplayLaptop};

/// What the listing is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FilterMode {
    /// The whole catalog.
    #[default]
    AllItems,
    /// Laptops of one category.
    CategoryFiltered { category: CategoryKey },
    /// The ranked results of an AI search, in server order.
    AiFiltered {
        query: SearchQuery,
        #[serde(skip)]
        results: Vec<DisplayLaptop>,
    },
}

impl FilterMode {
    pub fn is_ai(&self) -> bool {
        matches!(self, FilterMode::AiFiltered { .. })
    }

    pub fn category(&self) -> Option<&CategoryKey> {
        match self {
            FilterMode::CategoryFiltered { category } => Some(category),
            _ => None,
        }
    }

    pub fn ai_query(&self) -> Option<&SearchQuery> {
        match self {
            FilterMode::AiFiltered { query, .. } => Some(query),
            _ => None,
        }
    }
}

/// Why the active list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyState {
    /// The API returned no laptops.
    CatalogEmpty,
    /// The selected category has no laptops.
    NoCategoryResults { category: CategoryKey },
    /// The AI search found nothing.
    NoAiResults { query: SearchQuery },
}

impl EmptyState {
    /// The action that gets the user back to a non-empty list, if any.
    pub fn recovery(&self) -> Option<Recovery> {
        match self {
            EmptyState::CatalogEmpty => None,
            EmptyState::NoCategoryResults { .. } => Some(Recovery::ShowAllCategories),
            EmptyState::NoAiResults { .. } => Some(Recovery::ClearSearch),
        }
    }
}

/// Recovery action offered by an empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recovery {
    ShowAllCategories,
    ClearSearch,
}

//! The listing state machine: filter mode, current page and the data behind them.

use tracing::debug;

use super::filter::{EmptyState, FilterMode};
use super::pagination::Pagination;
use crate::api::SearchQuery;
use crate::catalog::{CategoryKey, DisplayLaptop};
use crate::config::ListingConfig;

/// Filtering and pagination over the loaded catalog.
///
/// Every transition is synchronous. Any change of filter resets the page to 1,
/// so the current page is always inside `1..=total_pages`.
#[derive(Debug, Clone)]
pub struct ListingEngine {
    catalog: Vec<DisplayLaptop>,
    mode: FilterMode,
    page: usize,
    config: ListingConfig,
}

impl ListingEngine {
    pub fn new(config: ListingConfig) -> Self {
        Self {
            catalog: Vec::new(),
            mode: FilterMode::AllItems,
            page: 1,
            config,
        }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[DisplayLaptop] {
        &self.catalog
    }

    pub fn mode(&self) -> &FilterMode {
        &self.mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the catalog. Always returns to all items on page 1.
    pub fn catalog_refreshed(&mut self, catalog: Vec<DisplayLaptop>) {
        debug!(count = catalog.len(), "catalog refreshed");
        self.catalog = catalog;
        self.mode = FilterMode::AllItems;
        self.page = 1;
    }

    /// Select a category by key; the "all" key shows everything. Leaves AI mode.
    pub fn select_category(&mut self, key: &str) {
        self.mode = if self.config.is_all(key) {
            FilterMode::AllItems
        } else {
            FilterMode::CategoryFiltered {
                category: CategoryKey::new(key),
            }
        };
        self.page = 1;
        debug!(category = key, "category selected");
    }

    /// Show AI results exactly as ranked by the server.
    pub fn apply_ai_results(&mut self, query: SearchQuery, results: Vec<DisplayLaptop>) {
        debug!(query = %query, count = results.len(), "AI results applied");
        self.mode = FilterMode::AiFiltered { query, results };
        self.page = 1;
    }

    /// Leave AI mode for all items. No-op outside AI mode.
    pub fn clear_ai_search(&mut self) {
        if self.mode.is_ai() {
            self.mode = FilterMode::AllItems;
            self.page = 1;
            debug!("AI search cleared");
        }
    }

    /// Jump to `page`. Returns false, changing nothing, when out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.pagination().contains(page) {
            debug!(page, "ignoring navigation outside the page range");
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// The list the current mode selects, before pagination.
    pub fn active_list(&self) -> Vec<&DisplayLaptop> {
        match &self.mode {
            FilterMode::AllItems => self.catalog.iter().collect(),
            FilterMode::CategoryFiltered { category } => self
                .catalog
                .iter()
                .filter(|l| category.matches(&l.category))
                .collect(),
            FilterMode::AiFiltered { results, .. } => results.iter().collect(),
        }
    }

    pub fn active_len(&self) -> usize {
        match &self.mode {
            FilterMode::AiFiltered { results, .. } => results.len(),
            _ => self.active_list().len(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.config.page_size, self.active_len())
    }

    /// The laptops on the current page.
    pub fn current_page_items(&self) -> Vec<&DisplayLaptop> {
        let pagination = self.pagination();
        self.active_list()
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect()
    }

    /// Why the active list is empty, or `None` when it has items.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.active_len() > 0 {
            return None;
        }
        Some(match &self.mode {
            FilterMode::AiFiltered { query, .. } => EmptyState::NoAiResults { query: query.clone() },
            FilterMode::CategoryFiltered { category } => EmptyState::NoCategoryResults {
                category: category.clone(),
            },
            FilterMode::AllItems => EmptyState::CatalogEmpty,
        })
    }

    /// Category buttons are disabled while AI results are shown.
    pub fn category_controls_enabled(&self) -> bool {
        !self.mode.is_ai()
    }

    pub fn ai_query(&self) -> Option<&SearchQuery> {
        self.mode.ai_query()
    }

    /// Key of the highlighted category button.
    pub fn selected_category_key(&self) -> &str {
        match &self.mode {
            FilterMode::CategoryFiltered { category } => category.as_str(),
            _ => &self.config.all_category,
        }
    }
}

impl Default for ListingEngine {
    fn default() -> Self {
        Self::new(ListingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::LaptopId;
    use crate::money::{Currency, Money};

    fn laptop(id: &str, category: &str) -> DisplayLaptop {
        DisplayLaptop {
            id: LaptopId::new(id),
            numeric_id: None,
            brand: "Acer".into(),
            model: format!("Model {}", id),
            category: category.into(),
            price: Money::new(99_900, Currency::EUR),
            image: String::new(),
            processor: "i5".into(),
            ram: "8GB".into(),
            storage: "256GB".into(),
            screen: "14\"".into(),
            graphics: "Integrada".into(),
            has_dedicated_graphics: false,
            description: String::new(),
        }
    }

    fn engine_with(n: usize) -> ListingEngine {
        let mut engine = ListingEngine::default();
        let catalog = (0..n)
            .map(|i| laptop(&format!("l{}", i), if i % 3 == 0 { "gaming" } else { "trabajo" }))
            .collect();
        engine.catalog_refreshed(catalog);
        engine
    }

    #[test]
    fn test_all_items_pages() {
        let engine = engine_with(14);
        let p = engine.pagination();
        assert_eq!(p.total_pages, 3);
        assert_eq!(engine.current_page_items().len(), 6);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let mut engine = engine_with(6);
        engine.select_category("GAMING");
        assert_eq!(engine.active_len(), 2);
        assert_eq!(engine.selected_category_key(), "gaming");
    }

    #[test]
    fn test_reselecting_category_is_idempotent() {
        let mut engine = engine_with(20);
        assert!(engine.go_to_page(2));

        engine.select_category("trabajo");
        assert_eq!(engine.page(), 1);
        let first: Vec<DisplayLaptop> = engine.active_list().into_iter().cloned().collect();
        assert_eq!(first.len(), 13);

        assert!(engine.go_to_page(2));
        engine.select_category("trabajo");
        assert_eq!(engine.page(), 1);
        let second: Vec<DisplayLaptop> = engine.active_list().into_iter().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_keys_select_all_items() {
        let mut engine = engine_with(6);
        engine.select_category("gaming");
        engine.select_category("todos");
        assert_eq!(*engine.mode(), FilterMode::AllItems);
        engine.select_category("gaming");
        engine.select_category("all");
        assert_eq!(*engine.mode(), FilterMode::AllItems);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut engine = engine_with(14);
        assert!(engine.go_to_page(3));
        engine.select_category("trabajo");
        assert_eq!(engine.page(), 1);

        assert!(engine.go_to_page(2));
        let q = SearchQuery::parse("ligero").unwrap();
        engine.apply_ai_results(q, vec![laptop("x", "otros")]);
        assert_eq!(engine.page(), 1);
    }

    #[test]
    fn test_out_of_range_navigation_is_noop() {
        let mut engine = engine_with(7);
        assert!(!engine.go_to_page(0));
        assert!(!engine.go_to_page(3));
        assert!(!engine.prev_page());
        assert_eq!(engine.page(), 1);
        assert!(engine.next_page());
        assert!(!engine.next_page());
        assert_eq!(engine.page(), 2);
    }

    #[test]
    fn test_ai_results_keep_server_order() {
        let mut engine = engine_with(3);
        let q = SearchQuery::parse("gaming barato").unwrap();
        engine.apply_ai_results(q, vec![laptop("b", "gaming"), laptop("a", "gaming")]);
        let ids: Vec<_> = engine.current_page_items().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(!engine.category_controls_enabled());
        assert_eq!(engine.ai_query().map(|q| q.as_str()), Some("gaming barato"));
    }

    #[test]
    fn test_clear_ai_search() {
        let mut engine = engine_with(3);
        engine.select_category("gaming");
        engine.clear_ai_search();
        assert!(engine.mode().category().is_some());

        let q = SearchQuery::parse("x").unwrap();
        engine.apply_ai_results(q, Vec::new());
        engine.clear_ai_search();
        assert_eq!(*engine.mode(), FilterMode::AllItems);
        assert!(engine.category_controls_enabled());
    }

    #[test]
    fn test_empty_states() {
        let mut engine = ListingEngine::default();
        assert_eq!(engine.empty_state(), Some(EmptyState::CatalogEmpty));

        engine.catalog_refreshed(vec![laptop("a", "gaming")]);
        assert_eq!(engine.empty_state(), None);

        engine.select_category("otros");
        assert_eq!(
            engine.empty_state(),
            Some(EmptyState::NoCategoryResults {
                category: CategoryKey::new("otros")
            })
        );

        let q = SearchQuery::parse("nada").unwrap();
        engine.apply_ai_results(q.clone(), Vec::new());
        assert_eq!(engine.empty_state(), Some(EmptyState::NoAiResults { query: q }));
    }

    #[test]
    fn test_refresh_resets_everything() {
        let mut engine = engine_with(14);
        engine.select_category("trabajo");
        engine.go_to_page(2);
        engine.catalog_refreshed(vec![laptop("a", "gaming")]);
        assert_eq!(*engine.mode(), FilterMode::AllItems);
        assert_eq!(engine.page(), 1);
    }
}

//! The listing state container.
//!
//! Owns the engine, the load and search status and the request sequences.
//! Network calls go through a [`LaptopRepository`]; their completions are
//! applied only when they carry the latest ticket.

use rock_auth::AuthContext;
use rock_catalog::api::{AiSearchResponse, CatalogQuery, LaptopRepository, SearchQuery};
use rock_catalog::catalog::ExternalLaptopRecord;
use rock_catalog::config::ListingConfig;
use rock_catalog::listing::{ListingEngine, RequestSequence, Ticket};
use rock_catalog::{normalize_all, CatalogError, SearchError};
use tracing::{debug, info, warn};

use crate::snapshot::ListingSnapshot;

/// Catalog load status.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// A fetch is outstanding.
    Loading,
    /// The last fetch failed; the user can retry.
    Failed(CatalogError),
    /// The catalog is in the engine.
    Ready,
}

/// Drives one listing page.
pub struct ListingController<R> {
    repo: R,
    engine: ListingEngine,
    auth: AuthContext,
    query: CatalogQuery,
    load: LoadState,
    search_error: Option<SearchError>,
    searching: bool,
    fetches: RequestSequence,
    searches: RequestSequence,
}

impl<R: LaptopRepository> ListingController<R> {
    /// A controller waiting for its first fetch.
    pub fn new(repo: R, config: ListingConfig, auth: AuthContext) -> Self {
        Self {
            repo,
            engine: ListingEngine::new(config),
            auth,
            query: CatalogQuery::all(),
            load: LoadState::Loading,
            search_error: None,
            searching: false,
            fetches: RequestSequence::new(),
            searches: RequestSequence::new(),
        }
    }

    /// Server-side filters used by every fetch.
    pub fn with_catalog_query(mut self, query: CatalogQuery) -> Self {
        self.query = query;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn engine(&self) -> &ListingEngine {
        &self.engine
    }

    pub fn config(&self) -> &ListingConfig {
        self.engine.config()
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn search_error(&self) -> Option<&SearchError> {
        self.search_error.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn set_auth(&mut self, auth: AuthContext) {
        debug!(signed_in = auth.is_signed_in(), "auth context updated");
        self.auth = auth;
    }

    /// Mark a fetch as started and take its ticket.
    pub fn begin_fetch(&mut self) -> Ticket {
        let ticket = self.fetches.issue();
        self.load = LoadState::Loading;
        debug!(seq = ticket.value(), "catalog fetch started");
        ticket
    }

    /// Apply a fetch result. Returns false when the ticket is stale and the
    /// result was dropped.
    pub fn finish_fetch(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<ExternalLaptopRecord>, CatalogError>,
    ) -> bool {
        if !self.fetches.is_latest(ticket) {
            debug!(seq = ticket.value(), "discarding stale catalog response");
            return false;
        }
        match result {
            Ok(records) => {
                let laptops = normalize_all(&records, self.config().locale);
                info!(seq = ticket.value(), count = laptops.len(), "catalog ready");
                self.engine.catalog_refreshed(laptops);
                self.searches.invalidate();
                self.searching = false;
                self.search_error = None;
                self.load = LoadState::Ready;
            }
            Err(e) => {
                warn!(seq = ticket.value(), error = %e, "catalog fetch failed");
                self.load = LoadState::Failed(e);
            }
        }
        true
    }

    /// Fetch the catalog and apply the result.
    pub async fn load(&mut self) {
        let ticket = self.begin_fetch();
        let result = self.repo.fetch_catalog(&self.query).await;
        self.finish_fetch(ticket, result);
    }

    /// Re-run the catalog fetch after a failure.
    pub async fn retry(&mut self) {
        info!("retrying catalog fetch");
        self.load().await;
    }

    /// Validate a search and take its ticket. Nothing is sent when this fails;
    /// the error is kept for inline display.
    pub fn begin_search(&mut self, raw: &str) -> Result<(Ticket, SearchQuery), SearchError> {
        let outcome = self
            .auth
            .require_signed_in()
            .map_err(|_| SearchError::SignInRequired)
            .and_then(|_| SearchQuery::parse(raw));

        match outcome {
            Ok(query) => {
                let ticket = self.searches.issue();
                self.searching = true;
                self.search_error = None;
                debug!(seq = ticket.value(), query = %query, "AI search started");
                Ok((ticket, query))
            }
            Err(e) => {
                debug!(error = %e, "AI search rejected before sending");
                self.search_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Apply a search result. Returns false when the ticket is stale.
    pub fn finish_search(
        &mut self,
        ticket: Ticket,
        query: SearchQuery,
        result: Result<AiSearchResponse, SearchError>,
    ) -> bool {
        if !self.searches.is_latest(ticket) {
            debug!(seq = ticket.value(), "discarding stale search response");
            return false;
        }
        self.searching = false;
        match result {
            Ok(response) => {
                let laptops = normalize_all(&response.laptops, self.config().locale);
                info!(seq = ticket.value(), query = %query, count = laptops.len(), "AI results shown");
                self.engine.apply_ai_results(query, laptops);
                self.search_error = None;
            }
            Err(e) => {
                warn!(seq = ticket.value(), error = %e, "AI search failed");
                self.search_error = Some(e);
            }
        }
        true
    }

    /// Run an AI search end to end. Errors are stored, not returned.
    pub async fn run_search(&mut self, raw: &str) {
        let Ok((ticket, query)) = self.begin_search(raw) else {
            return;
        };
        let result = self.repo.search(&query).await;
        self.finish_search(ticket, query, result);
    }

    /// Leave AI mode. Any search still in flight is dropped when it lands.
    pub fn clear_search(&mut self) {
        self.searches.invalidate();
        self.searching = false;
        self.search_error = None;
        self.engine.clear_ai_search();
    }

    pub fn select_category(&mut self, key: &str) {
        self.engine.select_category(key);
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.engine.go_to_page(page)
    }

    pub fn next_page(&mut self) -> bool {
        self.engine.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.engine.prev_page()
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> ListingSnapshot {
        ListingSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rock_auth::User;
    use rock_catalog::api::HealthStatus;
    use rock_catalog::ids::LaptopId;
    use rock_catalog::listing::FilterMode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        searches: AtomicUsize,
    }

    #[async_trait]
    impl LaptopRepository for Counting {
        async fn fetch_catalog(&self, _: &CatalogQuery) -> Result<Vec<ExternalLaptopRecord>, CatalogError> {
            Ok(vec![record("a"), record("b")])
        }

        async fn search(&self, query: &SearchQuery) -> Result<AiSearchResponse, SearchError> {
            self.searches.fetch_add(1, Ordering::SeqCst);
            Ok(AiSearchResponse {
                original_query: query.to_string(),
                total_found: 1,
                laptops: vec![record("b")],
                timestamp: "2025-06-01T10:00:00Z".into(),
            })
        }

        async fn check_health(&self) -> HealthStatus {
            HealthStatus::Healthy { status: 200 }
        }
    }

    fn record(id: &str) -> ExternalLaptopRecord {
        ExternalLaptopRecord {
            id: LaptopId::new(id),
            image: String::new(),
            category: "gaming".into(),
            brand: "MSI".into(),
            model: id.to_uppercase(),
            processor: "i7".into(),
            ram_gb: 16,
            storage_gb: 1024,
            price: 1399.0,
            screen_inches: 16.0,
            graphics: Some("RTX 4060".into()),
            description: None,
        }
    }

    fn signed_in() -> AuthContext {
        AuthContext::signed_in(User::new("Ana").unwrap())
    }

    #[test]
    fn test_starts_loading() {
        let c = ListingController::new(Counting::default(), ListingConfig::default(), AuthContext::Unknown);
        assert!(c.is_loading());
    }

    #[tokio::test]
    async fn test_load_fills_engine() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), AuthContext::Unknown);
        c.load().await;
        assert_eq!(*c.load_state(), LoadState::Ready);
        assert_eq!(c.engine().active_len(), 2);
    }

    #[tokio::test]
    async fn test_blank_search_never_sent() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), signed_in());
        c.load().await;
        c.run_search("   ").await;
        assert_eq!(c.repository().searches.load(Ordering::SeqCst), 0);
        assert_eq!(c.search_error(), Some(&SearchError::EmptyQuery));
        assert_eq!(*c.engine().mode(), FilterMode::AllItems);
    }

    #[tokio::test]
    async fn test_signed_out_search_never_sent() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), AuthContext::SignedOut);
        c.run_search("gaming").await;
        assert_eq!(c.repository().searches.load(Ordering::SeqCst), 0);
        assert_eq!(c.search_error(), Some(&SearchError::SignInRequired));
    }

    #[tokio::test]
    async fn test_search_enters_ai_mode() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), signed_in());
        c.load().await;
        c.run_search("gaming potente").await;
        assert!(c.engine().mode().is_ai());
        assert_eq!(c.engine().active_len(), 1);
        assert!(!c.is_searching());

        c.clear_search();
        assert_eq!(*c.engine().mode(), FilterMode::AllItems);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), AuthContext::Unknown);
        let first = c.begin_fetch();
        let second = c.begin_fetch();

        assert!(c.finish_fetch(second, Ok(vec![record("new")])));
        assert!(!c.finish_fetch(first, Err(CatalogError::Decode("late".into()))));
        assert_eq!(*c.load_state(), LoadState::Ready);
        assert_eq!(c.engine().catalog()[0].id.as_str(), "new");
    }

    #[test]
    fn test_search_after_clear_is_discarded() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), signed_in());
        let (ticket, query) = c.begin_search("ligero").unwrap();
        c.clear_search();
        let late = Ok(AiSearchResponse {
            original_query: "ligero".into(),
            total_found: 0,
            laptops: Vec::new(),
            timestamp: String::new(),
        });
        assert!(!c.finish_search(ticket, query, late));
        assert!(!c.engine().mode().is_ai());
    }

    #[test]
    fn test_search_started_before_refresh_is_discarded() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), signed_in());
        let ticket = c.begin_fetch();
        c.finish_fetch(ticket, Ok(vec![record("old1"), record("old2")]));

        let (search, query) = c.begin_search("gaming").unwrap();
        let refresh = c.begin_fetch();
        c.finish_fetch(refresh, Ok(vec![record("new1")]));
        assert!(!c.is_searching());

        let late = Ok(AiSearchResponse {
            original_query: "gaming".into(),
            total_found: 1,
            laptops: vec![record("old2")],
            timestamp: String::new(),
        });
        assert!(!c.finish_search(search, query, late));
        assert_eq!(*c.engine().mode(), FilterMode::AllItems);
        let visible: Vec<&str> = c.engine().active_list().into_iter().map(|l| l.id.as_str()).collect();
        assert_eq!(visible, vec!["new1"]);
    }

    #[test]
    fn test_search_error_keeps_grid() {
        let mut c = ListingController::new(Counting::default(), ListingConfig::default(), signed_in());
        let ticket = c.begin_fetch();
        c.finish_fetch(ticket, Ok(vec![record("a")]));

        let (ticket, query) = c.begin_search("algo").unwrap();
        c.finish_search(ticket, query, Err(SearchError::HttpStatus { status: 502, body: "Bad Gateway".into() }));
        assert!(c.search_error().is_some());
        assert_eq!(*c.engine().mode(), FilterMode::AllItems);
        assert_eq!(c.engine().active_len(), 1);
    }
}

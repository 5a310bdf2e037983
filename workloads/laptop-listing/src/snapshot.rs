//! Serializable view of the listing, for JSON output.

use rock_auth::AuthContext;
use rock_catalog::api::LaptopRepository;
use rock_catalog::catalog::DisplayLaptop;
use rock_catalog::listing::{EmptyState, FilterMode, PageItem};
use rock_catalog::ErrorKind;
use serde::Serialize;

use crate::controller::{ListingController, LoadState};
use crate::messages::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Failed,
    Ready,
}

/// An error as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub kind: ErrorKind,
    pub message: String,
}

/// Everything the listing shows, in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSnapshot {
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorView>,
    pub filter: FilterMode,
    pub selected_category: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_window: Vec<PageItem>,
    pub laptops: Vec<DisplayLaptop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_error: Option<ErrorView>,
    pub auth: AuthContext,
}

impl ListingSnapshot {
    pub fn capture<R: LaptopRepository>(controller: &ListingController<R>) -> Self {
        let engine = controller.engine();
        let pagination = engine.pagination();

        let (status, error) = match controller.load_state() {
            LoadState::Loading => (LoadStatus::Loading, None),
            LoadState::Failed(e) => (
                LoadStatus::Failed,
                Some(ErrorView {
                    kind: e.kind(),
                    message: e.to_string(),
                }),
            ),
            LoadState::Ready => (LoadStatus::Ready, None),
        };
        let ready = status == LoadStatus::Ready;

        Self {
            status,
            error,
            filter: engine.mode().clone(),
            selected_category: engine.selected_category_key().to_string(),
            page: pagination.page,
            total_pages: pagination.total_pages,
            total_items: pagination.total,
            page_window: pagination.page_window(),
            laptops: if ready {
                engine.current_page_items().into_iter().cloned().collect()
            } else {
                Vec::new()
            },
            empty_state: if ready { engine.empty_state() } else { None },
            search_error: controller.search_error().map(|e| ErrorView {
                kind: e.kind(),
                message: Messages::for_locale(controller.config().locale).search_error(e),
            }),
            auth: controller.auth().clone(),
        }
    }

    /// Pretty JSON, as printed by `--json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Empty-state panels with their recovery actions.

use rock_catalog::config::ListingConfig;
use rock_catalog::listing::{EmptyState, Recovery};

use super::html_escape;
use crate::messages::Messages;

pub fn render_empty_state(state: &EmptyState, config: &ListingConfig, msgs: &Messages) -> String {
    let text = match state {
        EmptyState::CatalogEmpty => msgs.empty_catalog.to_string(),
        EmptyState::NoCategoryResults { category } => format!(
            "{} <strong>{}</strong>.",
            msgs.empty_category,
            html_escape(config.category_label(category.as_str()))
        ),
        EmptyState::NoAiResults { query } => format!(
            "{} <strong>&quot;{}&quot;</strong>.",
            msgs.empty_ai,
            html_escape(query.as_str())
        ),
    };

    let action = match state.recovery() {
        Some(Recovery::ShowAllCategories) => format!(
            r#"<button type="button" data-action="select-category" data-category="{}">{}</button>"#,
            html_escape(&config.all_category),
            msgs.show_all
        ),
        Some(Recovery::ClearSearch) => format!(
            r#"<button type="button" data-action="clear-search">{}</button>"#,
            msgs.clear_search
        ),
        None => String::new(),
    };

    format!(
        r#"<section class="listing-empty" data-section="empty">
    <p>{}</p>
    {}
</section>"#,
        text, action
    )
}

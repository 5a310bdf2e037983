//! Category filter row, or the AI banner that replaces it.

use rock_catalog::listing::ListingEngine;

use super::html_escape;
use crate::messages::Messages;

/// Render the category buttons, or the AI results banner in AI mode.
pub fn render_filters(engine: &ListingEngine, msgs: &Messages) -> String {
    if let Some(query) = engine.ai_query() {
        return render_ai_banner(query.as_str(), msgs);
    }

    let config = engine.config();
    let selected = engine.selected_category_key();

    let all_button = category_button(&config.all_category, msgs.all_categories, config.is_all(selected));
    let buttons: String = config
        .categories
        .iter()
        .map(|c| category_button(&c.key, &c.label, c.key.eq_ignore_ascii_case(selected)))
        .collect();

    format!(
        r#"<nav class="category-filters" data-section="filters">
    {}{}
</nav>"#,
        all_button, buttons
    )
}

fn category_button(key: &str, label: &str, active: bool) -> String {
    format!(
        r#"<button type="button" class="category-btn{}" data-action="select-category" data-category="{}" aria-pressed="{}">{}</button>"#,
        if active { " active" } else { "" },
        html_escape(key),
        active,
        html_escape(label)
    )
}

fn render_ai_banner(query: &str, msgs: &Messages) -> String {
    format!(
        r#"<div class="ai-banner" data-section="ai-banner">
    <span>{}: <strong>{}</strong></span>
    <button type="button" data-action="clear-search">{}</button>
</div>"#,
        msgs.ai_results_for,
        html_escape(query),
        msgs.clear_search
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rock_catalog::api::SearchQuery;
    use rock_catalog::config::{ListingConfig, Locale};

    #[test]
    fn test_category_row_marks_selection() {
        let mut engine = ListingEngine::new(ListingConfig::default());
        engine.select_category("gaming");
        let html = render_filters(&engine, Messages::for_locale(Locale::Es));
        assert!(html.contains(r#"class="category-btn active" data-action="select-category" data-category="gaming""#));
        assert!(html.contains(r#"data-category="todos" aria-pressed="false""#));
        assert!(html.contains("Estudiantes"));
    }

    #[test]
    fn test_ai_mode_hides_categories() {
        let mut engine = ListingEngine::new(ListingConfig::default());
        engine.apply_ai_results(SearchQuery::parse("<gaming>").unwrap(), Vec::new());
        let html = render_filters(&engine, Messages::for_locale(Locale::Es));
        assert!(!html.contains("category-btn"));
        assert!(html.contains(r#"data-action="clear-search""#));
        assert!(html.contains("&lt;gaming&gt;"));
    }
}

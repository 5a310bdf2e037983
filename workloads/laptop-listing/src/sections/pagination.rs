//! Pagination controls.

use rock_catalog::config::Locale;
use rock_catalog::listing::{PageItem, Pagination};

use crate::messages::Messages;

/// Render the pager. Empty for a single page.
pub fn render_pagination(pagination: &Pagination, locale: Locale, msgs: &Messages) -> String {
    let window = pagination.page_window();
    if window.is_empty() {
        return String::new();
    }
    let current = pagination.page;

    let pages_html: String = window
        .iter()
        .map(|item| match *item {
            PageItem::Ellipsis => r#"<span class="pagination-ellipsis">...</span>"#.to_string(),
            PageItem::Page(p) if p == current => format!(
                r#"<span class="pagination-page current" aria-current="page">{}</span>"#,
                p
            ),
            PageItem::Page(p) => format!(
                r#"<button type="button" class="pagination-page" data-action="go-to-page" data-page="{}">{}</button>"#,
                p, p
            ),
        })
        .collect();

    let prev = nav_button("pagination-prev", msgs.previous, current.saturating_sub(1), pagination.has_prev);
    let next = nav_button("pagination-next", msgs.next, current + 1, pagination.has_next);

    format!(
        r#"<nav class="pagination" aria-label="{}" data-section="pagination">
    <p class="pagination-summary">{}</p>
    {}
    <div class="pagination-pages">
        {}
    </div>
    {}
</nav>"#,
        msgs.pagination_label,
        Messages::showing(locale, pagination.start_item(), pagination.end_item(), pagination.total),
        prev,
        pages_html,
        next
    )
}

fn nav_button(class: &str, label: &str, target: usize, enabled: bool) -> String {
    if enabled {
        format!(
            r#"<button type="button" class="{}" data-action="go-to-page" data-page="{}">{}</button>"#,
            class, target, label
        )
    } else {
        format!(
            r#"<button type="button" class="{} disabled" disabled>{}</button>"#,
            class, label
        )
    }
}

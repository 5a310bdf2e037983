//! Laptop listing page.
//!
//! This crate provides:
//! - [`ListingController`]: the state container behind the page
//! - Section renderers for loading, errors, filters, search, grid and pager
//! - [`render_page`]: a complete HTML document for the current state
//! - [`ListingSnapshot`]: the same state as serializable data

mod controller;
mod messages;
pub mod sections;
mod snapshot;

use rock_catalog::api::LaptopRepository;

pub use controller::{ListingController, LoadState};
pub use messages::Messages;
pub use snapshot::{ErrorView, ListingSnapshot, LoadStatus};

use sections::{
    render_empty_state, render_filters, render_load_error, render_loading, render_pagination,
    render_results, render_search_box,
};

/// Render the listing body for the controller's current state.
///
/// Loading wins over everything, then a failed load, then the content.
pub fn render_listing<R: LaptopRepository>(controller: &ListingController<R>) -> String {
    let locale = controller.config().locale;
    let msgs = Messages::for_locale(locale);

    let body = match controller.load_state() {
        LoadState::Loading => render_loading(msgs),
        LoadState::Failed(error) => render_load_error(error, msgs),
        LoadState::Ready => {
            let engine = controller.engine();
            let grid = match engine.empty_state() {
                Some(state) => render_empty_state(&state, engine.config(), msgs),
                None => render_results(&engine.current_page_items(), locale, msgs),
            };
            format!(
                "{}\n{}\n{}\n{}",
                render_search_box(
                    controller.auth(),
                    controller.search_error(),
                    controller.is_searching(),
                    msgs
                ),
                render_filters(engine, msgs),
                grid,
                render_pagination(&engine.pagination(), locale, msgs)
            )
        }
    };

    format!(
        r#"<div class="laptop-listing" id="productos">
<h2 class="listing-heading">{}</h2>
{}
</div>"#,
        msgs.heading, body
    )
}

/// Render a standalone HTML document.
pub fn render_page<R: LaptopRepository>(controller: &ListingController<R>) -> String {
    let locale = controller.config().locale;
    let msgs = Messages::for_locale(locale);
    format!(
        r#"<!DOCTYPE html>
<html lang="{}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Rock4Code - {}</title>
<style>{}</style>
</head>
<body>
<main>
{}
</main>
</body>
</html>
"#,
        locale.code(),
        msgs.heading,
        LISTING_STYLES,
        render_listing(controller)
    )
}

const LISTING_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-hover: #1d4ed8;
    --bg: #0b0f19;
    --card-bg: #111827;
    --text: #f8fafc;
    --text-muted: #94a3b8;
    --border: #1f2937;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

main { max-width: 1400px; margin: 0 auto; padding: 2rem; }

.listing-heading { font-size: 2rem; margin-bottom: 1.5rem; text-align: center; }

.category-filters { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; margin-bottom: 2rem; }

.category-btn {
    padding: 0.5rem 1.25rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: var(--card-bg);
    color: var(--text);
    cursor: pointer;
}

.category-btn.active { background: var(--primary); border-color: var(--primary); }

.ai-banner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.75rem 1rem;
    margin-bottom: 2rem;
    border: 1px solid var(--primary);
    border-radius: 8px;
}

.ai-search { display: flex; gap: 0.5rem; max-width: 720px; margin: 0 auto 1.5rem; flex-wrap: wrap; }
.ai-search input { flex: 1; padding: 0.75rem 1rem; border: 1px solid var(--border); border-radius: 8px; }
.ai-search button { padding: 0.75rem 1.5rem; background: var(--primary); color: white; border: none; border-radius: 8px; }
.search-error { flex-basis: 100%; color: var(--error); font-size: 0.875rem; }

.laptop-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }

.laptop-card {
    background: var(--card-bg);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
    opacity: 0;
    animation: fade-in-up 0.5s ease forwards;
}

.laptop-image { position: relative; aspect-ratio: 4 / 3; background: #1e293b; }
.laptop-image img { width: 100%; height: 100%; object-fit: contain; }
.category-badge {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    padding: 0.125rem 0.5rem;
    border-radius: 4px;
    background: var(--primary);
    font-size: 0.75rem;
    text-transform: capitalize;
}

.laptop-info { padding: 1rem; }
.laptop-brand { color: var(--text-muted); font-size: 0.875rem; }
.laptop-model { font-size: 1.125rem; margin-bottom: 0.75rem; }
.laptop-specs .spec { display: flex; justify-content: space-between; font-size: 0.875rem; color: var(--text-muted); }
.laptop-specs dd { color: var(--text); }
.laptop-price { font-size: 1.5rem; font-weight: 700; margin-top: 0.75rem; }

.details-cta {
    display: block;
    margin: 0 1rem 1rem;
    padding: 0.75rem;
    text-align: center;
    background: var(--primary);
    color: white;
    border-radius: 8px;
    text-decoration: none;
}

.details-cta:hover { background: var(--primary-hover); }

.pagination { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 0.5rem; margin-top: 2rem; }
.pagination-summary { flex-basis: 100%; text-align: center; color: var(--text-muted); }
.pagination-page, .pagination-prev, .pagination-next {
    padding: 0.5rem 1rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    color: var(--text);
    background: var(--card-bg);
}
.pagination-page.current { background: var(--primary); border-color: var(--primary); }
.pagination-ellipsis { padding: 0.5rem; color: var(--text-muted); }
.disabled { opacity: 0.5; cursor: not-allowed; }

.listing-loading, .listing-empty, .error-state { text-align: center; padding: 4rem 2rem; }
.listing-empty button, .error-state button {
    margin-top: 1rem;
    padding: 0.75rem 2rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    cursor: pointer;
}
.error-icon { color: var(--error); margin-bottom: 1rem; }
.error-state p { color: var(--text-muted); }

.spinner {
    width: 3rem;
    height: 3rem;
    margin: 0 auto 1rem;
    border: 4px solid var(--border);
    border-top-color: var(--primary);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

.skeleton-text { color: var(--text-muted); }

@keyframes spin { to { transform: rotate(360deg); } }
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(1rem); }
    to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 640px) {
    main { padding: 1rem; }
    .laptop-grid { grid-template-columns: 1fr; }
}
"##;

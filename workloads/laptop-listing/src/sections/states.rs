//! Loading and load-error panels.

use rock_catalog::CatalogError;

use super::html_escape;
use crate::messages::Messages;

/// Render the loading indicator shown while the catalog fetch is outstanding.
pub fn render_loading(msgs: &Messages) -> String {
    format!(
        r#"<section class="listing-loading" data-section="loading" aria-busy="true">
    <div class="spinner" role="status"></div>
    <p class="loading-title">{}</p>
    <p class="loading-detail">{}</p>
</section>"#,
        msgs.loading, msgs.loading_detail
    )
}

/// Render the load-error panel with its retry action.
pub fn render_load_error(error: &CatalogError, msgs: &Messages) -> String {
    format!(
        r#"<section class="listing-error" data-section="error" data-error-kind="{}">
    <div class="error-state">
        <svg class="error-icon" width="64" height="64" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="12" cy="12" r="10"/>
            <line x1="12" y1="8" x2="12" y2="12"/>
            <line x1="12" y1="16" x2="12.01" y2="16"/>
        </svg>
        <h2>{}</h2>
        <p>{}</p>
        <button type="button" data-action="retry">{}</button>
    </div>
</section>"#,
        kind_attr(error),
        msgs.error_title,
        html_escape(&error.to_string()),
        msgs.retry
    )
}

fn kind_attr(error: &CatalogError) -> &'static str {
    match error {
        CatalogError::Connection { .. } => "transport",
        CatalogError::Timeout(_) => "timeout",
        CatalogError::HttpStatus { .. } => "http_status",
        CatalogError::Decode(_) => "decode",
    }
}

//! The AI search box, shown to signed-in users only.

use rock_auth::AuthContext;
use rock_catalog::SearchError;

use super::html_escape;
use crate::messages::Messages;

/// Render the search box for `auth`.
///
/// Signed-out visitors get nothing. While auth is unknown a neutral
/// placeholder keeps the layout stable. Search errors render inline.
pub fn render_search_box(
    auth: &AuthContext,
    last_error: Option<&SearchError>,
    searching: bool,
    msgs: &Messages,
) -> String {
    match auth {
        AuthContext::SignedOut => String::new(),
        AuthContext::Unknown => format!(
            r#"<div class="ai-search placeholder" data-section="search" aria-busy="true">
    <span class="skeleton-text">{}</span>
</div>"#,
            msgs.auth_pending
        ),
        AuthContext::SignedIn(_) => {
            let error = last_error
                .map(|e| {
                    format!(
                        r#"<p class="search-error" role="alert">{}</p>"#,
                        html_escape(&msgs.search_error(e))
                    )
                })
                .unwrap_or_default();

            format!(
                r#"<form class="ai-search" data-section="search" data-action="search">
    <input type="search" name="consulta" placeholder="{}" aria-label="{}">
    <button type="submit"{}>{}</button>
    {}
</form>"#,
                msgs.search_placeholder,
                msgs.search_button,
                if searching { " disabled" } else { "" },
                if searching { msgs.searching } else { msgs.search_button },
                error
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rock_auth::User;
    use rock_catalog::config::Locale;

    fn msgs() -> &'static Messages {
        Messages::for_locale(Locale::Es)
    }

    #[test]
    fn test_signed_out_renders_nothing() {
        assert!(render_search_box(&AuthContext::SignedOut, None, false, msgs()).is_empty());
    }

    #[test]
    fn test_unknown_renders_placeholder() {
        let html = render_search_box(&AuthContext::Unknown, None, false, msgs());
        assert!(html.contains("placeholder"));
        assert!(!html.contains("<input"));
    }

    #[test]
    fn test_signed_in_shows_inline_error() {
        let auth = AuthContext::signed_in(User::new("Ana").unwrap());
        let html = render_search_box(&auth, Some(&SearchError::EmptyQuery), false, msgs());
        assert!(html.contains("<input"));
        assert!(html.contains(r#"class="search-error""#));
        assert!(html.contains("Describe el portátil que buscas antes de buscar"));
        assert!(!html.contains("Enter a description"));
    }

    #[test]
    fn test_searching_disables_button() {
        let auth = AuthContext::signed_in(User::new("Ana").unwrap());
        let html = render_search_box(&auth, None, true, msgs());
        assert!(html.contains("disabled"));
        assert!(html.contains("Buscando..."));
    }
}

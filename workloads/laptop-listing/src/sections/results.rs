//! Results section - laptop grid.

use rock_catalog::catalog::DisplayLaptop;
use rock_catalog::config::Locale;

use super::html_escape;
use crate::messages::Messages;

/// Milliseconds of entry-animation delay added per card.
pub const CARD_DELAY_STEP_MS: usize = 100;

/// Render the grid for one page of laptops.
pub fn render_results(laptops: &[&DisplayLaptop], locale: Locale, msgs: &Messages) -> String {
    let cards: String = laptops
        .iter()
        .enumerate()
        .map(|(i, l)| render_laptop_card(l, i, locale, msgs))
        .collect();

    format!(
        r#"<section class="listing-results" data-section="results">
    <div class="laptop-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render one card. `index` only drives the animation delay.
pub fn render_laptop_card(laptop: &DisplayLaptop, index: usize, locale: Locale, msgs: &Messages) -> String {
    let graphics = if laptop.has_dedicated_graphics {
        spec_line(msgs.graphics, &laptop.graphics)
    } else {
        String::new()
    };

    format!(
        r#"<article class="laptop-card" data-laptop-id="{}" style="animation-delay: {}ms">
    <div class="laptop-image">
        <img src="{}" alt="{}" loading="lazy">
        <span class="category-badge">{}</span>
    </div>
    <div class="laptop-info">
        <p class="laptop-brand">{}</p>
        <h3 class="laptop-model">{}</h3>
        <dl class="laptop-specs">
            {}{}{}{}{}
        </dl>
        <div class="laptop-price">{}</div>
    </div>
    <a href="/laptops/{}" class="details-cta">{}</a>
</article>"#,
        html_escape(laptop.id.as_str()),
        (index + 1) * CARD_DELAY_STEP_MS,
        html_escape(&laptop.image),
        html_escape(&laptop.title()),
        html_escape(&laptop.category),
        html_escape(&laptop.brand),
        html_escape(&laptop.model),
        spec_line(msgs.processor, &laptop.processor),
        spec_line(msgs.ram, &laptop.ram),
        spec_line(msgs.storage, &laptop.storage),
        spec_line(msgs.screen, &laptop.screen),
        graphics,
        laptop.price.display(locale),
        html_escape(laptop.id.as_str()),
        msgs.details
    )
}

fn spec_line(label: &str, value: &str) -> String {
    format!(
        r#"<div class="spec"><dt>{}:</dt><dd>{}</dd></div>"#,
        label,
        html_escape(value)
    )
}

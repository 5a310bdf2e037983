//! Write the listing page as HTML.

use std::fs;

use anyhow::{bail, Context as _, Result};
use rock_auth::{AuthContext, User};
use rock_catalog::api::CatalogQuery;

use super::{go_to_page, load_listing, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let auth = match args.signed_in {
        Some(name) => AuthContext::signed_in(User::new(name).context("Invalid --signed-in name")?),
        None if args.search.is_some() => bail!("--search needs --signed-in NAME"),
        None => AuthContext::SignedOut,
    };

    let mut controller = load_listing(ctx, auth, CatalogQuery::all()).await?;

    if let Some(category) = args.category.as_deref() {
        controller.select_category(category);
    }
    if let Some(query) = args.search.as_deref() {
        let spinner = ctx.output.spinner("Running AI search");
        controller.run_search(query).await;
        spinner.finish_and_clear();
        if let Some(error) = controller.search_error() {
            ctx.output.warn(&format!("Search failed, rendering it inline: {}", error));
        }
    }
    go_to_page(ctx, &mut controller, args.page);

    let out = ctx.resolve_path(&args.out);
    fs::write(&out, laptop_listing::render_page(&controller))
        .with_context(|| format!("Failed to write {}", out.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "written": out.display().to_string(),
            "listing": controller.snapshot(),
        }));
    } else {
        ctx.output.success(&format!("Wrote {}", out.display()));
    }
    Ok(())
}

//! Natural-language search.

use anyhow::{bail, Context as _, Result};
use rock_auth::{AuthContext, User};
use rock_catalog::api::CatalogQuery;

use super::{go_to_page, load_listing, print_listing, SearchArgs};
use crate::context::Context;
use crate::output::format_elapsed;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let user = User::new(args.user).context("Invalid --user")?;
    let mut controller = load_listing(ctx, AuthContext::signed_in(user), CatalogQuery::all()).await?;

    let spinner = ctx.output.spinner(&format!("Asking the AI about \"{}\"", args.query.trim()));
    let started = std::time::Instant::now();
    controller.run_search(&args.query).await;
    spinner.finish_and_clear();

    if let Some(error) = controller.search_error() {
        bail!("{}", error);
    }
    tracing::info!(elapsed = %format_elapsed(started.elapsed()), "search finished");

    go_to_page(ctx, &mut controller, args.page);
    print_listing(ctx, &controller)
}

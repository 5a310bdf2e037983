//! List the catalog.

use anyhow::Result;
use rock_auth::AuthContext;
use rock_catalog::api::CatalogQuery;

use super::{go_to_page, load_listing, print_listing, ListArgs};
use crate::context::Context;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = match args.brand {
        Some(brand) => CatalogQuery::all().with_brand(brand),
        None => CatalogQuery::all(),
    };
    let mut controller = load_listing(ctx, AuthContext::SignedOut, query).await?;

    if let Some(category) = args.category.as_deref() {
        controller.select_category(category);
    }
    go_to_page(ctx, &mut controller, args.page);

    print_listing(ctx, &controller)
}

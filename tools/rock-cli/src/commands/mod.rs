//! CLI command implementations.

pub mod config;
pub mod health;
pub mod list;
pub mod render;
pub mod search;

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use laptop_listing::{ListingController, LoadState};
use rock_auth::AuthContext;
use rock_catalog::api::{CatalogQuery, HttpLaptopRepository};

use crate::context::Context;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category key to filter by (`todos` for every category).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Ask the API for one brand only.
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// What you are looking for, in your own words.
    pub query: String,

    /// Page of results to show.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Name to search as.
    #[arg(long, default_value = "rock4code")]
    pub user: String,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Category key to filter by.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Run an AI search before rendering (needs --signed-in).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to render.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Render as this signed-in user; signed out otherwise.
    #[arg(long, value_name = "NAME")]
    pub signed_in: Option<String>,

    /// Output HTML file.
    #[arg(short, long)]
    pub out: PathBuf,
}

/// Arguments for the health command.
#[derive(Args)]
pub struct HealthArgs {}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write rock4code.json instead of rock4code.toml.
        #[arg(long = "as-json")]
        as_json: bool,
    },
    /// Validate the configuration.
    Validate,
}

/// Build the HTTP repository from the loaded configuration.
pub(crate) fn repository(ctx: &Context) -> Result<HttpLaptopRepository> {
    HttpLaptopRepository::new(ctx.config.api.clone()).context("Failed to set up the HTTP client")
}

/// Create a controller and load the catalog behind a spinner.
pub(crate) async fn load_listing(
    ctx: &Context,
    auth: AuthContext,
    query: CatalogQuery,
) -> Result<ListingController<HttpLaptopRepository>> {
    let mut controller = ListingController::new(repository(ctx)?, ctx.config.listing.clone(), auth)
        .with_catalog_query(query);

    let spinner = ctx
        .output
        .spinner(&format!("Loading catalog from {}", ctx.config.api.base_url));
    controller.load().await;
    spinner.finish_and_clear();

    if let LoadState::Failed(e) = controller.load_state() {
        bail!("{}", e);
    }
    Ok(controller)
}

/// Move to `page`, warning when it does not exist.
pub(crate) fn go_to_page(ctx: &Context, controller: &mut ListingController<HttpLaptopRepository>, page: usize) {
    if page != 1 && !controller.go_to_page(page) {
        ctx.output.warn(&format!(
            "Page {} does not exist (1-{}); showing page 1",
            page,
            controller.engine().pagination().total_pages
        ));
    }
}

/// Print the current page of a loaded controller.
pub(crate) fn print_listing(ctx: &Context, controller: &ListingController<HttpLaptopRepository>) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&controller.snapshot());
        return Ok(());
    }

    let engine = controller.engine();
    let locale = ctx.config.listing.locale;

    if let Some(query) = engine.ai_query() {
        ctx.output.header(&format!("AI results for \"{}\"", query));
    } else if let Some(category) = engine.mode().category() {
        ctx.output
            .header(&format!("Category: {}", ctx.config.listing.category_label(category.as_str())));
    } else {
        ctx.output.header("All laptops");
    }

    if let Some(error) = controller.search_error() {
        ctx.output.warn(&error.to_string());
    }

    if let Some(empty) = engine.empty_state() {
        ctx.output.info(&empty_message(&empty));
        return Ok(());
    }

    for laptop in engine.current_page_items() {
        ctx.output.laptop(laptop, locale);
    }

    let p = engine.pagination();
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {}/{})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages
    ));
    Ok(())
}

fn empty_message(state: &rock_catalog::listing::EmptyState) -> String {
    use rock_catalog::listing::EmptyState;
    match state {
        EmptyState::CatalogEmpty => "The catalog is empty.".to_string(),
        EmptyState::NoCategoryResults { category } => {
            format!("No laptops in category '{}'. Try --category todos.", category)
        }
        EmptyState::NoAiResults { query } => format!("The AI search found nothing for \"{}\".", query),
    }
}

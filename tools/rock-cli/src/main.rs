//! Rock4Code CLI - browse the laptop catalog from the terminal.
//!
//! Commands:
//! - `rock4code list` - List laptops, optionally by category
//! - `rock4code search` - Natural-language AI search
//! - `rock4code render` - Write the listing page as HTML
//! - `rock4code health` - Probe the Catalog API
//! - `rock4code config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;
mod tracing_setup;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, HealthArgs, ListArgs, RenderArgs, SearchArgs};
use tracing_setup::Verbosity;

/// Rock4Code - browse and search the laptop catalog
#[derive(Parser)]
#[command(name = "rock4code")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List laptops in the catalog
    List(ListArgs),

    /// Search the catalog in your own words
    Search(SearchArgs),

    /// Render the listing page to an HTML file
    Render(RenderArgs),

    /// Check that the Catalog API is reachable
    Health(HealthArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let output = output::Output::new(cli.verbose, cli.quiet, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Health(args) => commands::health::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::parse_from([
            "rock4code", "render", "--search", "ligero", "--signed-in", "Ana", "-o", "out.html", "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.search.as_deref(), Some("ligero"));
                assert_eq!(args.signed_in.as_deref(), Some("Ana"));
                assert_eq!(args.page, 1);
            }
            _ => panic!("expected render"),
        }
    }
}

//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, API_URL_ENV};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, as_json } => init_config(force, as_json, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    if std::env::var_os(API_URL_ENV).is_some() {
        ctx.output.kv("override", &format!("{} is set", API_URL_ENV));
    }

    let api = &ctx.config.api;
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &api.base_url);
    ctx.output.kv("search_path", &api.search_path);
    ctx.output.kv("timeout_secs", &api.timeout_secs.to_string());
    ctx.output.kv("health_timeout_secs", &api.health_timeout_secs.to_string());

    let listing = &ctx.config.listing;
    ctx.output.info("[listing]");
    ctx.output.kv("page_size", &listing.page_size.to_string());
    ctx.output.kv("locale", listing.locale.code());
    ctx.output.kv("all_category", &listing.all_category);
    for category in &listing.categories {
        ctx.output.list_item(&format!("{} ({})", category.key, category.label));
    }

    Ok(())
}

fn init_config(force: bool, as_json: bool, ctx: &Context) -> Result<()> {
    let name = if as_json { CONFIG_NAMES[2] } else { CONFIG_NAMES[0] };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        let overwrite = !ctx.output.is_json()
            && Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()?;
        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    if as_json {
        CliConfig::default().save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let problems = ctx.config.problems();
    if problems.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for problem in &problems {
        ctx.output.error(&format!("Error: {}", problem));
    }
    bail!("Configuration has {} error(s)", problems.len());
}

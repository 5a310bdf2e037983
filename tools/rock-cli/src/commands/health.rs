//! Probe the Catalog API.

use std::time::Instant;

use anyhow::{bail, Result};
use chrono::Utc;
use rock_catalog::api::{HealthStatus, LaptopRepository};

use super::{repository, HealthArgs};
use crate::context::Context;
use crate::output::{format_elapsed, health_badge};

/// Run the health command.
pub async fn run(_args: HealthArgs, ctx: &Context) -> Result<()> {
    let repo = repository(ctx)?;

    let spinner = ctx
        .output
        .spinner(&format!("Checking {}", ctx.config.api.base_url));
    let started = Instant::now();
    let status = repo.check_health().await;
    let elapsed = started.elapsed();
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "base_url": ctx.config.api.base_url,
            "status": status,
            "elapsed_ms": elapsed.as_millis() as u64,
            "checked_at": Utc::now().to_rfc3339(),
        }));
    } else {
        ctx.output.kv("url", &ctx.config.api.base_url);
        ctx.output.kv("status", &health_badge(&status));
        ctx.output.kv("elapsed", &format_elapsed(elapsed));
        if let HealthStatus::Unreachable { message } = &status {
            ctx.output.kv("detail", message);
        }
    }

    if !status.is_healthy() {
        bail!("Catalog API is not healthy");
    }
    Ok(())
}

//! Output formatting for the CLI.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rock_catalog::api::HealthStatus;
use rock_catalog::catalog::DisplayLaptop;
use rock_catalog::config::Locale;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    quiet: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, quiet: bool, json: bool) -> Self {
        Self { verbose, quiet, json }
    }

    fn plain(&self) -> bool {
        !self.json && !self.quiet
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.plain() {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.plain() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.plain() {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.plain() {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.plain() {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print one laptop as a short card.
    pub fn laptop(&self, laptop: &DisplayLaptop, locale: Locale) {
        if !self.plain() {
            return;
        }
        println!(
            "  {} {}  {}",
            style(&laptop.brand).bold(),
            laptop.model,
            style(laptop.price.display(locale)).green().bold()
        );
        let mut specs = vec![
            laptop.processor.clone(),
            laptop.ram.clone(),
            laptop.storage.clone(),
            laptop.screen.clone(),
        ];
        if laptop.has_dedicated_graphics {
            specs.push(laptop.graphics.clone());
        }
        println!(
            "    {} {}",
            style(format!("[{}]", laptop.category)).cyan(),
            style(specs.join(" · ")).dim()
        );
        if self.verbose && !laptop.description.is_empty() {
            println!("    {}", style(&laptop.description).italic());
        }
    }

    /// Create a spinner for an outstanding request.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if !self.plain() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Status badge for health results.
pub fn health_badge(status: &HealthStatus) -> String {
    match status {
        HealthStatus::Healthy { status } => style(format!("healthy ({})", status)).green().to_string(),
        HealthStatus::Unhealthy { status } => style(format!("unhealthy ({})", status)).yellow().to_string(),
        HealthStatus::TimedOut => style("timed out").red().to_string(),
        HealthStatus::Unreachable { .. } => style("unreachable").red().to_string(),
    }
}

/// Format duration as human-readable string.
pub fn format_elapsed(elapsed: Duration) -> String {
    let ms = elapsed.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.1}s", elapsed.as_secs_f64())
    }
}

//! Tracing subscriber initialization for the rock4code binary.
//!
//! # Priority (highest to lowest)
//!
//! 1. `ROCK4CODE_LOG` env var (per-target directives, e.g. `rock_catalog=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-v` → debug, `-q` → error)
//! 4. Default level: `warn`

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Project-specific log filter variable.
pub const LOG_ENV: &str = "ROCK4CODE_LOG";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `--quiet` / `-q`: only errors.
    Quiet,
    /// Default: warnings and above.
    Normal,
    /// `--verbose` / `-v`: debug-level output.
    Verbose,
}

impl Verbosity {
    /// Verbose wins when both flags are set.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays parseable. Call once, first thing in `main`.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(verbosity);
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true);

    if verbosity == Verbosity::Verbose {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.with_timer(fmt::time::uptime()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.without_time().compact())
            .init();
    }
}

/// `ROCK4CODE_LOG` > `RUST_LOG` > CLI verbosity. Unparseable values fall through.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Some(filter) = std::env::var(LOG_ENV)
        .ok()
        .and_then(|d| EnvFilter::try_new(d).ok())
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(default_directives(verbosity))
}

fn default_directives(verbosity: Verbosity) -> String {
    let level = verbosity.default_level().as_str().to_ascii_lowercase();
    match verbosity {
        Verbosity::Verbose => format!(
            "{level},rock_catalog=debug,rock_data=debug,laptop_listing=debug,rock4code=debug"
        ),
        _ => level,
    }
}

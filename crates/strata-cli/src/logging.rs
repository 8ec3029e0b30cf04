//! Stderr diagnostics for the `strata` binary.
//!
//! The core and adapter crates only emit events. Housekeeping problems such
//! as an unreadable group directory or an entry that could not be removed
//! arrive as `warn` events, and every deleted item as an `info` event, so the
//! default level shows the former and `-v` adds the latter.
//!
//! A set `RUST_LOG` replaces the level derived from the flags.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are printed when `RUST_LOG` is unset.
const WORKSPACE_TARGETS: [&str; 3] = ["strata", "strata_core", "strata_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => workspace_filter(args.log_level()),
    };

    let stderr = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .try_init()
        .context("tracing subscriber was already installed")
}

/// `level` for the workspace crates, nothing from dependencies.
fn workspace_filter(level: LevelFilter) -> EnvFilter {
    let directives = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse_lossy(directives)
}

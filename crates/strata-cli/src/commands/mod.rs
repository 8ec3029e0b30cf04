//! Command handlers, one module per subcommand.

use strata_adapters::{LocalFilesystem, TracingDiagnostics};
use strata_core::prelude::HousekeepingService;

pub mod completions;
pub mod components;
pub mod config;
pub mod helmfile;
pub mod paths;
pub mod terraform;

/// Housekeeping wired to the real filesystem, reporting through tracing.
fn housekeeping() -> HousekeepingService {
    HousekeepingService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(TracingDiagnostics::new()),
    )
}

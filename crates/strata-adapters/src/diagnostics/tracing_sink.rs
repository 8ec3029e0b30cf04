//! Diagnostics adapter that forwards to `tracing`.

use strata_core::application::ports::Diagnostics;

/// Production diagnostics: warnings become `WARN` events, progress `INFO`.
///
/// Whether anything is printed depends on the subscriber the binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // No subscriber installed: events are dropped, nothing panics.
    #[test]
    fn emits_without_subscriber() {
        let diagnostics = TracingDiagnostics::new();
        diagnostics.warn("Error deleting x: permission denied");
        diagnostics.info("Deleted x");
    }
}

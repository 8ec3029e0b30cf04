//! Diagnostics adapters: where housekeeping warnings and progress end up.

mod recording;
mod tracing_sink;

pub use recording::{Level, Record, RecordingDiagnostics};
pub use tracing_sink::TracingDiagnostics;

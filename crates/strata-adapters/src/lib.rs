//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod diagnostics;
pub mod filesystem;

// Re-export commonly used adapters
pub use diagnostics::{RecordingDiagnostics, TracingDiagnostics};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `strata-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory listing and recursive removal
//!   - `Diagnostics`: the warning and info sinks used by housekeeping
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Diagnostics, DirEntry, Filesystem};

#[cfg(test)]
pub use output::{MockDiagnostics, MockFilesystem};

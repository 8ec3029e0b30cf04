//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (HousekeepingService, CleanService)
//! - **Ports**: Interface definitions (traits) for the filesystem and diagnostics
//! - **Errors**: Application-specific error types
//!
//! Naming and placement rules live in `crate::domain`; services here only
//! walk and prune the directory tree those rules describe.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CleanOptions, CleanReport, CleanService, HousekeepingService};

// Re-export port traits (for adapter implementation)
pub use ports::{Diagnostics, DirEntry, Filesystem};

pub use error::ApplicationError;

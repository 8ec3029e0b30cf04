//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::Path;

use crate::error::StrataResult;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the child (a single path segment).
    pub name: String,
    /// Whether the entry reports itself as a directory. Symlinks are not followed.
    pub is_dir: bool,
}

impl DirEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// List the immediate children of `path`, in the order the backend yields them.
    fn read_dir(&self, path: &Path) -> StrataResult<Vec<DirEntry>>;

    /// Remove a file or a whole directory tree. A missing path is not an error.
    fn remove_all(&self, path: &Path) -> StrataResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for housekeeping diagnostics.
///
/// Non-fatal failures go to [`Diagnostics::warn`]; progress goes to
/// [`Diagnostics::info`]. Transport is up to the adapter.
///
/// Implemented by:
/// - `strata_adapters::diagnostics::TracingDiagnostics` (production)
/// - `strata_adapters::diagnostics::RecordingDiagnostics` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    fn warn(&self, message: &str);

    fn info(&self, message: &str);
}

//! Application layer errors.
//!
//! These errors represent failures while touching the filesystem, not
//! violations of the naming rules.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The top-level directory of a housekeeping operation could not be listed.
    #[error("error reading directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// A single path could not be removed.
    #[error("error deleting {}: {source}", .path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// A component's working directory does not exist.
    #[error("Component directory not found: {}", .path.display())]
    MissingWorkingDir { path: PathBuf },

    /// Filesystem adapter state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter error: {reason}")]
    AdapterFailure { reason: String },
}

impl ApplicationError {
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn remove_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RemoveFailed {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryRead { path, .. } => vec![
                format!("Failed to list: {}", path.display()),
                "Check that the directory exists and is readable".into(),
                "Verify base_path and components.*.base_path in strata.yaml".into(),
            ],
            Self::RemoveFailed { path, .. } => vec![
                format!("Failed to remove: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::MissingWorkingDir { path } => vec![
                format!("Expected a component at: {}", path.display()),
                "List known components: strata components".into(),
                "Use --base-component if the component is an alias".into(),
            ],
            Self::AdapterFailure { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::DirectoryRead { .. } | Self::RemoveFailed { .. } => ErrorCategory::Internal,
            Self::MissingWorkingDir { .. } => ErrorCategory::NotFound,
            Self::AdapterFailure { .. } => ErrorCategory::Internal,
        }
    }
}

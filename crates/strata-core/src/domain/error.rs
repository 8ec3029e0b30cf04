use thiserror::Error;

use crate::error::ErrorCategory;

/// Domain error type.
///
/// The naming and layout rules are total and never produce one of these.
/// They come from the input checks in [`crate::domain::DomainValidator`],
/// which callers run before handing records to the rules.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Folder prefix '{prefix}' contains a path separator after replacement")]
    UnreplacedFolderPrefix { prefix: String },

    #[error("Unknown component kind '{0}'")]
    UnknownComponentKind(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("'{}' must not be empty", field),
                "Pass the component and the stack: strata terraform paths <component> -s <stack>"
                    .into(),
            ],
            Self::UnreplacedFolderPrefix { prefix } => vec![
                format!("'{}' would split an artifact name across directories", prefix),
                "Replace '/' with '-' before building the stack info".into(),
            ],
            Self::UnknownComponentKind(_) => vec!["Supported kinds: terraform, helmfile".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } | Self::UnreplacedFolderPrefix { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownComponentKind(_) => ErrorCategory::NotFound,
        }
    }
}

//! Core domain layer for Strata.
//!
//! Pure rules that turn a resolved [`CliConfiguration`] and
//! [`ConfigAndStacksInfo`] into working directories and artifact paths.
//!
//! - **No I/O**: nothing here reads or writes the filesystem
//! - **Total**: naming and layout functions never fail
//! - **Deterministic**: identical inputs always give identical paths
pub mod error;
pub mod layout;
pub mod model;
pub mod naming;

mod validation;

pub use error::DomainError;
pub use layout::{ComponentLayout, join_path};
pub use model::{
    CliConfiguration, ComponentKind, Components, ConfigAndStacksInfo, HelmfileSettings,
    TerraformSettings,
};
pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn component_kind_parses_aliases() {
        assert_eq!(ComponentKind::from_str("terraform").unwrap(), ComponentKind::Terraform);
        assert_eq!(ComponentKind::from_str("TF").unwrap(), ComponentKind::Terraform);
        assert_eq!(ComponentKind::from_str("helm").unwrap(), ComponentKind::Helmfile);
        assert!(ComponentKind::from_str("pulumi").is_err());
    }

    #[test]
    fn component_kind_display_round_trips_through_serde() {
        let json = serde_json::to_string(&ComponentKind::Helmfile).unwrap();
        assert_eq!(json, "\"helmfile\"");
        assert_eq!(ComponentKind::Helmfile.to_string(), "helmfile");
    }

    #[test]
    fn configuration_defaults_fill_missing_sections() {
        let config: CliConfiguration =
            serde_json::from_str(r#"{ "base_path": "/repo" }"#).unwrap();
        assert_eq!(config.base_path, std::path::Path::new("/repo"));
        assert_eq!(
            config.component_base_path(ComponentKind::Terraform),
            std::path::Path::new("components/terraform")
        );
        assert_eq!(
            config.component_base_path(ComponentKind::Helmfile),
            std::path::Path::new("components/helmfile")
        );
    }

    #[test]
    fn only_terraform_has_planfiles() {
        assert!(ComponentKind::Terraform.has_planfile());
        assert!(!ComponentKind::Helmfile.has_planfile());
    }

    #[test]
    fn domain_errors_carry_suggestions() {
        let err = DomainError::MissingRequiredField { field: "component" };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("component")));
    }
}

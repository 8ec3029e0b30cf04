//! Resolved inputs consumed by the layout rules.
//!
//! Both records arrive fully resolved from the outside world: the CLI loads
//! [`CliConfiguration`] and resolves a component/stack pair into
//! [`ConfigAndStacksInfo`]. The domain only reads them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Project-level settings relevant to artifact placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfiguration {
    /// Project root. Absolute, or relative to the process working directory.
    pub base_path: PathBuf,
    /// Per-tool component roots, relative to `base_path`.
    pub components: Components,
}

/// Component roots for every supported tool family.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    pub terraform: TerraformSettings,
    pub helmfile: HelmfileSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerraformSettings {
    pub base_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmfileSettings {
    pub base_path: PathBuf,
}

impl Default for TerraformSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("components/terraform"),
        }
    }
}

impl Default for HelmfileSettings {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("components/helmfile"),
        }
    }
}

impl Default for CliConfiguration {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            components: Components::default(),
        }
    }
}

impl CliConfiguration {
    /// Build a configuration from the three base paths.
    pub fn new(
        base_path: impl Into<PathBuf>,
        terraform_base_path: impl Into<PathBuf>,
        helmfile_base_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            components: Components {
                terraform: TerraformSettings {
                    base_path: terraform_base_path.into(),
                },
                helmfile: HelmfileSettings {
                    base_path: helmfile_base_path.into(),
                },
            },
        }
    }

    /// Component root for `kind`, relative to [`Self::base_path`].
    pub fn component_base_path(&self, kind: ComponentKind) -> &Path {
        match kind {
            ComponentKind::Terraform => &self.components.terraform.base_path,
            ComponentKind::Helmfile => &self.components.helmfile.base_path,
        }
    }
}

/// A component resolved against one stack.
///
/// `component_folder_prefix_replaced` must already be a single path segment:
/// whoever builds this record replaces the separators of
/// `component_folder_prefix`. Nothing in the domain performs or checks that
/// replacement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConfigAndStacksInfo {
    /// Grouping directories above the component, possibly multi-segment or empty.
    pub component_folder_prefix: String,
    /// `component_folder_prefix` with path separators substituted.
    pub component_folder_prefix_replaced: String,
    /// On-disk component directory after alias resolution.
    pub final_component: String,
    /// Component name as referenced by the user.
    pub component: String,
    /// Stack-unique leading token of every artifact name.
    pub context_prefix: String,
    /// Stack name as given by the user.
    pub stack: String,
}

/// Supported tool families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Terraform,
    Helmfile,
}

impl ComponentKind {
    pub const ALL: [Self; 2] = [Self::Terraform, Self::Helmfile];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terraform => "terraform",
            Self::Helmfile => "helmfile",
        }
    }

    /// Whether the tool writes a planfile next to the varfile.
    pub fn has_planfile(self) -> bool {
        matches!(self, Self::Terraform)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terraform" | "tf" => Ok(Self::Terraform),
            "helmfile" | "helm" => Ok(Self::Helmfile),
            other => Err(DomainError::UnknownComponentKind(other.to_string())),
        }
    }
}

//! Working directories and artifact paths.
//!
//! The working directory is built from the *original* folder prefix so a
//! nested `networking/aws` grouping stays nested on disk, while file names
//! (see [`crate::domain::naming`]) use the replaced, single-segment form.
//! Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::model::{CliConfiguration, ComponentKind, ConfigAndStacksInfo};
use crate::domain::naming;

/// Append `tail` to `base` and normalize the result lexically.
///
/// Unlike [`Path::join`], an absolute `tail` does not replace `base`: its
/// root is dropped and its segments are appended, so the result never
/// leaves `base` through a leading `/`. `.` segments vanish, `..` removes
/// the previous normal segment, and an empty result becomes `.`.
pub fn join_path(base: impl AsRef<Path>, tail: impl AsRef<Path>) -> PathBuf {
    let mut joined = PathBuf::new();
    let mut normal_segments = 0usize;

    let base_components = base.as_ref().components().map(|c| (true, c));
    let tail_components = tail.as_ref().components().map(|c| (false, c));

    for (from_base, component) in base_components.chain(tail_components) {
        match component {
            Component::Prefix(_) | Component::RootDir if from_base => joined.push(component),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if normal_segments > 0 {
                    joined.pop();
                    normal_segments -= 1;
                } else if !joined.has_root() {
                    joined.push("..");
                }
            }
            Component::Normal(segment) => {
                joined.push(segment);
                normal_segments += 1;
            }
        }
    }

    if joined.as_os_str().is_empty() {
        joined.push(".");
    }
    joined
}

/// `{BasePath}/{Components.<Tool>.BasePath}`: the root holding every component of `kind`.
pub fn component_base_dir(kind: ComponentKind, config: &CliConfiguration) -> PathBuf {
    join_path(&config.base_path, config.component_base_path(kind))
}

/// Working directory of `info` for the given tool family.
pub fn working_dir(
    kind: ComponentKind,
    config: &CliConfiguration,
    info: &ConfigAndStacksInfo,
) -> PathBuf {
    let group_dir = join_path(
        component_base_dir(kind, config),
        &info.component_folder_prefix,
    );
    join_path(group_dir, &info.final_component)
}

pub fn terraform_working_dir(config: &CliConfiguration, info: &ConfigAndStacksInfo) -> PathBuf {
    working_dir(ComponentKind::Terraform, config, info)
}

pub fn helmfile_working_dir(config: &CliConfiguration, info: &ConfigAndStacksInfo) -> PathBuf {
    working_dir(ComponentKind::Helmfile, config, info)
}

pub fn terraform_varfile_path(config: &CliConfiguration, info: &ConfigAndStacksInfo) -> PathBuf {
    join_path(
        terraform_working_dir(config, info),
        naming::terraform_varfile_name(info),
    )
}

pub fn terraform_planfile_path(config: &CliConfiguration, info: &ConfigAndStacksInfo) -> PathBuf {
    join_path(
        terraform_working_dir(config, info),
        naming::terraform_planfile_name(info),
    )
}

pub fn helmfile_varfile_path(config: &CliConfiguration, info: &ConfigAndStacksInfo) -> PathBuf {
    join_path(
        helmfile_working_dir(config, info),
        naming::helmfile_varfile_name(info),
    )
}

/// Every derived path for one (component, stack) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentLayout {
    pub kind: ComponentKind,
    pub component: String,
    pub stack: String,
    pub working_dir: PathBuf,
    pub varfile: PathBuf,
    /// Only terraform produces a planfile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planfile: Option<PathBuf>,
}

impl ComponentLayout {
    pub fn resolve(
        kind: ComponentKind,
        config: &CliConfiguration,
        info: &ConfigAndStacksInfo,
    ) -> Self {
        let (varfile, planfile) = match kind {
            ComponentKind::Terraform => (
                terraform_varfile_path(config, info),
                Some(terraform_planfile_path(config, info)),
            ),
            ComponentKind::Helmfile => (helmfile_varfile_path(config, info), None),
        };

        Self {
            kind,
            component: info.component.clone(),
            stack: info.stack.clone(),
            working_dir: working_dir(kind, config, info),
            varfile,
            planfile,
        }
    }
}

//! Clean Service - remove generated terraform artifacts.
//!
//! Two scopes:
//! 1. One component in one stack: its working directory loses the tool
//!    caches plus that stack's varfile and planfile.
//! 2. Every component under the terraform base dir (optionally filtered by
//!    name prefix): each found folder loses the tool caches.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, services::HousekeepingService},
    domain::{CliConfiguration, ComponentKind, ConfigAndStacksInfo, join_path, layout, naming},
    error::StrataResult,
};

/// Tool-generated entries that are safe to delete from any terraform working dir.
pub const TERRAFORM_DATA_DIR: &str = ".terraform";
pub const TERRAFORM_LOCK_FILE: &str = ".terraform.lock.hcl";
pub const BACKEND_CONFIG_FILE: &str = "backend.tf.json";

/// Knobs for a clean run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Keep `.terraform.lock.hcl` so provider versions stay pinned.
    pub skip_lock_file: bool,
}

/// What a clean run targeted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Directory the folders are relative to.
    pub root: PathBuf,
    /// Folders pruned, relative to `root`. Empty for a single component.
    pub folders: Vec<PathBuf>,
    /// Entry names removed from each folder.
    pub items: Vec<String>,
}

/// Service for `terraform clean`.
pub struct CleanService {
    housekeeping: HousekeepingService,
}

impl CleanService {
    /// Create a new clean service on top of the housekeeping operations.
    pub fn new(housekeeping: HousekeepingService) -> Self {
        Self { housekeeping }
    }

    /// Remove generated artifacts of one component in one stack.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::MissingWorkingDir`] if the component directory
    /// does not exist; otherwise whatever `delete_recursive` reports.
    #[instrument(skip_all, fields(component = %info.component, stack = %info.stack))]
    pub fn clean_component(
        &self,
        config: &CliConfiguration,
        info: &ConfigAndStacksInfo,
        options: CleanOptions,
    ) -> StrataResult<CleanReport> {
        let working_dir = layout::terraform_working_dir(config, info);
        if !self.housekeeping.exists(&working_dir) {
            return Err(ApplicationError::MissingWorkingDir { path: working_dir }.into());
        }

        let mut items = generated_items(options);
        items.push(naming::terraform_varfile_name(info));
        items.push(naming::terraform_planfile_name(info));

        self.housekeeping.delete_recursive(&working_dir, items.as_slice())?;

        info!(path = %working_dir.display(), "Component cleaned");
        Ok(CleanReport {
            root: working_dir,
            folders: Vec::new(),
            items,
        })
    }

    /// Remove tool caches from every terraform component whose folder name
    /// starts with `prefix` (all of them when `prefix` is empty).
    ///
    /// Folders are pruned in search order. A found folder that an earlier
    /// prune already removed (for example `vpc/.terraform` after `vpc`) is
    /// skipped and left out of the report.
    #[instrument(skip_all, fields(prefix = %prefix))]
    pub fn clean_all(
        &self,
        config: &CliConfiguration,
        prefix: &str,
        options: CleanOptions,
    ) -> StrataResult<CleanReport> {
        let root = layout::component_base_dir(ComponentKind::Terraform, config);
        let found = self.housekeeping.find_folders_with_prefix(&root, prefix)?;
        let items = generated_items(options);

        let mut folders = Vec::with_capacity(found.len());
        for folder in found {
            let path = join_path(&root, &folder);
            if !self.housekeeping.exists(&path) {
                debug!(path = %path.display(), "Folder already removed, skipping");
                continue;
            }
            self.housekeeping.delete_recursive(&path, items.as_slice())?;
            folders.push(folder);
        }

        info!(folders = folders.len(), "Components cleaned");
        Ok(CleanReport {
            root,
            folders,
            items,
        })
    }
}

fn generated_items(options: CleanOptions) -> Vec<String> {
    let mut items = vec![TERRAFORM_DATA_DIR.to_string()];
    if !options.skip_lock_file {
        items.push(TERRAFORM_LOCK_FILE.to_string());
    }
    items.push(BACKEND_CONFIG_FILE.to_string());
    items
}

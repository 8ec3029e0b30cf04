//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. Core
//! only ever sees the [`CliConfiguration`] slice of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `STRATA_BASE_PATH`,
//!    `STRATA_COMPONENTS__TERRAFORM__BASE_PATH`, `STRATA_OUTPUT__NO_COLOR`, ...
//! 2. `--config FILE`, or `strata.{yaml,yml,toml,json}` in the current directory
//! 3. The global config file (see [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use strata_core::domain::Components;
use strata_core::prelude::CliConfiguration;

/// File stem searched for in the current directory.
pub const LOCAL_CONFIG_STEM: &str = "strata";
/// File written by `strata config init` without `--global`.
pub const LOCAL_CONFIG_FILE: &str = "strata.toml";

const ENV_PREFIX: &str = "STRATA";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Project root the component directories are relative to.
    pub base_path: PathBuf,
    /// Per-tool component roots.
    pub components: Components,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let layout = CliConfiguration::default();
        Self {
            base_path: layout.base_path,
            components: layout.components,
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration by layering defaults, config files and the
    /// environment.
    ///
    /// `config_file` is the path passed via `--config`. It must exist when
    /// given; the implicit `strata.*` lookup is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to serialise default configuration")?;

        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(Self::config_path()).required(false));

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder.add_source(config::File::with_name(LOCAL_CONFIG_STEM).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        tracing::debug!(base_path = %config.base_path.display(), "Configuration loaded");
        Ok(config)
    }

    /// The path layout handed to core.
    pub fn cli_configuration(&self) -> CliConfiguration {
        CliConfiguration {
            base_path: self.base_path.clone(),
            components: self.components.clone(),
        }
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render as TOML, the format `config init` writes.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Where `config init` writes to.
    pub fn init_path(global: bool) -> PathBuf {
        if global {
            Self::config_path()
        } else {
            Path::new(".").join(LOCAL_CONFIG_FILE)
        }
    }
}

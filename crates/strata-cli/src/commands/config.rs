//! `strata config`: inspect and initialise configuration.

use std::fs;

use crate::{
    cli::{ConfigCommands, ConfigInitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.print(&render(&config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::Init(args) => init(&args, &output)?,
    }

    Ok(())
}

fn init(args: &ConfigInitArgs, output: &OutputManager) -> CliResult<()> {
    let path = AppConfig::init_path(args.global);
    if path.exists() && !args.force {
        return Err(CliError::ConfigExists { path });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, render(&AppConfig::default())?)
        .with_cli_context(|| format!("Failed to write {}", path.display()))?;

    output.success(&format!("Wrote {}", path.display()))?;
    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

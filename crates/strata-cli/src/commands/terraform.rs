//! `strata terraform` subcommands.

use std::io::IsTerminal as _;

use tracing::{info, instrument};

use strata_core::prelude::{CleanOptions, CleanReport, CleanService, ComponentKind, layout};

use crate::{
    cli::{CleanArgs, TerraformCommands},
    commands::{housekeeping, paths},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    stack_info,
};

pub fn execute(cmd: TerraformCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        TerraformCommands::Paths(args) => {
            paths::execute(ComponentKind::Terraform, args, &config, &output)
        }
        TerraformCommands::Clean(args) => clean(args, &config, &output),
    }
}

/// Delete generated artifacts for one component in one stack, or the tool
/// caches of every component folder with `--everything`.
#[instrument(skip_all, fields(component = ?args.component, stack = ?args.stack, everything = args.everything))]
fn clean(args: CleanArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let options = CleanOptions {
        skip_lock_file: args.skip_lock_file,
    };
    let layout_config = config.cli_configuration();
    let service = CleanService::new(housekeeping());

    let report = match (args.component.as_deref(), args.stack.as_deref()) {
        (Some(component), Some(stack)) => {
            let info = stack_info::resolve(component, stack, args.base_component.as_deref())?;
            confirm(
                args.force,
                &format!(
                    "Delete generated files of '{}' in stack '{}'?",
                    info.component, info.stack
                ),
            )?;
            service.clean_component(&layout_config, &info, options)?
        }
        (prefix, None) if args.everything => {
            let prefix = prefix.unwrap_or_default();
            let root = layout::component_base_dir(ComponentKind::Terraform, &layout_config);
            let scope = if prefix.is_empty() {
                "every component".to_string()
            } else {
                format!("every component starting with '{prefix}'")
            };
            confirm(
                args.force,
                &format!("Delete generated files from {scope} under {}?", root.display()),
            )?;
            service.clean_all(&layout_config, prefix, options)?
        }
        (Some(component), None) => {
            return Err(CliError::MissingStack {
                component: component.to_string(),
            });
        }
        (None, _) => {
            return Err(CliError::InvalidInput {
                message: "Name a component to clean, or pass --everything".into(),
                source: None,
            });
        }
    };

    info!(items = report.items.len(), folders = report.folders.len(), "Clean finished");
    render_report(&report, args.component.is_some() && !args.everything, output)
}

fn render_report(report: &CleanReport, single: bool, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    if single {
        output.success(&format!("Cleaned {}", report.root.display()))?;
        for item in &report.items {
            output.print(&format!("  {item}"))?;
        }
    } else if report.folders.is_empty() {
        output.warning(&format!(
            "No component folders matched under {}",
            report.root.display()
        ))?;
    } else {
        output.success(&format!(
            "Cleaned {} component folder(s) under {}",
            report.folders.len(),
            report.root.display()
        ))?;
        for folder in &report.folders {
            output.print(&format!("  {}", folder.display()))?;
        }
    }

    Ok(())
}

/// Ask before deleting unless `force` is set.
fn confirm(force: bool, prompt: &str) -> CliResult<()> {
    if force {
        return Ok(());
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "Refusing to delete without confirmation; pass --force".into(),
            source: None,
        });
    }
    if ask(prompt)? {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

#[cfg(feature = "interactive")]
fn ask(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "Failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn ask(_prompt: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

//! `strata helmfile` subcommands.

use strata_core::prelude::ComponentKind;

use crate::{
    cli::HelmfileCommands, commands::paths, config::AppConfig, error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: HelmfileCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        HelmfileCommands::Paths(args) => {
            paths::execute(ComponentKind::Helmfile, args, &config, &output)
        }
    }
}

//! `strata components`: list component folders under a base directory.

use tracing::instrument;

use strata_core::prelude::{ComponentKind, layout};

use crate::{
    cli::ComponentsArgs, commands::housekeeping, config::AppConfig, error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = ?args.kind, prefix = %args.prefix))]
pub fn execute(args: ComponentsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = ComponentKind::from(args.kind);
    let root = layout::component_base_dir(kind, &config.cli_configuration());

    let mut folders = housekeeping().find_folders_with_prefix(&root, &args.prefix)?;
    folders.sort();

    if output.is_json() {
        output.json(&folders)?;
        return Ok(());
    }

    if folders.is_empty() {
        output.warning(&format!(
            "No {kind} component folders under {}",
            root.display()
        ))?;
        return Ok(());
    }

    output.header(&format!("{kind} components under {}:", root.display()))?;
    for folder in &folders {
        output.print(&format!("  {}", folder.display()))?;
    }

    Ok(())
}

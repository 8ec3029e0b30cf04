//! `strata terraform paths` / `strata helmfile paths`.

use tracing::instrument;

use strata_core::prelude::{ComponentKind, ComponentLayout};

use crate::{
    cli::PathsArgs, config::AppConfig, error::CliResult, output::OutputManager, stack_info,
};

/// Print where a component's working dir and artifacts live for one stack.
#[instrument(skip_all, fields(kind = %kind, component = %args.component, stack = %args.stack))]
pub fn execute(
    kind: ComponentKind,
    args: PathsArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let info = stack_info::resolve(&args.component, &args.stack, args.base_component.as_deref())?;
    let layout = ComponentLayout::resolve(kind, &config.cli_configuration(), &info);

    if output.is_json() {
        output.json(&layout)?;
        return Ok(());
    }

    output.header(&format!(
        "{kind} component '{}' in stack '{}'",
        layout.component, layout.stack
    ))?;
    output.field("working dir", &layout.working_dir.display().to_string())?;
    output.field("varfile", &layout.varfile.display().to_string())?;
    if let Some(planfile) = &layout.planfile {
        output.field("planfile", &planfile.display().to_string())?;
    }

    Ok(())
}

//! Implementation of the `stencil vimspector` command.

use tracing::instrument;

use stencil_core::prelude::*;

use crate::{
    cli::{GlobalArgs, VimspectorArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil vimspector` command.
///
/// The launch configuration points at `main.py` when the project root has
/// one, otherwise at the script named after the application.
#[instrument(skip_all)]
pub fn execute(
    args: VimspectorArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scaffolder = super::build_scaffolder(&global, &config)?;

    let report = scaffolder.debugger_config(&DebuggerOptions {
        app_name: args.app_name,
    })?;

    super::print_report(&report, &output)
}

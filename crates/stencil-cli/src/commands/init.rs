//! Implementation of the `stencil init` command.

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil init` command: write the package marker file into
/// an existing package directory.
#[instrument(skip_all, fields(pkg = %args.pkg))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scaffolder = super::build_scaffolder(&global, &config)?;
    let report = scaffolder.package_init(&args.pkg)?;
    super::print_report(&report, &output)
}

//! Implementation of the `stencil package` command.

use tracing::instrument;

use stencil_core::prelude::*;

use crate::{
    cli::{GlobalArgs, PackageArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil package` command.
///
/// An existing directory triggers a proceed-anyway prompt; declining leaves
/// the directory untouched and still exits 0.
#[instrument(skip_all, fields(pkg = %args.name))]
pub fn execute(
    args: PackageArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scaffolder = super::build_scaffolder(&global, &config)?;

    let report = scaffolder.package_create(&PackageOptions {
        name: args.name,
        write_init_file: args.init,
    })?;

    super::print_report(&report, &output)
}

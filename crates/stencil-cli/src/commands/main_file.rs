//! Implementation of the `stencil main` command.
//!
//! Responsibility: translate CLI arguments into [`MainFileOptions`], call the
//! core scaffolder, and display results.  No business logic lives here.

use tracing::instrument;

use stencil_core::prelude::*;

use crate::{
    cli::{GlobalArgs, MainArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `stencil main` command.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: MainArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let scaffolder = super::build_scaffolder(&global, &config)?;

    let report = scaffolder.main_file(&MainFileOptions {
        name: args.name,
        src_dir: args.src_dir,
    })?;

    super::print_report(&report, &output)
}

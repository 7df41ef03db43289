//! Fallback handler for unrecognised subcommands.
//!
//! Routes the raw tokens through the core name-based dispatcher, so an
//! unknown command fails with suggestions (and exit code 3) instead of a
//! generic parse error.  Arguments use `key=value` form; a bare token is a
//! boolean flag.

use tracing::instrument;

use stencil_core::prelude::*;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute an unrecognised subcommand via the dispatcher.
#[instrument(skip_all)]
pub fn execute(
    tokens: Vec<String>,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let Some((command, rest)) = tokens.split_first() else {
        return Err(CliError::InvalidInput {
            message: "no command given".into(),
        });
    };

    let scaffolder = super::build_scaffolder(&global, &config)?;
    let report = scaffolder.dispatch(command, &CommandArgs::parse(rest))?;

    super::print_report(&report, &output)
}

//! Command handler implementations.
//!
//! Each submodule exposes a single `execute` function; shared wiring (port
//! construction, report display) lives here so the handlers stay thin.

use tracing::debug;

use stencil_adapters::{AlwaysConfirm, LocalFilesystem, StdinConfirmation, template_source};
use stencil_core::prelude::*;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod completions;
pub mod external;
pub mod init;
pub mod list;
pub mod main_file;
pub mod package;
pub mod vimspector;

/// Wire a [`Scaffolder`] from CLI flags and configuration.
///
/// The language comes from `--lang`, falling back to the config default;
/// `--yes` swaps the interactive confirmation for an always-affirmative one.
pub(crate) fn build_scaffolder(global: &GlobalArgs, config: &AppConfig) -> CliResult<Scaffolder> {
    let language: Language = match global.lang {
        Some(lang) => lang.into(),
        None => config.default_language().map_err(|e| CliError::ConfigError {
            message: e.to_string(),
            source: None,
        })?,
    };

    let source = template_source::resolve(config.templates.dir.as_deref(), &global.dir);
    let confirm: Box<dyn Confirmation> = if global.yes {
        Box::new(AlwaysConfirm::new())
    } else {
        Box::new(StdinConfirmation::new())
    };

    debug!(%language, root = %global.dir.display(), yes = global.yes, "scaffolder wired");

    Ok(Scaffolder::new(
        language,
        global.dir.clone(),
        source,
        Box::new(LocalFilesystem::new()),
        confirm,
    )
    .with_unknown_tokens(config.render.unknown_tokens))
}

/// Display what a scaffolding operation did.
///
/// A declined overwrite is a normal outcome: it prints as a warning and the
/// command still exits 0.
pub(crate) fn print_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    for dir in &report.dirs_created {
        output.success(&format!("Created directory {}", dir.display()))?;
    }
    for file in &report.written {
        output.success(&format!("Wrote {}", file.display()))?;
    }
    for file in &report.skipped {
        output.warning(&format!("Skipped {} (not overwritten)", file.display()))?;
    }
    if report.nothing_done() && report.skipped.is_empty() {
        output.info("Nothing to do")?;
    }
    Ok(())
}

//! Implementation of the `stencil list` command.

use stencil_adapters::template_source;

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `stencil list` command: enumerate what the *active* template
/// source (after resolution) can provide.
pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = template_source::resolve(config.templates.dir.as_deref(), &global.dir);
    let mut keys = source.list().map_err(CliError::Core)?;
    keys.sort_by(|a, b| (a.language.as_str(), &a.name).cmp(&(b.language.as_str(), &b.name)));

    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for key in &keys {
                output.print(&format!("  {} / {}", key.language, key.name))?;
            }
        }
        ListFormat::List => {
            for key in &keys {
                println!("{key}");
            }
        }
        ListFormat::Json => {
            // Serialised directly to stdout, bypassing the OutputManager:
            // JSON output must stay parseable even in quiet mode.
            let entries: Vec<serde_json::Value> = keys
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "language": k.language.as_str(),
                        "name": k.name,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("failed to serialise template list: {e}"),
                }
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

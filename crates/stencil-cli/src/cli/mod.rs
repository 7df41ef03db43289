//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Per-language project file scaffolding",
    long_about = "Stencil generates the small recurring files of a project \
                  (entry-point scripts, package markers, debugger configs) \
                  from per-language templates.",
    after_help = "EXAMPLES:\n\
        \x20 stencil main --name app --src-dir lib\n\
        \x20 stencil package utils --init\n\
        \x20 stencil vimspector --app-name server\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the executable entry-point script.
    #[command(
        visible_alias = "m",
        about = "Generate the entry-point script",
        after_help = "EXAMPLES:\n\
            \x20 stencil main                      # ./main.py\n\
            \x20 stencil main --name app           # ./app.py\n\
            \x20 stencil main --src-dir lib        # imports 'lib'"
    )]
    Main(MainArgs),

    /// Generate a package marker file in an existing directory.
    #[command(
        about = "Generate a package marker file",
        after_help = "EXAMPLES:\n\
            \x20 stencil init utils        # utils/__init__.py"
    )]
    Init(InitArgs),

    /// Generate a `.vimspector.json` debugger configuration.
    #[command(
        about = "Generate a vimspector debugger config",
        after_help = "EXAMPLES:\n\
            \x20 stencil vimspector\n\
            \x20 stencil vimspector --app-name server"
    )]
    Vimspector(VimspectorArgs),

    /// Create a package directory, optionally with a marker file.
    #[command(
        visible_alias = "pkg",
        about = "Create a package directory",
        after_help = "EXAMPLES:\n\
            \x20 stencil package utils\n\
            \x20 stencil package utils --init"
    )]
    Package(PackageArgs),

    /// List the templates the active source can provide.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Anything else is routed through the name-based dispatcher, which
    /// reports an unknown command with suggestions instead of clap's
    /// generic parse error.
    #[command(external_subcommand)]
    External(Vec<String>),
}

// ── main ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil main`.
#[derive(Debug, Args)]
pub struct MainArgs {
    /// Stem of the generated file; `app` produces `app.py`.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        default_value = "main",
        help = "Stem of the generated file"
    )]
    pub name: String,

    /// Source directory the script should import.
    #[arg(
        short = 's',
        long = "src-dir",
        value_name = "DIR",
        help = "Source directory to import from the script"
    )]
    pub src_dir: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Package directory to place the marker file in.  Must already exist;
    /// use `stencil package` to create it.
    #[arg(value_name = "PACKAGE", help = "Package directory name")]
    pub pkg: String,
}

// ── vimspector ────────────────────────────────────────────────────────────────

/// Arguments for `stencil vimspector`.
#[derive(Debug, Args)]
pub struct VimspectorArgs {
    /// Application name used in the launch configuration.  Defaults to the
    /// project root's directory name.
    #[arg(
        short = 'a',
        long = "app-name",
        value_name = "NAME",
        help = "Application name for the launch configuration"
    )]
    pub app_name: Option<String>,
}

// ── package ───────────────────────────────────────────────────────────────────

/// Arguments for `stencil package`.
#[derive(Debug, Args)]
pub struct PackageArgs {
    /// Name of the package directory to create.
    #[arg(value_name = "NAME", help = "Package directory name")]
    pub name: String,

    /// Also write the package marker file into the directory.
    #[arg(long = "init", help = "Also generate the package marker file")]
    pub init: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `language/name` per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported scaffolding languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    /// Also accepted as `py`.
    #[value(alias = "py")]
    Python,
}

impl From<Language> for stencil_core::domain::Language {
    fn from(lang: Language) -> Self {
        match lang {
            Language::Python => Self::Python,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

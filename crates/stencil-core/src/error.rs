//! Unified error handling for Stencil Core.
//!
//! One flat error enum covers the whole core: the domain here is small
//! enough that a domain/application error split would be ceremony. Each
//! variant carries `category()` for exit-code mapping and `suggestions()`
//! with user-actionable fixes.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Language;

/// Root error type for Stencil Core operations.
#[derive(Debug, Error, Clone)]
pub enum StencilError {
    /// The requested (language, template) pair does not exist.
    #[error("no '{name}' template for language '{language}'")]
    TemplateNotFound { language: Language, name: String },

    /// The dispatcher received a subcommand it does not know.
    #[error("unknown command '{command}'")]
    CommandNotFound { command: String },

    /// A dispatched command is missing a required keyword argument.
    #[error("command '{command}' requires argument '{key}'")]
    MissingArgument {
        command: &'static str,
        key: &'static str,
    },

    /// Rendering failed under the `fail` unknown-token policy.
    #[error("template contains unresolved placeholders: {}", tokens.join(", "))]
    UnresolvedPlaceholders { tokens: Vec<String> },

    /// A language string could not be parsed.
    #[error("unknown language '{value}'")]
    InvalidLanguage { value: String },

    /// Directory creation, file write, or permission change failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The confirmation provider could not obtain an answer.
    #[error("failed to read confirmation: {reason}")]
    Prompt { reason: String },
}

impl StencilError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { language, name } => vec![
                format!("no template named '{name}' exists for {language}"),
                "List available templates: stencil list".into(),
                "Point STENCIL_TEMPLATES_DIR at a directory containing \
                 templates/<language>/<name>"
                    .into(),
            ],
            Self::CommandNotFound { command } => vec![
                format!("'{command}' is not a stencil command"),
                "Available commands: main, init, vimspector, package".into(),
                "Use --help for usage information".into(),
            ],
            Self::MissingArgument { command, key } => vec![
                format!("the '{command}' command needs '{key}'"),
                format!("Example: stencil {command} {key}=<value>"),
            ],
            Self::UnresolvedPlaceholders { tokens } => vec![
                format!("unresolved tokens: {}", tokens.join(", ")),
                "Set render.unknown_tokens = \"keep\" to leave unknown tokens verbatim".into(),
                "Or fix the template so every {{TOKEN}} has a mapping".into(),
            ],
            Self::InvalidLanguage { value } => vec![
                format!("'{value}' is not a supported language"),
                "Supported languages: python (alias: py)".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Prompt { .. } => vec![
                "Confirmation input could not be read".into(),
                "Run with --yes to skip interactive prompts".into(),
            ],
        }
    }

    /// Get error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::CommandNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::MissingArgument { .. }
            | Self::InvalidLanguage { .. }
            | Self::UnresolvedPlaceholders { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::Prompt { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type StencilResult<T> = Result<T, StencilError>;

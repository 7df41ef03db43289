//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `--config FILE` (an explicit file that fails to load is an error)
//! 3. `.stencil.toml` in the current directory
//! 4. The platform config directory (`directories::ProjectDirs`)
//! 5. Built-in defaults (always present)

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use stencil_core::domain::{Language, UnknownTokens};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default values applied when no CLI flag is given.
    pub defaults: Defaults,
    /// Template source settings.
    pub templates: TemplateConfig,
    /// Placeholder rendering settings.
    pub render: RenderConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Default language, e.g. `"python"` or the alias `"py"`.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template directory overriding the project-local `templates/` tree.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// What to do with `{{TOKENS}}` no placeholder value exists for:
    /// `"keep"` (default) leaves them verbatim, `"fail"` aborts the command.
    pub unknown_tokens: UnknownTokens,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration per the documented resolution order.
    ///
    /// An explicit `--config` file that is missing or malformed is an error;
    /// a malformed file at a default location is too (silently ignoring a
    /// config the user wrote hides typos).  No file at all means defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        for candidate in [Some(PathBuf::from(".stencil.toml")), Self::config_path()]
            .into_iter()
            .flatten()
        {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        debug!(path = %path.display(), "loading configuration file");
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the per-user configuration file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The configured default language, falling back to Python.
    pub fn default_language(&self) -> anyhow::Result<Language> {
        match self.defaults.language.as_deref() {
            Some(value) => value
                .parse()
                .with_context(|| format!("invalid defaults.language '{value}' in config")),
            None => Ok(Language::Python),
        }
    }
}

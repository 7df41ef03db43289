//! Language identifiers.
//!
//! A language is selected once at [`Scaffolder`](crate::application::Scaffolder)
//! construction and is immutable for the process lifetime. It picks the
//! template set (`templates/<language>/…`) and supplies the language-specific
//! file naming conventions the command handlers need.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StencilError;

/// Supported scaffolding languages.
///
/// Adding a language is one variant here plus a `templates/<language>/`
/// directory; no handler code changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Also accepted as `py`.
    #[serde(alias = "py")]
    Python,
}

impl Language {
    /// Canonical short identifier, used as the template directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
        }
    }

    /// Source file name for a given stem, e.g. `app` → `app.py`.
    pub fn source_file(self, stem: &str) -> String {
        match self {
            Self::Python => format!("{stem}.py"),
        }
    }

    /// The conventional entry-point file name (`main.py`).
    pub fn main_file_name(self) -> String {
        self.source_file("main")
    }

    /// The package marker file name (`__init__.py`).
    pub fn init_file_name(self) -> &'static str {
        match self {
            Self::Python => "__init__.py",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = StencilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            other => Err(StencilError::InvalidLanguage {
                value: other.into(),
            }),
        }
    }
}

//! Template source adapters and active-source resolution.
//!
//! # Template resolution order
//!
//! The active source is picked by [`resolve`], stopping at the first
//! candidate that applies:
//!
//! 1. **`$STENCIL_TEMPLATES_DIR`** — environment variable override. Set this
//!    in `.env` or your shell profile to point at a custom template tree.
//! 2. **`templates.dir`** from the configuration file.
//! 3. **`<project-root>/templates`** — if that directory exists.
//! 4. **Built-in set** — templates embedded in the binary.
//!
//! Directory trees use the layout `templates/<language>/<template-name>`,
//! one file per template.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use stencil_core::application::ports::TemplateSource;

pub mod builtin;
pub mod dir;

pub use builtin::BuiltinTemplateSource;
pub use dir::DirTemplateSource;

/// Environment variable overriding the template directory.
pub const TEMPLATES_DIR_ENV: &str = "STENCIL_TEMPLATES_DIR";

/// Pick the active template source per the documented resolution order.
///
/// An override directory is used even if it does not exist yet — a missing
/// template then surfaces as `TemplateNotFound` naming the configured path,
/// which is more actionable than silently falling back to the builtin set.
pub fn resolve(config_dir: Option<&Path>, project_root: &Path) -> Box<dyn TemplateSource> {
    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        if !dir.is_empty() {
            info!(%dir, "using templates from ${}", TEMPLATES_DIR_ENV);
            return Box::new(DirTemplateSource::new(PathBuf::from(dir)));
        }
    }

    if let Some(dir) = config_dir {
        info!(dir = %dir.display(), "using templates directory from configuration");
        return Box::new(DirTemplateSource::new(dir));
    }

    let local = project_root.join("templates");
    if local.is_dir() {
        info!(dir = %local.display(), "using project-local templates directory");
        return Box::new(DirTemplateSource::new(local));
    }

    debug!("no template directory found, using built-in set");
    Box::new(BuiltinTemplateSource::new())
}

//! Ports (traits) for external dependencies.
//!
//! These traits define what the application needs from the outside world.
//! The `stencil-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Language, Mode, Template, TemplateKey};
use crate::error::StencilResult;

/// Port for template retrieval.
///
/// Implemented by:
/// - `stencil_adapters::template_source::DirTemplateSource` (user template trees)
/// - `stencil_adapters::template_source::BuiltinTemplateSource` (embedded set)
pub trait TemplateSource: Send + Sync {
    /// Load the named template for a language.
    ///
    /// # Errors
    ///
    /// [`StencilError::TemplateNotFound`](crate::error::StencilError::TemplateNotFound)
    /// if no matching resource exists.
    fn load(&self, language: Language, name: &str) -> StencilResult<Template>;

    /// Enumerate every (language, name) pair this source can load.
    fn list(&self) -> StencilResult<Vec<TemplateKey>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if the path exists at all.
    fn exists(&self, path: &Path) -> bool;

    /// Check if the path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a single directory (parent must exist).
    fn create_dir(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Set POSIX permission bits on an existing file.
    fn set_mode(&self, path: &Path, mode: Mode) -> StencilResult<()>;
}

/// Port for operator confirmation.
///
/// Injected so the interactive blocking read can be replaced by a
/// non-interactive stub in tests (`PresetConfirmation`) or an
/// always-affirmative provider for `--yes`.
pub trait Confirmation: Send + Sync {
    /// Ask the operator a yes/no question; `true` means proceed.
    fn confirm(&self, prompt: &str) -> StencilResult<bool>;
}

//! Local filesystem adapter backed by `std::fs`.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use stencil_core::{
    application::ports::Filesystem,
    domain::Mode,
    error::{StencilError, StencilResult},
};

/// Production [`Filesystem`] implementation: plain `std::fs` calls, no
/// caching, errors mapped to [`StencilError::Filesystem`] with the offending
/// path attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

fn fs_error(path: &Path, action: &str, err: std::io::Error) -> StencilError {
    StencilError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {action}: {err}"),
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir(&self, path: &Path) -> StencilResult<()> {
        debug!(path = %path.display(), "creating directory");
        fs::create_dir(path).map_err(|e| fs_error(path, "create directory", e))
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "writing file");
        fs::write(path, content).map_err(|e| fs_error(path, "write file", e))
    }

    #[cfg(unix)]
    fn set_mode(&self, path: &Path, mode: Mode) -> StencilResult<()> {
        use std::os::unix::fs::PermissionsExt;

        trace!(path = %path.display(), mode = format_args!("{:o}", mode.bits()), "setting mode");
        fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
            .map_err(|e| fs_error(path, "set permissions", e))
    }

    #[cfg(not(unix))]
    fn set_mode(&self, path: &Path, mode: Mode) -> StencilResult<()> {
        // POSIX permission bits have no Windows equivalent; the write itself
        // already produced a usable file.
        trace!(path = %path.display(), mode = format_args!("{:o}", mode.bits()), "mode ignored on this platform");
        Ok(())
    }
}

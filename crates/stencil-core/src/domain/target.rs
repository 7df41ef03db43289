//! Target file descriptors.

use std::path::{Path, PathBuf};

/// POSIX-style permission bits for a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode(u32);

impl Mode {
    /// `rw-r--r--` — the default for generated files. Files written with
    /// this mode are not chmod'd; the process umask applies.
    pub const REGULAR: Mode = Mode(0o644);

    /// `rwxr-xr-x` — generated executable scripts.
    pub const EXECUTABLE: Mode = Mode(0o755);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_executable(self) -> bool {
        self.0 & 0o111 != 0
    }
}

/// A file a command handler intends to write: a path relative to the
/// project root plus the desired permission bits. Consumed by the overwrite
/// guard and the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: PathBuf,
    pub mode: Mode,
}

impl TargetFile {
    /// A regular (non-executable) target.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: Mode::REGULAR,
        }
    }

    /// An executable target (`rwxr-xr-x`).
    pub fn executable(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: Mode::EXECUTABLE,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

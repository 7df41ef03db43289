//! In-memory filesystem for testing.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use stencil_core::{
    application::ports::Filesystem,
    domain::Mode,
    error::{StencilError, StencilResult},
};

#[derive(Debug, Default)]
struct State {
    files: HashMap<PathBuf, String>,
    modes: HashMap<PathBuf, Mode>,
    dirs: HashSet<PathBuf>,
}

/// In-memory [`Filesystem`] implementation for tests. Cheaply cloneable:
/// clones share state, so a test can keep one handle for assertions while the
/// scaffolder owns another.
#[derive(Debug, Default, Clone)]
pub struct MemoryFilesystem {
    state: Arc<RwLock<State>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file, creating no parent directories.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        state.files.insert(path.into(), content.into());
    }

    /// Pre-populate a directory.
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let mut state = self.state.write().unwrap();
        state.dirs.insert(path.into());
    }

    /// Read back a file written during the test.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .read()
            .unwrap()
            .files
            .get(path.as_ref())
            .cloned()
    }

    /// Read back the mode set on a file, if any.
    pub fn mode(&self, path: impl AsRef<Path>) -> Option<Mode> {
        self.state
            .read()
            .unwrap()
            .modes
            .get(path.as_ref())
            .copied()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.read().unwrap().dirs.contains(path.as_ref())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.read().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.read().unwrap().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.read().unwrap().dirs.contains(path)
    }

    fn create_dir(&self, path: &Path) -> StencilResult<()> {
        let mut state = self.state.write().unwrap();
        if state.dirs.contains(path) || state.files.contains_key(path) {
            return Err(StencilError::Filesystem {
                path: path.to_path_buf(),
                reason: "already exists".into(),
            });
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        let mut state = self.state.write().unwrap();
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_mode(&self, path: &Path, mode: Mode) -> StencilResult<()> {
        let mut state = self.state.write().unwrap();
        if !state.files.contains_key(path) {
            return Err(StencilError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            });
        }
        state.modes.insert(path.to_path_buf(), mode);
        Ok(())
    }
}

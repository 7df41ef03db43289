//! Overwrite guard.
//!
//! Every template write in every command handler goes through
//! [`OverwriteGuard::may_write`] before touching the target path. No handler
//! bypasses it.

use std::path::Path;

use tracing::debug;

use crate::application::ports::{Confirmation, Filesystem};
use crate::error::StencilResult;

/// Outcome of an overwrite check. A decline is a normal negative outcome,
/// not an error: the caller skips the write and reports the target as
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    Permitted,
    Declined,
}

impl WriteDecision {
    pub fn is_permitted(self) -> bool {
        matches!(self, Self::Permitted)
    }
}

/// Decides whether writing a target file is allowed.
///
/// Policy:
/// - target does not exist: permit silently;
/// - target exists: ask the operator, permit only on an affirmative answer,
///   otherwise decline and leave the existing file untouched.
pub struct OverwriteGuard<'a> {
    fs: &'a dyn Filesystem,
    confirm: &'a dyn Confirmation,
}

impl<'a> OverwriteGuard<'a> {
    pub fn new(fs: &'a dyn Filesystem, confirm: &'a dyn Confirmation) -> Self {
        Self { fs, confirm }
    }

    /// Check whether `target` may be written in this invocation.
    ///
    /// # Errors
    ///
    /// Propagates [`StencilError::Prompt`](crate::error::StencilError::Prompt)
    /// when the confirmation provider fails to obtain an answer.
    pub fn may_write(&self, target: &Path) -> StencilResult<WriteDecision> {
        if !self.fs.exists(target) {
            return Ok(WriteDecision::Permitted);
        }

        let prompt = format!("Target file '{}' already exists. Overwrite?", target.display());
        let decision = if self.confirm.confirm(&prompt)? {
            WriteDecision::Permitted
        } else {
            WriteDecision::Declined
        };
        debug!(target = %target.display(), ?decision, "overwrite check");
        Ok(decision)
    }
}

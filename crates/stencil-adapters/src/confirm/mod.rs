//! Confirmation adapters.
//!
//! The interactive adapter reads a single line from stdin per question so the
//! binary stays usable under pipes and in scripts (`echo y | stencil ...`).

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use tracing::debug;

use stencil_core::{
    application::ports::Confirmation,
    error::{StencilError, StencilResult},
};

/// Interactive yes/no prompt on stdin/stdout. `y`/`yes` (case-insensitive)
/// means proceed; anything else, including an empty line, means no.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

impl StdinConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmation for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> StencilResult<bool> {
        print!("{prompt} [y/n] ");
        io::stdout().flush().map_err(|e| StencilError::Prompt {
            reason: format!("failed to flush prompt: {e}"),
        })?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| StencilError::Prompt {
                reason: format!("failed to read answer: {e}"),
            })?;

        let answer = line.trim().to_ascii_lowercase();
        debug!(%answer, "confirmation answer");
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

/// Non-interactive provider that answers yes to everything. Used for `--yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl AlwaysConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, prompt: &str) -> StencilResult<bool> {
        debug!(%prompt, "auto-confirming");
        Ok(true)
    }
}

/// Scripted provider for tests: answers a fixed sequence and records every
/// prompt it was asked. Clones share the queue and the record.
#[derive(Debug, Default, Clone)]
pub struct PresetConfirmation {
    // Stored reversed so pop() yields answers in the given order.
    answers: Arc<Mutex<Vec<bool>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl PresetConfirmation {
    pub fn new(answers: &[bool]) -> Self {
        let mut stack: Vec<bool> = answers.to_vec();
        stack.reverse();
        Self {
            answers: Arc::new(Mutex::new(stack)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every prompt asked so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmation for PresetConfirmation {
    fn confirm(&self, prompt: &str) -> StencilResult<bool> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| StencilError::Prompt {
                reason: "no scripted answer left".into(),
            })
    }
}

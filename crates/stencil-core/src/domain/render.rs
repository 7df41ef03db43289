//! Placeholder rendering engine.
//!
//! Templates embed `{{TOKEN}}` placeholders; rendering replaces each token
//! with its mapped value. What happens to tokens *not* in the mapping is a
//! configurable policy ([`UnknownTokens`]) rather than a hard-coded choice.
//!
//! Known limitation, kept on purpose: substituting an empty string for a
//! token that sits alone on a line leaves a blank line behind. The engine
//! does not remove lines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{StencilError, StencilResult};

/// Token → replacement mapping, built per invocation by a command handler.
/// Never persisted; order is irrelevant.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    map: HashMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, consuming self for fluent construction:
    ///
    /// ```rust
    /// # use stencil_core::domain::Placeholders;
    /// let p = Placeholders::new()
    ///     .set("APP_NAME", "demo")
    ///     .set("PROGRAM_MAIN", "main.py");
    /// assert_eq!(p.get("APP_NAME"), Some("demo"));
    /// ```
    pub fn set(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.insert(token.into(), value.into());
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Policy for tokens present in the template but absent from the mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTokens {
    /// Leave `{{TOKEN}}` verbatim in the output.
    #[default]
    Keep,
    /// Fail rendering, listing every unresolved token.
    Fail,
}

/// Render `text`, replacing every `{{TOKEN}}` occurrence with its mapped
/// value.
///
/// Token names are `[A-Za-z0-9_]+`. Brace pairs that do not wrap a valid
/// token name (unterminated `{{`, empty `{{}}`, names with other characters)
/// are not placeholders and pass through verbatim regardless of policy.
///
/// # Errors
///
/// Under [`UnknownTokens::Fail`], returns
/// [`StencilError::UnresolvedPlaceholders`] naming every unmapped token
/// (each listed once). Under [`UnknownTokens::Keep`] rendering never fails.
pub fn render(
    text: &str,
    placeholders: &Placeholders,
    policy: UnknownTokens,
) -> StencilResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut unresolved: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) if is_token_name(&after[..end]) => {
                let token = &after[..end];
                match placeholders.get(token) {
                    Some(value) => out.push_str(value),
                    None => {
                        if !unresolved.iter().any(|t| t == token) {
                            unresolved.push(token.to_string());
                        }
                        out.push_str("{{");
                        out.push_str(token);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            // Not a placeholder; the braces are literal text.
            _ => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);

    if policy == UnknownTokens::Fail && !unresolved.is_empty() {
        return Err(StencilError::UnresolvedPlaceholders { tokens: unresolved });
    }
    Ok(out)
}

fn is_token_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

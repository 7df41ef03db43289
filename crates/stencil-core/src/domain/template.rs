//! Template identity and content.

use std::fmt;

use super::Language;

/// Identifies a template by (language, name), e.g. `python/main`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub language: Language,
    pub name: String,
}

impl TemplateKey {
    pub fn new(language: Language, name: impl Into<String>) -> Self {
        Self {
            language,
            name: name.into(),
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language, self.name)
    }
}

/// A loaded template: raw text, read on demand and discarded after
/// rendering. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub key: TemplateKey,
    pub body: String,
}

impl Template {
    pub fn new(key: TemplateKey, body: impl Into<String>) -> Self {
        Self {
            key,
            body: body.into(),
        }
    }
}

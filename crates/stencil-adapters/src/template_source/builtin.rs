//! Built-in templates embedded in the binary.

use stencil_core::{
    application::ports::TemplateSource,
    domain::{Language, Template, TemplateKey},
    error::{StencilError, StencilResult},
};

const PYTHON_MAIN: &str = include_str!("../../templates/python/main");
const PYTHON_INIT: &str = include_str!("../../templates/python/init");
const PYTHON_VIMSPECTOR: &str = include_str!("../../templates/python/vimspector");

const PYTHON_TEMPLATES: &[(&str, &str)] = &[
    ("main", PYTHON_MAIN),
    ("init", PYTHON_INIT),
    ("vimspector", PYTHON_VIMSPECTOR),
];

/// Fallback template source backed by `include_str!` data. Always available,
/// requires no filesystem layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTemplateSource;

impl BuiltinTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for BuiltinTemplateSource {
    fn load(&self, language: Language, name: &str) -> StencilResult<Template> {
        let table = match language {
            Language::Python => PYTHON_TEMPLATES,
        };

        table
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(n, body)| Template::new(TemplateKey::new(language, *n), *body))
            .ok_or_else(|| StencilError::TemplateNotFound {
                language,
                name: name.into(),
            })
    }

    fn list(&self) -> StencilResult<Vec<TemplateKey>> {
        Ok(PYTHON_TEMPLATES
            .iter()
            .map(|(name, _)| TemplateKey::new(Language::Python, *name))
            .collect())
    }
}

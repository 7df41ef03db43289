//! Directory-tree template source.
//!
//! Resolves templates from a root directory laid out as
//! `<root>/<language>/<template-name>`, one plain-text file per template.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use stencil_core::{
    application::ports::TemplateSource,
    domain::{Language, Template, TemplateKey},
    error::{StencilError, StencilResult},
};

/// Template source reading from a directory tree on demand. No caching:
/// templates are small and read once per invocation.
pub struct DirTemplateSource {
    root: PathBuf,
}

impl DirTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl TemplateSource for DirTemplateSource {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, language: Language, name: &str) -> StencilResult<Template> {
        let path = self.root.join(language.as_str()).join(name);
        if !path.is_file() {
            return Err(StencilError::TemplateNotFound {
                language,
                name: name.into(),
            });
        }

        let body = fs::read_to_string(&path).map_err(|e| StencilError::Filesystem {
            path: path.clone(),
            reason: format!("failed to read template: {e}"),
        })?;

        debug!(template = %path.display(), bytes = body.len(), "loaded template");
        Ok(Template::new(TemplateKey::new(language, name), body))
    }

    fn list(&self) -> StencilResult<Vec<TemplateKey>> {
        let mut keys = Vec::new();

        // <root>/<language>/<name> — exactly depth 2.
        for entry in WalkDir::new(&self.root).min_depth(2).max_depth(2) {
            let entry = entry.map_err(|e| StencilError::Filesystem {
                path: self.root.clone(),
                reason: format!("failed to walk templates directory: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let lang_dir = entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            // A directory for a language this build does not know is not an
            // error; it is simply not listable.
            let Ok(language) = Language::from_str(&lang_dir) else {
                warn!(dir = %lang_dir, "skipping unrecognised language directory");
                continue;
            };

            keys.push(TemplateKey::new(
                language,
                entry.file_name().to_string_lossy().into_owned(),
            ));
        }

        keys.sort_by(|a, b| (a.language.as_str(), &a.name).cmp(&(b.language.as_str(), &b.name)));
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree_with(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (rel, content) in files {
            let full = temp.path().join(rel);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        temp
    }

    #[test]
    fn loads_existing_template() {
        let temp = tree_with(&[("python/main", "#!/usr/bin/env python3\n")]);
        let source = DirTemplateSource::new(temp.path());

        let t = source.load(Language::Python, "main").unwrap();
        assert_eq!(t.key, TemplateKey::new(Language::Python, "main"));
        assert!(t.body.starts_with("#!"));
    }

    #[test]
    fn missing_template_is_not_found() {
        let temp = tree_with(&[("python/main", "x")]);
        let source = DirTemplateSource::new(temp.path());

        let err = source.load(Language::Python, "nope").unwrap_err();
        assert!(matches!(err, StencilError::TemplateNotFound { .. }));
    }

    #[test]
    fn missing_root_is_not_found_too() {
        let source = DirTemplateSource::new("/absolutely/does/not/exist");
        assert!(matches!(
            source.load(Language::Python, "main"),
            Err(StencilError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn list_enumerates_known_languages_only() {
        let temp = tree_with(&[
            ("python/main", "a"),
            ("python/init", "b"),
            ("klingon/main", "c"),
        ]);
        let source = DirTemplateSource::new(temp.path());

        let keys = source.list().unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().all(|k| k.language == Language::Python));
        // Sorted by name within a language.
        assert_eq!(keys[0].name, "init");
        assert_eq!(keys[1].name, "main");
    }

    #[test]
    fn list_skips_stray_files_at_language_level() {
        let temp = tree_with(&[("python/main", "a")]);
        fs::write(temp.path().join("README.md"), "not a template").unwrap();

        let keys = DirTemplateSource::new(temp.path()).list().unwrap();
        assert_eq!(keys.len(), 1);
    }
}

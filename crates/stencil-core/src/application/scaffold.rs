//! The scaffolding orchestrator.
//!
//! [`Scaffolder`] is the single interface behind which the per-language
//! command handlers live: `main_file`, `package_init`, `debugger_config`,
//! `package_create`. Each handler is a pure composition step — gather
//! arguments, build a placeholder mapping, load → render → guard → write.
//!
//! The language is a configuration value fixed at construction, and the
//! project root is passed explicitly rather than read from the process CWD,
//! so every handler is independently testable.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        guard::OverwriteGuard,
        ports::{Confirmation, Filesystem, TemplateSource},
    },
    domain::{Language, Mode, Placeholders, TargetFile, UnknownTokens, render},
    error::StencilResult,
};

/// What a scaffolding operation did, for display by the caller.
///
/// Paths are relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Files written (after guard authorization).
    pub written: Vec<PathBuf>,
    /// Targets skipped because the operator declined an overwrite.
    pub skipped: Vec<PathBuf>,
    /// Directories created.
    pub dirs_created: Vec<PathBuf>,
}

impl ScaffoldReport {
    /// `true` when the operation changed nothing on disk.
    pub fn nothing_done(&self) -> bool {
        self.written.is_empty() && self.dirs_created.is_empty()
    }
}

/// Arguments for [`Scaffolder::main_file`].
#[derive(Debug, Clone)]
pub struct MainFileOptions {
    /// Stem of the generated file; `main` produces `main.py`.
    pub name: String,
    /// Source directory to import from the generated script. `None` or an
    /// empty string leaves no import statement.
    pub src_dir: Option<String>,
}

impl Default for MainFileOptions {
    fn default() -> Self {
        Self {
            name: "main".into(),
            src_dir: None,
        }
    }
}

/// Arguments for [`Scaffolder::debugger_config`].
#[derive(Debug, Clone, Default)]
pub struct DebuggerOptions {
    /// Application name embedded in the debugger configuration. Defaults to
    /// the project root's directory name.
    pub app_name: Option<String>,
}

/// Arguments for [`Scaffolder::package_create`].
#[derive(Debug, Clone)]
pub struct PackageOptions {
    pub name: String,
    /// Also write the package marker file into the directory.
    pub write_init_file: bool,
}

/// Main scaffolding orchestrator.
///
/// Holds the language tag, the explicit project root, and the injected
/// ports. One `Scaffolder` serves one invocation; no state is shared across
/// invocations.
pub struct Scaffolder {
    language: Language,
    root: PathBuf,
    source: Box<dyn TemplateSource>,
    fs: Box<dyn Filesystem>,
    confirm: Box<dyn Confirmation>,
    unknown_tokens: UnknownTokens,
}

impl Scaffolder {
    pub fn new(
        language: Language,
        root: impl Into<PathBuf>,
        source: Box<dyn TemplateSource>,
        fs: Box<dyn Filesystem>,
        confirm: Box<dyn Confirmation>,
    ) -> Self {
        Self {
            language,
            root: root.into(),
            source,
            fs,
            confirm,
            unknown_tokens: UnknownTokens::default(),
        }
    }

    /// Override the unknown-token rendering policy (default: keep verbatim).
    pub fn with_unknown_tokens(mut self, policy: UnknownTokens) -> Self {
        self.unknown_tokens = policy;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ── Command handlers ──────────────────────────────────────────────────

    /// Generate the executable entry-point script `<name>.py`.
    ///
    /// `IMPORT_SRC_DIR` becomes `import <src_dir>` when a source directory
    /// is given, otherwise the empty string (which leaves a blank line — the
    /// engine does not remove the placeholder's line). On a successful write
    /// the file's mode is set to `rwxr-xr-x`; a declined write changes
    /// nothing, permissions included.
    #[instrument(skip_all, fields(name = %opts.name))]
    pub fn main_file(&self, opts: &MainFileOptions) -> StencilResult<ScaffoldReport> {
        let target = TargetFile::executable(self.language.source_file(&opts.name));

        let import_src_dir = match opts.src_dir.as_deref() {
            Some(dir) if !dir.is_empty() => format!("import {dir}"),
            _ => String::new(),
        };
        let placeholders = Placeholders::new().set("IMPORT_SRC_DIR", import_src_dir);

        let mut report = ScaffoldReport::default();
        self.write_rendered("main", &placeholders, &target, &mut report)?;
        Ok(report)
    }

    /// Generate the package marker file `<pkg>/__init__.py`.
    ///
    /// The package directory must already exist; use
    /// [`package_create`](Self::package_create) otherwise.
    #[instrument(skip_all, fields(pkg = %pkg))]
    pub fn package_init(&self, pkg: &str) -> StencilResult<ScaffoldReport> {
        let mut report = ScaffoldReport::default();
        self.package_init_into(pkg, &mut report)?;
        Ok(report)
    }

    /// Generate `.vimspector.json` for the project.
    ///
    /// The main program is `main.py` when that file exists in the project
    /// root, otherwise the application-name-derived `<app_name>.py`.
    #[instrument(skip_all)]
    pub fn debugger_config(&self, opts: &DebuggerOptions) -> StencilResult<ScaffoldReport> {
        let app_name = opts
            .app_name
            .clone()
            .or_else(|| {
                self.root
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "app".into());

        let conventional_main = self.language.main_file_name();
        let program_main = if self.fs.is_file(&self.root.join(&conventional_main)) {
            conventional_main
        } else {
            self.language.source_file(&app_name)
        };
        debug!(%app_name, %program_main, "resolved debugger main program");

        let placeholders = Placeholders::new()
            .set("APP_NAME", &app_name)
            .set("PROGRAM_MAIN", &program_main);

        let mut report = ScaffoldReport::default();
        self.write_rendered(
            "vimspector",
            &placeholders,
            &TargetFile::new(".vimspector.json"),
            &mut report,
        )?;
        Ok(report)
    }

    /// Create a package directory, optionally populated with a marker file.
    ///
    /// When the directory already exists the operator is asked whether to
    /// proceed; a negative answer leaves the directory and any existing
    /// marker file untouched. Contents of an existing directory are never
    /// removed.
    #[instrument(skip_all, fields(pkg = %opts.name))]
    pub fn package_create(&self, opts: &PackageOptions) -> StencilResult<ScaffoldReport> {
        let mut report = ScaffoldReport::default();
        let dir = self.root.join(&opts.name);

        if self.fs.is_dir(&dir) {
            let prompt = format!(
                "Package directory '{}' already exists. Proceed anyway?",
                opts.name
            );
            if !self.confirm.confirm(&prompt)? {
                report.skipped.push(PathBuf::from(&opts.name));
                return Ok(report);
            }
        } else {
            self.fs.create_dir(&dir)?;
            report.dirs_created.push(PathBuf::from(&opts.name));
            info!(dir = %dir.display(), "created package directory");
        }

        if opts.write_init_file {
            self.package_init_into(&opts.name, &mut report)?;
        }
        Ok(report)
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    fn package_init_into(&self, pkg: &str, report: &mut ScaffoldReport) -> StencilResult<()> {
        let target = TargetFile::new(Path::new(pkg).join(self.language.init_file_name()));
        self.write_rendered("init", &Placeholders::new(), &target, report)
    }

    /// Load a template, render it, and write it to `target` if the
    /// overwrite guard authorizes that exact path for this invocation.
    fn write_rendered(
        &self,
        template_name: &str,
        placeholders: &Placeholders,
        target: &TargetFile,
        report: &mut ScaffoldReport,
    ) -> StencilResult<()> {
        let template = self.source.load(self.language, template_name)?;
        let rendered = render(&template.body, placeholders, self.unknown_tokens)?;

        let abs = self.root.join(&target.path);
        let guard = OverwriteGuard::new(self.fs.as_ref(), self.confirm.as_ref());
        if !guard.may_write(&abs)?.is_permitted() {
            info!(target = %abs.display(), "write declined, leaving target untouched");
            report.skipped.push(target.path.clone());
            return Ok(());
        }

        self.fs.write_file(&abs, &rendered)?;
        if target.mode != Mode::REGULAR {
            self.fs.set_mode(&abs, target.mode)?;
        }
        info!(target = %abs.display(), "wrote template");
        report.written.push(target.path.clone());
        Ok(())
    }
}

// ── In-crate test doubles ─────────────────────────────────────────────────────

/// Minimal port stubs for core unit tests. The full-featured adapters live
/// in `stencil-adapters`; these exist because the core crate cannot depend
/// on it. Handles are `Clone` and share state, so a test can keep one and
/// hand the other to the `Scaffolder`.
#[cfg(test)]
pub(crate) mod testing {
    use std::{
        collections::{HashMap, HashSet},
        path::{Path, PathBuf},
        sync::{Arc, Mutex, RwLock},
    };

    use crate::application::ports::{Confirmation, Filesystem, TemplateSource};
    use crate::domain::{Language, Mode, Template, TemplateKey};
    use crate::error::{StencilError, StencilResult};

    #[derive(Debug, Clone, Default)]
    pub struct MemoryFs {
        state: Arc<RwLock<FsState>>,
    }

    #[derive(Debug, Default)]
    struct FsState {
        files: HashMap<PathBuf, String>,
        modes: HashMap<PathBuf, u32>,
        dirs: HashSet<PathBuf>,
    }

    impl MemoryFs {
        pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
            self.state
                .write()
                .unwrap()
                .files
                .insert(path.into(), content.into());
        }

        pub fn seed_dir(&self, path: impl Into<PathBuf>) {
            self.state.write().unwrap().dirs.insert(path.into());
        }

        pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
            self.state.read().unwrap().files.get(path.as_ref()).cloned()
        }

        pub fn mode(&self, path: impl AsRef<Path>) -> Option<u32> {
            self.state.read().unwrap().modes.get(path.as_ref()).copied()
        }

        pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
            self.state.read().unwrap().dirs.contains(path.as_ref())
        }
    }

    impl Filesystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            let s = self.state.read().unwrap();
            s.files.contains_key(path) || s.dirs.contains(path)
        }

        fn is_file(&self, path: &Path) -> bool {
            self.state.read().unwrap().files.contains_key(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.state.read().unwrap().dirs.contains(path)
        }

        fn create_dir(&self, path: &Path) -> StencilResult<()> {
            self.state.write().unwrap().dirs.insert(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
            self.state
                .write()
                .unwrap()
                .files
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn set_mode(&self, path: &Path, mode: Mode) -> StencilResult<()> {
            self.state
                .write()
                .unwrap()
                .modes
                .insert(path.to_path_buf(), mode.bits());
            Ok(())
        }
    }

    /// Confirmation stub answering from a fixed queue and recording prompts.
    #[derive(Debug, Clone)]
    pub struct PresetConfirm {
        state: Arc<Mutex<ConfirmState>>,
    }

    #[derive(Debug)]
    struct ConfirmState {
        // Reversed so pop() yields answers in the given order.
        answers: Vec<bool>,
        prompts: Vec<String>,
    }

    impl PresetConfirm {
        pub fn new(answers: &[bool]) -> Self {
            let mut rev: Vec<bool> = answers.to_vec();
            rev.reverse();
            Self {
                state: Arc::new(Mutex::new(ConfirmState {
                    answers: rev,
                    prompts: Vec::new(),
                })),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.state.lock().unwrap().prompts.clone()
        }
    }

    impl Confirmation for PresetConfirm {
        fn confirm(&self, prompt: &str) -> StencilResult<bool> {
            let mut state = self.state.lock().unwrap();
            state.prompts.push(prompt.to_string());
            state.answers.pop().ok_or_else(|| StencilError::Prompt {
                reason: "no preset answer left".into(),
            })
        }
    }

    /// Template source backed by a literal map.
    pub struct MapSource {
        templates: HashMap<(Language, String), String>,
    }

    impl MapSource {
        pub fn python_defaults() -> Self {
            let mut templates = HashMap::new();
            templates.insert(
                (Language::Python, "main".to_string()),
                "#!/usr/bin/env python3\n\n{{IMPORT_SRC_DIR}}\n\n\ndef main():\n    pass\n\n\nif __name__ == \"__main__\":\n    main()\n".to_string(),
            );
            templates.insert(
                (Language::Python, "init".to_string()),
                "\"\"\"Package initialisation.\"\"\"\n".to_string(),
            );
            templates.insert(
                (Language::Python, "vimspector".to_string()),
                "{\n  \"app\": \"{{APP_NAME}}\",\n  \"program\": \"{{PROGRAM_MAIN}}\"\n}\n"
                    .to_string(),
            );
            Self { templates }
        }
    }

    impl TemplateSource for MapSource {
        fn load(&self, language: Language, name: &str) -> StencilResult<Template> {
            self.templates
                .get(&(language, name.to_string()))
                .map(|body| Template::new(TemplateKey::new(language, name), body.clone()))
                .ok_or_else(|| StencilError::TemplateNotFound {
                    language,
                    name: name.into(),
                })
        }

        fn list(&self) -> StencilResult<Vec<TemplateKey>> {
            Ok(self
                .templates
                .keys()
                .map(|(lang, name)| TemplateKey::new(*lang, name.clone()))
                .collect())
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

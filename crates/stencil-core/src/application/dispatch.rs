//! Command dispatch by name.
//!
//! Maps a subcommand string plus keyword-style arguments onto the
//! [`Scaffolder`] operations. This is the programmatic entry-point the CLI
//! routes unrecognised subcommands through; the known clap subcommands call
//! the operations directly.
//!
//! Unknown argument keys are ignored by convention; unknown commands fail
//! with [`StencilError::CommandNotFound`].

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::{
    application::scaffold::{
        DebuggerOptions, MainFileOptions, PackageOptions, ScaffoldReport, Scaffolder,
    },
    error::{StencilError, StencilResult},
};

/// Keyword arguments for a dispatched command.
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    map: HashMap<String, String>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` tokens. A bare token is treated as a boolean flag
    /// set to `"true"`.
    pub fn parse(tokens: &[String]) -> Self {
        let mut map = HashMap::new();
        for token in tokens {
            match token.split_once('=') {
                Some((key, value)) => map.insert(key.to_string(), value.to_string()),
                None => map.insert(token.clone(), "true".to_string()),
            };
        }
        Self { map }
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    fn require(&self, command: &'static str, key: &'static str) -> StencilResult<&str> {
        self.get(key)
            .ok_or(StencilError::MissingArgument { command, key })
    }

    /// Boolean flag: `true`, `1`, `yes` (case-insensitive) count as set.
    fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }
}

impl Scaffolder {
    /// Dispatch a command by name.
    ///
    /// | Command      | Required args | Optional args                  |
    /// |--------------|---------------|--------------------------------|
    /// | `main`       | —             | `name`, `src_dir`              |
    /// | `init`       | `pkg`         | —                              |
    /// | `vimspector` | —             | `app_name`                     |
    /// | `package`    | `name`        | `write_init_file` (flag)       |
    #[instrument(skip_all, fields(command = %command))]
    pub fn dispatch(&self, command: &str, args: &CommandArgs) -> StencilResult<ScaffoldReport> {
        debug!(?args, "dispatching command");
        match command {
            "main" => self.main_file(&MainFileOptions {
                name: args.get("name").unwrap_or("main").to_string(),
                src_dir: args.get("src_dir").map(str::to_string),
            }),
            "init" => {
                let pkg = args.require("init", "pkg")?.to_string();
                self.package_init(&pkg)
            }
            "vimspector" => self.debugger_config(&DebuggerOptions {
                app_name: args.get("app_name").map(str::to_string),
            }),
            "package" => {
                let name = args.require("package", "name")?.to_string();
                self.package_create(&PackageOptions {
                    name,
                    write_init_file: args.flag("write_init_file"),
                })
            }
            other => Err(StencilError::CommandNotFound {
                command: other.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::scaffold::testing::{MapSource, MemoryFs, PresetConfirm};
    use crate::domain::Language;
    use std::path::PathBuf;

    fn scaffolder(fs: &MemoryFs) -> Scaffolder {
        Scaffolder::new(
            Language::Python,
            "/proj",
            Box::new(MapSource::python_defaults()),
            Box::new(fs.clone()),
            Box::new(PresetConfirm::new(&[])),
        )
    }

    #[test]
    fn parse_splits_key_value_and_flags() {
        let args = CommandArgs::parse(&[
            "name=app".to_string(),
            "write_init_file".to_string(),
            "src_dir=lib".to_string(),
        ]);
        assert_eq!(args.get("name"), Some("app"));
        assert_eq!(args.get("src_dir"), Some("lib"));
        assert!(args.flag("write_init_file"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let fs = MemoryFs::default();
        let s = scaffolder(&fs);
        let args = CommandArgs::new()
            .set("name", "app")
            .set("totally_unknown", "whatever");

        let report = s.dispatch("main", &args).unwrap();
        assert_eq!(report.written, vec![PathBuf::from("app.py")]);
    }

    #[test]
    fn main_defaults_without_args() {
        let fs = MemoryFs::default();
        let s = scaffolder(&fs);

        let report = s.dispatch("main", &CommandArgs::new()).unwrap();
        assert_eq!(report.written, vec![PathBuf::from("main.py")]);
    }

    #[test]
    fn init_requires_pkg() {
        let fs = MemoryFs::default();
        let s = scaffolder(&fs);

        let err = s.dispatch("init", &CommandArgs::new()).unwrap_err();
        assert!(matches!(
            err,
            StencilError::MissingArgument {
                command: "init",
                key: "pkg"
            }
        ));
    }

    #[test]
    fn package_dispatch_creates_dir_with_init() {
        let fs = MemoryFs::default();
        let s = scaffolder(&fs);
        let args = CommandArgs::new()
            .set("name", "pkg")
            .set("write_init_file", "true");

        let report = s.dispatch("package", &args).unwrap();
        assert!(fs.has_dir("/proj/pkg"));
        assert_eq!(report.written, vec![PathBuf::from("pkg/__init__.py")]);
    }

    #[test]
    fn vimspector_dispatch_accepts_app_name() {
        let fs = MemoryFs::default();
        let s = scaffolder(&fs);
        let args = CommandArgs::new().set("app_name", "demo");

        s.dispatch("vimspector", &args).unwrap();
        assert!(
            fs.file("/proj/.vimspector.json")
                .unwrap()
                .contains("demo.py")
        );
    }

    #[test]
    fn unknown_command_is_command_not_found() {
        let fs = MemoryFs::default();
        let s = scaffolder(&fs);

        let err = s.dispatch("frobnicate", &CommandArgs::new()).unwrap_err();
        match err {
            StencilError::CommandNotFound { command } => assert_eq!(command, "frobnicate"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! End-to-end tests driving the compiled binary with `assert_cmd`.
//!
//! Each test runs in its own temporary directory; the default `--dir .`
//! makes that directory the project root.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stencil(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stencil").expect("binary builds");
    cmd.current_dir(dir.path())
        .env_remove("STENCIL_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ── main ────────────────────────────────────────────────────────────────────

#[test]
fn main_writes_entry_point_with_import() {
    let temp = TempDir::new().unwrap();

    stencil(&temp)
        .args(["main", "--name", "app", "--src-dir", "lib"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote app.py"));

    let content = fs::read_to_string(temp.path().join("app.py")).unwrap();
    assert!(content.starts_with("#!/usr/bin/env python3"));
    assert!(content.lines().any(|l| l == "import lib"));
    assert!(content.contains("if __name__ == \"__main__\":"));
}

#[cfg(unix)]
#[test]
fn main_file_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    stencil(&temp).arg("main").assert().success();

    let mode = fs::metadata(temp.path().join("main.py"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn main_without_src_dir_has_no_import() {
    let temp = TempDir::new().unwrap();
    stencil(&temp).arg("main").assert().success();

    let content = fs::read_to_string(temp.path().join("main.py")).unwrap();
    assert!(!content.contains("import"));
}

#[test]
fn main_overwrite_declined_keeps_file_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.py"), "precious\n").unwrap();

    stencil(&temp)
        .arg("main")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists. Overwrite?"))
        .stdout(predicate::str::contains("Skipped main.py"));

    assert_eq!(
        fs::read_to_string(temp.path().join("main.py")).unwrap(),
        "precious\n"
    );
}

#[test]
fn main_overwrite_accepted_replaces_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.py"), "old\n").unwrap();

    stencil(&temp)
        .arg("main")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote main.py"));

    let content = fs::read_to_string(temp.path().join("main.py")).unwrap();
    assert_ne!(content, "old\n");
}

#[test]
fn yes_flag_overwrites_without_prompting() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.py"), "old\n").unwrap();

    // No stdin provided; with --yes the command must not block on a prompt.
    stencil(&temp)
        .args(["main", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overwrite?").not());
}

// ── init / package ──────────────────────────────────────────────────────────

#[test]
fn init_writes_marker_into_existing_dir() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("utils")).unwrap();

    stencil(&temp)
        .args(["init", "utils"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote utils/__init__.py"));

    assert!(temp.path().join("utils/__init__.py").is_file());
}

#[test]
fn package_creates_directory_and_marker() {
    let temp = TempDir::new().unwrap();

    stencil(&temp)
        .args(["package", "utils", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created directory utils"))
        .stdout(predicate::str::contains("Wrote utils/__init__.py"));

    assert!(temp.path().join("utils").is_dir());
    assert!(temp.path().join("utils/__init__.py").is_file());
}

#[test]
fn package_existing_dir_declined_changes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("utils")).unwrap();
    fs::write(temp.path().join("utils/__init__.py"), "keep\n").unwrap();

    stencil(&temp)
        .args(["package", "utils", "--init"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Proceed anyway?"));

    assert_eq!(
        fs::read_to_string(temp.path().join("utils/__init__.py")).unwrap(),
        "keep\n"
    );
}

// ── vimspector ──────────────────────────────────────────────────────────────

#[test]
fn vimspector_points_at_existing_main() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.py"), "x\n").unwrap();

    stencil(&temp)
        .args(["vimspector", "--app-name", "demo"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".vimspector.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        json["configurations"]["demo - launch"]["configuration"]["program"],
        "main.py"
    );
}

#[test]
fn vimspector_falls_back_to_app_named_script() {
    let temp = TempDir::new().unwrap();

    stencil(&temp)
        .args(["vimspector", "--app-name", "demo"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".vimspector.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        json["configurations"]["demo - launch"]["configuration"]["program"],
        "demo.py"
    );
}

// ── list / completions / misc ───────────────────────────────────────────────

#[test]
fn list_shows_builtin_templates() {
    let temp = TempDir::new().unwrap();

    stencil(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("main"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("vimspector"));
}

#[test]
fn list_prefers_project_local_templates() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("templates/python")).unwrap();
    fs::write(temp.path().join("templates/python/custom"), "body\n").unwrap();

    stencil(&temp)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python/custom"));
}

#[test]
fn list_json_is_parseable() {
    let temp = TempDir::new().unwrap();

    let output = stencil(&temp)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed.as_array().is_some_and(|a| !a.is_empty()));
}

#[test]
fn templates_dir_env_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    let custom = TempDir::new().unwrap();
    fs::create_dir_all(custom.path().join("python")).unwrap();
    fs::write(custom.path().join("python/main"), "custom entry\n").unwrap();

    stencil(&temp)
        .env("STENCIL_TEMPLATES_DIR", custom.path())
        .arg("main")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("main.py")).unwrap(),
        "custom entry\n"
    );
}

#[test]
fn config_file_sets_template_dir() {
    let temp = TempDir::new().unwrap();
    let custom = TempDir::new().unwrap();
    fs::create_dir_all(custom.path().join("python")).unwrap();
    fs::write(custom.path().join("python/main"), "from config\n").unwrap();

    let config = temp.path().join("stencil.toml");
    fs::write(
        &config,
        format!("[templates]\ndir = {:?}\n", custom.path()),
    )
    .unwrap();

    stencil(&temp)
        .args(["--config", config.to_str().unwrap(), "main"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("main.py")).unwrap(),
        "from config\n"
    );
}

#[test]
fn completions_bash_mentions_binary() {
    let temp = TempDir::new().unwrap();
    stencil(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"));
}

#[test]
fn help_and_version_work() {
    let temp = TempDir::new().unwrap();
    stencil(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vimspector"));

    stencil(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_accepts_any_value() {
    let temp = TempDir::new().unwrap();

    // no-color.org: any non-empty value means "no colour"; none of these may
    // be rejected as a flag value.
    for value in ["1", "true", "yes please"] {
        stencil(&temp)
            .env("NO_COLOR", value)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("main"));
    }
}

#[test]
fn quiet_suppresses_success_output() {
    let temp = TempDir::new().unwrap();

    stencil(&temp)
        .args(["main", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote").not());

    assert!(temp.path().join("main.py").is_file());
}

//! Integration tests for sprig-cli.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Workspace with an isolated config file and a small local template.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let template = root.path().join("template");
        fs::create_dir_all(template.join("src")).unwrap();
        fs::write(template.join("package.json"), r#"{"name":"tpl"}"#).unwrap();
        fs::write(template.join("src/index.js"), "console.log('hi')\n").unwrap();
        fs::write(root.path().join("config.toml"), "").unwrap();
        fs::create_dir_all(root.path().join("work")).unwrap();
        Self { root }
    }

    fn template(&self) -> PathBuf {
        self.root.path().join("template")
    }

    fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    fn write_config(&self, body: &str) {
        fs::write(self.root.path().join("config.toml"), body).unwrap();
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("sprig");
        cmd.current_dir(self.work())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.root.path().join("config.toml"));
        cmd
    }
}

fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn file_count(dir: &Path) -> usize {
    walk(dir).len()
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            out.extend(walk(&path));
        } else {
            out.push(path);
        }
    }
    out
}

#[test]
fn test_help_flag() {
    cargo::cargo_bin_cmd!("sprig")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_flag() {
    cargo::cargo_bin_cmd!("sprig")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_color_environment_values() {
    let sandbox = Sandbox::new();
    for value in ["1", "true", "yes", "0", "false", ""] {
        sandbox
            .cmd()
            .env("NO_COLOR", value)
            .args(["config", "get", "git.enabled"])
            .assert()
            .success()
            .stdout(predicate::str::diff("true\n"));
    }
}

#[test]
fn test_create_command_help() {
    cargo::cargo_bin_cmd!("sprig")
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--directory"))
        .stdout(predicate::str::contains("--no-git"));
}

#[test]
fn test_create_from_local_template_without_git() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["create", "my-app", "--no-git", "-y", "--template"])
        .arg(sandbox.template())
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully created project my-app."))
        .stdout(predicate::str::contains("Initializing git repository").not());

    let project = sandbox.work().join("my-app");
    assert_eq!(
        fs::read_to_string(project.join("package.json")).unwrap(),
        r#"{"name":"tpl"}"#
    );
    assert!(project.join("src/index.js").is_file());
    assert!(!project.join(".git").exists());
    assert_eq!(file_count(&project), 2);
}

#[test]
fn test_create_into_directory_flag() {
    let sandbox = Sandbox::new();
    let parent = sandbox.root.path().join("elsewhere/nested");

    sandbox
        .cmd()
        .args(["new", "lib", "--no-git", "-y", "-d"])
        .arg(&parent)
        .arg("-t")
        .arg(sandbox.template())
        .assert()
        .success();

    assert!(parent.join("lib/package.json").is_file());
}

#[test]
fn test_create_inside_template_directory() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .current_dir(sandbox.template())
        .args(["create", "sub", "-y", "--no-git", "-t", "./"])
        .assert()
        .success();

    let project = sandbox.template().join("sub");
    assert!(project.join("src/index.js").is_file());
    assert!(!project.join("sub").exists());
    assert_eq!(file_count(&project), 2);
}

/// Git environment cut off from the machine's own configuration.
fn isolated_git_env(home: &Path, global_config: &str) -> Vec<(&'static str, OsString)> {
    fs::create_dir_all(home).unwrap();
    let gitconfig = home.join(".gitconfig");
    fs::write(&gitconfig, global_config).unwrap();
    vec![
        ("PATH", std::env::var_os("PATH").unwrap_or_default()),
        ("HOME", home.as_os_str().to_owned()),
        ("GIT_CONFIG_NOSYSTEM", "1".into()),
        ("GIT_CONFIG_GLOBAL", gitconfig.into_os_string()),
        ("NO_COLOR", "1".into()),
    ]
}

fn git(dir: &Path, env: &[(&'static str, OsString)], args: &[&str]) -> std::process::Output {
    std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .env_clear()
        .envs(env.iter().cloned())
        .output()
        .unwrap()
}

#[test]
fn test_create_initialises_repository_and_commits() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();
    let mut env = isolated_git_env(&sandbox.root.path().join("home"), "");
    for key in ["GIT_AUTHOR_NAME", "GIT_COMMITTER_NAME"] {
        env.push((key, "Sprig Tests".into()));
    }
    for key in ["GIT_AUTHOR_EMAIL", "GIT_COMMITTER_EMAIL"] {
        env.push((key, "tests@sprig.invalid".into()));
    }

    sandbox
        .cmd()
        .env_clear()
        .envs(env.iter().cloned())
        .args(["create", "with-git", "-y", "--template"])
        .arg(sandbox.template())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing git repository..."))
        .stdout(predicate::str::contains("Successfully created project with-git."))
        .stdout(predicate::str::contains("Skipped git commit").not());

    let project = sandbox.work().join("with-git");
    let log = git(&project, &env, &["log", "--format=%s"]);
    assert!(log.status.success());
    assert_eq!(String::from_utf8_lossy(&log.stdout), "init\n");

    let status = git(&project, &env, &["status", "--short"]);
    assert!(String::from_utf8_lossy(&status.stdout).trim().is_empty());
}

#[test]
fn test_create_without_git_identity_leaves_files_staged() {
    if !git_available() {
        return;
    }
    let sandbox = Sandbox::new();
    // Refuse to guess an identity from the host name.
    let env = isolated_git_env(
        &sandbox.root.path().join("home"),
        "[user]\n\tuseConfigOnly = true\n",
    );

    sandbox
        .cmd()
        .env_clear()
        .envs(env.iter().cloned())
        .args(["create", "no-identity", "-y", "--template"])
        .arg(sandbox.template())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Successfully created project no-identity."))
        .stdout(predicate::str::contains(
            "Skipped git commit due to missing username and email in git config.",
        ))
        .stdout(predicate::str::contains("git commit -m init"));

    let project = sandbox.work().join("no-identity");
    assert!(project.join(".git").is_dir());

    let head = git(&project, &env, &["rev-parse", "--verify", "--quiet", "HEAD"]);
    assert!(!head.status.success());

    let status = git(&project, &env, &["status", "--short"]);
    let status = String::from_utf8_lossy(&status.stdout).into_owned();
    let lines: Vec<&str> = status.lines().collect();
    assert_eq!(lines.len(), 2, "{status}");
    assert!(lines.iter().all(|l| l.starts_with("A ")), "{status}");
}

#[test]
fn test_config_can_disable_git() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[git]\nenabled = false\n");

    sandbox
        .cmd()
        .args(["create", "no-git", "-y", "--template"])
        .arg(sandbox.template())
        .assert()
        .success();

    assert!(!sandbox.work().join("no-git/.git").exists());
}

#[test]
fn test_config_default_template_and_named_entry() {
    let sandbox = Sandbox::new();
    sandbox.write_config(&format!(
        "[defaults]\ntemplate = \"mine\"\n\n[git]\nenabled = false\n\n[templates.mine]\npath = {:?}\ndescription = \"local starter\"\n",
        sandbox.template().display().to_string()
    ));

    sandbox
        .cmd()
        .args(["create", "from-default", "-y"])
        .assert()
        .success();

    assert!(sandbox.work().join("from-default/package.json").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["create", "ghost", "--dry-run", "--template"])
        .arg(sandbox.template())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!sandbox.work().join("ghost").exists());
}

#[test]
fn test_json_output_emits_events_and_report() {
    let sandbox = Sandbox::new();

    let assert = sandbox
        .cmd()
        .args(["--output-format", "json", "create", "json-app", "--no-git", "-y"])
        .arg("--template")
        .arg(sandbox.template())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines[0], serde_json::json!({ "event": "done" }));
    assert_eq!(lines[1]["files_copied"], 2);
    assert_eq!(lines[1]["git_initialized"], false);
    assert_eq!(lines[1]["project_name"], "json-app");
}

#[test]
fn test_list_json_contains_builtin_and_config_templates() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[templates.team]\nrepository = \"https://example.com/team.git\"\n");

    let assert = sandbox
        .cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let templates: Vec<serde_json::Value> =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let names: Vec<&str> = templates
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"vue"));
    assert!(names.contains(&"team"));
}

#[test]
fn test_list_plain_names() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-cli"));
}

#[test]
fn test_config_get_and_path() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "get", "git.enabled"])
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));

    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_environment_overrides_config_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[output]\nformat = \"plain\"\n");

    sandbox
        .cmd()
        .env("SPRIG_OUTPUT__FORMAT", "json")
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"json\""));
}

#[test]
fn test_completions_bash() {
    cargo::cargo_bin_cmd!("sprig")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprig"));
}

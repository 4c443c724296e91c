//! End-to-end tests for the go-setup binary
//!
//! Each test gets its own `$HOME` so profiles and config.toml never leak
//! between tests or into the developer's real home directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
    project: TempDir,
}

impl Sandbox {
    /// Sandbox with a pinned Go version so go.mod is deterministic
    fn new() -> Self {
        let sandbox = Self {
            home: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        };
        sandbox.write_config("[toolchain]\ngo_version = \"1.20\"\n");
        sandbox
    }

    fn write_config(&self, content: &str) {
        let root = self.home.path().join(".go-setup");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("config.toml"), content).unwrap();
    }

    fn project(&self) -> &Path {
        self.project.path()
    }

    fn profiles_dir(&self) -> PathBuf {
        self.home.path().join(".go-setup").join("profiles")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("go-setup").unwrap();
        cmd.env("HOME", self.home.path())
            .env_remove("GO_SETUP_LICENSE")
            .env_remove("GO_SETUP_AUTHOR")
            .arg("--no-color");
        cmd
    }

    fn init(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("init").arg("-l").arg(self.project());
        cmd
    }
}

const BARE_DIRS: &[&str] = &["bin", "configs", "docs", "examples", "pkg", "scripts", "test/data"];
const BARE_FILES: &[&str] = &[
    "main.go",
    ".gitignore",
    "Makefile",
    "README.md",
    "LICENSE",
    "go.mod",
    "CHANGELOG.md",
];

#[test]
fn init_bare_layout() {
    let sandbox = Sandbox::new();

    sandbox
        .init()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Setting up bare-minimum project structure...",
        ));

    for dir in BARE_DIRS {
        assert!(sandbox.project().join(dir).is_dir(), "{dir} missing");
    }
    for file in BARE_FILES {
        assert!(sandbox.project().join(file).is_file(), "{file} missing");
    }
    assert!(!sandbox.project().join("Dockerfile").exists());
    assert!(!sandbox.project().join("api").exists());

    let go_mod = fs::read_to_string(sandbox.project().join("go.mod")).unwrap();
    assert_eq!(go_mod, "module example.com/project\n\ngo 1.20\n");
    let license = fs::read_to_string(sandbox.project().join("LICENSE")).unwrap();
    assert!(license.starts_with("MIT License"));
    assert!(sandbox.profiles_dir().is_dir());
}

#[test]
fn init_twice_reports_existing_and_succeeds() {
    let sandbox = Sandbox::new();
    sandbox.init().assert().success();

    fs::write(sandbox.project().join("main.go"), "package main // mine\n").unwrap();

    sandbox
        .init()
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(sandbox.project().join("main.go")).unwrap(),
        "package main // mine\n"
    );
}

#[test]
fn init_missing_location_is_fatal() {
    let sandbox = Sandbox::new();
    let missing = sandbox.project().join("does-not-exist");

    sandbox
        .cmd()
        .args(["init", "--full", "-l"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "location to initialize project doesn't exist",
        ));

    assert!(!missing.exists());
    assert_eq!(fs::read_dir(sandbox.project()).unwrap().count(), 0);
}

#[test]
fn init_invalid_license_skips_license_only() {
    let sandbox = Sandbox::new();

    sandbox
        .init()
        .args(["--license", "bsd"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Invalid license: bsd. Valid values are mit or apache",
        ));

    assert!(!sandbox.project().join("LICENSE").exists());
    assert!(sandbox.project().join("README.md").is_file());
    assert!(sandbox.project().join("go.mod").is_file());
}

#[test]
fn init_full_with_ops_and_module_path() {
    let sandbox = Sandbox::new();

    sandbox
        .init()
        .args(["--full", "--ops", "-i", "apache", "-m", "github.com/jane/app"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists").not());

    for dir in [
        "api", "assets", "build", "cmd", "deployments", "githooks", "init", "internal",
        "third_party", "tools", "web", "website",
    ] {
        assert!(sandbox.project().join(dir).is_dir(), "{dir} missing");
    }
    assert!(sandbox.project().join("Dockerfile").is_file());
    assert!(sandbox.project().join("Jenkinsfile").is_file());

    let go_mod = fs::read_to_string(sandbox.project().join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/jane/app\n"));
    let license = fs::read_to_string(sandbox.project().join("LICENSE")).unwrap();
    assert!(license.contains("Apache License"));
}

#[test]
fn init_config_only_touches_nothing_in_project() {
    let sandbox = Sandbox::new();

    sandbox
        .init()
        .arg("--config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config and profiles path set up at"));

    assert!(sandbox.profiles_dir().is_dir());
    assert_eq!(fs::read_dir(sandbox.project()).unwrap().count(), 0);
}

#[test]
fn profile_add_then_init_with_profile() {
    let sandbox = Sandbox::new();
    let source = TempDir::new().unwrap();
    fs::create_dir_all(source.path().join("configs")).unwrap();
    fs::write(source.path().join("configs/app.yaml"), "name: app\n").unwrap();
    fs::write(source.path().join("README.md"), "# Team README\n").unwrap();

    sandbox
        .cmd()
        .args(["profile", "add", "team", "--from"])
        .arg(source.path())
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("team"));

    sandbox
        .init()
        .args(["-p", "team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copying profile: team"));

    assert_eq!(
        fs::read_to_string(sandbox.project().join("configs/app.yaml")).unwrap(),
        "name: app\n"
    );
    assert_eq!(
        fs::read_to_string(sandbox.project().join("README.md")).unwrap(),
        "# Team README\n"
    );
    assert!(sandbox.project().join("main.go").is_file());
}

#[test]
fn profile_add_twice_is_rejected() {
    let sandbox = Sandbox::new();
    let source = TempDir::new().unwrap();

    for expected_code in [0, 1] {
        sandbox
            .cmd()
            .args(["profile", "add", "team", "--from"])
            .arg(source.path())
            .assert()
            .code(expected_code);
    }
}

#[test]
fn init_missing_profile_is_not_fatal() {
    let sandbox = Sandbox::new();

    sandbox
        .init()
        .args(["-p", "ghost"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ghost"));

    assert!(sandbox.project().join("main.go").is_file());
}

#[test]
fn malformed_config_is_fatal() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[defaults\nlicense = ");

    sandbox
        .init()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));

    assert_eq!(fs::read_dir(sandbox.project()).unwrap().count(), 0);
}

#[test]
fn config_defaults_apply() {
    let sandbox = Sandbox::new();
    sandbox.write_config(
        "[defaults]\nlicense = \"apache\"\nmodule_path = \"github.com/team/svc\"\n\n[toolchain]\ngo_version = \"1.22.1\"\n",
    );

    sandbox.init().assert().success();

    let go_mod = fs::read_to_string(sandbox.project().join("go.mod")).unwrap();
    assert_eq!(go_mod, "module github.com/team/svc\n\ngo 1.22\n");
    let license = fs::read_to_string(sandbox.project().join("LICENSE")).unwrap();
    assert!(license.contains("Apache License"));
}

#[test]
fn missing_location_reported_before_config_problems() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[defaults\nlicense = ");
    let missing = sandbox.project().join("does-not-exist");

    sandbox
        .cmd()
        .args(["init", "-l"])
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "location to initialize project doesn't exist",
        ))
        .stderr(predicate::str::contains("Configuration error").not());
}

#[test]
fn unreadable_config_is_not_fatal() {
    let sandbox = Sandbox::new();
    let config = sandbox.home.path().join(".go-setup").join("config.toml");
    fs::remove_file(&config).unwrap();
    fs::create_dir(&config).unwrap();

    sandbox
        .init()
        .assert()
        .success()
        .stderr(predicate::str::contains("config.toml"));

    assert!(sandbox.project().join("main.go").is_file());
}

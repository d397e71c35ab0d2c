// tests/cli_test.rs
mod common;

use std::process::Command;

use common::Fixture;

fn release_notes() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_release-notes"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    let output = release_notes()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-notes"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_version_flag() {
    let output = release_notes().arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_release_then_nothing_new() {
    let fixture = Fixture::new();
    fixture.manifest("0.3.0");
    fixture.commit("a.txt", "a", "feature: shiny");

    let output = release_notes()
        .arg("--repo")
        .arg(fixture.dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(fixture.read("NEWS.md").starts_with("# Version 0.4.0 ("));
    assert!(fixture.read("package.json").contains("\"0.4.0\""));

    let output = release_notes()
        .arg("--repo")
        .arg(fixture.dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No new indicated changes since last tag"));
}

#[test]
fn test_dry_run_prints_notes() {
    let fixture = Fixture::new();
    fixture.manifest("1.0.0");
    fixture.commit("a.txt", "a", "fix: typo");

    let output = release_notes()
        .arg("--repo")
        .arg(fixture.dir.path())
        .arg("--dry-run")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("## Bug Fixes"));
    assert!(stdout.contains("*  typo"));
    assert!(!fixture.path("NEWS.md").exists());
}

#[test]
fn test_config_file_in_repository_root() {
    let fixture = Fixture::new();
    fixture.commit(
        "release-notes.toml",
        "changelog = \"CHANGELOG.md\"\ntag_prefix = \"v\"\n",
        "chore: configure releases",
    );
    fixture.manifest("0.1.0");
    fixture.commit("a.txt", "a", "fix: one");

    let output = release_notes()
        .arg("--repo")
        .arg(fixture.dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(fixture.path("CHANGELOG.md").exists());
    assert!(!fixture.path("NEWS.md").exists());

    let repo = git2::Repository::open(fixture.dir.path()).unwrap();
    assert!(repo.find_reference("refs/tags/v0.1.1").is_ok());
}

#[test]
fn test_outside_repository_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = release_notes()
        .arg("--repo")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Git repository error"));
}

#[test]
fn test_bare_repository_fails_cleanly() {
    let dir = tempfile::TempDir::new().unwrap();
    git2::Repository::init_bare(dir.path()).unwrap();

    let output = release_notes()
        .arg("--repo")
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Git repository error"));
    assert!(stderr.contains("no work tree"));
    assert!(!stderr.starts_with("Error:"));
}

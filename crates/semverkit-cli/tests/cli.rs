//! End-to-end tests that run the `semverkit` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from any config file on the host
fn semverkit(dir: &TempDir, config: &str) -> Command {
    let path = dir.path().join("config.json");
    fs::write(&path, config).unwrap();

    let mut cmd = Command::cargo_bin("semverkit").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("SEMVERKIT_LOG_FORMAT")
        .arg("--config")
        .arg(&path);
    cmd
}

#[test]
fn test_validate_success() {
    let dir = TempDir::new().unwrap();
    semverkit(&dir, "{}")
        .args(["validate", "1.0.0-alpha.1+001", "2.3.4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 1.0.0-alpha.1+001"))
        .stdout(predicate::str::contains("✓ 2 versions valid"));
}

#[test]
fn test_validate_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    semverkit(&dir, "{}")
        .args(["validate", "1.0.0", "1.0.0-alpha..1"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Pre-release identifiers MUST NOT be empty"))
        .stderr(predicate::str::contains("1 of 2 versions are invalid"));
}

#[test]
fn test_compare_parse_error_exit_code() {
    let dir = TempDir::new().unwrap();
    semverkit(&dir, "{}")
        .args(["compare", "1.0.0", "1.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid version '1.0'"))
        .stderr(predicate::str::contains("https://semver.org/#spec-item-2"));
}

#[test]
fn test_compare_json() {
    let dir = TempDir::new().unwrap();
    semverkit(&dir, "{}")
        .args(["--output", "json", "compare", "1.0.0-rc.1", "1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ordering":"less""#));
}

#[test]
fn test_sort_reads_stdin() {
    let dir = TempDir::new().unwrap();
    semverkit(&dir, "{}")
        .args(["sort", "--reverse"])
        .write_stdin("1.0.0-beta\n\n1.0.0\n0.9.12\n")
        .assert()
        .success()
        .stdout("1.0.0\n1.0.0-beta\n0.9.12\n");
}

#[test]
fn test_bump_and_format_honour_config() {
    let dir = TempDir::new().unwrap();
    let config = r#"{"version": {"allow_v_prefix": true, "short_form": true}}"#;

    semverkit(&dir, config)
        .args(["bump", "v1.4.2", "--part", "minor"])
        .assert()
        .success()
        .stdout("1.5.0\n");

    semverkit(&dir, config)
        .args(["format", "v2.0.0", "--prefix", "v"])
        .assert()
        .success()
        .stdout("v2\n");
}

#[test]
fn test_output_format_from_config() {
    let dir = TempDir::new().unwrap();
    semverkit(&dir, r#"{"output": {"format": "json"}}"#)
        .args(["sort", "2.0.0", "1.0.0"])
        .assert()
        .success()
        .stdout("[\"1.0.0\",\"2.0.0\"]\n");
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("semverkit")
        .unwrap()
        .current_dir(dir.path())
        .args(["--config", "absent.yaml", "validate", "1.0.0"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_bump_format_and_completions_run_with_defaults() {
    let dir = TempDir::new().unwrap();

    semverkit(&dir, "{}").args(["bump", "1.2.3"]).assert().success().stdout("1.2.4\n");
    semverkit(&dir, "{}").args(["format", "1.2.0", "--short"]).assert().success().stdout("1.2\n");
    semverkit(&dir, "{}")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bump"));
}

//! End-to-end tests for the command-line tools.

use mock_migrate::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/command_runner_test.go");
const GOLDEN: &str = include_str!("fixtures/command_runner_test.go.golden");

fn convert_mock_file() -> Command {
    Command::new(env!("CARGO_BIN_EXE_convert-mock-file"))
}

fn convert_mocks() -> Command {
    Command::new(env!("CARGO_BIN_EXE_convert-mocks"))
}

#[test]
fn test_single_file_requires_exactly_one_argument() {
    let none = convert_mock_file().output().unwrap();
    assert!(!none.status.success());
    assert!(String::from_utf8_lossy(&none.stderr).contains("Usage"));

    let two = convert_mock_file().args(["a_test.go", "b_test.go"]).output().unwrap();
    assert!(!two.status.success());
}

#[test]
fn test_single_file_reports_outcome() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("x_test.go");
    fs::write(&path, "When(c.Get()).ThenReturn(1)\n").unwrap();

    let first = convert_mock_file().arg(&path).output().unwrap();
    assert!(first.status.success());
    assert_eq!(
        String::from_utf8_lossy(&first.stdout).trim(),
        format!("Converted {}", path.display())
    );

    let second = convert_mock_file().arg(&path).output().unwrap();
    assert!(second.status.success());
    assert_eq!(
        String::from_utf8_lossy(&second.stdout).trim(),
        format!("No changes needed in {}", path.display())
    );
}

#[test]
fn test_single_file_missing_path_fails() {
    let out = convert_mock_file().arg("/nonexistent/x_test.go").output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn test_batch_prints_progress_and_count() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    let converted = dir.path().join("pkg/runner_test.go");
    fs::write(&converted, FIXTURE).unwrap();
    fs::write(dir.path().join("pkg/plain_test.go"), "package pkg\n").unwrap();
    fs::write(dir.path().join("pkg/runner.go"), "package pkg\n").unwrap();

    let out = convert_mocks().arg("--root").arg(dir.path()).output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(&format!("Processing {}", converted.display())));
    assert!(stdout.contains(&format!("Updated constructors in {}", converted.display())));
    assert!(stdout.contains(&format!("Updated expectations in {}", converted.display())));
    assert!(stdout.trim_end().ends_with("Processed 2 files"));
    assert_eq!(fs::read_to_string(&converted).unwrap(), GOLDEN);
}

#[test]
fn test_batch_dry_run_does_not_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("runner_test.go");
    fs::write(&path, FIXTURE).unwrap();

    let out = convert_mocks()
        .arg("--root")
        .arg(dir.path())
        .arg("--dry-run")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("NewMockProjectCommandRunner(ctrl)"));
    assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
}

#[test]
fn test_rules_listing() {
    let out = convert_mocks().arg("rules").output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("constructors:"));
    assert!(stdout.contains("expectations:"));
}

#[test]
fn test_batch_with_find_command() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a_test.go"), FIXTURE).unwrap();
    fs::write(dir.path().join("sub/c_test.go"), "package sub\n").unwrap();
    fs::write(dir.path().join("b.go"), "package x\n").unwrap();

    let out = convert_mocks()
        .arg("--root")
        .arg(dir.path())
        .arg("--use-find")
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("b.go"));
    assert!(stdout.trim_end().ends_with("Processed 2 files"));
    assert_eq!(fs::read_to_string(dir.path().join("a_test.go")).unwrap(), GOLDEN);
}

#[test]
fn test_dry_run_without_color() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("runner_test.go"), FIXTURE).unwrap();

    let out = convert_mocks()
        .arg("--root")
        .arg(dir.path())
        .args(["--dry-run", "--no-color"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("+\tprojectCommandRunner := mocks.NewMockProjectCommandRunner(ctrl)"));
    assert!(!stdout.contains('\u{1b}'));
}

#[test]
fn test_config_prints_effective_settings() {
    let out = convert_mocks()
        .args(["config", "--controller", "mockCtrl", "--exclude", "vendor/**"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let yaml = String::from_utf8_lossy(&out.stdout);
    let config = MigrationConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(config.controller, "mockCtrl");
    assert_eq!(config.exclude, vec!["vendor/**".to_string()]);
}

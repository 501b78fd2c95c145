//! Integration tests for the mock-migrate crate.

use mock_migrate::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/command_runner_test.go");
const GOLDEN: &str = include_str!("fixtures/command_runner_test.go.golden");

fn create_go_project(dir: &Path) {
    fs::create_dir_all(dir.join("server/events")).unwrap();
    fs::create_dir_all(dir.join("server/core/locking")).unwrap();
    fs::create_dir_all(dir.join("vendor/github.com/lib")).unwrap();

    File::create(dir.join("server/events/command_runner_test.go"))
        .unwrap()
        .write_all(FIXTURE.as_bytes())
        .unwrap();

    File::create(dir.join("server/core/locking/locking_test.go"))
        .unwrap()
        .write_all(b"package locking\n\nfunc TestLock(t *testing.T) {\n\tbackend := mocks.NewMockBackend()\n\tWhen(backend.List()).ThenReturn(nil, nil)\n}\n")
        .unwrap();

    File::create(dir.join("server/core/locking/plain_test.go"))
        .unwrap()
        .write_all(b"package locking\n\nfunc TestPlain(t *testing.T) {\n\tif 1+1 != 2 {\n\t\tt.Fatal(\"math\")\n\t}\n}\n")
        .unwrap();

    File::create(dir.join("server/events/command_runner.go"))
        .unwrap()
        .write_all(b"package events\n\nfunc build() { _ = NewMockClient() }\n")
        .unwrap();

    File::create(dir.join("vendor/github.com/lib/lib_test.go"))
        .unwrap()
        .write_all(b"package lib\n\nvar c = NewMockClient()\n")
        .unwrap();
}

#[test]
fn test_fixture_converts_to_golden() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("command_runner_test.go");
    fs::write(&path, FIXTURE).unwrap();

    let summary = Migration::new().unwrap().run(vec![path.clone()], |_| {}).unwrap();

    assert_eq!(summary.files_modified(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), GOLDEN);
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("command_runner_test.go");
    fs::write(&path, FIXTURE).unwrap();

    let migration = Migration::new().unwrap();
    migration.run(vec![path.clone()], |_| {}).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let summary = migration.run(vec![path.clone()], |_| {}).unwrap();
    assert_eq!(summary.files_processed(), 1);
    assert_eq!(summary.files_modified(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_processed_count_excludes_non_test_files() {
    let dir = TempDir::new().unwrap();
    create_go_project(dir.path());

    let locator = Locator::walk(dir.path(), "_test.go");
    let summary = Migration::new()
        .unwrap()
        .run_located(&locator, |_| {})
        .unwrap();

    // Three *_test.go files outside vendor, one inside
    assert_eq!(summary.files_processed(), 4);
    assert_eq!(summary.files_modified(), 3);

    // Non-test sources are never touched
    let source = fs::read_to_string(dir.path().join("server/events/command_runner.go")).unwrap();
    assert!(source.contains("NewMockClient()"));
}

#[test]
fn test_excluded_files_are_not_processed() {
    let dir = TempDir::new().unwrap();
    create_go_project(dir.path());

    let locator = Locator::walk(dir.path(), "_test.go").exclude("vendor/**");
    let summary = Migration::new()
        .unwrap()
        .run_located(&locator, |_| {})
        .unwrap();

    assert_eq!(summary.files_processed(), 3);
    let vendored = fs::read_to_string(dir.path().join("vendor/github.com/lib/lib_test.go")).unwrap();
    assert!(vendored.contains("NewMockClient()"));
}

#[test]
fn test_unchanged_file_is_not_rewritten() {
    let dir = TempDir::new().unwrap();
    create_go_project(dir.path());
    let plain = dir.path().join("server/core/locking/plain_test.go");
    let before_bytes = fs::read(&plain).unwrap();
    let before_mtime = fs::metadata(&plain).unwrap().modified().unwrap();

    let mut updated = Vec::new();
    let summary = Migration::new()
        .unwrap()
        .run(vec![plain.clone()], |progress| {
            if let Progress::Updated { family, .. } = progress {
                updated.push(family.to_string());
            }
        })
        .unwrap();

    assert!(updated.is_empty());
    assert_eq!(summary.files_processed(), 1);
    assert_eq!(summary.files_modified(), 0);
    assert_eq!(fs::read(&plain).unwrap(), before_bytes);
    assert_eq!(
        fs::metadata(&plain).unwrap().modified().unwrap(),
        before_mtime
    );
}

#[test]
fn test_progress_order() {
    let dir = TempDir::new().unwrap();
    create_go_project(dir.path());

    let mut lines = Vec::new();
    Migration::new()
        .unwrap()
        .run_located(
            &Locator::walk(dir.path().join("server/core"), "_test.go"),
            |progress| match progress {
                Progress::Processing(path) => lines.push(format!(
                    "Processing {}",
                    path.file_name().unwrap().to_string_lossy()
                )),
                Progress::Updated { family, path } => lines.push(format!(
                    "Updated {} in {}",
                    family,
                    path.file_name().unwrap().to_string_lossy()
                )),
            },
        )
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "Processing locking_test.go",
            "Updated constructors in locking_test.go",
            "Updated expectations in locking_test.go",
            "Processing plain_test.go",
        ]
    );
}

#[test]
fn test_custom_controller_from_config() {
    let dir = TempDir::new().unwrap();
    create_go_project(dir.path());

    let config = MigrationConfig {
        root: dir.path().join("server/core"),
        controller: "mockCtrl".to_string(),
        ..Default::default()
    };
    Migration::from_config(&config)
        .unwrap()
        .run_located(&Locator::from_config(&config), |_| {})
        .unwrap();

    let content = fs::read_to_string(dir.path().join("server/core/locking/locking_test.go")).unwrap();
    assert!(content.contains("mocks.NewMockBackend(mockCtrl)"));
    assert!(content.contains("backend.EXPECT().List().Return(nil, nil)"));
}

#[test]
fn test_single_file_conversion_leaves_constructors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("command_runner_test.go");
    fs::write(&path, FIXTURE).unwrap();

    let change = Migration::new().unwrap().convert_file(&path).unwrap();
    assert!(change.is_modified());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("mocks.NewMockProjectCommandBuilder()"));
    assert!(content.contains("checker.EXPECT().CommandIsStale(gomock.Any()).Return(false)"));
    assert!(!content.contains("VerifyWasCalled"));
}

//! Integration tests for the pyoutline binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("file1.py"), "import os\n").unwrap();
    std::fs::write(
        dir.path().join("file2.py"),
        "from pathlib import Path\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_writes_report_file_and_prints_success_message() {
    let dir = sample_tree();
    let report_path = dir.path().join("test_report.txt");

    Command::cargo_bin("pyoutline")
        .unwrap()
        .arg(dir.path())
        .arg("--report-file-path")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report generated successfully to"));

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(
        report,
        "- file1.py\nimports os\n\n- file2.py\nfrom pathlib imports Path"
    );
}

#[test]
fn test_default_report_file_name() {
    let dir = sample_tree();

    Command::cargo_bin("pyoutline")
        .unwrap()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success();

    assert!(dir.path().join("report.txt").exists());
}

#[test]
fn test_stdout_flag_prints_report() {
    let dir = sample_tree();

    Command::cargo_bin("pyoutline")
        .unwrap()
        .arg(dir.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("- file1.py\nimports os"));
}

#[test]
fn test_ignore_file_path_excludes_matches() {
    let dir = sample_tree();
    let ignore_path = dir.path().join(".gitignore");
    std::fs::write(&ignore_path, "file2.py\n").unwrap();

    Command::cargo_bin("pyoutline")
        .unwrap()
        .arg(dir.path())
        .arg("--ignore-file-path")
        .arg(&ignore_path)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("file1.py").and(predicate::str::contains("file2.py").not()));
}

#[test]
fn test_json_format() {
    let dir = sample_tree();

    Command::cargo_bin("pyoutline")
        .unwrap()
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"relative_path\": \"file1.py\""));
}

#[test]
fn test_invalid_directory_exits_nonzero() {
    Command::cargo_bin("pyoutline")
        .unwrap()
        .arg("definitely/not/a/real/folder")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a valid directory"));
}

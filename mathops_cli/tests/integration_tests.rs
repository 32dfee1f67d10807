//! Integration tests for the mathops binary.
//!
//! These tests script complete sessions through stdin and verify:
//! - Computation and result reporting
//! - Error classification and in-loop recovery
//! - Error-event persistence

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a temp dir for log files
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mathops"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive calculator for basic math operations",
        ));
}

#[test]
fn test_addition_session() {
    cli()
        .arg("--no-log")
        .write_stdin("+\n3\n5\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 8"))
        .stdout(predicate::str::contains("Program finished."));
}

#[test]
fn test_fractional_operands_truncate() {
    cli()
        .arg("--no-log")
        .write_stdin("+\n3.9\n5.2\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 8"));
}

#[test]
fn test_division_by_zero_recovers_and_logs() {
    let temp_dir = setup_test_dir();
    let log_path = temp_dir.path().join("errors.jsonl");

    cli()
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("/\n10\n0\nyes\n/\n10\n4\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: division by zero is not allowed",
        ))
        .stdout(predicate::str::contains("Result: 2.5"));

    let log = fs::read_to_string(&log_path).expect("Failed to read error log");
    assert!(log.contains("division_by_zero"));
}

#[test]
fn test_error_record_fields() {
    let temp_dir = setup_test_dir();
    let log_path = temp_dir.path().join("errors.jsonl");

    cli()
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("%\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: invalid operation"));

    let log = fs::read_to_string(&log_path).unwrap();
    let record: serde_json::Value = serde_json::from_str(log.lines().next().unwrap()).unwrap();
    assert_eq!(record["kind"], "invalid_operation");
    assert!(record["message"].as_str().unwrap().contains('%'));
    assert!(record.get("at").is_some());
    assert!(record.get("context").is_some());
}

#[test]
fn test_overflow_reported() {
    cli()
        .arg("--no-log")
        .write_stdin("+\n2147483647\n1\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: number too large or too small",
        ));
}

#[test]
fn test_no_log_writes_nothing() {
    let temp_dir = setup_test_dir();
    let log_path = temp_dir.path().join("errors.jsonl");

    cli()
        .arg("--no-log")
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("+\nabc\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: invalid number input"));

    assert!(!log_path.exists());
}

#[test]
fn test_eof_terminates_cleanly() {
    cli()
        .arg("--no-log")
        .write_stdin("*\n6\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 42"))
        .stdout(predicate::str::contains("Program finished."));
}

#[test]
fn test_corrupt_log_file_still_appends() {
    let temp_dir = setup_test_dir();
    let log_path = temp_dir.path().join("errors.jsonl");
    fs::write(&log_path, "{ not json }\n").unwrap();

    cli()
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("/\n1\n0\nno\n")
        .assert()
        .success();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("division_by_zero"));
}

#[test]
fn test_errors_accumulate_across_iterations() {
    let temp_dir = setup_test_dir();
    let log_path = temp_dir.path().join("errors.jsonl");

    cli()
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("%\nyes\n+\nabc\nyes\n/\n5\n0\nno\n")
        .assert()
        .success();

    let log = fs::read_to_string(&log_path).unwrap();
    assert_eq!(log.lines().count(), 3);
    assert!(log.contains("invalid_operation"));
    assert!(log.contains("malformed_number"));
    assert!(log.contains("division_by_zero"));
}

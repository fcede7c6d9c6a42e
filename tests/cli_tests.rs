//! CLI integration tests
//!
//! Tests the binary directly using assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sheetsplit() -> Command {
    Command::cargo_bin("sheetsplit").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    sheetsplit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetsplit"))
        .stdout(predicate::str::contains("--split-by"));
}

#[test]
fn test_cli_version() {
    sheetsplit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetsplit"));
}

#[test]
fn test_cli_requires_input() {
    sheetsplit().assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERSION RUNS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_with_explicit_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.csv");
    let output = dir.path().join("people.xlsx");
    fs::write(&input, "Name,Dept\nAlice,Eng\nBob,Sales\n").unwrap();

    sheetsplit()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion Complete"))
        .stdout(predicate::str::contains("1 sheet(s), 2 row(s) total"));

    assert!(output.exists());
}

#[test]
fn test_convert_derives_default_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "Name,Dept\nAlice,Eng\n").unwrap();

    sheetsplit().arg(&input).assert().success();

    assert!(dir.path().join("people_formatted.xlsx").exists());
}

#[test]
fn test_convert_split_by_lists_sheets() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.csv");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, "Name,Dept\nAlice,Eng\nBob,Sales\nCara,Eng\n").unwrap();

    sheetsplit()
        .arg(&input)
        .arg(&output)
        .args(["--split-by", "Dept"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 sheet(s), 3 row(s) total"))
        .stdout(predicate::str::contains("Eng"))
        .stdout(predicate::str::contains("Sales"));
}

#[test]
fn test_convert_missing_column_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.csv");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, "Name,Dept\nAlice,Eng\n").unwrap();

    sheetsplit()
        .arg(&input)
        .arg(&output)
        .args(["--split-by", "Team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found in header"));

    assert!(output.exists());
}

#[test]
fn test_convert_custom_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.txt");
    let output = dir.path().join("out.xlsx");
    fs::write(&input, "Name;Dept\nAlice;Eng\n").unwrap();

    sheetsplit()
        .arg(&input)
        .arg(&output)
        .args(["--delimiter", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 sheet(s), 1 row(s) total"));
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURE MODES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    sheetsplit()
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure();
}

#[test]
fn test_convert_rejects_multichar_delimiter() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.csv");
    fs::write(&input, "Name,Dept\nAlice,Eng\n").unwrap();

    sheetsplit()
        .arg(&input)
        .args(["--delimiter", ";;"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single ASCII character"));
}

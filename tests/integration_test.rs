//! Integration tests for the payout report CLI.
//!
//! These tests run the actual binary against CSV files written to a temporary
//! directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SALARY_CSV: &str = "id,email,name,department,hours_worked,salary
1,alice@example.com,Alice Johnson,Marketing,160,50
2,bob@example.com,Bob Smith,Design,150,40
3,dan@example.com,Dan Moroz,Programming,100000,5
";

const HOURLY_CSV: &str = "id,name,department,hours_worked,hourly_rate,email
1,Carol White,Marketing,120,35,carol@example.com
2,Eve Black,Design,10,20,eve@example.com
";

/// Write a CSV file into the temp dir and return its path
fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("payout-report").unwrap()
}

/// Run the binary with the given arguments and return stdout
fn run_report(args: &[&str]) -> String {
    let assert = cmd().args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_json_report_from_two_files() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(&dir, "data1.csv", SALARY_CSV);
    let b = write_csv(&dir, "data2.csv", HOURLY_CSV);

    let output = run_report(&[
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--report",
        "payout",
    ]);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let marketing = parsed["Marketing"].as_array().unwrap();
    assert_eq!(marketing.len(), 4);
    assert_eq!(marketing[0]["payout"], "$8000");
    assert_eq!(marketing[1]["name"], "Carol White");
    assert_eq!(marketing[1]["payout"], "$4200");
    assert_eq!(marketing[2]["total_hours"], "280");
    assert_eq!(marketing[3]["total_payout"], "$12200");

    assert_eq!(parsed["Programming"][0]["payout"], "$500000");

    let mut keys: Vec<_> = parsed.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["Design", "Marketing", "Programming"]);
}

#[test]
fn test_departments_printed_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(&dir, "data.csv", SALARY_CSV);

    let output = run_report(&[a.to_str().unwrap(), "--report", "payout"]);

    let marketing = output.find("\"Marketing\"").unwrap();
    let design = output.find("\"Design\"").unwrap();
    let programming = output.find("\"Programming\"").unwrap();
    assert!(marketing < design && design < programming);
}

#[test]
fn test_console_format() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(&dir, "data.csv", HOURLY_CSV);

    cmd()
        .arg(&a)
        .args(["--report", "payout", "--format", "console"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marketing\n-------------------------"))
        .stdout(predicate::str::contains("name      hours      rate      payout"))
        .stdout(predicate::str::contains("Carol White   120   35   $4200"))
        .stdout(predicate::str::contains("total_payout\n$200"));
}

#[test]
fn test_rate_field_option_adds_candidate() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(
        &dir,
        "typo.csv",
        "name,department,hours_worked,hourly_rat\nTess,Ops,10,4\n",
    );

    let without = run_report(&[a.to_str().unwrap(), "--report", "payout"]);
    assert!(without.contains("\"payout\": \"$0\""));

    let with = run_report(&[
        a.to_str().unwrap(),
        "--report",
        "payout",
        "--rate-field",
        "hourly_rat",
    ]);
    assert!(with.contains("\"payout\": \"$40\""));
}

#[test]
fn test_missing_file_error() {
    cmd()
        .args(["nonexistent.csv", "--report", "payout"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_missing_file_after_valid_file_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(&dir, "data.csv", SALARY_CSV);

    cmd()
        .arg(&a)
        .args(["nonexistent.csv", "--report", "payout"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_report() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(&dir, "data.csv", SALARY_CSV);

    cmd()
        .arg(&a)
        .args(["--report", "avg_rate"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("available: payout"));
}

#[test]
fn test_unknown_format() {
    let dir = TempDir::new().unwrap();
    let a = write_csv(&dir, "data.csv", SALARY_CSV);

    cmd()
        .arg(&a)
        .args(["--report", "payout", "--format", "xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("available: json, console"));
}

#[test]
fn test_missing_report_flag_prints_usage() {
    cmd()
        .arg("data.csv")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--report"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_successfully() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"));
}

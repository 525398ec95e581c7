//! CLI integration tests
//!
//! These run the compiled binary against the fixture projects and assert on
//! output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn unwired() -> Command {
    Command::cargo_bin("unwired").unwrap()
}

#[test]
fn test_help() {
    unwired()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("controller methods"))
        .stdout(predicate::str::contains("--routes"));
}

#[test]
fn test_clean_project_exits_zero() {
    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/all_wired.json", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused handler methods found!"))
        .stdout(predicate::str::contains(
            "4 controller methods were checked. (0 skipped)",
        ));
}

#[test]
fn test_orphan_exits_one_and_names_the_method() {
    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unused method archive"))
        .stdout(predicate::str::contains("InvoiceController.php"))
        .stdout(predicate::str::contains(
            "3 controller methods were checked. (1 skipped)",
        ))
        .stdout(predicate::str::contains("gate definitions were checked."));
}

#[test]
fn test_orphan_line_number_in_terminal_output() {
    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("17:"));
}

#[test]
fn test_json_format() {
    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--format", "json", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"total_findings\": 1"))
        .stdout(predicate::str::contains("Unused method archive"));
}

#[test]
fn test_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");

    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--format", "json", "--quiet"])
        .arg("--output")
        .arg(&report)
        .assert()
        .code(1);

    let contents = std::fs::read_to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["total_findings"], 1);
    assert_eq!(parsed["stats"]["checked"], 3);
    assert_eq!(parsed["stats"]["skipped"], 1);
}

#[test]
fn test_config_file_report_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("unwired.yml");
    std::fs::write(&config, "report:\n  format: json\n").unwrap();

    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--quiet"])
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"total_findings\": 1"));
}

#[test]
fn test_format_flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("unwired.yml");
    std::fs::write(&config, "report:\n  format: json\n").unwrap();

    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--format", "terminal", "--quiet"])
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 unused handler methods:"))
        .stdout(predicate::str::contains("total_findings").not());
}

#[test]
fn test_parallel_flag_matches_sequential_findings() {
    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/orphan.json", "--parallel", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unused method archive"))
        .stdout(predicate::str::contains(
            "3 controller methods were checked. (1 skipped)",
        ));
}

#[test]
fn test_missing_route_manifest_fails() {
    unwired()
        .arg(fixtures_path().join("project"))
        .args(["--routes", "routes/missing.json", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("route manifest"));
}

#[test]
fn test_missing_project_path_fails() {
    unwired()
        .arg(fixtures_path().join("nope"))
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application root"));
}

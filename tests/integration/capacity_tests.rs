//! Tests around the filesystem capacity report.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::dirusage_command;

#[test]
fn test_capacity_text() {
    let dir = tempfile::tempdir().unwrap();

    dirusage_command(&["--capacity", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("available: "))
        .stdout(predicate::str::contains("\nused: "))
        .stdout(predicate::str::contains("\ntotal: "))
        .stdout(predicate::str::contains("size:").not());
}

#[test]
fn test_capacity_json_is_consistent() {
    let dir = tempfile::tempdir().unwrap();

    let output = dirusage_command(&["-c", "-j", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let avail = value["avail_size"].as_u64().unwrap();
    let used = value["used_size"].as_u64().unwrap();
    let all = value["all_size"].as_u64().unwrap();

    assert_eq!(used + avail, all);
    assert!(value.get("size").is_none());
}

#[test]
fn test_default_reports_everything() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("f"), [0u8; 10]).unwrap();

    dirusage_command(&["-b", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("available: "))
        .stdout(predicate::str::ends_with("size: 10\n"));
}

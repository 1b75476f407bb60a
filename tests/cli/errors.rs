use std::fs;

use crate::cli::support::{graphlab, graphlab_on, write_scenario};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["--format", "xml", "bfs", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_dataset_flag_is_usage_error() {
    let dir = tempdir().unwrap();

    graphlab(&dir)
        .args(["bfs", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no dataset given"));
}

#[test]
fn test_missing_dataset_file_means_no_graph() {
    let dir = tempdir().unwrap();

    graphlab_on(&dir, &dir.path().join("absent.json"))
        .arg("components")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no graph loaded"));
}

#[test]
fn test_unknown_start_node() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["bfs", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 9"));

    graphlab_on(&dir, &dataset)
        .args(["astar", "1", "99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 99"));
}

#[test]
fn test_malformed_dataset() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("bad.json");
    fs::write(&dataset, "[1, 2, 3]").unwrap();

    graphlab_on(&dir, &dataset)
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid dataset"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    let output = graphlab_on(&dir, &dataset)
        .args(["--format", "json", "dfs", "42"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "node_not_found");
}

#[test]
fn test_json_usage_error_envelope() {
    let dir = tempdir().unwrap();

    let output = graphlab(&dir)
        .args(["--format", "json", "bfs", "not-a-number"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
}

#[test]
fn test_json_envelope_for_inline_format_flag() {
    let dir = tempdir().unwrap();

    let output = graphlab(&dir)
        .args(["centrality", "--k", "many", "--format=json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["type"], "usage_error");
    assert_eq!(envelope["error"]["code"], 2);
}

#[test]
fn test_help_is_not_an_error_under_json() {
    let dir = tempdir().unwrap();

    graphlab(&dir)
        .args(["--format", "json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["--quiet", "bfs", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

use std::fs;

use crate::cli::support::{graphlab_on, stdout_json, write_scenario};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Node edits
// ============================================================================

#[test]
fn test_node_add_creates_dataset() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("fresh.json");

    graphlab_on(&dir, &dataset)
        .args(["node", "add", "7", "--activity", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added node 7"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dataset).unwrap()).unwrap();
    assert_eq!(saved["nodes"][0]["id"], 7);
    assert_eq!(saved["nodes"][0]["activity"], 0.5);

    graphlab_on(&dir, &dataset)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 1"))
        .stdout(predicate::str::contains("Edges: 0"));
}

#[test]
fn test_node_add_duplicate_fails() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);
    let before = fs::read_to_string(&dataset).unwrap();

    graphlab_on(&dir, &dataset)
        .args(["node", "add", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node already exists: 2"));

    assert_eq!(fs::read_to_string(&dataset).unwrap(), before);
}

#[test]
fn test_node_rename_keeps_edges() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["node", "rename", "4", "40"])
        .assert()
        .success();

    graphlab_on(&dir, &dataset)
        .args(["dijkstra", "1", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 1 -> 2 -> 3 -> 40"))
        .stdout(predicate::str::contains("Cost: 4"));
}

#[test]
fn test_node_remove_drops_edges() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["node", "remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed node 3 and 3 edge(s)"));

    graphlab_on(&dir, &dataset)
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("Component 1: 1, 2"))
        .stdout(predicate::str::contains("Component 2: 4"));
}

// ============================================================================
// Edge edits
// ============================================================================

#[test]
fn test_edge_add_persists_weight_and_neighbors() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["edge", "add", "4", "1", "--weight", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added edge 4 - 1 (weight 2.5)"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dataset).unwrap()).unwrap();
    assert_eq!(saved["nodes"][0]["neighbors"], "2,3,4");
    assert_eq!(saved["nodes"][3]["neighbors"], "1,3");

    graphlab_on(&dir, &dataset)
        .args(["dijkstra", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 1 -> 4"))
        .stdout(predicate::str::contains("Cost: 2.5"));
}

#[test]
fn test_edge_add_validation() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["edge", "add", "1", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge already exists"));

    graphlab_on(&dir, &dataset)
        .args(["edge", "add", "1", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("self-loop not allowed"));

    graphlab_on(&dir, &dataset)
        .args(["edge", "add", "1", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 9"));

    graphlab_on(&dir, &dataset)
        .args(["edge", "add", "1", "4", "--weight=-1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid edge weight"));

    graphlab_on(&dir, &dataset)
        .args(["edge", "add", "1", "4", "--weight", "heavy"])
        .assert()
        .code(2);
}

#[test]
fn test_edge_update_changes_shortest_path() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["edge", "update", "3", "1", "--weight", "0.5"])
        .assert()
        .success();

    graphlab_on(&dir, &dataset)
        .args(["dijkstra", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 1 -> 3 -> 4"))
        .stdout(predicate::str::contains("Cost: 1.5"));
}

#[test]
fn test_edge_remove_disconnects() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["edge", "remove", "3", "4"])
        .assert()
        .success();

    graphlab_on(&dir, &dataset)
        .args(["dijkstra", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 1 to 4"));

    graphlab_on(&dir, &dataset)
        .args(["edge", "remove", "3", "4"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge not found: 3 - 4"));
}

#[test]
fn test_edit_json_output() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    let output = graphlab_on(&dir, &dataset)
        .args(["--format", "json", "node", "add", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["action"], "node.add");
    assert_eq!(json["id"], "5");
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["edges"], 4);
}

use crate::cli::support::{graphlab_on, stdout_json, write_scenario};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Traversals
// ============================================================================

#[test]
fn test_bfs_human() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["bfs", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 3 -> 4"))
        .stdout(predicate::str::contains("BFS finished in"));
}

#[test]
fn test_dfs_quiet_prints_only_order() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["--quiet", "dfs", "4"])
        .assert()
        .success()
        .stdout("4 -> 3 -> 1 -> 2\n");
}

#[test]
fn test_bfs_records() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["--format", "records", "bfs", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H graphlab=1 records=1"))
        .stdout(predicate::str::contains("mode=bfs visited=4"))
        .stdout(predicate::str::contains("V 0 3\nV 1 1\nV 2 2\nV 3 4\n"));
}

// ============================================================================
// Shortest paths
// ============================================================================

#[test]
fn test_dijkstra_human() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["dijkstra", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: 1 -> 2 -> 3 -> 4"))
        .stdout(predicate::str::contains("Cost: 4"));
}

#[test]
fn test_dijkstra_json() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    let output = graphlab_on(&dir, &dataset)
        .args(["--format", "json", "dijkstra", "4", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"]["algorithm"], "dijkstra");
    assert_eq!(json["output"]["kind"], "path");
    assert_eq!(
        json["output"]["result"]["path"],
        serde_json::json!([4, 3, 2, 1])
    );
    assert_eq!(json["output"]["result"]["cost"], 4.0);
}

#[test]
fn test_astar_with_euclidean_heuristic() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["--format", "records", "astar", "1", "4", "--heuristic", "euclidean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=astar found=true cost=4 hops=3"))
        .stdout(predicate::str::contains("P 3 4"));
}

#[test]
fn test_astar_rejects_unknown_heuristic() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["astar", "1", "4", "--heuristic", "manhattan"])
        .assert()
        .code(2);
}

// ============================================================================
// Whole-graph algorithms
// ============================================================================

#[test]
fn test_components() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("Component 1: 1, 2, 3, 4"))
        .stdout(predicate::str::contains("1 component(s)"));
}

#[test]
fn test_centrality_top_two() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["centrality", "--k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 3 (degree 3)\n2. 1 (degree 2)\n"))
        .stdout(predicate::str::contains("3. ").not());
}

#[test]
fn test_centrality_defaults_to_five() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["--format", "records", "centrality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=centrality k=4"))
        .stdout(predicate::str::contains("D 4 4 degree=1"));
}

#[test]
fn test_centrality_non_positive_k_reports_nothing() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .args(["centrality", "--k=-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ").not());

    graphlab_on(&dir, &dataset)
        .args(["--format", "records", "centrality", "-k", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=centrality k=0"))
        .stdout(predicate::str::contains("D ").not());

    graphlab_on(&dir, &dataset)
        .args(["centrality", "--k", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(degree ").not());
}

#[test]
fn test_color() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .arg("color")
        .assert()
        .success()
        .stdout(predicate::str::contains("1: color 1"))
        .stdout(predicate::str::contains("2: color 2"))
        .stdout(predicate::str::contains("3: color 0"))
        .stdout(predicate::str::contains("4: color 1"))
        .stdout(predicate::str::contains("3 color(s)"));
}

#[test]
fn test_info() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);

    graphlab_on(&dir, &dataset)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 4"))
        .stdout(predicate::str::contains("Edges: 4"))
        .stdout(predicate::str::contains("Max degree: 3"));
}

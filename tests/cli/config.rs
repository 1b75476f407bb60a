use std::fs;

use crate::cli::support::{config_dir, graphlab_on, write_scenario};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_discovered_config_sets_top_k() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);
    fs::create_dir_all(config_dir(&dir)).unwrap();
    fs::write(config_dir(&dir).join("config.toml"), "top_k = 1\n").unwrap();

    graphlab_on(&dir, &dataset)
        .arg("centrality")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 3 (degree 3)"))
        .stdout(predicate::str::contains("2. ").not());
}

#[test]
fn test_explicit_config_default_weight() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("analysis.toml");
    fs::write(&config, "default_weight = 3.0\n").unwrap();
    let dataset = dir.path().join("graph.json");
    fs::write(
        &dataset,
        r#"{ "nodes": [ { "id": 1, "neighbors": "2" }, { "id": 2 } ] }"#,
    )
    .unwrap();

    graphlab_on(&dir, &dataset)
        .arg("--config")
        .arg(&config)
        .args(["dijkstra", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: 3"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = tempdir().unwrap();
    let dataset = write_scenario(&dir);
    let config = dir.path().join("analysis.toml");
    fs::write(&config, "layout_radius = -2.0\n").unwrap();

    graphlab_on(&dir, &dataset)
        .arg("--config")
        .arg(&config)
        .arg("components")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid layout_radius"));
}

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::TempDir;

/// Scenario graph: 1-2 (1), 2-3 (2), 1-3 (4), 3-4 (1)
pub const SCENARIO: &str = r#"{
  "nodes": [
    { "id": 1, "neighbors": "2,3" },
    { "id": 2, "neighbors": "1,3" },
    { "id": 3, "neighbors": "1,2,4" },
    { "id": 4, "neighbors": "3" }
  ],
  "edges": [
    { "from": 1, "to": 2, "weight": 1.0 },
    { "from": 2, "to": 3, "weight": 2.0 },
    { "from": 1, "to": 3, "weight": 4.0 },
    { "from": 3, "to": 4, "weight": 1.0 }
  ]
}
"#;

/// Get a Command for graphlab isolated from the user's config and env
pub fn graphlab(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("graphlab");
    cmd.current_dir(dir.path())
        .env("GRAPHLAB_CONFIG_DIR", config_dir(dir))
        .env_remove("GRAPHLAB_DATASET")
        .env_remove("GRAPHLAB_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Command pre-pointed at `dataset`
pub fn graphlab_on(dir: &TempDir, dataset: &Path) -> Command {
    let mut cmd = graphlab(dir);
    cmd.arg("--dataset").arg(dataset);
    cmd
}

pub fn config_dir(dir: &TempDir) -> PathBuf {
    dir.path().join("config")
}

/// Write the scenario dataset and return its path
pub fn write_scenario(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("graph.json");
    fs::write(&path, SCENARIO).unwrap();
    path
}

/// Parse stdout of a finished command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

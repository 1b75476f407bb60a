//! Analysis configuration for graphlab
//!
//! Stored as TOML. The default location is `<config dir>/graphlab/config.toml`,
//! overridable with `GRAPHLAB_CONFIG_DIR`. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{EuclideanHeuristic, Heuristic, ZeroHeuristic};
use crate::model::Graph;

pub use types::{AnalysisConfig, HeuristicKind, DEFAULT_TOP_K};

const CONFIG_DIR: &str = "graphlab";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHLAB_CONFIG_DIR";

impl AnalysisConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                GraphError::io_operation("create config directory", parent.display(), e)
            })?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Path of the user-level config file
    pub fn default_path() -> Result<PathBuf> {
        // Environment override is used by tests
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };
        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user-level config, or defaults when there is none
    pub fn discover() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Reject values no algorithm can use
    pub fn validate(&self) -> Result<()> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            crate::bail_invalid!("default_weight", self.default_weight);
        }
        if !self.layout_radius.is_finite() || self.layout_radius <= 0.0 {
            crate::bail_invalid!("layout_radius", self.layout_radius);
        }
        Ok(())
    }

    /// Heuristic for `graph`, using `kind` or the configured default
    pub fn heuristic_for(
        &self,
        graph: &Graph,
        kind: Option<HeuristicKind>,
    ) -> Box<dyn Heuristic> {
        match kind.unwrap_or(self.heuristic) {
            HeuristicKind::Zero => Box::new(ZeroHeuristic),
            HeuristicKind::Euclidean => {
                Box::new(EuclideanHeuristic::circular(graph, self.layout_radius))
            }
        }
    }
}

//! Engine configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{
    GraphError, GraphResult, DEFAULT_FLOW_EPSILON, DEFAULT_MATRIX_WINDOW,
    DEFAULT_MAX_VISUAL_NODES, DEFAULT_REACHABLE_SAMPLE,
};

/// Complete engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Display windowing configuration
    pub display: DisplayConfig,

    /// Max-flow configuration
    pub flow: FlowConfig,
}

/// How much of a computed result the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Distance-matrix rows shown
    pub matrix_rows: usize,

    /// Distance-matrix columns shown
    pub matrix_cols: usize,

    /// Reachable nodes shown from a single-source result
    pub reachable_sample: usize,

    /// Nodes sent to a graph display
    pub max_visual_nodes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Residual capacity at or below this counts as saturated
    pub epsilon: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            matrix_rows: DEFAULT_MATRIX_WINDOW,
            matrix_cols: DEFAULT_MATRIX_WINDOW,
            reachable_sample: DEFAULT_REACHABLE_SAMPLE,
            max_visual_nodes: DEFAULT_MAX_VISUAL_NODES,
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_FLOW_EPSILON,
        }
    }
}

impl EngineConfig {
    /// Load from TOML file, rejecting out-of-range settings.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check settings the algorithms cannot run with.
    pub fn validate(&self) -> GraphResult<()> {
        let epsilon = self.flow.epsilon;
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            return Err(GraphError::InvalidEpsilon(epsilon));
        }
        Ok(())
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GraphError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config file location.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("netgraph")
            .join("config.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => config,
            Err(GraphError::Io(_)) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

//! Run configuration for redwood.
//!
//! A run is a list of values inserted in order (optionally repeated), an
//! optional node limit, an output format and logging settings.

use anyhow::Context;
use redwood_logging::LoggingConfig;
use redwood_render::RenderFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration format types supported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// Detect format from a file extension, falling back to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// A single redwood run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedwoodConfig {
    /// Values inserted, in order
    #[serde(default)]
    pub values: Vec<i32>,

    /// How many times `values` is inserted
    #[serde(default = "default_repeat")]
    pub repeat: usize,

    /// Maximum number of nodes the tree may hold
    #[serde(default)]
    pub node_limit: Option<usize>,

    /// Output format for the finished tree
    #[serde(default)]
    pub format: RenderFormat,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_repeat() -> usize {
    1
}

impl Default for RedwoodConfig {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            repeat: default_repeat(),
            node_limit: None,
            format: RenderFormat::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl RedwoodConfig {
    /// The classic demo: eight values inserted eight times over.
    pub fn demo() -> Self {
        Self {
            values: vec![11, 14, 2, 1, 7, 5, 8, 4],
            repeat: 8,
            ..Self::default()
        }
    }

    /// Every value of the run in insertion order, repeats expanded.
    pub fn insert_sequence(&self) -> impl Iterator<Item = i32> + '_ {
        std::iter::repeat_n(self.values.as_slice(), self.repeat).flatten().copied()
    }

    /// Number of inserts the run performs.
    pub fn insert_count(&self) -> usize {
        self.values.len().saturating_mul(self.repeat)
    }
}

/// Load configuration from a file
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<RedwoodConfig> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;

    match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON config: {}", e)),
        ConfigFormat::Yaml => serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse YAML config: {}", e)),
    }
}

/// Save configuration to a file
pub fn save_config(config: &RedwoodConfig, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON config: {}", e))?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| anyhow::anyhow!("Failed to serialize YAML config: {}", e))?,
    };

    std::fs::write(path, contents).with_context(|| format!("write config {path:?}"))?;
    Ok(())
}

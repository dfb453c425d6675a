//! CLI configuration handling.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliResult;

/// Default config file name (lives in project root)
pub const CONFIG_FILE_NAME: &str = "tabledoc.toml";

/// Default snapshot file name (relative to project root)
pub const SNAPSHOT_FILE_NAME: &str = "schema_snapshot.json";

/// Default output directory (relative to project root)
pub const OUTPUT_DIR: &str = "docs/schema";

/// Tabledoc CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot configuration
    pub snapshot: SnapshotConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: SnapshotConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Snapshot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path to the metadata snapshot file
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: SNAPSHOT_FILE_NAME.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the generated documents are written to
    pub dir: String,

    /// Formats to render when none are passed on the command line
    pub formats: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: OUTPUT_DIR.to_string(),
            formats: vec!["markdown".to_string(), "plantuml".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.snapshot.path, SNAPSHOT_FILE_NAME);
        assert_eq!(config.output.dir, OUTPUT_DIR);
        assert_eq!(config.output.formats, vec!["markdown", "plantuml"]);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [output]
            dir = "generated/docs"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.dir, "generated/docs");
        assert_eq!(config.output.formats, vec!["markdown", "plantuml"]);
        assert_eq!(config.snapshot.path, SNAPSHOT_FILE_NAME);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.output.dir = "out".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.output.dir, "out");
    }
}

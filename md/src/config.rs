//! Configuration for mediator-demo

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_SCENARIO;
use crate::event::EventId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error, off)
    #[serde(default)]
    pub log_level: Option<String>,

    /// Operations triggered by `md run` when no events are given
    #[serde(default = "default_scenario")]
    pub scenario: Vec<EventId>,
}

fn default_scenario() -> Vec<EventId> {
    DEFAULT_SCENARIO.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            scenario: default_scenario(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::read(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("mediator-demo").join("config.yml")),
            Some(PathBuf::from("mediator-demo.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read(path);
            }
        }

        Ok(Config::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

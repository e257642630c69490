//! Demo shell configuration, loaded from JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use viewstate_core::StateSetConfig;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Panel '{panel}' selects unknown state '{state}'")]
    UnknownSelection { panel: String, state: String },
    #[error("Duplicate panel name '{0}'")]
    DuplicatePanel(String),
}

/// One panel: a parent node with its mutually exclusive children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub name: String,
    pub states: Vec<String>,
    /// State active when the session starts.
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub config: StateSetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub panels: Vec<PanelConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Viewstate".to_string(),
            panels: vec![PanelConfig {
                name: "Main".to_string(),
                states: vec!["Intro".to_string(), "Menu".to_string(), "Credits".to_string()],
                selected: None,
                config: StateSetConfig::default(),
            }],
        }
    }
}

impl AppConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (i, panel) in self.panels.iter().enumerate() {
            if self.panels[..i].iter().any(|p| p.name == panel.name) {
                return Err(ConfigError::DuplicatePanel(panel.name.clone()));
            }
            if let Some(selected) = &panel.selected {
                if !panel.states.contains(selected) {
                    return Err(ConfigError::UnknownSelection {
                        panel: panel.name.clone(),
                        state: selected.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

//! Workspace configuration (`<state_dir>/config.yaml`)

use serde::{Deserialize, Serialize};

use crate::errors::{ExError, ExErrorKind, Result};
use crate::snapshot::manifest::DEFAULT_CONVENTION_VERSION;

pub const DEFAULT_ADAPTERS: [&str; 2] = ["cursor", "copilot"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub convention_version: String,
    /// Adapters `export` may be invoked with
    pub adapters: Vec<String>,
    /// Output base for exports, relative to the state dir's parent
    pub project_root: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convention_version: DEFAULT_CONVENTION_VERSION.to_string(),
            adapters: DEFAULT_ADAPTERS.iter().map(|a| a.to_string()).collect(),
            project_root: None,
        }
    }
}

impl Config {
    /// Parse configuration YAML; an empty document yields defaults
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the YAML is malformed or has the wrong shape.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Config = serde_yaml::from_str(content).map_err(|e| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_config")
                .with_message(format!("invalid config.yaml: {}", e))
        })?;
        if config.adapters.is_empty() {
            config.adapters = Self::default().adapters;
        }
        if config.convention_version.trim().is_empty() {
            config.convention_version = DEFAULT_CONVENTION_VERSION.to_string();
        }
        Ok(config)
    }

    pub fn allows_adapter(&self, adapter: &str) -> bool {
        self.adapters.iter().any(|a| a == adapter)
    }
}

//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::error::Result;
use std::path::Path;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Config = serde_yaml::from_str(yaml)?;
        config.apply_default_labels();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    fn apply_default_labels(&mut self) {
        if self.source.label.is_empty() {
            self.source.label = DEFAULT_SOURCE_LABEL.to_string();
        }
        if self.target.label.is_empty() {
            self.target.label = DEFAULT_TARGET_LABEL.to_string();
        }
    }
}

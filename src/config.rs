use crate::error::MetricsError;
use crate::eval::DcgMethod;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Metric defaults
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Cutoff used when the caller does not pass one.
    #[serde(default = "default_k")]
    pub default_k: usize,
    #[serde(default)]
    pub method: DcgMethod,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            method: DcgMethod::default(),
        }
    }
}

fn default_k() -> usize {
    10
}

impl Config {
    /// Load configuration from a caller-supplied path
    ///
    /// Nothing is looked up implicitly: no environment variables and no
    /// default file in the working directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(s: &str) -> crate::error::Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> crate::error::Result<()> {
        if self.metrics.default_k == 0 {
            return Err(MetricsError::Config(
                "metrics.default_k must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

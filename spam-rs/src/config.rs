//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClassifierError, Result};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Classification settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Training data settings
    #[serde(default)]
    pub training: TrainingConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Classification settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Minimum trimmed input length accepted by the detector
    #[serde(default = "default_min_input_length")]
    pub min_input_length: usize,
}

/// Training data settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TrainingConfig {
    /// Path to a JSON or JSON Lines corpus; the built-in samples are used when unset
    pub corpus_path: Option<String>,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// One of "pretty", "compact" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_min_input_length() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_input_length: default_min_input_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "compact" | "json" => Ok(()),
            other => Err(ClassifierError::Config(format!(
                "Unknown logging format '{}'",
                other
            ))),
        }
    }
}

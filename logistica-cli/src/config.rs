use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use logistica_core::prelude::*;
use serde::Deserialize;

/// Settings read from the optional TOML file; every section may be omitted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub network: NetworkConfig,
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Reads `path` if given, otherwise returns the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config '{}': {e}", path.display()))?;
                Self::from_toml(&text)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(text)?)
    }

    /// Command-line flags take precedence over the file
    pub fn apply_overrides(
        &mut self,
        dataset_path: Option<PathBuf>,
        condition: Option<Condition>,
        log_filter: Option<String>,
    ) {
        if let Some(dataset_path) = dataset_path {
            self.network.dataset_path = dataset_path;
        }
        if let Some(condition) = condition {
            self.network.condition = condition;
        }
        if let Some(log_filter) = log_filter {
            self.logging.filter = log_filter;
        }
    }
}

use serde::Deserialize;
use std::fs;

use crate::common::error::{AnalyzerError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub datasets: DatasetsConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct DatasetsConfig {
    /// Locator for the meets dataset: a filesystem path or an http(s) URL.
    pub meets: String,
    /// Locator for the openpowerlifting lifts dataset.
    pub lifts: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Destination path for the rendered report.
    pub output: String,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            AnalyzerError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

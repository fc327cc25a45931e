//! Configuration loading from TOML files
//!
//! Without `--config` the built-in sensor packages are processed with text
//! output. A config file replaces the package list and may pick the format.

use crate::domain::Package;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed human-readable message per workout
    #[default]
    Text,
    /// One JSON object per workout
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub packages: Vec<Package>,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    output_format: OutputFormat,
    packages: Vec<Package>,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            packages: Self::default_packages(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Sample packages as delivered by the sensor block
    fn default_packages() -> Vec<Package> {
        vec![
            Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", &[15000.0, 1.0, 75.0]),
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ]
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            output_format: toml_config.output.format,
            packages: toml_config.packages,
            config_file: path.display().to_string(),
        })
    }

    /// Load from the given file, or use built-in defaults when none is given.
    ///
    /// An explicit path that cannot be read or parsed is an error.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Override the output format (from the command line)
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use minutes_extractor::PipelineConfig;
use minutes_llm::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "minutes.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model name
    pub model: String,

    /// API endpoint
    pub endpoint: String,

    /// Sampling temperature, 0.0 to 2.0
    pub temperature: f32,

    /// Pipeline settings
    pub pipeline: PipelineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: 0.0,
            pipeline: PipelineConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `minutes.toml` in the
    /// working directory is used if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(CliError::Config("model must not be empty".into()));
        }
        if self.endpoint.trim().is_empty() {
            return Err(CliError::Config("endpoint must not be empty".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CliError::Config("temperature must be between 0.0 and 2.0".into()));
        }
        self.pipeline.validate().map_err(CliError::Config)
    }
}

/// Read the API key from the environment.
pub fn api_key_from_env() -> Result<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(CliError::MissingApiKey(API_KEY_ENV))
}

/// Mask a credential for logging, keeping its first 6 and last 4 characters.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

//! Configuration structures for windspeak

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub station: StationConfig,
    pub voice: VoiceConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would only fail later, deep inside a request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.station.api_url.trim().is_empty() {
            return Err(invalid("station.api_url", &self.station.api_url));
        }
        if self.station.timeout_secs == 0 {
            return Err(invalid("station.timeout_secs", "0"));
        }
        if self.voice.name.trim().is_empty() {
            return Err(invalid("voice.name", &self.voice.name));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Station API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// API root URL
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Station spoken when none is given on the command line
    pub station: Option<String>,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            api_url: "http://vind.minimum.se/api/v3".to_string(),
            timeout_secs: 10,
            station: None,
        }
    }
}

/// Voice asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Directory holding one subdirectory per voice
    pub voices_dir: PathBuf,
    /// Voice used for output
    pub name: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voices_dir: PathBuf::from("voices"),
            name: "magnus".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output wave file
    pub path: PathBuf,
    /// Format used when printing a compiled phrase
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("windspeak.wav"),
            format: OutputFormat::Text,
        }
    }
}

/// Phrase listing formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// JSON with the reading and its tokens
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(invalid("output.format", other)),
        }
    }
}

//! Custom error types for windspeak

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for windspeak
#[derive(Error, Debug)]
pub enum WindspeakError {
    #[error("Phrase error: {0}")]
    Phrase(#[from] PhraseError),

    #[error("Assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Station error: {0}")]
    Station(#[from] StationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning numbers into clip tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhraseError {
    /// No clip in the vocabulary can express this integer
    #[error("Number {0} has no spoken form in the clip vocabulary")]
    OutOfRange(i64),

    #[error("Cannot speak non-finite value {0}")]
    NotFinite(f64),
}

/// Errors raised while stitching clips into the output waveform
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Voice '{name}' not found in {}", .dir.display())]
    VoiceNotFound { name: String, dir: PathBuf },

    #[error("Missing clip '{token}' ({})", .path.display())]
    MissingClip { token: String, path: PathBuf },

    #[error("Clip '{token}' is {found}, expected {expected}")]
    FormatMismatch {
        token: String,
        expected: String,
        found: String,
    },

    #[error("WAV error: {0}")]
    Wav(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hound::Error> for AssemblyError {
    fn from(e: hound::Error) -> Self {
        match e {
            hound::Error::IoError(io) => AssemblyError::Io(io),
            other => AssemblyError::Wav(other.to_string()),
        }
    }
}

/// Station API errors
#[derive(Error, Debug)]
pub enum StationError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Station does not exist: {0}")]
    UnknownStation(String),

    #[error("Station {0} has no readings")]
    EmptyHistory(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, WindspeakError>;

//! windspeak
//!
//! Reads the latest wind measurement of a WindWiz weather station out loud
//! by stitching pre-recorded word clips into a single WAV file.
//!
//! # Architecture
//!
//! - `phrase`: pure conversion of a [`Reading`] into an ordered clip list
//! - `audio`: voice lookup and clip concatenation
//! - `station`: WindWiz HTTP API client
//! - `output`: phrase listing formats
//! - `config`: Configuration structures
//! - `error`: Error types
//!
//! # Example
//!
//! ```no_run
//! use windspeak::{compile, AudioAssembler, Config, Reading, Voice};
//!
//! let config = Config::default();
//! let phrase = compile(&Reading::new(10.0, 3.7)).unwrap();
//!
//! let voice = Voice::open(&config.voice.voices_dir, &config.voice.name).unwrap();
//! AudioAssembler::new()
//!     .assemble(&config.output.path, &voice, &phrase)
//!     .unwrap();
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod output;
pub mod phrase;
pub mod reading;
pub mod station;

// Re-exports for convenience
pub use audio::{AssemblyReport, AudioAssembler, Voice};
pub use config::{Config, OutputConfig, OutputFormat, StationConfig, VoiceConfig};
pub use error::{AssemblyError, ConfigError, PhraseError, Result, StationError, WindspeakError};
pub use phrase::{compile, ClipToken, CompassPoint, PhraseSequence};
pub use reading::Reading;
pub use station::StationClient;

/// Compile a reading and assemble it with `voice` into `output` in one step
pub fn speak(
    reading: &Reading,
    voice: &Voice,
    output: &std::path::Path,
) -> Result<AssemblyReport> {
    let phrase = compile(reading)?;
    Ok(AudioAssembler::new().assemble(output, voice, &phrase)?)
}

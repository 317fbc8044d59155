//! Output formatting for compiled phrases and assembly summaries

pub mod formats;

use std::io::{self, Write};
use std::time::Duration;

use crate::config::OutputFormat;
use crate::phrase::PhraseSequence;
use crate::reading::Reading;

pub use formats::{format_json, format_text};

/// Render a phrase in the requested format
pub fn format_phrase(format: OutputFormat, reading: &Reading, phrase: &PhraseSequence) -> String {
    match format {
        OutputFormat::Text => format_text(phrase),
        OutputFormat::Json => format_json(reading, phrase),
    }
}

/// Write a formatted phrase followed by a newline
pub fn write_phrase<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reading: &Reading,
    phrase: &PhraseSequence,
) -> io::Result<()> {
    writeln!(out, "{}", format_phrase(format, reading, phrase))?;
    out.flush()
}

/// Format a duration as MM:SS.mmm (HH:MM:SS.mmm past one hour)
pub fn format_timestamp(duration: Duration) -> String {
    let ms = duration.as_millis();
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = ms % 1000;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
    }
}

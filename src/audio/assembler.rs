//! Concatenation of voice clips into a single WAV file

use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use std::time::Duration;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::{debug, info, warn};

use super::voice::Voice;
use crate::error::AssemblyError;
use crate::phrase::{ClipToken, PhraseSequence};

/// Format of every clip and of the assembled output
pub const OUTPUT_SPEC: WavSpec = WavSpec {
    channels: 1,
    sample_rate: 44100,
    bits_per_sample: 16,
    sample_format: SampleFormat::Int,
};

/// Summary of one assembled file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Number of clips written
    pub clips: usize,
    /// Total sample frames written
    pub frames: u64,
    /// Sample rate of the output
    pub sample_rate: u32,
}

impl AssemblyReport {
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames as f64 / self.sample_rate as f64)
    }
}

/// Stitches clips end to end, without crossfade, padding or resampling
#[derive(Debug, Clone)]
pub struct AudioAssembler {
    spec: WavSpec,
}

impl Default for AudioAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioAssembler {
    pub fn new() -> Self {
        Self { spec: OUTPUT_SPEC }
    }

    /// Write the clips of `phrase`, in order, to `output`.
    ///
    /// Samples are staged in a temporary file next to `output` and moved into
    /// place only once the WAV header is finalized. On error the staged file
    /// is dropped and any earlier file at `output` is deleted.
    pub fn assemble(
        &self,
        output: &Path,
        voice: &Voice,
        phrase: &PhraseSequence,
    ) -> Result<AssemblyReport, AssemblyError> {
        let frames = match self.write_staged(output, voice, phrase) {
            Ok(frames) => frames,
            Err(e) => {
                remove_stale_output(output);
                return Err(e);
            }
        };

        let report = AssemblyReport {
            clips: phrase.len(),
            frames,
            sample_rate: self.spec.sample_rate,
        };

        info!(
            "Wrote {} clips ({} frames, {:.2}s) with voice '{}' to {}",
            report.clips,
            report.frames,
            report.duration().as_secs_f32(),
            voice.name(),
            output.display()
        );

        Ok(report)
    }

    /// Stage the whole phrase and rename it over `output`, returning the frame count
    fn write_staged(
        &self,
        output: &Path,
        voice: &Voice,
        phrase: &PhraseSequence,
    ) -> Result<u64, AssemblyError> {
        let dir = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut staged = tempfile::Builder::new()
            .prefix(".windspeak-")
            .suffix(".wav")
            .tempfile_in(dir)?;

        let frames = {
            let mut writer = WavWriter::new(BufWriter::new(staged.as_file_mut()), self.spec)?;
            let mut frames = 0u64;
            for token in phrase {
                frames += self.append_clip(&mut writer, voice, token)?;
            }
            writer.finalize()?;
            frames
        };

        staged
            .persist(output)
            .map_err(|e| AssemblyError::Io(e.error))?;

        Ok(frames)
    }

    /// Stream one clip into the writer, returning its frame count
    fn append_clip<W: Write + Seek>(
        &self,
        writer: &mut WavWriter<W>,
        voice: &Voice,
        token: &ClipToken,
    ) -> Result<u64, AssemblyError> {
        let path = voice.clip_path(token);
        let mut reader = WavReader::open(&path).map_err(|e| match e {
            hound::Error::IoError(_) => AssemblyError::MissingClip {
                token: token.to_string(),
                path: path.clone(),
            },
            other => AssemblyError::Wav(format!("{}: {}", path.display(), other)),
        })?;

        let spec = reader.spec();
        if spec != self.spec {
            return Err(AssemblyError::FormatMismatch {
                token: token.to_string(),
                expected: describe(&self.spec),
                found: describe(&spec),
            });
        }

        let frames = u64::from(reader.duration());
        for sample in reader.samples::<i16>() {
            writer.write_sample(sample?)?;
        }

        debug!("Appended {} ({} frames)", token, frames);
        Ok(frames)
    }
}

/// Delete a report left over from an earlier run
fn remove_stale_output(output: &Path) {
    match std::fs::remove_file(output) {
        Ok(()) => warn!("Removed stale {} after failed assembly", output.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove stale {}: {}", output.display(), e),
    }
}

fn describe(spec: &WavSpec) -> String {
    let kind = match spec.sample_format {
        SampleFormat::Int => "int",
        SampleFormat::Float => "float",
    };
    format!(
        "{} ch / {}-bit {} / {} Hz",
        spec.channels, spec.bits_per_sample, kind, spec.sample_rate
    )
}

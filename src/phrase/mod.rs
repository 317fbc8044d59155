//! Turning wind readings into ordered clip tokens
//!
//! Everything here is pure: no I/O and no state. The resulting
//! [`PhraseSequence`] is handed to the audio assembler as-is.

pub mod compass;
pub mod number;
pub mod token;

use tracing::debug;

use crate::error::PhraseError;
use crate::reading::Reading;

pub use compass::{compass_to_tokens, CompassPoint};
pub use number::{degrees_to_tokens, int_to_tokens, num_to_tokens, MAX_SPOKEN_INTEGER};
pub use token::{ClipToken, PhraseSequence, Word};

/// Compile a full report:
/// "wind direction <compass> <n> degrees, wind speed <x> m/s"
pub fn compile(reading: &Reading) -> Result<PhraseSequence, PhraseError> {
    let direction = reading.wind_direction;
    if !direction.is_finite() {
        return Err(PhraseError::NotFinite(direction));
    }

    let mut phrase = PhraseSequence::new();
    phrase.push_word(Word::WindDirection);
    phrase.append(compass_to_tokens(direction));
    phrase.append(degrees_to_tokens(direction)?);
    phrase.push_word(Word::WindSpeed);
    phrase.append(num_to_tokens(reading.wind_speed)?);
    phrase.push_word(Word::MetersPerSecond);

    debug!(
        "Compiled {:.1} deg / {:.1} m/s into {} clips",
        reading.wind_direction,
        reading.wind_speed,
        phrase.len()
    );

    Ok(phrase)
}

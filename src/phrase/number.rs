//! Spoken forms of integers, decimals and degree values

use super::token::{ClipToken, PhraseSequence, Word};
use crate::error::PhraseError;

/// Largest magnitude the vocabulary can speak; there are no thousands clips
pub const MAX_SPOKEN_INTEGER: u64 = 999;

/// Decompose an integer into number clips.
///
/// 0..=20 have a clip each. Larger values are split into hundreds and tens.
/// Tens use the connector form (`20-.wav`) when a unit follows and the
/// terminal form (`20.wav`, `100.wav`) when none does. Hundreds above 100
/// always use the connector form, so 200 is spoken as `200-.wav`, `0.wav`.
pub fn int_to_tokens(n: i64) -> Result<PhraseSequence, PhraseError> {
    let mut rest = n.unsigned_abs();
    if rest > MAX_SPOKEN_INTEGER {
        return Err(PhraseError::OutOfRange(n));
    }

    let mut phrase = PhraseSequence::new();
    if n < 0 {
        phrase.push_word(Word::Minus);
    }

    loop {
        match rest {
            0..=20 => {
                phrase.push(ClipToken::number(rest));
                break;
            }
            21..=100 => {
                let tens = rest / 10 * 10;
                let ones = rest % 10;
                if ones == 0 {
                    phrase.push(ClipToken::number(tens));
                    break;
                }
                phrase.push(ClipToken::connector(tens));
                rest = ones;
            }
            _ => {
                // whole hundreds still take the connector and end on "0.wav"
                phrase.push(ClipToken::connector(rest / 100 * 100));
                rest %= 100;
            }
        }
    }

    Ok(phrase)
}

/// Speak a real number with one decimal digit ("three comma seven").
///
/// The tenth is rounded half away from zero; a tenth that rounds up to ten
/// carries into the integer part, so 3.96 is spoken as "four".
pub fn num_to_tokens(x: f64) -> Result<PhraseSequence, PhraseError> {
    if !x.is_finite() {
        return Err(PhraseError::NotFinite(x));
    }

    let mut whole = x.trunc();
    let mut tenth = ((x - whole).abs() * 10.0).round();
    if tenth >= 10.0 {
        whole += x.signum();
        tenth = 0.0;
    }

    let whole = whole as i64;
    let tenth = tenth as i64;

    let mut phrase = PhraseSequence::new();
    // -0.4 truncates to zero; the sign has to be spoken explicitly
    if whole == 0 && x < 0.0 && tenth != 0 {
        phrase.push_word(Word::Minus);
    }
    phrase.append(int_to_tokens(whole)?);

    if tenth != 0 {
        phrase.push_word(Word::Comma);
        phrase.append(int_to_tokens(tenth)?);
    }

    Ok(phrase)
}

/// Speak a bearing as whole degrees, dropping the fraction
pub fn degrees_to_tokens(deg: f64) -> Result<PhraseSequence, PhraseError> {
    if !deg.is_finite() {
        return Err(PhraseError::NotFinite(deg));
    }

    let mut phrase = int_to_tokens(deg.trunc() as i64)?;
    phrase.push_word(Word::Degrees);
    Ok(phrase)
}

//! Clip tokens and phrase sequences

use serde::Serialize;
use std::fmt;

/// Name of one pre-recorded clip, e.g. `20-.wav` or `north.wav`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClipToken(String);

impl ClipToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Terminal form of a number: `<n>.wav`
    pub fn number(n: u64) -> Self {
        Self(format!("{}.wav", n))
    }

    /// Connector form of a number, used when more digits follow: `<n>-.wav`
    pub fn connector(n: u64) -> Self {
        Self(format!("{}-.wav", n))
    }

    pub fn word(word: Word) -> Self {
        Self(word.file_name().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-numeric words of the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Minus,
    Comma,
    Degrees,
    MetersPerSecond,
    WindDirection,
    WindSpeed,
}

impl Word {
    pub fn file_name(self) -> &'static str {
        match self {
            Word::Minus => "minus.wav",
            Word::Comma => "comma.wav",
            Word::Degrees => "degrees.wav",
            Word::MetersPerSecond => "ms.wav",
            Word::WindDirection => "winddir.wav",
            Word::WindSpeed => "windspeed.wav",
        }
    }
}

/// Ordered list of clips, in playback order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhraseSequence {
    tokens: Vec<ClipToken>,
}

impl PhraseSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: ClipToken) {
        self.tokens.push(token);
    }

    pub fn push_word(&mut self, word: Word) {
        self.tokens.push(ClipToken::word(word));
    }

    /// Append another phrase, keeping its order
    pub fn append(&mut self, other: PhraseSequence) {
        self.tokens.extend(other.tokens);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Clip names as plain strings
    pub fn names(&self) -> Vec<&str> {
        self.tokens.iter().map(ClipToken::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a PhraseSequence {
    type Item = &'a ClipToken;
    type IntoIter = std::slice::Iter<'a, ClipToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for PhraseSequence {
    type Item = ClipToken;
    type IntoIter = std::vec::IntoIter<ClipToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<ClipToken> for PhraseSequence {
    fn from_iter<I: IntoIterator<Item = ClipToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for PhraseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(" "))
    }
}

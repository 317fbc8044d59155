//! Sixteen-point compass names

use super::token::{ClipToken, PhraseSequence};

/// Points of a 16-point compass rose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
}

/// Lower bounds, highest first. A bearing belongs to the first entry it is
/// strictly greater than, so a bearing sitting exactly on a bound falls to
/// the next entry down. Everything at or below 22.5 is north.
const CASCADE: [(f64, CompassPoint); 16] = [
    (348.75, CompassPoint::North),
    (326.25, CompassPoint::NorthNorthWest),
    (303.75, CompassPoint::NorthWest),
    (281.25, CompassPoint::WestNorthWest),
    (258.75, CompassPoint::West),
    (236.25, CompassPoint::WestSouthWest),
    (213.75, CompassPoint::SouthWest),
    (191.25, CompassPoint::SouthSouthWest),
    (168.75, CompassPoint::South),
    (146.25, CompassPoint::SouthSouthEast),
    (123.75, CompassPoint::SouthEast),
    (101.25, CompassPoint::EastSouthEast),
    (78.75, CompassPoint::East),
    (56.25, CompassPoint::EastNorthEast),
    (33.75, CompassPoint::NorthEast),
    (22.5, CompassPoint::NorthNorthEast),
];

impl CompassPoint {
    /// Resolve a bearing in degrees. NaN resolves to north.
    pub fn from_bearing(deg: f64) -> Self {
        CASCADE
            .iter()
            .find(|(bound, _)| deg > *bound)
            .map(|(_, point)| *point)
            .unwrap_or(CompassPoint::North)
    }

    /// Clip names spoken for this point; blended points use two clips
    pub fn clip_names(self) -> &'static [&'static str] {
        match self {
            CompassPoint::North => &["north.wav"],
            CompassPoint::NorthNorthEast => &["north.wav", "north-east.wav"],
            CompassPoint::NorthEast => &["north-east.wav"],
            CompassPoint::EastNorthEast => &["east.wav", "north-east.wav"],
            CompassPoint::East => &["east.wav"],
            CompassPoint::EastSouthEast => &["east.wav", "south-east.wav"],
            CompassPoint::SouthEast => &["south-east.wav"],
            CompassPoint::SouthSouthEast => &["south.wav", "south-east.wav"],
            CompassPoint::South => &["south.wav"],
            CompassPoint::SouthSouthWest => &["south.wav", "south-west.wav"],
            CompassPoint::SouthWest => &["south-west.wav"],
            CompassPoint::WestSouthWest => &["west.wav", "south-west.wav"],
            CompassPoint::West => &["west.wav"],
            CompassPoint::WestNorthWest => &["west.wav", "north-west.wav"],
            CompassPoint::NorthWest => &["north-west.wav"],
            CompassPoint::NorthNorthWest => &["north.wav", "north-west.wav"],
        }
    }

    pub fn tokens(self) -> PhraseSequence {
        self.clip_names().iter().map(|name| ClipToken::new(*name)).collect()
    }
}

/// Compass clips for a bearing in degrees
pub fn compass_to_tokens(deg: f64) -> PhraseSequence {
    CompassPoint::from_bearing(deg).tokens()
}

//! Phrase listing formats

use serde::Serialize;

use crate::phrase::PhraseSequence;
use crate::reading::Reading;

/// JSON output structure
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    wind_direction: f64,
    wind_speed: f64,
    tokens: &'a PhraseSequence,
}

/// One token per line
pub fn format_text(phrase: &PhraseSequence) -> String {
    phrase.names().join("\n")
}

/// Reading and tokens as a single JSON object
pub fn format_json(reading: &Reading, phrase: &PhraseSequence) -> String {
    let output = JsonOutput {
        wind_direction: reading.wind_direction,
        wind_speed: reading.wind_speed,
        tokens: phrase,
    };

    serde_json::to_string(&output).unwrap_or_else(|_| format!("{{\"tokens\": \"{}\"}}", phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::compile;

    #[test]
    fn test_format_text() {
        let reading = Reading::new(90.0, 4.0);
        let phrase = compile(&reading).unwrap();
        assert_eq!(
            format_text(&phrase),
            "winddir.wav\neast.wav\n90.wav\ndegrees.wav\nwindspeed.wav\n4.wav\nms.wav"
        );
    }

    #[test]
    fn test_format_json() {
        let reading = Reading::new(10.0, 3.7);
        let phrase = compile(&reading).unwrap();
        let formatted = format_json(&reading, &phrase);
        assert!(formatted.starts_with(r#"{"wind_direction":10.0,"wind_speed":3.7,"#));
        assert!(formatted.contains(r#""tokens":["winddir.wav","north.wav","10.wav""#));
    }
}

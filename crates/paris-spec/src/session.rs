//! Session documents.
//!
//! A session bundles the text to send with its timing and audio parameters.
//! Sessions are stored as JSON and used by the CLI as configuration; every
//! field is optional and falls back to the studio defaults.
//!
//! ```json
//! {
//!   "text": "CQ CQ DE K1ABC",
//!   "timing": { "char_speed_wpm": 20, "farnsworth_speed_wpm": 10 },
//!   "audio": { "frequency_hz": 650 },
//!   "seed": 7
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecResult;
use crate::params::{AudioParams, TimingParams};

/// Text and parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Session {
    /// Text to convert.
    pub text: String,
    /// Timing parameters.
    pub timing: TimingParams,
    /// Audio parameters.
    pub audio: AudioParams,
    /// Jitter seed; `None` draws from the process generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            text: "PARIS".to_string(),
            timing: TimingParams::default(),
            audio: AudioParams::default(),
            seed: None,
        }
    }
}

impl Session {
    /// Parses a session from a JSON string.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the session as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a session from a JSON file.
    pub fn load(path: &Path) -> SpecResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let session = Session::from_json("{}").unwrap();
        assert_eq!(session, Session::default());
        assert_eq!(session.text, "PARIS");
    }

    #[test]
    fn test_partial_document() {
        let session = Session::from_json(
            r#"{
                "text": "CQ",
                "timing": { "char_speed_wpm": 20, "farnsworth_speed_wpm": 10 },
                "audio": { "frequency_hz": 650 },
                "seed": 7
            }"#,
        )
        .unwrap();

        assert_eq!(session.text, "CQ");
        assert_eq!(session.timing.char_speed_wpm, 20.0);
        assert_eq!(session.timing.farnsworth_speed_wpm, 10.0);
        assert_eq!(session.timing.dash_weight, 3.0);
        assert_eq!(session.audio.frequency_hz, 650.0);
        assert_eq!(session.audio.sample_rate_hz, 44100);
        assert_eq!(session.seed, Some(7));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = Session::from_json(r#"{"txt": "typo"}"#).unwrap_err();
        assert!(matches!(err, SpecError::JsonParse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let session = Session {
            text: "SOS".to_string(),
            seed: Some(42),
            ..Session::default()
        };
        let json = session.to_json_pretty().unwrap();
        assert_eq!(Session::from_json(&json).unwrap(), session);
    }

    #[test]
    fn test_seed_omitted_when_none() {
        let json = Session::default().to_json_pretty().unwrap();
        assert!(!json.contains("seed"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"text": "TEST"}"#).unwrap();

        let session = Session::load(&path).unwrap();
        assert_eq!(session.text, "TEST");

        let missing = Session::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(SpecError::Io(_))));
    }
}

//! Error types for audio backend.
//!
//! Synthesis itself never fails: out-of-domain parameters produce degenerate
//! but defined output. Only resource-level failures (external encoders,
//! playback programs, file I/O) are reported here.

use paris_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while exporting or playing audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No compressed-audio encoder is installed.
    #[error("no compressed-audio encoder found (searched: {}); install ffmpeg or lame", searched.join(", "))]
    EncoderUnavailable {
        /// Programs and paths that were tried.
        searched: Vec<String>,
    },

    /// The encoder could not be started.
    #[error("failed to spawn encoder: {0}")]
    EncoderSpawnFailed(#[source] std::io::Error),

    /// The encoder exited with a non-zero status.
    #[error("encoder exited with status {status}: {stderr}")]
    EncoderFailed {
        /// Exit code, or -1 when terminated by a signal.
        status: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// The located encoder cannot produce the requested format.
    #[error("{encoder} cannot encode {format}")]
    UnsupportedFormat {
        /// Encoder program name.
        encoder: String,
        /// Requested format.
        format: String,
    },

    /// No playback program is available.
    #[error("no audio player available: {message}")]
    PlayerUnavailable {
        /// Details of what was tried.
        message: String,
    },

    /// The playback program failed.
    #[error("playback failed: {message}")]
    PlaybackFailed {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an encoder-failed error.
    pub fn encoder_failed(status: i32, stderr: impl Into<String>) -> Self {
        Self::EncoderFailed {
            status,
            stderr: stderr.into(),
        }
    }

    /// Creates a player-unavailable error.
    pub fn player_unavailable(message: impl Into<String>) -> Self {
        Self::PlayerUnavailable {
            message: message.into(),
        }
    }

    /// Creates a playback-failed error.
    pub fn playback_failed(message: impl Into<String>) -> Self {
        Self::PlaybackFailed {
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::EncoderUnavailable { .. } => "AUDIO_001",
            AudioError::EncoderSpawnFailed(_) => "AUDIO_002",
            AudioError::EncoderFailed { .. } => "AUDIO_003",
            AudioError::UnsupportedFormat { .. } => "AUDIO_004",
            AudioError::PlayerUnavailable { .. } => "AUDIO_005",
            AudioError::PlaybackFailed { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_unavailable_lists_search() {
        let err = AudioError::EncoderUnavailable {
            searched: vec!["ffmpeg".to_string(), "lame".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("ffmpeg, lame"));
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
    }

    #[test]
    fn test_encoder_failed_helper() {
        let err = AudioError::encoder_failed(1, "bad input");
        assert!(err.to_string().contains("status 1"));
        assert!(err.to_string().contains("bad input"));
        assert_eq!(err.code(), "AUDIO_003");
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AudioError::EncoderUnavailable { searched: vec![] },
            AudioError::EncoderSpawnFailed(std::io::Error::other("x")),
            AudioError::encoder_failed(2, ""),
            AudioError::UnsupportedFormat {
                encoder: "lame".into(),
                format: "flac".into(),
            },
            AudioError::player_unavailable("none"),
            AudioError::playback_failed("boom"),
            AudioError::Io(std::io::Error::other("io")),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

//! Error types for session loading and timing-file handling.

use thiserror::Error;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while loading or storing spec documents.
///
/// Parameter problems are never reported here: out-of-range speeds are
/// clamped and unmapped characters are skipped.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A timing file contained no parseable event lines.
    #[error("no timing data found in {source_name}")]
    EmptyTimingData {
        /// File name or other label of the rejected input.
        source_name: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates an empty-timing-data error for the given input label.
    pub fn empty_timing_data(source_name: impl Into<String>) -> Self {
        Self::EmptyTimingData {
            source_name: source_name.into(),
        }
    }
}

/// Common interface for backend error types.
///
/// Backends (timing, audio, external encoders) implement this so the CLI can
/// report failures with a stable code.
///
/// # Example
///
/// ```ignore
/// use paris_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". These codes are stable.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

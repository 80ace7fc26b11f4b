//! PARIS Studio Spec Library
//!
//! This crate provides the shared data model for PARIS Studio: the timing
//! events produced from text, the parameter sets that drive timing and
//! synthesis, the session document used as configuration, the Morse symbol
//! table, and the `.paris` timing-text format.
//!
//! # Overview
//!
//! - **Timing events**: ordered `(duration_ms, tone_on)` intervals
//! - **Parameters**: speed/spacing parameters for timing, tone parameters for audio
//! - **Sessions**: JSON documents bundling text, parameters and an optional seed
//!
//! # Example
//!
//! ```
//! use paris_spec::{ParisDocument, TimingEvent, TimingSequence};
//! use paris_spec::paris_format::parse_timing_text;
//!
//! let sequence: TimingSequence = vec![
//!     TimingEvent::tone(60),
//!     TimingEvent::silence(60),
//!     TimingEvent::tone(180),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(sequence.total_duration_ms(), 300);
//!
//! let text = ParisDocument::new(sequence.clone()).to_text();
//! let parsed = parse_timing_text(&text);
//! assert_eq!(parsed.sequence, sequence);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and the backend error trait
//! - [`event`]: Timing event and sequence types
//! - [`morse`]: Morse symbol table
//! - [`params`]: Timing and audio parameter sets
//! - [`paris_format`]: `.paris` timing-text reader and writer
//! - [`session`]: Session configuration documents

pub mod error;
pub mod event;
pub mod morse;
pub mod params;
pub mod paris_format;
pub mod session;

// Re-export commonly used types at the crate root
pub use error::{BackendError, SpecError, SpecResult};
pub use event::{TimingEvent, TimingSequence};
pub use morse::{encode_text, lookup, Symbol};
pub use params::{
    dot_ms, AudioParams, TimingParams, DOT_MS_AT_1_WPM, MAX_WPM, MIN_WPM, PARIS_UNITS,
};
pub use paris_format::{MalformedLine, ParisDocument, ParseOutcome, TIMING_HEADER};
pub use session::Session;

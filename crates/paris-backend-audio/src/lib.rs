//! PARIS Studio audio backend.
//!
//! Turns timing sequences into sound: a keyed sine tone with raised-cosine
//! edges, written as signed 16-bit mono PCM.
//!
//! # Determinism
//!
//! Synthesis is a pure function of the events and [`AudioParams`]. The same
//! inputs give byte-identical WAV output, and the BLAKE3 hash of the PCM
//! payload (see [`WavResult::pcm_hash`]) identifies a rendering.
//!
//! # Example
//!
//! ```
//! use paris_backend_audio::render;
//! use paris_spec::{AudioParams, TimingEvent, TimingSequence};
//!
//! let seq = TimingSequence::from_events(vec![
//!     TimingEvent::tone(60),
//!     TimingEvent::silence(60),
//!     TimingEvent::tone(180),
//! ]);
//! let result = render(&seq, &AudioParams::default());
//!
//! assert_eq!(result.output.samples.len(), 2646 + 2646 + 7938);
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`synth`] - Sample generation
//! - [`envelope`] - Raised-cosine keying envelope
//! - [`wav`] - WAV container and PCM hashing
//! - [`encode`] - MP3/Ogg/FLAC export through ffmpeg or lame
//! - [`playback`] - Player trait implemented by front ends
//!
//! [`AudioParams`]: paris_spec::AudioParams

pub mod encode;
pub mod envelope;
pub mod error;
pub mod playback;
pub mod render;
pub mod synth;
pub mod wav;

pub use encode::{export_compressed, CompressedFormat, Encoder, EncoderConfig, EncoderKind};
pub use envelope::KeyingEnvelope;
pub use error::{AudioError, AudioResult};
pub use playback::{play_wav_bytes, AudioPlayer};
pub use render::{render, RenderResult};
pub use synth::{sample_count, samples_for_ms, synthesize, SynthOutput};
pub use wav::{WavResult, WavWriter};

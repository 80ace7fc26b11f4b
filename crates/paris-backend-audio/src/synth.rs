//! Keyed sine-tone synthesis.
//!
//! Renders a timing sequence into signed 16-bit mono PCM. Phase follows a
//! single sample counter that runs through silent intervals too, so the tone
//! stays phase-continuous across the whole message.

use std::f64::consts::PI;

use paris_spec::{AudioParams, TimingEvent};

use crate::envelope::KeyingEnvelope;
use crate::wav::pcm16_to_bytes;

/// Largest magnitude of a quantized sample.
pub const FULL_SCALE: f64 = 32767.0;

/// Number of samples covering `ms` milliseconds at `sample_rate` Hz.
///
/// Rounds half away from zero; negative or non-finite durations give zero.
pub fn samples_for_ms(sample_rate: u32, ms: f64) -> usize {
    let n = (f64::from(sample_rate) * ms / 1000.0).round();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Total number of samples a sequence renders to.
pub fn sample_count(events: &[TimingEvent], sample_rate: u32) -> usize {
    events
        .iter()
        .map(|e| samples_for_ms(sample_rate, f64::from(e.duration_ms)))
        .sum()
}

/// Quantizes a sample in `[-1, 1]` to i16. Values outside are clamped.
#[inline]
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * FULL_SCALE).round() as i16
}

/// Synthesized PCM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthOutput {
    /// Mono samples.
    pub samples: Vec<i16>,
    /// Value of the sample counter after the last event.
    pub total_samples: usize,
}

impl SynthOutput {
    /// Little-endian PCM bytes.
    pub fn to_pcm_bytes(&self) -> Vec<u8> {
        pcm16_to_bytes(&self.samples)
    }

    /// Length in seconds at `sample_rate`.
    pub fn duration_seconds(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(sample_rate)
    }

    /// Returns true when every sample is zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0)
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

/// Renders `events` as a keyed sine tone.
///
/// Each event covers `round(sample_rate * duration / 1000)` samples. Tone-on
/// events carry `volume * envelope * sin(2π f t / sample_rate)` where `t` is
/// the global sample index; tone-off events are zeros. Parameters are used
/// as given.
pub fn synthesize(events: &[TimingEvent], params: &AudioParams) -> SynthOutput {
    let sample_rate = params.sample_rate_hz;
    let envelope = KeyingEnvelope::new(sample_rate, params.ramp_ms);
    let omega = 2.0 * PI * params.frequency_hz;
    let rate = f64::from(sample_rate);

    let mut samples = Vec::with_capacity(sample_count(events, sample_rate));
    let mut t: usize = 0;

    for event in events {
        let n = samples_for_ms(sample_rate, f64::from(event.duration_ms));
        if event.tone_on {
            for i in 0..n {
                let phase = omega * (t + i) as f64 / rate;
                let value = params.volume * envelope.gain(i, n) * phase.sin();
                samples.push(quantize(value));
            }
        } else {
            samples.resize(samples.len() + n, 0);
        }
        t += n;
    }

    log::debug!(
        "synthesized {} events into {} samples at {} Hz",
        events.len(),
        t,
        sample_rate
    );

    SynthOutput {
        samples,
        total_samples: t,
    }
}

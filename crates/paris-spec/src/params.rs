//! Timing and audio parameter sets.
//!
//! Both sets are plain values supplied per call. Timing parameters are
//! sanitized with [`TimingParams::clamped`] before use; audio parameters are
//! taken as given and produce degenerate-but-defined output when out of
//! domain (zero volume gives silence, zero sample rate gives no samples).

use serde::{Deserialize, Serialize};

/// Lowest accepted character speed in words per minute.
pub const MIN_WPM: f64 = 1.0;

/// Highest accepted character speed in words per minute.
pub const MAX_WPM: f64 = 80.0;

/// Dot length in milliseconds at 1 WPM (PARIS calibration).
pub const DOT_MS_AT_1_WPM: f64 = 1200.0;

/// Length of the calibration word "PARIS" in dot units.
pub const PARIS_UNITS: u32 = 50;

/// Returns the dot duration in milliseconds for a speed in WPM.
///
/// The speed is not clamped here; callers pass an already clamped value.
pub fn dot_ms(wpm: f64) -> f64 {
    DOT_MS_AT_1_WPM / wpm
}

/// Clamps `value` to `[lo, hi]`, mapping non-finite input to `lo`.
fn clamp_finite(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_finite() {
        value.clamp(lo, hi)
    } else {
        lo
    }
}

/// Speed and spacing parameters for the timing generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingParams {
    /// Character speed; governs dot duration.
    pub char_speed_wpm: f64,
    /// Farnsworth speed; governs inter-letter and inter-word gaps.
    pub farnsworth_speed_wpm: f64,
    /// Dash duration as a multiple of the dot duration.
    pub dash_weight: f64,
    /// Symmetric random perturbation applied to each duration, in percent.
    pub jitter_percent: f64,
    /// Inter-letter gap in Farnsworth dot units.
    pub letter_space_units: f64,
    /// Inter-word gap in Farnsworth dot units.
    pub word_space_units: f64,
    /// Leading silence in milliseconds.
    pub pre_delay_ms: f64,
    /// Trailing silence in milliseconds.
    pub post_delay_ms: f64,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            char_speed_wpm: 15.0,
            farnsworth_speed_wpm: 5.0,
            dash_weight: 3.0,
            jitter_percent: 0.0,
            letter_space_units: 3.0,
            word_space_units: 7.0,
            pre_delay_ms: 0.0,
            post_delay_ms: 0.0,
        }
    }
}

impl TimingParams {
    /// Standard timing at a single speed: no Farnsworth slowdown, canonical
    /// weight and spacing, no jitter or delays.
    pub fn standard(wpm: f64) -> Self {
        Self {
            char_speed_wpm: wpm,
            farnsworth_speed_wpm: wpm,
            ..Self::default()
        }
    }

    /// Returns a copy with every field forced into its valid range.
    ///
    /// - character speed to `[MIN_WPM, MAX_WPM]`
    /// - Farnsworth speed to `[MIN_WPM, char_speed_wpm]`
    /// - weight, spacing units and delays to `>= 0`
    /// - jitter to `[0, 100]`
    pub fn clamped(&self) -> Self {
        let char_speed_wpm = clamp_finite(self.char_speed_wpm, MIN_WPM, MAX_WPM);
        Self {
            char_speed_wpm,
            farnsworth_speed_wpm: clamp_finite(self.farnsworth_speed_wpm, MIN_WPM, char_speed_wpm),
            dash_weight: clamp_finite(self.dash_weight, 0.0, f64::MAX),
            jitter_percent: clamp_finite(self.jitter_percent, 0.0, 100.0),
            letter_space_units: clamp_finite(self.letter_space_units, 0.0, f64::MAX),
            word_space_units: clamp_finite(self.word_space_units, 0.0, f64::MAX),
            pre_delay_ms: clamp_finite(self.pre_delay_ms, 0.0, f64::MAX),
            post_delay_ms: clamp_finite(self.post_delay_ms, 0.0, f64::MAX),
        }
    }

    /// Dot duration at character speed (after clamping).
    pub fn dot_ms(&self) -> f64 {
        dot_ms(self.clamped().char_speed_wpm)
    }

    /// Dot duration at Farnsworth speed (after clamping).
    pub fn farnsworth_dot_ms(&self) -> f64 {
        dot_ms(self.clamped().farnsworth_speed_wpm)
    }
}

/// Tone parameters for the waveform synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioParams {
    /// Tone pitch in Hz.
    pub frequency_hz: f64,
    /// Output sample rate in Hz.
    pub sample_rate_hz: u32,
    /// Peak amplitude as a fraction of full scale (0.0 to 1.0).
    pub volume: f64,
    /// Rise/fall time at the edges of every tone, in milliseconds.
    pub ramp_ms: f64,
}

impl Default for AudioParams {
    fn default() -> Self {
        Self {
            frequency_hz: 700.0,
            sample_rate_hz: 44100,
            volume: 0.6,
            ramp_ms: 5.0,
        }
    }
}

//! Raised-cosine keying envelope.
//!
//! Every tone-on interval is shaped with a raised-cosine rise at its start
//! and fall at its end so the tone never steps in amplitude, which would be
//! heard as a click.

use std::f64::consts::PI;

use crate::synth::samples_for_ms;

/// Keying envelope with a fixed ramp length in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyingEnvelope {
    ramp_samples: usize,
}

impl KeyingEnvelope {
    /// Creates an envelope whose ramps last `ramp_ms` at `sample_rate` Hz.
    pub fn new(sample_rate: u32, ramp_ms: f64) -> Self {
        Self::from_samples(samples_for_ms(sample_rate, ramp_ms))
    }

    /// Creates an envelope with an explicit ramp length.
    pub fn from_samples(ramp_samples: usize) -> Self {
        Self { ramp_samples }
    }

    /// Ramp length in samples.
    pub fn ramp_samples(&self) -> usize {
        self.ramp_samples
    }

    /// Gain for sample `i` of a tone that lasts `n` samples (`i < n`).
    ///
    /// The rise is checked before the fall. When a tone is shorter than two
    /// ramps the windows overlap and the rise wins wherever `i < ramp`; no
    /// blending is applied.
    pub fn gain(&self, i: usize, n: usize) -> f64 {
        let r = self.ramp_samples;
        if r == 0 {
            return 1.0;
        }

        if i < r {
            0.5 * (1.0 - (PI * i as f64 / r as f64).cos())
        } else if n - i <= r {
            0.5 * (1.0 - (PI * (n - i) as f64 / r as f64).cos())
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ramp_is_flat() {
        let env = KeyingEnvelope::new(44100, 0.0);
        assert_eq!(env.ramp_samples(), 0);
        for i in 0..10 {
            assert_eq!(env.gain(i, 10), 1.0);
        }
    }

    #[test]
    fn test_ramp_length_is_rounded() {
        assert_eq!(KeyingEnvelope::new(44100, 5.0).ramp_samples(), 221); // 220.5
        assert_eq!(KeyingEnvelope::new(8000, 5.0).ramp_samples(), 40);
        assert_eq!(KeyingEnvelope::new(1000, 0.4).ramp_samples(), 0);
        assert_eq!(KeyingEnvelope::new(1000, -3.0).ramp_samples(), 0);
    }

    #[test]
    fn test_rise_and_fall_shape() {
        let env = KeyingEnvelope::from_samples(4);
        let n = 20;
        let gains: Vec<f64> = (0..n).map(|i| env.gain(i, n)).collect();

        assert_eq!(gains[0], 0.0);
        assert!((gains[2] - 0.5).abs() < 1e-12);
        assert!(gains[1] < gains[2] && gains[2] < gains[3]);
        assert_eq!(gains[4], 1.0);
        assert_eq!(gains[15], 1.0);
        // Fall: n - i = 4 at i = 16 gives full gain, then decreases.
        assert!((gains[16] - 1.0).abs() < 1e-12);
        assert!((gains[18] - 0.5).abs() < 1e-12);
        assert!(gains[19] > 0.0 && gains[19] < gains[18]);
    }

    #[test]
    fn test_overlapping_ramps_prefer_rise() {
        let env = KeyingEnvelope::from_samples(10);
        let n = 6;
        // Every index is below the ramp length, so all gains follow the rise.
        for i in 0..n {
            let rise = 0.5 * (1.0 - (PI * i as f64 / 10.0).cos());
            assert_eq!(env.gain(i, n), rise);
        }
    }

    #[test]
    fn test_partial_overlap_switches_to_fall() {
        let env = KeyingEnvelope::from_samples(4);
        let n = 6;
        let gains: Vec<f64> = (0..n).map(|i| env.gain(i, n)).collect();
        // i = 4: not rising, n - i = 2 <= 4 so fall at 2/4.
        assert!((gains[4] - 0.5).abs() < 1e-12);
        // The envelope drops from the rise's last value back down.
        assert!(gains[3] > gains[4]);
    }
}

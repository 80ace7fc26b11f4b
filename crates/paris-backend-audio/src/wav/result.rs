//! Rendered WAV with its content hash.

use super::format::WavFormat;
use super::pcm::pcm16_to_bytes;
use super::writer::write_wav_to_vec;

/// A complete WAV file and facts about its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hex digest of the PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Wraps mono samples in a WAV container.
    pub fn from_samples(samples: &[i16], sample_rate: u32) -> Self {
        let pcm = pcm16_to_bytes(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / f64::from(self.sample_rate)
    }

    /// Writes the WAV bytes to `path`.
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, &self.wav_data)
    }
}

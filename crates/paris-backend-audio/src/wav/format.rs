//! Canonical 44-byte WAV header.

/// Length of the canonical PCM header.
pub const HEADER_LEN: usize = 44;

/// PCM stream format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Signed 16-bit mono at `sample_rate`.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes in one sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }

    /// Builds the header for a payload of `data_len` bytes.
    ///
    /// Sizes saturate at `u32::MAX`; RIFF cannot describe larger payloads.
    pub fn header(&self, data_len: usize) -> [u8; HEADER_LEN] {
        let data_size = u32::try_from(data_len).unwrap_or(u32::MAX);
        let riff_size = data_size.saturating_add((HEADER_LEN - 8) as u32);

        let mut h = [0u8; HEADER_LEN];
        h[0..4].copy_from_slice(b"RIFF");
        h[4..8].copy_from_slice(&riff_size.to_le_bytes());
        h[8..12].copy_from_slice(b"WAVE");

        h[12..16].copy_from_slice(b"fmt ");
        h[16..20].copy_from_slice(&16u32.to_le_bytes());
        h[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
        h[22..24].copy_from_slice(&self.channels.to_le_bytes());
        h[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        h[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        h[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        h[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());

        h[36..40].copy_from_slice(b"data");
        h[40..44].copy_from_slice(&data_size.to_le_bytes());
        h
    }
}

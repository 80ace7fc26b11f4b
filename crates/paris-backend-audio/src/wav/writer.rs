//! Serializing samples into WAV bytes and files.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::format::{WavFormat, HEADER_LEN};
use super::pcm::pcm16_to_bytes;

/// Writes header and payload to `writer`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&format.header(pcm_data.len()))?;
    writer.write_all(pcm_data)
}

/// Builds a complete WAV file in memory.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&format.header(pcm_data.len()));
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Writes a WAV file to `path`, replacing any existing file.
pub fn write_wav_file(path: &Path, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let mut file = io::BufWriter::new(fs::File::create(path)?);
    write_wav(&mut file, format, pcm_data)?;
    file.flush()
}

/// Mono 16-bit WAV writer.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Writer for mono audio at `sample_rate`.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Stream format.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Encodes `samples` as a complete WAV file.
    pub fn write_samples(&self, samples: &[i16]) -> Vec<u8> {
        write_wav_to_vec(&self.format, &pcm16_to_bytes(samples))
    }

    /// Writes `samples` as a WAV file at `path`.
    pub fn write_to_path(&self, path: &Path, samples: &[i16]) -> io::Result<()> {
        write_wav_file(path, &self.format, &pcm16_to_bytes(samples))
    }

    /// BLAKE3 hash of the PCM payload for `samples`.
    pub fn pcm_hash(&self, samples: &[i16]) -> String {
        blake3::hash(&pcm16_to_bytes(samples)).to_hex().to_string()
    }
}

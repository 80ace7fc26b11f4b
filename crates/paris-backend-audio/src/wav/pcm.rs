//! PCM payload conversion, extraction and hashing.

/// Serializes samples as little-endian 16-bit PCM.
pub fn pcm16_to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Parses little-endian 16-bit PCM. A trailing odd byte is ignored.
pub fn pcm16_from_bytes(pcm: &[u8]) -> Vec<i16> {
    pcm.chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect()
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 4)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Returns the `data` chunk of a RIFF/WAVE buffer.
///
/// Walks the chunk list so files with extra chunks before `data` are
/// accepted. Returns `None` for anything that is not a well-formed WAVE.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.get(0..4)? != b"RIFF" || wav_data.get(8..12)? != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let id = &wav_data[pos..pos + 4];
        let size = read_u32(wav_data, pos + 4)? as usize;
        let start = pos + 8;

        if id == b"data" {
            return wav_data.get(start..start.checked_add(size)?);
        }

        // Chunks are word aligned.
        pos = start.checked_add(size)?.checked_add(size % 2)?;
    }

    None
}

/// BLAKE3 hex digest of the PCM payload of a WAV buffer.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

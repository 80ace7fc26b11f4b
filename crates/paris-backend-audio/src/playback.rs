//! Playback seam.
//!
//! Rendering never talks to an audio device. A front end supplies an
//! [`AudioPlayer`] that knows how to play a WAV file on the host.

use std::io::Write;
use std::path::Path;

use crate::error::AudioResult;

/// Plays a WAV file to completion.
pub trait AudioPlayer {
    /// Human-readable player name.
    fn name(&self) -> &str;

    /// Blocks until `wav_path` has finished playing.
    fn play(&self, wav_path: &Path) -> AudioResult<()>;
}

/// Plays in-memory WAV bytes through a temporary file.
pub fn play_wav_bytes<P: AudioPlayer + ?Sized>(player: &P, wav_data: &[u8]) -> AudioResult<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix("paris-play-")
        .suffix(".wav")
        .tempfile()?;
    tmp.write_all(wav_data)?;
    tmp.flush()?;
    let path = tmp.into_temp_path();

    log::debug!("playing {} bytes with {}", wav_data.len(), player.name());
    player.play(&path)
}

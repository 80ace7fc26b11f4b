//! RIFF/WAVE container for 16-bit mono PCM.
//!
//! Output carries no timestamps or optional chunks, so identical samples
//! always produce identical bytes. The BLAKE3 hash of the PCM payload
//! identifies a rendering independently of its container.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::{WavFormat, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_from_bytes, pcm16_to_bytes};
pub use result::WavResult;
pub use writer::{write_wav, write_wav_file, write_wav_to_vec, WavWriter};

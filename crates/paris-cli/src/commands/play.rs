//! Play command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use paris_backend_audio::{play_wav_bytes, render, AudioPlayer};
use paris_spec::{BackendError, Session};

use super::{input_failure, resource_failure, sequence_for};
use crate::player::SystemPlayer;

/// Run the play command
///
/// # Returns
/// Exit code: 0 success, 1 nothing to send, 2 no player or playback failed
pub fn run(session: &Session) -> Result<ExitCode> {
    let sequence = sequence_for(session);
    if sequence.is_empty() {
        eprintln!(
            "{} no sendable characters in {:?}",
            "error:".red().bold(),
            session.text
        );
        return Ok(input_failure());
    }

    let result = render(&sequence, &session.audio);
    let played = SystemPlayer::detect().and_then(|player| {
        println!(
            "{} {:?} with {} ({:.2}s)",
            "Playing".cyan().bold(),
            session.text,
            player.name(),
            result.wav.duration_seconds()
        );
        play_wav_bytes(&player, &result.wav.wav_data)
    });

    match played {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{} [{}] {}", "error:".red().bold(), e.code(), e);
            Ok(resource_failure())
        }
    }
}

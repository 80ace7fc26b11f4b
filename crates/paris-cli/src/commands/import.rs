//! Import command implementation
//!
//! Renders a `.paris` timing file, optionally playing it.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use paris_backend_audio::{play_wav_bytes, render};
use paris_spec::paris_format::read_timing_file;
use paris_spec::{AudioParams, BackendError, SpecError};

use super::{input_failure, resource_failure};
use crate::player::SystemPlayer;

/// Run the import command
///
/// # Returns
/// Exit code: 0 success, 1 unreadable or empty file, 2 playback failure
pub fn run(file: &Path, audio: &AudioParams, out: Option<&Path>, play: bool) -> Result<ExitCode> {
    let outcome = read_timing_file(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    for line in &outcome.malformed {
        log::warn!(
            "{}:{}: skipped malformed line {:?}",
            file.display(),
            line.line_number,
            line.content
        );
    }

    if outcome.is_empty() {
        let err = SpecError::empty_timing_data(file.display().to_string());
        eprintln!("{} {}", "error:".red().bold(), err);
        return Ok(input_failure());
    }

    println!(
        "{} {} ({} events, {} ms, {} skipped)",
        "Imported".cyan().bold(),
        file.display(),
        outcome.sequence.len(),
        outcome.sequence.total_duration_ms(),
        outcome.malformed.len()
    );

    let result = render(&outcome.sequence, audio);
    if let Some(out) = out {
        super::render::write_wav(&result, out)?;
    }

    if play {
        let played = SystemPlayer::detect()
            .and_then(|player| play_wav_bytes(&player, &result.wav.wav_data));
        if let Err(e) = played {
            eprintln!("{} [{}] {}", "error:".red().bold(), e.code(), e);
            return Ok(resource_failure());
        }
    }

    Ok(ExitCode::SUCCESS)
}

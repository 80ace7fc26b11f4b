//! Render command implementation
//!
//! Synthesizes a text and writes a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use paris_backend_audio::{render, RenderResult};
use paris_spec::Session;

use super::{input_failure, sequence_for};

/// Run the render command
///
/// # Returns
/// Exit code: 0 success, 1 if the text has no sendable characters
pub fn run(session: &Session, out: &Path) -> Result<ExitCode> {
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
    write_wav(&result, out)?;
    Ok(ExitCode::SUCCESS)
}

/// Writes a rendered WAV and reports it.
pub fn write_wav(result: &RenderResult, out: &Path) -> Result<()> {
    result
        .wav
        .write_to_file(out)
        .with_context(|| format!("failed to write {}", out.display()))?;

    println!(
        "{} {} ({:.2}s, {} Hz)",
        "Wrote".green().bold(),
        out.display(),
        result.wav.duration_seconds(),
        result.wav.sample_rate
    );
    println!("  {} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);
    Ok(())
}

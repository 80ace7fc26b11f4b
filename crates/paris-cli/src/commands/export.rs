//! Export command implementation
//!
//! Writes MP3, Ogg Vorbis or FLAC through an external encoder.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use paris_backend_audio::{
    export_compressed, synthesize, AudioError, CompressedFormat, EncoderConfig,
};
use paris_spec::{BackendError, Session};

use super::{input_failure, resource_failure, sequence_for};

/// Environment variable naming an encoder executable.
pub const ENCODER_ENV: &str = "PARIS_ENCODER";

/// Picks the output format from the flag or the file extension.
pub fn resolve_format(flag: Option<&str>, out: &Path) -> Option<CompressedFormat> {
    match flag {
        Some(name) => name.parse().ok(),
        None => CompressedFormat::from_path(out),
    }
}

/// Encoder settings: the flag, then `$PARIS_ENCODER`, then `PATH`.
pub fn encoder_config(encoder: Option<&Path>, bitrate_kbps: u32) -> EncoderConfig {
    let encoder_path = encoder
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(ENCODER_ENV).map(PathBuf::from));
    EncoderConfig {
        encoder_path,
        bitrate_kbps,
        ..EncoderConfig::default()
    }
}

/// Run the export command
///
/// # Returns
/// Exit code: 0 success, 1 bad input, 2 encoder missing or failed
pub fn run(
    session: &Session,
    out: &Path,
    format: Option<&str>,
    encoder: Option<&Path>,
    bitrate_kbps: u32,
) -> Result<ExitCode> {
    let Some(format) = resolve_format(format, out) else {
        eprintln!(
            "{} cannot tell the format of {}; pass --format mp3|ogg|flac",
            "error:".red().bold(),
            out.display()
        );
        return Ok(input_failure());
    };

    let sequence = sequence_for(session);
    if sequence.is_empty() {
        eprintln!(
            "{} no sendable characters in {:?}",
            "error:".red().bold(),
            session.text
        );
        return Ok(input_failure());
    }

    let output = synthesize(sequence.events(), &session.audio);
    let config = encoder_config(encoder, bitrate_kbps);

    match export_compressed(
        &output.samples,
        session.audio.sample_rate_hz,
        out,
        format,
        &config,
    ) {
        Ok(()) => {
            println!(
                "{} {} ({}, {:.2}s)",
                "Wrote".green().bold(),
                out.display(),
                format,
                output.duration_seconds(session.audio.sample_rate_hz)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} [{}] {}", "error:".red().bold(), e.code(), e);
            if matches!(e, AudioError::EncoderUnavailable { .. }) {
                eprintln!(
                    "  {}",
                    format!(
                        "Set {} or install ffmpeg; `paris render` writes WAV without one.",
                        ENCODER_ENV
                    )
                    .dimmed()
                );
            }
            Ok(resource_failure())
        }
    }
}

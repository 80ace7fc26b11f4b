//! Doctor command implementation
//!
//! Reports which optional external tools are available.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use paris_backend_audio::{AudioPlayer, Encoder, EncoderKind};

use super::export::{encoder_config, ENCODER_ENV};
use super::resource_failure;
use crate::player::SystemPlayer;

/// Run the doctor command
///
/// Checks:
/// - Compressed-audio encoder (optional)
/// - Audio player (optional)
/// - Temporary directory is writable
///
/// # Returns
/// Exit code: 0 if required checks pass, 2 if the temp directory is unusable
pub fn run() -> Result<ExitCode> {
    println!("{}", "PARIS Studio Doctor".cyan().bold());
    println!("{}", "===================".cyan());
    println!();

    println!("{}", "Versions:".bold());
    println!("  {} paris-cli v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", "Encoders:".bold());
    match Encoder::locate(&encoder_config(None, 128)) {
        Ok(encoder) => {
            let formats = match encoder.kind() {
                EncoderKind::Ffmpeg => "mp3, ogg, flac",
                EncoderKind::Lame => "mp3",
            };
            println!(
                "  {} {} at {} ({})",
                "ok".green(),
                encoder.kind().program(),
                encoder.path().display(),
                formats
            );
        }
        Err(e) => {
            println!("  {} {}", "!!".yellow(), e);
            println!(
                "     {}",
                format!("Compressed export needs ffmpeg or lame (or {}).", ENCODER_ENV).dimmed()
            );
            println!("     {}", "WAV output works without one.".dimmed());
        }
    }
    println!();

    println!("{}", "Playback:".bold());
    match SystemPlayer::detect() {
        Ok(player) => println!("  {} {}", "ok".green(), player.name()),
        Err(e) => println!("  {} {}", "!!".yellow(), e),
    }
    println!();

    println!("{}", "Filesystem:".bold());
    let temp_ok = match tempfile::NamedTempFile::new() {
        Ok(file) => {
            println!(
                "  {} temp directory is writable ({})",
                "ok".green(),
                file.path().parent().map(|p| p.display().to_string()).unwrap_or_default()
            );
            true
        }
        Err(e) => {
            println!("  {} cannot create temp files: {}", "!!".red(), e);
            false
        }
    };
    println!();

    if temp_ok {
        println!("{} All required checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(resource_failure())
    }
}

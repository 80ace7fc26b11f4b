//! PARIS Studio CLI - Morse timing and audio from the command line
//!
//! Converts text into Morse timing sequences, WAV audio, compressed audio
//! and `.paris` timing files.

use std::process::ExitCode;

use clap::Parser;
use paris_backend_audio::AudioError;
use paris_cli::cli_args::{Cli, Commands};
use paris_cli::commands::{self, EXIT_INPUT, EXIT_RESOURCE};
use paris_cli::{config, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let session_path = cli.session.as_deref();

    let result = match cli.command {
        Commands::Timing {
            text,
            timing,
            out,
            graph,
            width,
        } => config::resolve(session_path, text.as_deref(), Some(&timing), None)
            .and_then(|session| commands::timing::run(&session, out.as_deref(), graph, width)),
        Commands::Render {
            text,
            timing,
            audio,
            out,
        } => config::resolve(session_path, text.as_deref(), Some(&timing), Some(&audio))
            .and_then(|session| commands::render::run(&session, &out)),
        Commands::Export {
            text,
            timing,
            audio,
            out,
            format,
            encoder,
            bitrate,
        } => config::resolve(session_path, text.as_deref(), Some(&timing), Some(&audio))
            .and_then(|session| {
                commands::export::run(
                    &session,
                    &out,
                    format.as_deref(),
                    encoder.as_deref(),
                    bitrate,
                )
            }),
        Commands::Import {
            file,
            audio,
            out,
            play,
        } => config::resolve(session_path, None, None, Some(&audio))
            .and_then(|session| commands::import::run(&file, &session.audio, out.as_deref(), play)),
        Commands::Play {
            text,
            timing,
            audio,
        } => config::resolve(session_path, text.as_deref(), Some(&timing), Some(&audio))
            .and_then(|session| commands::play::run(&session)),
        Commands::Wpm { timing } => config::resolve(session_path, None, Some(&timing), None)
            .and_then(|session| commands::wpm::run(&session.timing)),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(failure_code(&e))
        }
    }
}

/// Files that could not be written and tools that failed are resource
/// failures; everything else is bad input.
fn failure_code(err: &anyhow::Error) -> u8 {
    let resource = err.chain().any(|cause| {
        cause.is::<AudioError>()
            || cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() != std::io::ErrorKind::NotFound)
    });
    if resource {
        EXIT_RESOURCE
    } else {
        EXIT_INPUT
    }
}

//! Timing command implementation
//!
//! Prints or writes the `.paris` document for a text.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use paris_backend_timing::effective_wpm;
use paris_spec::paris_format::write_timing_file;
use paris_spec::{ParisDocument, Session};

use super::{input_failure, sequence_for};
use crate::graph::{axis_label, timing_strip};

/// Run the timing command
///
/// # Returns
/// Exit code: 0 success, 1 if the text has no sendable characters
pub fn run(session: &Session, out: Option<&Path>, graph: bool, width: usize) -> Result<ExitCode> {
    let sequence = sequence_for(session);
    let doc = ParisDocument::for_session(
        &session.text,
        &session.timing,
        effective_wpm(&session.timing),
        sequence,
    );

    match out {
        Some(path) => {
            write_timing_file(path, &doc)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} {} ({} events, {} ms)",
                "Wrote".green().bold(),
                path.display(),
                doc.sequence.len(),
                doc.sequence.total_duration_ms()
            );
        }
        None => print!("{}", doc.to_text()),
    }

    if graph && !doc.sequence.is_empty() {
        println!();
        println!("{}", timing_strip(&doc.sequence, width));
        println!("{}", axis_label(&doc.sequence, width).dimmed());
    }

    if doc.sequence.is_empty() {
        eprintln!(
            "{} no sendable characters in {:?}",
            "warning:".yellow().bold(),
            session.text
        );
        return Ok(input_failure());
    }

    Ok(ExitCode::SUCCESS)
}

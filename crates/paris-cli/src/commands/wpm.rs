//! Wpm command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use paris_backend_timing::effective_wpm;
use paris_spec::TimingParams;

/// Run the wpm command
pub fn run(params: &TimingParams) -> Result<ExitCode> {
    let clamped = params.clamped();
    println!(
        "{} {} WPM",
        "Character speed:".cyan().bold(),
        clamped.char_speed_wpm
    );
    println!(
        "{} {} WPM",
        "Farnsworth speed:".cyan().bold(),
        clamped.farnsworth_speed_wpm
    );
    println!(
        "{} {:.2} WPM",
        "Effective speed:".green().bold(),
        effective_wpm(params)
    );
    println!(
        "{} dot {:.1} ms, Farnsworth dot {:.1} ms",
        "Units:".dimmed(),
        clamped.dot_ms(),
        clamped.farnsworth_dot_ms()
    );
    Ok(ExitCode::SUCCESS)
}

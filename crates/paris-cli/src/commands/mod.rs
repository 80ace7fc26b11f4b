//! CLI command implementations

pub mod doctor;
pub mod export;
pub mod import;
pub mod play;
pub mod render;
pub mod timing;
pub mod wpm;

use std::process::ExitCode;

use paris_backend_timing::{generate, generate_seeded};
use paris_spec::{Session, TimingSequence};

/// Exit code for unreadable input or an empty result.
pub const EXIT_INPUT: u8 = 1;
/// Exit code for a missing or failing external resource.
pub const EXIT_RESOURCE: u8 = 2;

/// Input error exit code.
pub fn input_failure() -> ExitCode {
    ExitCode::from(EXIT_INPUT)
}

/// Resource error exit code.
pub fn resource_failure() -> ExitCode {
    ExitCode::from(EXIT_RESOURCE)
}

/// Generates the timing sequence for a session, seeded when it has a seed.
pub fn sequence_for(session: &Session) -> TimingSequence {
    match session.seed {
        Some(seed) => generate_seeded(&session.text, &session.timing, seed),
        None => generate(&session.text, &session.timing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_session_is_reproducible() {
        let mut session = Session::default();
        session.timing.jitter_percent = 20.0;
        session.seed = Some(42);
        assert_eq!(sequence_for(&session), sequence_for(&session));
    }

    #[test]
    fn test_default_session_is_paris() {
        let seq = sequence_for(&Session::default());
        assert_eq!(seq.tone_count(), 14);
    }
}

//! Session resolution: session file, then command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use paris_spec::Session;

use crate::cli_args::{AudioArgs, TimingArgs};

/// Loads the session file if one was given, otherwise the defaults.
pub fn load_session(path: Option<&Path>) -> Result<Session> {
    match path {
        Some(path) => {
            let session = Session::load(path)
                .with_context(|| format!("failed to load session {}", path.display()))?;
            log::info!("loaded session from {}", path.display());
            Ok(session)
        }
        None => Ok(Session::default()),
    }
}

/// Builds the effective session for a command.
pub fn resolve(
    path: Option<&Path>,
    text: Option<&str>,
    timing: Option<&TimingArgs>,
    audio: Option<&AudioArgs>,
) -> Result<Session> {
    let mut session = load_session(path)?;
    if let Some(text) = text {
        session.text = text.to_string();
    }
    if let Some(timing) = timing {
        timing.apply(&mut session.timing);
        if timing.seed.is_some() {
            session.seed = timing.seed;
        }
    }
    if let Some(audio) = audio {
        audio.apply(&mut session.audio);
    }
    log::debug!("resolved session: {:?}", session);
    Ok(session)
}

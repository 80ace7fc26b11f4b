//! Host audio player.
//!
//! Plays WAV files through whatever command-line player the platform
//! ships: `afplay` on macOS, `paplay` or `aplay` on Linux, PowerShell's
//! `SoundPlayer` on Windows.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use paris_backend_audio::{AudioError, AudioPlayer, AudioResult};

/// Player candidates for this platform, in preference order.
fn candidates() -> &'static [&'static str] {
    if cfg!(target_os = "macos") {
        &["afplay"]
    } else if cfg!(windows) {
        &["powershell", "pwsh"]
    } else {
        &["paplay", "aplay", "pw-play"]
    }
}

/// A command-line player found on `PATH`.
#[derive(Debug, Clone)]
pub struct SystemPlayer {
    program: PathBuf,
    name: String,
}

impl SystemPlayer {
    /// Finds the first available player.
    pub fn detect() -> AudioResult<Self> {
        for name in candidates() {
            if let Ok(program) = which::which(name) {
                log::debug!("using player {} at {}", name, program.display());
                return Ok(Self {
                    program,
                    name: (*name).to_string(),
                });
            }
        }
        Err(AudioError::player_unavailable(format!(
            "none of {} found on PATH",
            candidates().join(", ")
        )))
    }

    fn command(&self, wav_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        match self.name.as_str() {
            "powershell" | "pwsh" => {
                let script = format!(
                    "(New-Object Media.SoundPlayer '{}').PlaySync()",
                    wav_path.display().to_string().replace('\'', "''")
                );
                cmd.args(["-NoProfile", "-NonInteractive", "-Command", &script]);
            }
            "aplay" => {
                cmd.arg("-q").arg(wav_path);
            }
            _ => {
                cmd.arg(wav_path);
            }
        }
        cmd
    }
}

impl AudioPlayer for SystemPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn play(&self, wav_path: &Path) -> AudioResult<()> {
        let output = self
            .command(wav_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| AudioError::playback_failed(format!("{}: {}", self.name, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AudioError::playback_failed(format!(
                "{} exited with {}: {}",
                self.name,
                output.status,
                stderr.trim()
            )))
        }
    }
}

//! Compressed export through an external encoder.
//!
//! MP3, Ogg Vorbis and FLAC are produced by handing a temporary WAV to
//! `ffmpeg` or `lame`. When neither is installed the caller gets
//! [`AudioError::EncoderUnavailable`] and can fall back to WAV.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::str::FromStr;

use crate::error::{AudioError, AudioResult};
use crate::wav::WavWriter;

/// Default bitrate for lossy formats.
pub const DEFAULT_BITRATE_KBPS: u32 = 128;

/// A compressed output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressedFormat {
    /// MPEG-1 Layer III.
    Mp3,
    /// Ogg Vorbis.
    Ogg,
    /// Free Lossless Audio Codec.
    Flac,
}

impl CompressedFormat {
    /// All supported formats.
    pub const ALL: [CompressedFormat; 3] = [Self::Mp3, Self::Ogg, Self::Flac];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
        }
    }

    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }

    fn is_lossy(&self) -> bool {
        !matches!(self, Self::Flac)
    }
}

impl fmt::Display for CompressedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for CompressedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "ogg" | "oga" | "vorbis" => Ok(Self::Ogg),
            "flac" => Ok(Self::Flac),
            other => Err(format!("unknown compressed format '{}'", other)),
        }
    }
}

/// Which program family an encoder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderKind {
    /// `ffmpeg`, any format.
    Ffmpeg,
    /// `lame`, MP3 only.
    Lame,
}

impl EncoderKind {
    /// Program name looked up on `PATH`.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Ffmpeg => "ffmpeg",
            Self::Lame => "lame",
        }
    }

    /// Guesses the kind from an executable path.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.contains("lame") {
            Self::Lame
        } else {
            Self::Ffmpeg
        }
    }

    /// Returns true when this encoder can write `format`.
    pub fn supports(&self, format: CompressedFormat) -> bool {
        match self {
            Self::Ffmpeg => true,
            Self::Lame => format == CompressedFormat::Mp3,
        }
    }
}

/// Encoder lookup settings.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Explicit encoder executable, tried before `PATH`.
    pub encoder_path: Option<PathBuf>,
    /// Whether to search `PATH` for `ffmpeg` and `lame`.
    pub search_path: bool,
    /// Bitrate for lossy formats.
    pub bitrate_kbps: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            encoder_path: None,
            search_path: true,
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
        }
    }
}

impl EncoderConfig {
    /// Uses `path` as the encoder.
    pub fn with_encoder_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.encoder_path = Some(path.into());
        self
    }
}

/// A located encoder executable.
#[derive(Debug, Clone)]
pub struct Encoder {
    path: PathBuf,
    kind: EncoderKind,
    bitrate_kbps: u32,
}

impl Encoder {
    /// Finds an encoder: the configured path first, then `ffmpeg`, then
    /// `lame` on `PATH`.
    pub fn locate(config: &EncoderConfig) -> AudioResult<Self> {
        let mut searched = Vec::new();

        if let Some(path) = &config.encoder_path {
            if path.is_file() {
                return Ok(Self::at(path.clone(), config.bitrate_kbps));
            }
            searched.push(path.display().to_string());
        }

        if config.search_path {
            for kind in [EncoderKind::Ffmpeg, EncoderKind::Lame] {
                if let Ok(path) = which::which(kind.program()) {
                    log::debug!("using {} at {}", kind.program(), path.display());
                    return Ok(Self {
                        path,
                        kind,
                        bitrate_kbps: config.bitrate_kbps,
                    });
                }
                searched.push(kind.program().to_string());
            }
        }

        Err(AudioError::EncoderUnavailable { searched })
    }

    /// Wraps an explicit executable path.
    pub fn at(path: PathBuf, bitrate_kbps: u32) -> Self {
        let kind = EncoderKind::from_path(&path);
        Self {
            path,
            kind,
            bitrate_kbps,
        }
    }

    /// Executable path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoder family.
    pub fn kind(&self) -> EncoderKind {
        self.kind
    }

    fn arguments(&self, input: &Path, output: &Path, format: CompressedFormat) -> Vec<String> {
        let input = input.display().to_string();
        let output = output.display().to_string();
        let bitrate = self.bitrate_kbps.max(8);

        match self.kind {
            EncoderKind::Lame => vec![
                "--quiet".into(),
                "-b".into(),
                bitrate.to_string(),
                input,
                output,
            ],
            EncoderKind::Ffmpeg => {
                let codec = match format {
                    CompressedFormat::Mp3 => "libmp3lame",
                    CompressedFormat::Ogg => "libvorbis",
                    CompressedFormat::Flac => "flac",
                };
                let mut args: Vec<String> = vec![
                    "-hide_banner".into(),
                    "-loglevel".into(),
                    "error".into(),
                    "-y".into(),
                    "-i".into(),
                    input,
                    "-c:a".into(),
                    codec.into(),
                ];
                if format.is_lossy() {
                    args.push("-b:a".into());
                    args.push(format!("{}k", bitrate));
                }
                args.push(output);
                args
            }
        }
    }

    /// Encodes an existing WAV file.
    pub fn encode_file(
        &self,
        wav_path: &Path,
        out_path: &Path,
        format: CompressedFormat,
    ) -> AudioResult<()> {
        if !self.kind.supports(format) {
            return Err(AudioError::UnsupportedFormat {
                encoder: self.kind.program().to_string(),
                format: format.to_string(),
            });
        }

        let output = Command::new(&self.path)
            .args(self.arguments(wav_path, out_path, format))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(AudioError::EncoderSpawnFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AudioError::encoder_failed(
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        log::info!("encoded {} as {}", out_path.display(), format);
        Ok(())
    }

    /// Encodes samples through a temporary WAV file.
    pub fn encode_samples(
        &self,
        samples: &[i16],
        sample_rate: u32,
        out_path: &Path,
        format: CompressedFormat,
    ) -> AudioResult<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix("paris-")
            .suffix(".wav")
            .tempfile()?;
        tmp.write_all(&WavWriter::mono(sample_rate).write_samples(samples))?;
        tmp.flush()?;
        let wav_path = tmp.into_temp_path();

        self.encode_file(&wav_path, out_path, format)
    }
}

/// Locates an encoder and writes `samples` to `out_path` as `format`.
pub fn export_compressed(
    samples: &[i16],
    sample_rate: u32,
    out_path: &Path,
    format: CompressedFormat,
    config: &EncoderConfig,
) -> AudioResult<()> {
    Encoder::locate(config)?.encode_samples(samples, sample_rate, out_path, format)
}

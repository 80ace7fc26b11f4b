//! CLI argument definitions for the `paris` command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types live here,
//! keeping `main.rs` focused on dispatch.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use paris_spec::{AudioParams, TimingParams};

/// PARIS Studio - Morse timing and audio generator
#[derive(Parser, Debug)]
#[command(name = "paris")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Session file (JSON) supplying text and parameters; flags override it
    #[arg(long, global = true, value_name = "FILE")]
    pub session: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the timing sequence for a text
    Timing {
        /// Text to send (default: session text)
        text: Option<String>,

        #[command(flatten)]
        timing: TimingArgs,

        /// Write a .paris file instead of printing
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Also draw a proportional timing strip
        #[arg(long)]
        graph: bool,

        /// Width of the timing strip in characters
        #[arg(long, default_value_t = 72)]
        width: usize,
    },

    /// Synthesize a text and write a WAV file
    Render {
        /// Text to send (default: session text)
        text: Option<String>,

        #[command(flatten)]
        timing: TimingArgs,

        #[command(flatten)]
        audio: AudioArgs,

        /// Output WAV path
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Synthesize a text and export MP3, Ogg or FLAC
    Export {
        /// Text to send (default: session text)
        text: Option<String>,

        #[command(flatten)]
        timing: TimingArgs,

        #[command(flatten)]
        audio: AudioArgs,

        /// Output path
        #[arg(short, long)]
        out: PathBuf,

        /// Output format (default: from the output extension)
        #[arg(short, long, value_parser = ["mp3", "ogg", "flac"])]
        format: Option<String>,

        /// Encoder executable (default: $PARIS_ENCODER, then ffmpeg or lame on PATH)
        #[arg(long)]
        encoder: Option<PathBuf>,

        /// Bitrate for lossy formats in kbit/s
        #[arg(long, default_value_t = 128)]
        bitrate: u32,
    },

    /// Render a .paris timing file
    Import {
        /// Path to the .paris file
        file: PathBuf,

        #[command(flatten)]
        audio: AudioArgs,

        /// Output WAV path
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Play the result
        #[arg(long)]
        play: bool,
    },

    /// Synthesize a text and play it
    Play {
        /// Text to send (default: session text)
        text: Option<String>,

        #[command(flatten)]
        timing: TimingArgs,

        #[command(flatten)]
        audio: AudioArgs,
    },

    /// Print the effective speed for a parameter set
    Wpm {
        #[command(flatten)]
        timing: TimingArgs,
    },

    /// Check for encoders and audio players
    Doctor,
}

/// Timing overrides.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TimingArgs {
    /// Character speed in WPM (1-80)
    #[arg(short = 'w', long = "wpm")]
    pub char_speed: Option<f64>,

    /// Farnsworth speed in WPM (clamped to the character speed)
    #[arg(long)]
    pub farnsworth: Option<f64>,

    /// Dash length in dots
    #[arg(long)]
    pub weight: Option<f64>,

    /// Timing jitter in percent (0-100)
    #[arg(long)]
    pub jitter: Option<f64>,

    /// Gap between letters in Farnsworth units
    #[arg(long)]
    pub letter_space: Option<f64>,

    /// Gap between words in Farnsworth units
    #[arg(long)]
    pub word_space: Option<f64>,

    /// Leading silence in milliseconds
    #[arg(long)]
    pub pre_delay: Option<f64>,

    /// Trailing silence in milliseconds
    #[arg(long)]
    pub post_delay: Option<f64>,

    /// Jitter seed for reproducible output
    #[arg(long)]
    pub seed: Option<u32>,
}

impl TimingArgs {
    /// Overwrites the fields that were given on the command line.
    pub fn apply(&self, params: &mut TimingParams) {
        let overrides = [
            (self.char_speed, &mut params.char_speed_wpm),
            (self.farnsworth, &mut params.farnsworth_speed_wpm),
            (self.weight, &mut params.dash_weight),
            (self.jitter, &mut params.jitter_percent),
            (self.letter_space, &mut params.letter_space_units),
            (self.word_space, &mut params.word_space_units),
            (self.pre_delay, &mut params.pre_delay_ms),
            (self.post_delay, &mut params.post_delay_ms),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }
    }
}

/// Tone overrides.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AudioArgs {
    /// Tone frequency in Hz
    #[arg(long = "freq")]
    pub frequency: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Volume (0-1)
    #[arg(long)]
    pub volume: Option<f64>,

    /// Keying ramp in milliseconds
    #[arg(long)]
    pub ramp: Option<f64>,
}

impl AudioArgs {
    /// Overwrites the fields that were given on the command line.
    pub fn apply(&self, params: &mut AudioParams) {
        if let Some(v) = self.frequency {
            params.frequency_hz = v;
        }
        if let Some(v) = self.sample_rate {
            params.sample_rate_hz = v;
        }
        if let Some(v) = self.volume {
            params.volume = v;
        }
        if let Some(v) = self.ramp {
            params.ramp_ms = v;
        }
    }
}

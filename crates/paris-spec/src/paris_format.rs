//! `.paris` timing-text format.
//!
//! A `.paris` file is plain text:
//!
//! ```text
//! # Word: PARIS
//! # Char speed: 20 WPM
//! duration_ms,value
//! 60,1
//! 60,0
//! 180,1
//! ```
//!
//! Lines starting with `#` carry metadata and are ignored when reading
//! events. The header line is `duration_ms,value`; every other line is an
//! integer duration in milliseconds and `1` (tone) or `0` (silence).

use std::fs;
use std::path::Path;

use crate::error::SpecResult;
use crate::event::{TimingEvent, TimingSequence};
use crate::params::TimingParams;

/// Header line preceding the event lines.
pub const TIMING_HEADER: &str = "duration_ms,value";

/// A timing sequence together with its metadata comments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParisDocument {
    /// `(key, value)` pairs written as `# key: value` lines.
    pub metadata: Vec<(String, String)>,
    /// The events.
    pub sequence: TimingSequence,
}

impl ParisDocument {
    /// Creates a document without metadata.
    pub fn new(sequence: TimingSequence) -> Self {
        Self {
            metadata: Vec::new(),
            sequence,
        }
    }

    /// Creates a document carrying the studio's standard metadata block.
    pub fn for_session(
        text: &str,
        params: &TimingParams,
        effective_wpm: f64,
        sequence: TimingSequence,
    ) -> Self {
        Self::new(sequence)
            .with_metadata("Word", text)
            .with_metadata("Char speed", format!("{} WPM", params.char_speed_wpm))
            .with_metadata("Farnsworth", format!("{} WPM", params.farnsworth_speed_wpm))
            .with_metadata("Effective WPM", format!("{:.2}", effective_wpm))
    }

    /// Appends a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Renders the document as `.paris` text (with a trailing newline).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.metadata {
            // Newlines would break the line-oriented layout.
            let value = value.replace(['\r', '\n'], " ");
            out.push_str(&format!("# {}: {}\n", key, value));
        }
        out.push_str(TIMING_HEADER);
        out.push('\n');
        for event in &self.sequence {
            out.push_str(&format!("{},{}\n", event.duration_ms, u8::from(event.tone_on)));
        }
        out
    }
}

/// A line that was discarded while reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub line_number: usize,
    /// The trimmed line content.
    pub content: String,
}

/// Result of reading `.paris` text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// Events in file order.
    pub sequence: TimingSequence,
    /// Metadata comments in `# key: value` form.
    pub metadata: Vec<(String, String)>,
    /// Lines that failed to parse and were dropped.
    pub malformed: Vec<MalformedLine>,
}

impl ParseOutcome {
    /// Whether no events were read.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Parses `.paris` text.
///
/// Blank lines, `#` comment lines and the header line are skipped. Every
/// other line must hold exactly two comma-separated numbers; both are
/// truncated toward zero (so `80.0,1.0` reads as `80,1`). A non-zero value
/// means tone on. Lines that fail to parse, or whose duration is negative or
/// does not fit in `u32`, are recorded in [`ParseOutcome::malformed`] and
/// otherwise ignored.
pub fn parse_timing_text(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some((key, value)) = comment.split_once(':') {
                outcome
                    .metadata
                    .push((key.trim().to_string(), value.trim().to_string()));
            }
            continue;
        }
        if line.starts_with("duration") {
            continue;
        }

        match parse_event_line(line) {
            Some(event) => outcome.sequence.push(event),
            None => {
                log::debug!("discarding malformed timing line {}: {:?}", index + 1, line);
                outcome.malformed.push(MalformedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    outcome
}

fn parse_event_line(line: &str) -> Option<TimingEvent> {
    let mut fields = line.split(',');
    let duration = parse_truncated(fields.next()?)?;
    let value = parse_truncated(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    if duration < 0.0 || duration > f64::from(u32::MAX) {
        return None;
    }
    Some(TimingEvent::new(duration as u32, value != 0.0))
}

fn parse_truncated(field: &str) -> Option<f64> {
    let value: f64 = field.trim().parse().ok()?;
    value.is_finite().then(|| value.trunc())
}

/// Reads and parses a `.paris` file.
pub fn read_timing_file(path: &Path) -> SpecResult<ParseOutcome> {
    let text = fs::read_to_string(path)?;
    Ok(parse_timing_text(&text))
}

/// Writes a document to a `.paris` file.
pub fn write_timing_file(path: &Path, document: &ParisDocument) -> SpecResult<()> {
    fs::write(path, document.to_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_sequence() -> TimingSequence {
        TimingSequence::from_events(vec![
            TimingEvent::tone(60),
            TimingEvent::silence(60),
            TimingEvent::tone(180),
            TimingEvent::silence(0),
        ])
    }

    #[test]
    fn test_writer_layout() {
        let doc = ParisDocument::new(sample_sequence()).with_metadata("Word", "E");
        assert_eq!(
            doc.to_text(),
            "# Word: E\nduration_ms,value\n60,1\n60,0\n180,1\n0,0\n"
        );
    }

    #[test]
    fn test_for_session_metadata() {
        let params = TimingParams::standard(20.0);
        let doc = ParisDocument::for_session("PARIS", &params, 20.0, TimingSequence::new());
        let text = doc.to_text();
        assert!(text.starts_with("# Word: PARIS\n"));
        assert!(text.contains("# Char speed: 20 WPM\n"));
        assert!(text.contains("# Farnsworth: 20 WPM\n"));
        assert!(text.contains("# Effective WPM: 20.00\n"));
        assert!(text.ends_with("duration_ms,value\n"));
    }

    #[test]
    fn test_metadata_newlines_are_flattened() {
        let doc = ParisDocument::new(TimingSequence::new()).with_metadata("Word", "CQ\nDE");
        assert_eq!(doc.to_text(), "# Word: CQ DE\nduration_ms,value\n");
    }

    #[test]
    fn test_round_trip_preserves_events() {
        let doc = ParisDocument::new(sample_sequence()).with_metadata("Word", "ET");
        let parsed = parse_timing_text(&doc.to_text());
        assert_eq!(parsed.sequence, sample_sequence());
        assert_eq!(parsed.metadata, vec![("Word".to_string(), "ET".to_string())]);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_reader_tolerates_float_fields() {
        let parsed = parse_timing_text("duration_ms,value\n80.0,1.0\n 240.9 , 0 \n");
        assert_eq!(
            parsed.sequence.events(),
            &[TimingEvent::tone(80), TimingEvent::silence(240)]
        );
    }

    #[test]
    fn test_reader_skips_blank_comment_and_header_lines() {
        let text = "\n# comment\n   \nduration_ms,value\n#another\n60,1\n\n";
        let parsed = parse_timing_text(text);
        assert_eq!(parsed.sequence.events(), &[TimingEvent::tone(60)]);
        assert!(parsed.malformed.is_empty());
    }

    #[test]
    fn test_reader_discards_malformed_lines() {
        let text = "60,1\nabc,1\n60\n60,1,2\n-5,1\n60,x\ninf,1\nNaN,0\n5000000000,1\n60,0\n";
        let parsed = parse_timing_text(text);
        assert_eq!(
            parsed.sequence.events(),
            &[TimingEvent::tone(60), TimingEvent::silence(60)]
        );
        let numbers: Vec<usize> = parsed.malformed.iter().map(|m| m.line_number).collect();
        assert_eq!(numbers, vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_reader_nonzero_value_means_tone() {
        let parsed = parse_timing_text("10,2\n10,0.5\n10,-1\n");
        let tones: Vec<bool> = parsed.sequence.iter().map(|e| e.tone_on).collect();
        assert_eq!(tones, vec![true, false, true]);
    }

    #[test]
    fn test_empty_input_is_empty_outcome() {
        let parsed = parse_timing_text("# nothing here\nduration_ms,value\n");
        assert!(parsed.is_empty());
    }
}

//! Proportional text rendering of a timing sequence.

use paris_spec::TimingSequence;

const TONE: char = '#';
const SILENCE: char = '_';

/// Draws `sequence` as a strip of about `width` characters.
///
/// Each event gets a run proportional to its duration, at least one
/// character wide so short elements stay visible. Tone is `#`, silence `_`.
pub fn timing_strip(sequence: &TimingSequence, width: usize) -> String {
    let total = sequence.total_duration_ms();
    if total == 0 || width == 0 {
        return String::new();
    }

    let scale = width as f64 / total as f64;
    let mut strip = String::new();
    for event in sequence {
        if event.duration_ms == 0 {
            continue;
        }
        let cells = ((f64::from(event.duration_ms) * scale).round() as usize).max(1);
        let c = if event.tone_on { TONE } else { SILENCE };
        strip.extend(std::iter::repeat(c).take(cells));
    }
    strip
}

/// Time axis label for a strip: `0 ms` on the left, the total on the right.
pub fn axis_label(sequence: &TimingSequence, width: usize) -> String {
    let end = format!("{} ms", sequence.total_duration_ms());
    let start = "0";
    let gap = width.saturating_sub(start.len() + end.len()).max(1);
    format!("{}{}{}", start, " ".repeat(gap), end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paris_spec::TimingEvent;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_proportional_strip() {
        let seq = TimingSequence::from_events(vec![
            TimingEvent::tone(60),
            TimingEvent::silence(60),
            TimingEvent::tone(180),
        ]);
        assert_eq!(timing_strip(&seq, 10), "##__######");
    }

    #[test]
    fn test_short_events_stay_visible() {
        let seq = TimingSequence::from_events(vec![
            TimingEvent::tone(1),
            TimingEvent::silence(10_000),
            TimingEvent::tone(1),
        ]);
        let strip = timing_strip(&seq, 20);
        assert!(strip.starts_with('#'));
        assert!(strip.ends_with('#'));
    }

    #[test]
    fn test_empty_and_zero_width() {
        assert_eq!(timing_strip(&TimingSequence::new(), 40), "");
        let seq = TimingSequence::from_events(vec![TimingEvent::tone(60)]);
        assert_eq!(timing_strip(&seq, 0), "");
    }

    #[test]
    fn test_zero_duration_events_are_skipped() {
        let seq = TimingSequence::from_events(vec![
            TimingEvent::tone(100),
            TimingEvent::silence(0),
            TimingEvent::tone(100),
        ]);
        assert_eq!(timing_strip(&seq, 4), "####");
    }

    #[test]
    fn test_axis_label() {
        let seq = TimingSequence::from_events(vec![TimingEvent::tone(300)]);
        assert_eq!(axis_label(&seq, 12), "0     300 ms");
        assert_eq!(axis_label(&seq, 2), "0 300 ms");
    }
}

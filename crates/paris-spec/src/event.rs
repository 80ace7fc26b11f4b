//! Timing events and ordered event sequences.

use serde::{Deserialize, Serialize};

/// One contiguous interval of constant tone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimingEvent {
    /// Length of the interval in whole milliseconds.
    pub duration_ms: u32,
    /// Whether the tone sounds during the interval.
    pub tone_on: bool,
}

impl TimingEvent {
    /// Creates a new event.
    pub fn new(duration_ms: u32, tone_on: bool) -> Self {
        Self {
            duration_ms,
            tone_on,
        }
    }

    /// Creates a tone-on event.
    pub fn tone(duration_ms: u32) -> Self {
        Self::new(duration_ms, true)
    }

    /// Creates a silent event.
    pub fn silence(duration_ms: u32) -> Self {
        Self::new(duration_ms, false)
    }
}

/// Ordered sequence of timing events in playback order.
///
/// Adjacent events are never merged and zero-duration events are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimingSequence {
    events: Vec<TimingEvent>,
}

impl TimingSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing list of events.
    pub fn from_events(events: Vec<TimingEvent>) -> Self {
        Self { events }
    }

    /// Appends an event.
    pub fn push(&mut self, event: TimingEvent) {
        self.events.push(event);
    }

    /// Returns the events as a slice.
    pub fn events(&self) -> &[TimingEvent] {
        &self.events
    }

    /// Consumes the sequence and returns its events.
    pub fn into_events(self) -> Vec<TimingEvent> {
        self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the sequence has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, TimingEvent> {
        self.events.iter()
    }

    /// Sum of all event durations in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.events.iter().map(|e| u64::from(e.duration_ms)).sum()
    }

    /// Number of tone-on events.
    pub fn tone_count(&self) -> usize {
        self.events.iter().filter(|e| e.tone_on).count()
    }
}

impl FromIterator<TimingEvent> for TimingSequence {
    fn from_iter<I: IntoIterator<Item = TimingEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TimingSequence {
    type Item = TimingEvent;
    type IntoIter = std::vec::IntoIter<TimingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimingSequence {
    type Item = &'a TimingEvent;
    type IntoIter = std::slice::Iter<'a, TimingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl AsRef<[TimingEvent]> for TimingSequence {
    fn as_ref(&self) -> &[TimingEvent] {
        &self.events
    }
}

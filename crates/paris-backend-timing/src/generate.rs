//! Text to timing-sequence generation.

use paris_spec::{dot_ms, lookup, Symbol, TimingEvent, TimingParams, TimingSequence};
use rand::Rng;

use crate::rng::create_jitter_rng;

/// Unrounded element durations derived from clamped timing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingPlan {
    /// Dot duration at character speed.
    pub dot_ms: f64,
    /// Dash duration (`dash_weight * dot_ms`).
    pub dash_ms: f64,
    /// Gap between symbols of one character (one dot).
    pub intra_gap_ms: f64,
    /// Gap between characters of one word, at Farnsworth speed.
    pub letter_gap_ms: f64,
    /// Gap between words, at Farnsworth speed.
    pub word_gap_ms: f64,
    /// Leading silence.
    pub pre_delay_ms: f64,
    /// Trailing silence.
    pub post_delay_ms: f64,
    /// Jitter as a fraction (`jitter_percent / 100`).
    pub jitter_fraction: f64,
}

impl TimingPlan {
    /// Computes the plan for a parameter set, clamping it first.
    pub fn from_params(params: &TimingParams) -> Self {
        let p = params.clamped();
        let dot = dot_ms(p.char_speed_wpm);
        let farnsworth_dot = dot_ms(p.farnsworth_speed_wpm);
        Self {
            dot_ms: dot,
            dash_ms: p.dash_weight * dot,
            intra_gap_ms: dot,
            letter_gap_ms: p.letter_space_units * farnsworth_dot,
            word_gap_ms: p.word_space_units * farnsworth_dot,
            pre_delay_ms: p.pre_delay_ms,
            post_delay_ms: p.post_delay_ms,
            jitter_fraction: p.jitter_percent / 100.0,
        }
    }

    /// Duration of a single symbol.
    pub fn symbol_ms(&self, symbol: Symbol) -> f64 {
        match symbol {
            Symbol::Dot => self.dot_ms,
            Symbol::Dash => self.dash_ms,
        }
    }
}

/// Rounds a duration to whole milliseconds, flooring at zero.
fn whole_ms(ms: f64) -> u32 {
    // `as` saturates, so huge spacing values stay representable.
    ms.round().max(0.0) as u32
}

/// Collects events while applying per-event jitter.
struct EventWriter<'a, R: Rng + ?Sized> {
    events: Vec<TimingEvent>,
    jitter_fraction: f64,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> EventWriter<'a, R> {
    fn new(jitter_fraction: f64, rng: &'a mut R) -> Self {
        Self {
            events: Vec::new(),
            jitter_fraction,
            rng,
        }
    }

    fn jittered(&mut self, ms: f64) -> f64 {
        if self.jitter_fraction > 0.0 {
            let f = self.jitter_fraction;
            ms * self.rng.gen_range(1.0 - f..=1.0 + f)
        } else {
            ms
        }
    }

    /// Pushes a generated element, jittered then rounded.
    fn element(&mut self, ms: f64, tone_on: bool) {
        let ms = self.jittered(ms);
        self.events.push(TimingEvent::new(whole_ms(ms), tone_on));
    }

    /// Pushes a caller-specified delay, rounded but never jittered.
    fn delay(&mut self, ms: f64) {
        if ms > 0.0 {
            self.events.push(TimingEvent::silence(whole_ms(ms)));
        }
    }
}

/// Generates the timing sequence for `text`.
///
/// Jitter, when enabled, draws from the thread-local process generator. Use
/// [`generate_seeded`] for reproducible output or [`generate_with_rng`] to
/// supply a generator.
pub fn generate(text: &str, params: &TimingParams) -> TimingSequence {
    generate_with_rng(text, params, &mut rand::thread_rng())
}

/// Generates the timing sequence with jitter drawn from a seeded PCG32
/// stream. Identical inputs give identical output.
pub fn generate_seeded(text: &str, params: &TimingParams, seed: u32) -> TimingSequence {
    generate_with_rng(text, params, &mut create_jitter_rng(seed))
}

/// Generates the timing sequence using the given random source for jitter.
///
/// The source is only consulted when `jitter_percent > 0`.
///
/// Layout, in order: optional pre-delay; for each whitespace-separated word,
/// each mapped character's symbols separated by intra-character gaps, a
/// letter gap after every mapped character that is not the last character of
/// its word, and a word gap after every word but the last; optional
/// post-delay. Gap placement is positional: a word of only unmapped
/// characters emits no tones but still gets its word gap.
pub fn generate_with_rng<R: Rng + ?Sized>(
    text: &str,
    params: &TimingParams,
    rng: &mut R,
) -> TimingSequence {
    let plan = TimingPlan::from_params(params);
    let mut out = EventWriter::new(plan.jitter_fraction, rng);

    out.delay(plan.pre_delay_ms);

    let words: Vec<&str> = text.split_whitespace().collect();
    for (wi, word) in words.iter().enumerate() {
        let chars: Vec<char> = word.chars().collect();
        for (ci, &c) in chars.iter().enumerate() {
            let Some(pattern) = lookup(c) else {
                log::trace!("skipping unmapped character {:?}", c);
                continue;
            };
            for (si, &symbol) in pattern.iter().enumerate() {
                out.element(plan.symbol_ms(symbol), true);
                if si + 1 < pattern.len() {
                    out.element(plan.intra_gap_ms, false);
                }
            }
            if ci + 1 < chars.len() {
                out.element(plan.letter_gap_ms, false);
            }
        }
        if wi + 1 < words.len() {
            out.element(plan.word_gap_ms, false);
        }
    }

    out.delay(plan.post_delay_ms);

    let sequence = TimingSequence::from_events(out.events);
    log::debug!(
        "generated {} events ({} tones, {} ms) for {} word(s)",
        sequence.len(),
        sequence.tone_count(),
        sequence.total_duration_ms(),
        words.len()
    );
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use paris_spec::TimingEvent as E;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_standard_20_wpm() {
        let plan = TimingPlan::from_params(&TimingParams::standard(20.0));
        assert_eq!(plan.dot_ms, 60.0);
        assert_eq!(plan.dash_ms, 180.0);
        assert_eq!(plan.intra_gap_ms, 60.0);
        assert_eq!(plan.letter_gap_ms, 180.0);
        assert_eq!(plan.word_gap_ms, 420.0);
        assert_eq!(plan.jitter_fraction, 0.0);
    }

    #[test]
    fn test_plan_farnsworth_spacing() {
        let params = TimingParams {
            char_speed_wpm: 20.0,
            farnsworth_speed_wpm: 10.0,
            ..TimingParams::standard(20.0)
        };
        let plan = TimingPlan::from_params(&params);
        assert_eq!(plan.dot_ms, 60.0);
        assert_eq!(plan.letter_gap_ms, 360.0);
        assert_eq!(plan.word_gap_ms, 840.0);
    }

    #[test]
    fn test_single_letter() {
        let seq = generate("A", &TimingParams::standard(20.0));
        assert_eq!(seq.events(), &[E::tone(60), E::silence(60), E::tone(180)]);
    }

    #[test]
    fn test_two_words() {
        let seq = generate("E T", &TimingParams::standard(20.0));
        assert_eq!(seq.events(), &[E::tone(60), E::silence(420), E::tone(180)]);
    }

    #[test]
    fn test_letter_gap_between_characters() {
        let seq = generate("EE", &TimingParams::standard(20.0));
        assert_eq!(seq.events(), &[E::tone(60), E::silence(180), E::tone(60)]);
    }

    #[test]
    fn test_dash_weight() {
        let params = TimingParams {
            dash_weight: 4.0,
            ..TimingParams::standard(20.0)
        };
        let seq = generate("T", &params);
        assert_eq!(seq.events(), &[E::tone(240)]);
    }

    #[test]
    fn test_durations_are_rounded_not_truncated() {
        // 1200 / 7 = 171.43 ms dot, 514.29 ms dash
        let seq = generate("A", &TimingParams::standard(7.0));
        assert_eq!(seq.events(), &[E::tone(171), E::silence(171), E::tone(514)]);
    }

    #[test]
    fn test_pre_and_post_delay() {
        let params = TimingParams {
            pre_delay_ms: 250.0,
            post_delay_ms: 100.4,
            ..TimingParams::standard(20.0)
        };
        let seq = generate("E", &params);
        assert_eq!(
            seq.events(),
            &[E::silence(250), E::tone(60), E::silence(100)]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(generate("", &TimingParams::default()).is_empty());
        assert!(generate(" \t\n ", &TimingParams::default()).is_empty());

        let params = TimingParams {
            pre_delay_ms: 10.0,
            post_delay_ms: 20.0,
            ..TimingParams::default()
        };
        assert_eq!(
            generate("   ", &params).events(),
            &[E::silence(10), E::silence(20)]
        );
    }

    #[test]
    fn test_unmapped_characters_are_skipped() {
        let params = TimingParams::standard(20.0);
        // Leading unmapped character: no gap from it, E is last in the word.
        assert_eq!(generate("?E", &params).events(), &[E::tone(60)]);
        // Trailing unmapped character: E is not last by position, so it
        // keeps its letter gap.
        assert_eq!(
            generate("E?", &params).events(),
            &[E::tone(60), E::silence(180)]
        );
    }

    #[test]
    fn test_unmapped_word_keeps_positional_word_gaps() {
        let params = TimingParams::standard(20.0);
        let seq = generate("E ?! T", &params);
        assert_eq!(
            seq.events(),
            &[E::tone(60), E::silence(420), E::silence(420), E::tone(180)]
        );
    }

    #[test]
    fn test_only_unmapped_characters() {
        let seq = generate("?!,", &TimingParams::default());
        assert!(seq.is_empty());
        let seq = generate("?? !!", &TimingParams::standard(20.0));
        assert_eq!(seq.tone_count(), 0);
        assert_eq!(seq.events(), &[E::silence(420)]);
    }

    #[test]
    fn test_case_insensitive() {
        let params = TimingParams::standard(18.0);
        assert_eq!(generate("paris", &params), generate("PARIS", &params));
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let params = TimingParams {
            jitter_percent: 20.0,
            ..TimingParams::standard(20.0)
        };
        let a = generate_seeded("CQ CQ DE TEST", &params, 99);
        let b = generate_seeded("CQ CQ DE TEST", &params, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let params = TimingParams {
            jitter_percent: 10.0,
            ..TimingParams::standard(20.0)
        };
        let plain = generate("HELLO WORLD", &TimingParams::standard(20.0));
        for seed in 0..20 {
            let jittered = generate_seeded("HELLO WORLD", &params, seed);
            assert_eq!(jittered.len(), plain.len());
            for (j, p) in jittered.iter().zip(plain.iter()) {
                assert_eq!(j.tone_on, p.tone_on);
                let lo = (f64::from(p.duration_ms) * 0.9).floor() as u32;
                let hi = (f64::from(p.duration_ms) * 1.1).ceil() as u32;
                assert!(
                    (lo..=hi).contains(&j.duration_ms),
                    "{} outside [{}, {}]",
                    j.duration_ms,
                    lo,
                    hi
                );
            }
        }
    }

    #[test]
    fn test_jitter_varies_repeated_symbols() {
        let params = TimingParams {
            jitter_percent: 30.0,
            ..TimingParams::standard(5.0)
        };
        let seq = generate_seeded("55555", &params, 1);
        let tones: Vec<u32> = seq
            .iter()
            .filter(|e| e.tone_on)
            .map(|e| e.duration_ms)
            .collect();
        assert_eq!(tones.len(), 25);
        assert!(tones.iter().any(|&d| d != tones[0]));
    }

    #[test]
    fn test_jitter_does_not_touch_delays() {
        let params = TimingParams {
            jitter_percent: 50.0,
            pre_delay_ms: 300.0,
            post_delay_ms: 700.0,
            ..TimingParams::standard(20.0)
        };
        for seed in 0..10 {
            let seq = generate_seeded("E", &params, seed);
            assert_eq!(seq.events()[0], E::silence(300));
            assert_eq!(seq.events()[2], E::silence(700));
        }
    }

    #[test]
    fn test_zero_jitter_never_consults_rng() {
        struct Exploding;
        impl rand::RngCore for Exploding {
            fn next_u32(&mut self) -> u32 {
                panic!("rng consulted")
            }
            fn next_u64(&mut self) -> u64 {
                panic!("rng consulted")
            }
            fn fill_bytes(&mut self, _dest: &mut [u8]) {
                panic!("rng consulted")
            }
            fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
                panic!("rng consulted")
            }
        }

        let seq = generate_with_rng("PARIS", &TimingParams::standard(20.0), &mut Exploding);
        assert_eq!(seq.tone_count(), 14);
    }
}

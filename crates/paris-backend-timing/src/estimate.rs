//! Effective speed estimation.

use paris_spec::{dot_ms, TimingParams};

/// Dots in "PARIS".
const PARIS_DOTS: f64 = 10.0;
/// Number of dashes in "PARIS".
const PARIS_DASHES: f64 = 4.0;
/// Intra-character gaps in "PARIS".
const PARIS_INTRA_GAPS: f64 = 9.0;
/// Inter-letter gaps in "PARIS".
const PARIS_LETTER_GAPS: f64 = 4.0;

/// Estimates the realized speed in words per minute.
///
/// Computes the time to send the 50-unit calibration word "PARIS" followed
/// by one word gap: dots, dashes and intra-character gaps at character
/// speed, letter and word gaps at Farnsworth speed. With canonical weight
/// and spacing and no Farnsworth slowdown the result equals the character
/// speed.
///
/// Returns 0 when either speed is not positive. Speeds are otherwise clamped
/// the same way the generator clamps them.
pub fn estimate_effective_wpm(
    char_speed_wpm: f64,
    farnsworth_speed_wpm: f64,
    dash_weight: f64,
    letter_space_units: f64,
    word_space_units: f64,
) -> f64 {
    let positive = |wpm: f64| wpm > 0.0;
    if !positive(char_speed_wpm) || !positive(farnsworth_speed_wpm) {
        return 0.0;
    }

    let p = TimingParams {
        char_speed_wpm,
        farnsworth_speed_wpm,
        dash_weight,
        letter_space_units,
        word_space_units,
        ..TimingParams::default()
    }
    .clamped();

    let dot = dot_ms(p.char_speed_wpm);
    let farnsworth_dot = dot_ms(p.farnsworth_speed_wpm);

    let character_ms = dot * (PARIS_DOTS + PARIS_DASHES * p.dash_weight + PARIS_INTRA_GAPS);
    let spacing_ms =
        farnsworth_dot * (PARIS_LETTER_GAPS * p.letter_space_units + p.word_space_units);
    let word_ms = character_ms + spacing_ms;

    60_000.0 / word_ms
}

/// [`estimate_effective_wpm`] for a parameter set.
pub fn effective_wpm(params: &TimingParams) -> f64 {
    estimate_effective_wpm(
        params.char_speed_wpm,
        params.farnsworth_speed_wpm,
        params.dash_weight,
        params.letter_space_units,
        params.word_space_units,
    )
}

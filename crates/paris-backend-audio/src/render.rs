//! One-call rendering from timing sequence to WAV.

use paris_spec::{AudioParams, TimingSequence};

use crate::synth::{synthesize, SynthOutput};
use crate::wav::WavResult;

/// Synthesized samples together with their WAV encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Raw samples.
    pub output: SynthOutput,
    /// WAV container and PCM hash.
    pub wav: WavResult,
}

/// Renders `sequence` to 16-bit mono PCM and wraps it as WAV.
pub fn render(sequence: &TimingSequence, params: &AudioParams) -> RenderResult {
    let output = synthesize(sequence.events(), params);
    let wav = WavResult::from_samples(&output.samples, params.sample_rate_hz);

    log::debug!(
        "rendered {:.3}s of audio, pcm hash {}",
        wav.duration_seconds(),
        wav.pcm_hash
    );

    RenderResult { output, wav }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paris_spec::TimingEvent;

    #[test]
    fn test_render_wraps_synthesis() {
        let seq = TimingSequence::from_events(vec![
            TimingEvent::tone(60),
            TimingEvent::silence(60),
            TimingEvent::tone(180),
        ]);
        let params = AudioParams::default();
        let result = render(&seq, &params);

        assert_eq!(result.output, synthesize(seq.events(), &params));
        assert_eq!(result.wav.num_samples, result.output.samples.len());
        assert_eq!(result.wav.sample_rate, 44100);
        assert_eq!(
            result.wav.wav_data.len(),
            crate::wav::HEADER_LEN + 2 * result.output.samples.len()
        );
    }

    #[test]
    fn test_render_empty_sequence() {
        let result = render(&TimingSequence::new(), &AudioParams::default());
        assert_eq!(result.wav.num_samples, 0);
        assert_eq!(result.wav.wav_data.len(), crate::wav::HEADER_LEN);
    }
}

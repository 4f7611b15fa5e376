//! End-to-end evaluation flow against the real pitch tracker.
//!
//! Uses synthesized tones rather than recorded speech: the McLeod detector
//! locks onto a clean sine, which keeps the acoustic side deterministic
//! enough to assert exact rubric outcomes.

#![cfg(feature = "mcleod")]

use std::f32::consts::TAU;

use voiscore_core::{
    EvalConfig, Evaluator, GenderLabel, McLeodTracker, SampleBuffer, StubTranscriber,
    TranscriberHandle,
};

const SAMPLE_RATE: u32 = 16_000;

fn sine_buffer(frequency: f32, amplitude: f32, secs: f32) -> SampleBuffer {
    let len = (SAMPLE_RATE as f32 * secs) as usize;
    let samples: Vec<f32> = (0..len)
        .map(|i| amplitude * (TAU * frequency * i as f32 / SAMPLE_RATE as f32).sin())
        .collect();
    SampleBuffer::new(samples, SAMPLE_RATE).unwrap()
}

fn evaluator_with(text: &str, config: EvalConfig) -> Evaluator {
    Evaluator::new(
        config,
        McLeodTracker::new(),
        TranscriberHandle::new(StubTranscriber::new(text)),
    )
}

#[test]
fn steady_tone_with_clean_transcript_hits_the_expected_bands() {
    let text = "the quick brown fox";
    let evaluator = evaluator_with(text, EvalConfig::default());
    evaluator.warm_up().unwrap();

    // A steady 200 Hz tone: female pitch band, no modulation to speak of,
    // and a peak-normalized sine sits near -3 dB, above the volume band.
    let evaluation = evaluator
        .evaluate(sine_buffer(200.0, 0.5, 2.0), Some(text))
        .unwrap();

    assert_eq!(evaluation.gender, GenderLabel::Female);
    assert!(
        (evaluation.acoustic.pitch_mean_hz - 200.0).abs() < 20.0,
        "pitch mean {} far from the 200 Hz tone",
        evaluation.acoustic.pitch_mean_hz
    );

    let breakdown = &evaluation.score.breakdown;
    assert_eq!(breakdown.pitch, 25.0);
    assert_eq!(breakdown.modulation, 0.0);
    assert_eq!(breakdown.volume, 0.0);
    // Four words over two seconds is 120 WPM.
    assert_eq!(breakdown.speech_rate, 20.0);
    assert_eq!(breakdown.clarity, 20.0);
    assert_eq!(evaluation.score.accuracy_pct, 65.0);
    assert_eq!(evaluation.transcript, text);
}

#[test]
fn mismatched_reference_drops_the_clarity_credit() {
    let evaluator = evaluator_with("the quick brown fox", EvalConfig::default());

    let evaluation = evaluator
        .evaluate(
            sine_buffer(200.0, 0.5, 2.0),
            Some("colorless green ideas sleep furiously"),
        )
        .unwrap();

    // Nothing in the hypothesis survives against that reference.
    assert_eq!(evaluation.linguistic.clarity_error_pct, 100.0);
    assert_eq!(evaluation.score.breakdown.clarity, 0.0);
    assert_eq!(evaluation.score.accuracy_pct, 45.0);
}

#[test]
fn silence_without_a_reference_keeps_only_the_clarity_credit() {
    let evaluator = evaluator_with("", EvalConfig::default());

    let evaluation = evaluator.evaluate(sine_buffer(200.0, 0.0, 1.0), None).unwrap();

    // No voiced frames, -120 dB loudness, 0 WPM: every acoustic criterion
    // misses its band. An empty transcript with no reference is a perfect
    // self-match, so clarity alone is awarded.
    assert_eq!(evaluation.gender, GenderLabel::Male);
    assert_eq!(evaluation.acoustic.pitch_mean_hz, 0.0);
    assert_eq!(evaluation.acoustic.pitch_std_hz, 0.0);
    assert_eq!(evaluation.linguistic.speech_rate_wpm, 0.0);
    assert_eq!(evaluation.score.accuracy_pct, 20.0);
}

#[test]
fn requested_contours_carry_the_normalized_energy() {
    let config = EvalConfig {
        include_contours: true,
    };
    let evaluator = evaluator_with("the quick brown fox", config);

    let evaluation = evaluator
        .evaluate(sine_buffer(200.0, 0.5, 2.0), None)
        .unwrap();

    let contours = evaluation.contours.expect("contours were requested");
    assert!(!contours.pitch_hz.is_empty());
    // The first full window of a peak-normalized sine has RMS 1/sqrt(2).
    assert!(
        (contours.rms[0] - 0.7071).abs() < 0.01,
        "unexpected leading RMS {}",
        contours.rms[0]
    );
}

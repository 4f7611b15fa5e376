//! Plain-text report rendering.
//!
//! Purely presentational: everything here formats values that were already
//! computed, and rendering cannot fail.

pub mod contours;

pub use contours::Contours;

use std::fmt::Write;

use crate::engine::Evaluation;

/// Render one evaluation as the fixed-field summary printed after scoring.
pub fn render_text(file_label: &str, evaluation: &Evaluation) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "File: {file_label}");
    let _ = writeln!(out, "Detected gender: {}", evaluation.gender);
    let _ = writeln!(out, "Pitch avg (Hz): {:.2}", evaluation.acoustic.pitch_mean_hz);
    let _ = writeln!(out, "Pitch std (Hz): {:.2}", evaluation.acoustic.pitch_std_hz);
    let _ = writeln!(out, "Volume (dB): {:.2}", evaluation.acoustic.loudness_db);
    let _ = writeln!(
        out,
        "Speech rate (WPM): {:.2}",
        evaluation.linguistic.speech_rate_wpm
    );
    let _ = writeln!(out, "WER (%): {:.2}", evaluation.linguistic.clarity_error_pct);
    let _ = writeln!(out, "Estimated accuracy: {}%", evaluation.score.accuracy_pct);
    let _ = writeln!(out, "Transcript: {}", evaluation.transcript);
    out
}

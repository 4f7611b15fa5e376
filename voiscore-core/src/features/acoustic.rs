//! Acoustic features: loudness, pitch statistics, duration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, VoiscoreError};
use crate::pitch::PitchTrack;
use crate::signal::SampleBuffer;

/// Offset keeping the loudness logarithm finite for digital silence.
const LOUDNESS_EPSILON: f64 = 1e-6;

/// Scalar acoustic features of one recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcousticFeatures {
    /// Mean F0 over voiced frames in Hz; 0 when nothing was voiced.
    pub pitch_mean_hz: f64,
    /// Population standard deviation of voiced F0 in Hz; 0 when nothing
    /// was voiced.
    pub pitch_std_hz: f64,
    /// Full-clip RMS loudness in dB.
    pub loudness_db: f64,
    /// Recording length in seconds.
    pub duration_secs: f64,
}

/// Extract acoustic features from a normalized buffer and its pitch track.
///
/// # Errors
/// `VoiscoreError::NonFiniteFeature` if any computed value is NaN or
/// infinite, which can only happen when the input samples themselves are.
pub fn extract_acoustic(buffer: &SampleBuffer, track: &PitchTrack) -> Result<AcousticFeatures> {
    let (pitch_mean_hz, pitch_std_hz) = pitch_stats(track);

    let features = AcousticFeatures {
        pitch_mean_hz,
        pitch_std_hz,
        loudness_db: loudness_db(buffer.samples()),
        duration_secs: buffer.duration_secs(),
    };

    ensure_finite("pitch mean", features.pitch_mean_hz)?;
    ensure_finite("pitch std", features.pitch_std_hz)?;
    ensure_finite("loudness", features.loudness_db)?;
    ensure_finite("duration", features.duration_secs)?;
    Ok(features)
}

/// Mean and population standard deviation over the voiced frames.
///
/// The voiced frames are the entire population of interest, not a sample
/// of one, so the variance divides by N rather than N-1.
fn pitch_stats(track: &PitchTrack) -> (f64, f64) {
    let voiced: Vec<f64> = track.voiced().map(f64::from).collect();
    if voiced.is_empty() {
        warn!("pitch track has no voiced frames; pitch statistics default to 0");
        return (0.0, 0.0);
    }

    let mean = voiced.iter().sum::<f64>() / voiced.len() as f64;
    let variance = voiced.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / voiced.len() as f64;
    (mean, variance.sqrt())
}

/// Full-clip RMS level mapped to dB: `20 * log10(rms + 1e-6)`.
///
/// The epsilon floors the result at -120 dB for digital silence instead
/// of negative infinity.
pub fn loudness_db(samples: &[f32]) -> f64 {
    20.0 * (compute_rms(samples) + LOUDNESS_EPSILON).log10()
}

/// Root-mean-square of a sample slice.
pub fn compute_rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|s| f64::from(*s) * f64::from(*s)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(VoiscoreError::NonFiniteFeature { name, value })
    }
}

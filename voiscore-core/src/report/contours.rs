//! Per-frame signal contours for downstream visualization.

use serde::{Deserialize, Serialize};

use crate::features::acoustic::compute_rms;
use crate::pitch::PitchTrack;
use crate::signal::SampleBuffer;

/// Window length of the RMS energy curve, in samples.
pub const RMS_FRAME: usize = 2048;
/// Hop between consecutive RMS windows, in samples.
pub const RMS_HOP: usize = 512;

/// Energy and pitch curves of one recording.
///
/// Reporting data only. The scorer never reads these; loudness is scored
/// from the full-clip RMS, not from this windowed curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contours {
    /// Windowed RMS energy, one value per hop.
    pub rms: Vec<f32>,
    /// Voiced pitch contour in Hz, unvoiced frames dropped.
    pub pitch_hz: Vec<f32>,
}

impl Contours {
    pub fn compute(buffer: &SampleBuffer, track: &PitchTrack) -> Self {
        Contours {
            rms: rms_curve(buffer.samples()),
            pitch_hz: track.voiced().collect(),
        }
    }
}

/// Overlapping RMS windows over the whole clip, trailing partial window
/// included so short recordings still produce a curve.
fn rms_curve(samples: &[f32]) -> Vec<f32> {
    let mut curve = Vec::new();
    let mut start = 0;
    while start < samples.len() {
        let end = (start + RMS_FRAME).min(samples.len());
        curve.push(compute_rms(&samples[start..end]) as f32);
        start += RMS_HOP;
    }
    curve
}

//! Peak normalization.
//!
//! ## Algorithm
//!
//! 1. Find the peak absolute amplitude of the buffer.
//! 2. Rescale every sample by `1 / peak` so the peak lands on 1.0.
//! 3. Leave silence untouched: a zero peak has nothing to scale by.
//!
//! Applying this twice is a no-op, so callers do not need to track
//! whether a buffer has already been normalized.

use super::SampleBuffer;

/// Rescale samples in place so the peak absolute amplitude is 1.0.
///
/// Buffers whose peak is below the smallest normal f32 are left
/// unchanged; scaling by their reciprocal would overflow to infinity
/// and poison every downstream feature.
pub fn normalize_peak(buffer: &mut SampleBuffer) {
    let peak = buffer
        .samples
        .iter()
        .fold(0f32, |acc, sample| acc.max(sample.abs()));

    if peak < f32::MIN_POSITIVE {
        return;
    }

    let inv = 1.0 / peak;
    for sample in buffer.samples.iter_mut() {
        *sample *= inv;
    }
}

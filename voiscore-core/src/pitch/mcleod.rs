//! McLeod (MPM) pitch tracker over fixed-size analysis windows.
//!
//! ## Algorithm
//!
//! 1. Slide a 1024-sample window over the buffer with a 512-sample hop.
//! 2. Run the McLeod detector on each window.
//! 3. Keep estimates inside the human vocal range (50-500 Hz); every
//!    other window becomes an unvoiced `0.0` frame.

use pitch_detection::detector::mcleod::McLeodDetector;
use pitch_detection::detector::PitchDetector;
use tracing::debug;

use super::{PitchTrack, PitchTracker};
use crate::error::Result;
use crate::signal::SampleBuffer;

/// Analysis window in samples (~64 ms at 16 kHz).
const FRAME_SIZE: usize = 1024;

/// Hop between windows (50 % overlap).
const HOP_SIZE: usize = 512;

/// Lower bound of the accepted vocal range in Hz.
const MIN_PITCH: f32 = 50.0;

/// Upper bound of the accepted vocal range in Hz.
const MAX_PITCH: f32 = 500.0;

/// Power threshold passed to the detector.
const POWER_THRESHOLD: f32 = 0.8;

/// Clarity threshold passed to the detector.
const CLARITY_THRESHOLD: f32 = 0.5;

/// Default pitch tracker backed by `pitch_detection`'s McLeod detector.
pub struct McLeodTracker {
    detector: McLeodDetector<f32>,
}

impl McLeodTracker {
    pub fn new() -> Self {
        Self {
            detector: McLeodDetector::new(FRAME_SIZE, FRAME_SIZE / 2),
        }
    }
}

impl Default for McLeodTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchTracker for McLeodTracker {
    fn track(&mut self, buffer: &SampleBuffer) -> Result<PitchTrack> {
        let samples = buffer.samples();
        let sample_rate = buffer.sample_rate() as usize;

        if samples.len() < FRAME_SIZE {
            debug!(
                samples = samples.len(),
                "buffer shorter than one analysis window"
            );
            return Ok(PitchTrack::empty());
        }

        let mut frames = Vec::with_capacity(samples.len() / HOP_SIZE + 1);
        let mut start = 0;
        while start + FRAME_SIZE <= samples.len() {
            let window = &samples[start..start + FRAME_SIZE];
            let estimate = self
                .detector
                .get_pitch(window, sample_rate, POWER_THRESHOLD, CLARITY_THRESHOLD)
                .map(|pitch| pitch.frequency)
                .filter(|frequency| (MIN_PITCH..=MAX_PITCH).contains(frequency))
                .unwrap_or(0.0);
            frames.push(estimate);
            start += HOP_SIZE;
        }

        debug!(
            frames = frames.len(),
            voiced = frames.iter().filter(|&&f| f > 0.0).count(),
            "pitch track computed"
        );
        PitchTrack::from_frames(frames)
    }
}

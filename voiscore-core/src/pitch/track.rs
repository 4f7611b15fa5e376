//! Per-frame fundamental-frequency track.

use crate::error::{Result, VoiscoreError};

/// Frame-by-frame F0 estimates in Hz, where `0.0` marks an unvoiced frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchTrack {
    frames: Vec<f32>,
}

impl PitchTrack {
    /// Build a track from raw per-frame estimates.
    ///
    /// # Errors
    /// `VoiscoreError::MalformedPitchTrack` if any frame is negative or
    /// non-finite. Trackers signal "unvoiced" with `0.0`, never with a
    /// sentinel below zero.
    pub fn from_frames(frames: Vec<f32>) -> Result<Self> {
        for (index, &value) in frames.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(VoiscoreError::MalformedPitchTrack { index, value });
            }
        }
        Ok(Self { frames })
    }

    /// A track with no frames at all (buffer shorter than one window).
    pub fn empty() -> Self {
        Self { frames: Vec::new() }
    }

    /// All per-frame estimates, unvoiced zeros included.
    pub fn frames(&self) -> &[f32] {
        &self.frames
    }

    /// Iterator over voiced frames (estimates strictly above 0 Hz).
    pub fn voiced(&self) -> impl Iterator<Item = f32> + '_ {
        self.frames.iter().copied().filter(|&f| f > 0.0)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

//! Typed sample buffer passed from the decoder to the feature extractors.

use crate::error::{Result, VoiscoreError};

/// A complete mono recording at a known sample rate.
///
/// Allocated once per evaluation; samples sit in [-1.0, 1.0] after
/// peak normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    pub(crate) samples: Vec<f32>,
    pub(crate) sample_rate: u32,
}

impl SampleBuffer {
    /// Build a buffer, rejecting inputs no extractor can work with.
    ///
    /// # Errors
    /// - `VoiscoreError::EmptyBuffer` when `samples` is empty.
    /// - `VoiscoreError::InvalidSampleRate` when `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(VoiscoreError::EmptyBuffer);
        }
        if sample_rate == 0 {
            return Err(VoiscoreError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Mono f32 samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz (e.g. 16000, 44100, 48000).
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the duration of this recording in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

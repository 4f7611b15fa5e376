//! Pitch tracking abstraction.
//!
//! The `PitchTracker` trait is the primary extensibility point: swap in
//! `McLeodTracker` (default) or any external F0 estimator that can
//! produce a per-frame Hz sequence, without touching the evaluator.

pub mod track;

#[cfg(feature = "mcleod")]
pub mod mcleod;

#[cfg(feature = "mcleod")]
pub use mcleod::McLeodTracker;

pub use track::PitchTrack;

use crate::error::Result;
use crate::signal::SampleBuffer;

/// Trait for all pitch tracker implementations.
///
/// Implementors may be stateful (detector scratch buffers are reused
/// across recordings), hence `&mut self`.
pub trait PitchTracker: 'static {
    /// Estimate one F0 value per analysis frame over the whole buffer.
    ///
    /// Frames where no fundamental was found are reported as `0.0`.
    /// A buffer shorter than one analysis window yields an empty track.
    ///
    /// # Errors
    /// Returns `VoiscoreError::PitchTracker` when the backend fails
    /// outright, as opposed to merely finding nothing voiced.
    fn track(&mut self, buffer: &SampleBuffer) -> Result<PitchTrack>;
}

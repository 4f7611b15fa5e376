//! # voiscore-core
//!
//! Reusable voice-quality evaluation SDK.
//!
//! ## Architecture
//!
//! ```text
//! WAV samples → SampleBuffer → normalize_peak
//!                                   │
//!                    ┌──────────────┴──────────────┐
//!              PitchTracker::track        Transcriber::transcribe
//!                    │                             │
//!              AcousticFeatures           LinguisticFeatures
//!                    └──────────────┬──────────────┘
//!                            GenderLabel + calculate_accuracy
//!                                   │
//!                               Evaluation
//! ```
//!
//! Feature extraction and scoring are deterministic; every evaluation of the
//! same samples and transcript yields the same `Evaluation`.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod features;
pub mod pitch;
pub mod report;
pub mod scoring;
pub mod signal;
pub mod stt;

// Convenience re-exports for downstream crates
pub use engine::{EvalConfig, Evaluation, Evaluator};
pub use error::VoiscoreError;
pub use features::{AcousticFeatures, LinguisticFeatures};
pub use pitch::{PitchTrack, PitchTracker};
pub use report::{render_text, Contours};
pub use scoring::{calculate_accuracy, GenderLabel, ScoreBreakdown, ScoreResult};
pub use signal::SampleBuffer;
pub use stt::{SidecarTranscriber, StubTranscriber, Transcriber, TranscriberHandle};

#[cfg(feature = "mcleod")]
pub use pitch::McLeodTracker;

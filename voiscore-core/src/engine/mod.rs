//! `Evaluator`: runs one recording through the scoring pipeline.
//!
//! ## Lifecycle
//!
//! ```text
//! Evaluator::new()
//!     └─► warm_up()              → transcriber loaded, ready to decode
//!         └─► evaluate(buffer)   → normalize → track pitch → transcribe
//!                                  → features → gender → score → Evaluation
//! ```
//!
//! ## Threading
//!
//! `Evaluator` is `Send + Sync`: the pitch tracker and the transcriber both
//! need `&mut self`, so each sits behind its own lock. Wrap in `Arc` to score
//! recordings from several threads; evaluations then serialize on those
//! locks, which is fine for a batch tool.

pub mod record;

pub use record::Evaluation;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::{
    error::Result,
    features::{extract_acoustic, extract_linguistic},
    pitch::PitchTracker,
    report::Contours,
    scoring::{calculate_accuracy, GenderLabel},
    signal::{normalize_peak, SampleBuffer},
    stt::TranscriberHandle,
};

/// Configuration for `Evaluator`.
#[derive(Debug, Clone, Default)]
pub struct EvalConfig {
    /// Also compute the reporting contours (RMS curve + pitch contour).
    /// They are pure reporting data and cost one extra pass over the
    /// samples, so they default to off.
    pub include_contours: bool,
}

/// The top-level scoring handle.
pub struct Evaluator {
    config: EvalConfig,
    tracker: Mutex<Box<dyn PitchTracker>>,
    transcriber: TranscriberHandle,
}

impl Evaluator {
    /// Create a new evaluator. Does not touch the transcriber; call
    /// `warm_up()` before the first `evaluate()`.
    pub fn new(
        config: EvalConfig,
        tracker: impl PitchTracker,
        transcriber: TranscriberHandle,
    ) -> Self {
        let tracker: Box<dyn PitchTracker> = Box::new(tracker);
        Self {
            config,
            tracker: Mutex::new(tracker),
            transcriber,
        }
    }

    /// Warm up the transcriber (load weights, run dummy inference).
    ///
    /// Call once at startup, before the first evaluation.
    pub fn warm_up(&self) -> Result<()> {
        info!("warming up transcriber");
        self.transcriber.0.lock().warm_up()?;
        info!("transcriber ready");
        Ok(())
    }

    /// Score one recording.
    ///
    /// `reference` is the text the speaker was supposed to read; without it
    /// the clarity criterion falls back to a 0% error rate. Degenerate
    /// recordings (silence, no voiced frames, empty transcript) evaluate to
    /// well-defined zero features rather than failing.
    ///
    /// # Errors
    /// Pitch-tracking, transcription, and feature-extraction failures abort
    /// the run before anything is scored.
    pub fn evaluate(
        &self,
        mut buffer: SampleBuffer,
        reference: Option<&str>,
    ) -> Result<Evaluation> {
        debug!(
            samples = buffer.samples().len(),
            sample_rate = buffer.sample_rate(),
            "evaluating recording"
        );

        normalize_peak(&mut buffer);
        let track = self.tracker.lock().track(&buffer)?;
        let transcript = self.transcriber.0.lock().transcribe(&buffer)?;

        let acoustic = extract_acoustic(&buffer, &track)?;
        let linguistic = extract_linguistic(&transcript, reference, acoustic.duration_secs);
        let gender = GenderLabel::from_pitch_mean(acoustic.pitch_mean_hz);
        let score = calculate_accuracy(gender, &acoustic, &linguistic);

        let contours = self
            .config
            .include_contours
            .then(|| Contours::compute(&buffer, &track));

        info!(
            %gender,
            accuracy_pct = score.accuracy_pct,
            "evaluation complete"
        );

        Ok(Evaluation {
            acoustic,
            linguistic,
            gender,
            score,
            transcript,
            contours,
        })
    }
}

//! Transcription abstraction.
//!
//! The `Transcriber` trait decouples the evaluator from any specific
//! speech-to-text backend (sidecar text files, a canned stub, a neural
//! model behind an adapter, etc.).
//!
//! `&mut self` on `transcribe` intentionally expresses that backends are
//! stateful. All mutation is therefore serialised through
//! `TranscriberHandle`'s `parking_lot::Mutex`.

pub mod sidecar;
pub mod stub;

pub use sidecar::SidecarTranscriber;
pub use stub::StubTranscriber;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::signal::SampleBuffer;

/// Contract for speech-to-text backends.
pub trait Transcriber: Send + 'static {
    /// One-time warm-up: load weights, open files, run a dummy pass.
    /// Called once before the first evaluation.
    ///
    /// # Errors
    /// Returns an error if the backend cannot become ready.
    fn warm_up(&mut self) -> Result<()>;

    /// Produce a transcript for a mono recording.
    ///
    /// The result may be empty when the backend heard nothing; the
    /// extractors treat an empty transcript as a degenerate input, not
    /// an error.
    fn transcribe(&mut self, buffer: &SampleBuffer) -> Result<String>;
}

/// Thread-safe reference-counted handle to any `Transcriber` implementor.
///
/// Uses `parking_lot::Mutex` for non-poisoning behaviour on panic, so one
/// failed evaluation cannot wedge a shared backend.
#[derive(Clone)]
pub struct TranscriberHandle(pub Arc<Mutex<dyn Transcriber>>);

impl TranscriberHandle {
    /// Wrap any `Transcriber` in a `TranscriberHandle`.
    pub fn new<T: Transcriber>(transcriber: T) -> Self {
        Self(Arc::new(Mutex::new(transcriber)))
    }
}

impl std::fmt::Debug for TranscriberHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriberHandle").finish_non_exhaustive()
    }
}

//! `StubTranscriber`: canned-text backend for tests and wiring checks.

use tracing::debug;

use crate::error::Result;
use crate::signal::SampleBuffer;
use crate::stt::Transcriber;

/// Returns a fixed transcript regardless of the audio.
///
/// With the default empty text it exercises the degenerate
/// empty-transcript path end to end.
pub struct StubTranscriber {
    text: String,
}

impl StubTranscriber {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for StubTranscriber {
    fn default() -> Self {
        Self::new("")
    }
}

impl Transcriber for StubTranscriber {
    fn warm_up(&mut self) -> Result<()> {
        debug!("StubTranscriber::warm_up (no-op)");
        Ok(())
    }

    fn transcribe(&mut self, buffer: &SampleBuffer) -> Result<String> {
        debug!(
            samples = buffer.samples().len(),
            sample_rate = buffer.sample_rate(),
            "stub transcription"
        );
        Ok(self.text.clone())
    }
}

//! `SidecarTranscriber`: reads the transcript from a text file next to
//! the recording (`speech.wav` reads `speech.txt`).
//!
//! Stands in for a live speech-to-text model in batch setups where
//! recordings ship with prepared transcripts.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::warn;

use crate::error::Result;
use crate::signal::SampleBuffer;
use crate::stt::Transcriber;

pub struct SidecarTranscriber {
    path: PathBuf,
}

impl SidecarTranscriber {
    /// Transcriber for the sidecar of `recording`: same path with the
    /// extension replaced by `txt`.
    pub fn for_recording(recording: impl Into<PathBuf>) -> Self {
        Self {
            path: recording.into().with_extension("txt"),
        }
    }
}

impl Transcriber for SidecarTranscriber {
    fn warm_up(&mut self) -> Result<()> {
        Ok(())
    }

    fn transcribe(&mut self, _buffer: &SampleBuffer) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    path = %self.path.display(),
                    "no sidecar transcript; treating as empty"
                );
                Ok(String::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

use thiserror::Error;

/// All errors produced by voiscore-core.
#[derive(Debug, Error)]
pub enum VoiscoreError {
    #[error("sample buffer is empty")]
    EmptyBuffer,

    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("non-finite {name}: {value}")]
    NonFiniteFeature { name: &'static str, value: f64 },

    #[error("pitch track frame {index} is not a frequency: {value}")]
    MalformedPitchTrack { index: usize, value: f32 },

    #[error("pitch tracker error: {0}")]
    PitchTracker(String),

    #[error("transcription error: {0}")]
    Transcription(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VoiscoreError>;

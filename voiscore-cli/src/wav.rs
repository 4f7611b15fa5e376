//! WAV decoding to mono f32.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Decode a WAV file to mono f32 samples in [-1, 1].
///
/// Integer formats are scaled by their nominal full-scale value and
/// multi-channel files are downmixed by averaging the channels.
pub fn read_wav_mono_f32(path: &Path) -> Result<(Vec<f32>, u32)> {
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<hound::Result<_>>()
            .context("decoding float samples")?,
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|sample| sample.map(|v| v as f32 / full_scale))
                .collect::<hound::Result<_>>()
                .context("decoding integer samples")?
        }
    };

    let channels = spec.channels as usize;
    let mono = if channels <= 1 {
        interleaved
    } else {
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    debug!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels,
        samples = mono.len(),
        "decoded recording"
    );
    Ok((mono, spec.sample_rate))
}

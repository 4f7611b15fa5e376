//! Voiscore command-line driver.
//!
//! Scores one recording end to end: decode the WAV, run the evaluator,
//! print the report, and optionally persist a JSON run record. With no
//! recording argument it picks the newest `.wav` under the recordings
//! directory, which fits the "record a take, then score it" workflow.

mod discover;
mod run_record;
mod wav;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use voiscore_core::{
    render_text, EvalConfig, Evaluator, McLeodTracker, SampleBuffer, SidecarTranscriber,
    TranscriberHandle,
};

#[derive(Debug, Parser)]
#[command(name = "voiscore", version, about = "Score a spoken recording for voice quality")]
struct Args {
    /// Recording to score. Defaults to the newest .wav in the recordings
    /// directory.
    recording: Option<PathBuf>,

    /// Directory searched when no recording is given.
    #[arg(long, default_value = "media/recordings")]
    recordings_dir: PathBuf,

    /// Text file holding the passage the speaker was supposed to read.
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Also compute RMS and pitch contours for the JSON record.
    #[arg(long)]
    contours: bool,

    /// Write the full evaluation as pretty JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log at debug level instead of info.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let recording = match args.recording.clone() {
        Some(path) => path,
        None => discover::newest_recording(&args.recordings_dir)?.with_context(|| {
            format!(
                "no .wav recordings under {}",
                args.recordings_dir.display()
            )
        })?,
    };
    info!(recording = %recording.display(), "scoring recording");

    let (samples, sample_rate) = wav::read_wav_mono_f32(&recording)?;
    let buffer = SampleBuffer::new(samples, sample_rate)?;

    let reference = args
        .reference
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("reading reference {}", path.display()))
        })
        .transpose()?;
    if reference.is_none() {
        warn!("no --reference given; clarity is scored against the transcript itself");
    }

    let config = EvalConfig {
        include_contours: args.contours,
    };
    let evaluator = Evaluator::new(
        config,
        McLeodTracker::new(),
        TranscriberHandle::new(SidecarTranscriber::for_recording(&recording)),
    );
    evaluator.warm_up()?;

    let evaluation = evaluator.evaluate(buffer, reference.as_deref())?;

    let label = recording
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| recording.display().to_string());
    print!("{}", render_text(&label, &evaluation));

    if let Some(path) = args.json {
        run_record::write(&path, &recording, &evaluation)?;
        info!(path = %path.display(), "run record written");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "voiscore=debug,voiscore_core=debug"
    } else {
        "voiscore=info,voiscore_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.parse().unwrap()),
        )
        .init();
}

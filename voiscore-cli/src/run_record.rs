//! JSON run record persisted after a scoring run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use voiscore_core::Evaluation;

/// One scored run, as written by `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunRecord<'a> {
    recording: PathBuf,
    scored_at: DateTime<Utc>,
    evaluation: &'a Evaluation,
}

/// Write the record as pretty JSON, creating parent directories as needed.
pub fn write(path: &Path, recording: &Path, evaluation: &Evaluation) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let record = RunRecord {
        recording: recording.to_path_buf(),
        scored_at: Utc::now(),
        evaluation,
    };
    let json = serde_json::to_string_pretty(&record).context("serializing run record")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voiscore_core::{
        calculate_accuracy, AcousticFeatures, GenderLabel, LinguisticFeatures,
    };

    fn sample_evaluation() -> Evaluation {
        let acoustic = AcousticFeatures {
            pitch_mean_hz: 120.0,
            pitch_std_hz: 30.0,
            loudness_db: -20.0,
            duration_secs: 10.0,
        };
        let linguistic = LinguisticFeatures {
            speech_rate_wpm: 120.0,
            clarity_error_pct: 0.0,
        };
        let gender = GenderLabel::from_pitch_mean(acoustic.pitch_mean_hz);
        let score = calculate_accuracy(gender, &acoustic, &linguistic);
        Evaluation {
            acoustic,
            linguistic,
            gender,
            score,
            transcript: "twenty words per take".to_string(),
            contours: None,
        }
    }

    #[test]
    fn writes_pretty_json_with_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("latest.json");

        write(&path, Path::new("media/recordings/take.wav"), &sample_evaluation()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["recording"],
            serde_json::json!("media/recordings/take.wav")
        );
        assert!(value["scoredAt"].is_string());
        assert_eq!(value["evaluation"]["score"]["accuracyPct"], 100.0);
        assert_eq!(value["evaluation"]["gender"], "male");
    }
}

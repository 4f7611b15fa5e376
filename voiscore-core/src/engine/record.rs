//! The combined record produced by one evaluation run.

use serde::{Deserialize, Serialize};

use crate::features::{AcousticFeatures, LinguisticFeatures};
use crate::report::Contours;
use crate::scoring::{GenderLabel, ScoreResult};

/// Everything scoring one recording produced.
///
/// Serializes with camelCase field names for downstream consumers; the
/// contours are omitted entirely when they were not computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub acoustic: AcousticFeatures,
    pub linguistic: LinguisticFeatures,
    pub gender: GenderLabel,
    pub score: ScoreResult,
    /// Hypothesis text the linguistic features were computed from.
    pub transcript: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contours: Option<Contours>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_accuracy;

    fn sample_evaluation() -> Evaluation {
        let acoustic = AcousticFeatures {
            pitch_mean_hz: 210.0,
            pitch_std_hz: 35.0,
            loudness_db: -14.5,
            duration_secs: 8.0,
        };
        let linguistic = LinguisticFeatures {
            speech_rate_wpm: 140.0,
            clarity_error_pct: 12.5,
        };
        let gender = GenderLabel::from_pitch_mean(acoustic.pitch_mean_hz);
        let score = calculate_accuracy(gender, &acoustic, &linguistic);
        Evaluation {
            acoustic,
            linguistic,
            gender,
            score,
            transcript: "she sells sea shells".to_string(),
            contours: None,
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&sample_evaluation()).unwrap();
        assert!(json.contains("\"pitchMeanHz\":210.0"));
        assert!(json.contains("\"speechRateWpm\":140.0"));
        assert!(json.contains("\"clarityErrorPct\":12.5"));
        assert!(json.contains("\"accuracyPct\":100.0"));
        assert!(json.contains("\"gender\":\"female\""));
    }

    #[test]
    fn absent_contours_are_omitted_not_null() {
        let json = serde_json::to_string(&sample_evaluation()).unwrap();
        assert!(!json.contains("contours"));
    }

    #[test]
    fn present_contours_are_serialized() {
        let mut evaluation = sample_evaluation();
        evaluation.contours = Some(Contours {
            rms: vec![0.2, 0.3],
            pitch_hz: vec![205.0, 215.0],
        });
        let json = serde_json::to_string(&evaluation).unwrap();
        assert!(json.contains("\"contours\""));
        assert!(json.contains("\"pitchHz\":[205.0,215.0]"));
    }

    #[test]
    fn round_trips_through_json() {
        let evaluation = sample_evaluation();
        let json = serde_json::to_string(&evaluation).unwrap();
        let back: Evaluation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, evaluation);
    }
}

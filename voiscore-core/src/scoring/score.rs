//! Weighted accuracy scoring against the rubric.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::features::{AcousticFeatures, LinguisticFeatures};

use super::gender::GenderLabel;
use super::rubric::{
    Band, CLARITY_FULL_MAX_PCT, CLARITY_HALF_MAX_PCT, MODULATION_BAND_HZ, SPEECH_RATE_BAND_WPM,
    TOTAL_WEIGHT, VOLUME_BAND_DB, WEIGHTS,
};

/// Points awarded per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub pitch: f64,
    pub modulation: f64,
    pub volume: f64,
    pub speech_rate: f64,
    pub clarity: f64,
}

impl ScoreBreakdown {
    /// Sum of the awarded points.
    pub fn total(&self) -> f64 {
        self.pitch + self.modulation + self.volume + self.speech_rate + self.clarity
    }
}

/// Overall accuracy plus the per-criterion breakdown behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Awarded share of the total weight as a percentage, rounded to two
    /// decimals.
    pub accuracy_pct: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score one recording's features.
///
/// Every criterion is all-or-nothing against its band except clarity,
/// which keeps a half-credit tier for moderately garbled transcripts.
/// The pitch band depends on the gender label.
pub fn calculate_accuracy(
    gender: GenderLabel,
    acoustic: &AcousticFeatures,
    linguistic: &LinguisticFeatures,
) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        pitch: award(gender.pitch_band(), acoustic.pitch_mean_hz, WEIGHTS.pitch),
        modulation: award(MODULATION_BAND_HZ, acoustic.pitch_std_hz, WEIGHTS.modulation),
        volume: award(VOLUME_BAND_DB, acoustic.loudness_db, WEIGHTS.volume),
        speech_rate: award(
            SPEECH_RATE_BAND_WPM,
            linguistic.speech_rate_wpm,
            WEIGHTS.speech_rate,
        ),
        clarity: clarity_award(linguistic.clarity_error_pct),
    };

    let accuracy_pct = round2(breakdown.total() / TOTAL_WEIGHT * 100.0);
    debug!(%gender, accuracy_pct, "scored recording");

    ScoreResult {
        accuracy_pct,
        breakdown,
    }
}

fn award(band: Band, value: f64, weight: f64) -> f64 {
    if band.contains(value) {
        weight
    } else {
        0.0
    }
}

/// Full weight up to 15% error, half weight up to 30%, nothing beyond.
/// NaN fails both bounds and earns 0.
fn clarity_award(clarity_error_pct: f64) -> f64 {
    if clarity_error_pct <= CLARITY_FULL_MAX_PCT {
        WEIGHTS.clarity
    } else if clarity_error_pct <= CLARITY_HALF_MAX_PCT {
        WEIGHTS.clarity / 2.0
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Gender classification from mean pitch.

use serde::{Deserialize, Serialize};

use super::rubric::{Band, GENDER_PITCH_SPLIT_HZ, PITCH_BAND_FEMALE, PITCH_BAND_MALE};

/// Coarse gender label inferred from mean F0.
///
/// This selects the pitch acceptance band; it is not ground truth about
/// the speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderLabel {
    Male,
    Female,
}

impl GenderLabel {
    /// Classify by the single 165 Hz threshold: strictly below is male,
    /// at or above is female.
    pub fn from_pitch_mean(pitch_mean_hz: f64) -> Self {
        if pitch_mean_hz < GENDER_PITCH_SPLIT_HZ {
            GenderLabel::Male
        } else {
            GenderLabel::Female
        }
    }

    /// Band applied to the pitch criterion for this label.
    pub fn pitch_band(self) -> Band {
        match self {
            GenderLabel::Male => PITCH_BAND_MALE,
            GenderLabel::Female => PITCH_BAND_FEMALE,
        }
    }
}

impl std::fmt::Display for GenderLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenderLabel::Male => f.write_str("Male"),
            GenderLabel::Female => f.write_str("Female"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_strict_at_165() {
        assert_eq!(GenderLabel::from_pitch_mean(164.99), GenderLabel::Male);
        assert_eq!(GenderLabel::from_pitch_mean(165.0), GenderLabel::Female);
    }

    #[test]
    fn unvoiced_zero_mean_classifies_male() {
        // An all-unvoiced track yields mean 0, which falls below the split.
        assert_eq!(GenderLabel::from_pitch_mean(0.0), GenderLabel::Male);
    }

    #[test]
    fn each_label_selects_its_band() {
        assert_eq!(GenderLabel::Male.pitch_band(), PITCH_BAND_MALE);
        assert_eq!(GenderLabel::Female.pitch_band(), PITCH_BAND_FEMALE);
    }
}

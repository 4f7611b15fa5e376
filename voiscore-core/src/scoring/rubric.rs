//! Scoring rubric: acceptance bands, weights, and clarity tiers.
//!
//! These are domain constants, not configuration. Changing any of them
//! changes what the accuracy number means.

/// Inclusive acceptance band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Both endpoints count as inside.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Mean-pitch acceptance band for voices classified male.
pub const PITCH_BAND_MALE: Band = Band::new(85.0, 180.0);

/// Mean-pitch acceptance band for voices classified female.
pub const PITCH_BAND_FEMALE: Band = Band::new(165.0, 255.0);

/// Pitch standard deviation separating monotone delivery from erratic.
pub const MODULATION_BAND_HZ: Band = Band::new(20.0, 80.0);

/// Loudness band in dB for a comfortably audible recording.
pub const VOLUME_BAND_DB: Band = Band::new(-30.0, -10.0);

/// Conversational speech tempo band in words per minute.
pub const SPEECH_RATE_BAND_WPM: Band = Band::new(100.0, 160.0);

/// Mean pitch strictly below this classifies as male, at or above as
/// female.
pub const GENDER_PITCH_SPLIT_HZ: f64 = 165.0;

/// Clarity error at or below this earns the full clarity weight.
pub const CLARITY_FULL_MAX_PCT: f64 = 15.0;

/// Clarity error at or below this (but above the full tier) earns half.
pub const CLARITY_HALF_MAX_PCT: f64 = 30.0;

/// Points awarded per criterion on a pass.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub pitch: f64,
    pub modulation: f64,
    pub volume: f64,
    pub speech_rate: f64,
    pub clarity: f64,
}

impl Weights {
    pub fn total(&self) -> f64 {
        self.pitch + self.modulation + self.volume + self.speech_rate + self.clarity
    }
}

pub const WEIGHTS: Weights = Weights {
    pitch: 25.0,
    modulation: 20.0,
    volume: 15.0,
    speech_rate: 20.0,
    clarity: 20.0,
};

/// Denominator of the final percentage. `WEIGHTS` sum to exactly this.
pub const TOTAL_WEIGHT: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_total_weight() {
        assert_eq!(WEIGHTS.total(), TOTAL_WEIGHT);
    }

    #[test]
    fn band_endpoints_are_inclusive() {
        let band = Band::new(-30.0, -10.0);
        assert!(band.contains(-30.0));
        assert!(band.contains(-10.0));
        assert!(band.contains(-20.0));
        assert!(!band.contains(-30.01));
        assert!(!band.contains(-9.99));
    }

    #[test]
    fn band_rejects_nan() {
        assert!(!MODULATION_BAND_HZ.contains(f64::NAN));
    }

    #[test]
    fn gender_bands_overlap_between_165_and_180() {
        assert!(PITCH_BAND_MALE.contains(170.0));
        assert!(PITCH_BAND_FEMALE.contains(170.0));
    }
}

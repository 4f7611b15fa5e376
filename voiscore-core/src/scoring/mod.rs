//! Rule-based weighted scoring of the extracted features.

pub mod gender;
pub mod rubric;
pub mod score;

pub use gender::GenderLabel;
pub use score::{calculate_accuracy, ScoreBreakdown, ScoreResult};

//! Feature extraction: the deterministic transformation from audio and
//! transcript into the five scored quantities.

pub mod acoustic;
pub mod linguistic;

pub use acoustic::{extract_acoustic, AcousticFeatures};
pub use linguistic::{extract_linguistic, LinguisticFeatures};

//! Sample buffer type and signal-level preprocessing.

pub mod buffer;
pub mod normalize;

pub use buffer::SampleBuffer;
pub use normalize::normalize_peak;

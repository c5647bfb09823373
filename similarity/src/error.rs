//! Feature extraction errors.

use thiserror::Error;

/// Errors raised while turning a waveform into spectral features.
///
/// These never escape the public scoring operations; the calculator maps
/// them to sentinel scores so batch comparisons keep running.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("waveform too short for analysis: {got} samples, need at least {needed}")]
    TooShort { needed: usize, got: usize },

    #[error("feature sequence is empty")]
    EmptyFeatures,

    #[cfg(feature = "resample")]
    #[error("resampling failed: {0}")]
    Resample(#[from] sonosim_audio::resampler::ResampleError),
}

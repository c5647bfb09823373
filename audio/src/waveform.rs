//! The mono waveform value type.

use std::time::Duration;

/// A decoded mono audio signal.
///
/// Samples are 64-bit floats at whatever amplitude scale the decoder
/// produced; integer WAV data keeps its integer magnitudes (no forced
/// normalization to ±1). The signal is immutable once constructed and
/// multi-channel input must already be mixed down to mono.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    sample_rate: u32,
    samples: Vec<f64>,
}

impl Waveform {
    /// Creates a waveform from mono samples at the given rate.
    ///
    /// `sample_rate` must be positive; a zero-length sample buffer is valid.
    pub fn new(sample_rate: u32, samples: Vec<f64>) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be positive");
        Self { sample_rate, samples }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The mono sample sequence.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Wall-clock duration of the signal.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }

    /// Consumes the waveform, returning its sample buffer.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

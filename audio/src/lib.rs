//! Waveform handling for the sonosim similarity engine.
//!
//! This crate provides the pieces upstream of feature extraction:
//!
//! - `waveform`: the immutable mono [`Waveform`] value type
//! - `wav`: WAV container decoding into a `Waveform`
//! - `resampler`: band-limited sample rate conversion (feature `resample`)
//!
//! # Example
//!
//! ```rust
//! use sonosim_audio::Waveform;
//!
//! let samples: Vec<f64> = (0..4410)
//!     .map(|i| (2.0 * std::f64::consts::PI * 440.0 * i as f64 / 44100.0).sin())
//!     .collect();
//! let wave = Waveform::new(44100, samples);
//! assert_eq!(wave.sample_rate(), 44100);
//! assert_eq!(wave.duration().as_millis(), 100);
//! ```

pub mod wav;
pub mod waveform;

#[cfg(feature = "resample")]
pub mod resampler;

pub use wav::DecodeError;
pub use waveform::Waveform;

/// Target rate all waveforms are converted to before spectral comparison,
/// so feature dimensionality and frequency binning line up across inputs
/// of differing native rates.
pub const CANONICAL_SAMPLE_RATE: u32 = 22050;

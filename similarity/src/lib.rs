//! Audio similarity scoring.
//!
//! Given two in-memory [`Waveform`]s, this crate computes three independent
//! similarity/distance scores usable to decide whether two recordings are
//! the same sound event:
//!
//! 1. [`spectral_cosine_similarity`]: cosine similarity of time-averaged
//!    log spectral envelopes, mapped to [0, 1]
//! 2. [`cepstral_dtw_similarity`]: dynamic-time-warping alignment cost of
//!    per-frame cepstral coefficients, mapped to [0, 1]
//! 3. [`raw_segment_distance`]: mean Euclidean distance over index-aligned
//!    raw sample windows, in [0, +inf) with `f64::INFINITY` marking
//!    degenerate input
//!
//! # Backends
//!
//! Feature extraction is polymorphic over two [`Backend`]s. With the
//! `resample` cargo feature (default) the mel backend resamples both inputs
//! to the canonical rate and computes a mel filterbank spectrogram and
//! MFCCs. Without it the engine switches wholesale to a native-rate STFT
//! fallback rather than naively interpolating, since interpolation without
//! anti-aliasing would corrupt the spectral features. Both backends produce
//! identically shaped outputs (64-component envelope, 13-wide frames), so
//! everything downstream is backend-agnostic.
//!
//! # Failure policy
//!
//! The three scoring operations never return errors: any internal failure
//! (degenerate input, transform failure, resampler failure) degrades to a
//! documented sentinel (0.0 for the bounded scores, `f64::INFINITY` for
//! the distance) and is logged at debug level. A batch of comparisons can
//! therefore complete even when individual pairs are pathological. WAV
//! decoding in `sonosim-audio` is the only layer that surfaces hard errors.
//!
//! # Example
//!
//! ```rust
//! use sonosim_similarity::{spectral_cosine_similarity, Waveform};
//!
//! let tone: Vec<f64> = (0..22050)
//!     .map(|i| (2.0 * std::f64::consts::PI * 440.0 * i as f64 / 22050.0).sin())
//!     .collect();
//! let wave = Waveform::new(22050, tone);
//! let score = spectral_cosine_similarity(&wave, &wave);
//! assert!(score > 0.99);
//! ```

pub mod calculator;
pub mod dtw;
pub mod error;
pub mod features;
pub mod segment;

pub use calculator::{
    cepstral_dtw_similarity, raw_segment_distance, spectral_cosine_similarity,
    SimilarityCalculator, Tunables, COSINE_EPS, DTW_COST_SCALE, MAX_DISTANCE, MIN_SEGMENT_STEP,
    TARGET_SEGMENTS,
};
pub use error::FeatureError;
pub use features::{Backend, FeatureExtractor, CEPSTRAL_COEFFS, ENVELOPE_BANDS};
pub use segment::SegmentWindows;
pub use sonosim_audio::{Waveform, CANONICAL_SAMPLE_RATE};

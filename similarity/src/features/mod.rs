//! Feature extraction backends.
//!
//! Two interchangeable backends turn a waveform into the fixed-shape
//! representations the calculator consumes:
//!
//! - [`Backend::Mel`] (feature `resample`): resamples to the canonical
//!   rate, then computes a 64-band mel filterbank spectrogram for the
//!   envelope and 13 MFCCs per frame for the cepstral sequence.
//! - [`Backend::Stft`]: a plain short-time Fourier transform at native
//!   rate; the envelope keeps the first 64 frequency bins of the averaged
//!   log1p magnitude spectrum and the frame sequence the first 13 raw
//!   magnitude bins — a coarse analogue of cepstral coefficients.
//!
//! Both backends emit identical shapes, so downstream comparison code
//! never needs to know which one is active.

pub mod fft;
pub mod mel;
pub mod mfcc;
pub mod stft;

use std::fmt;
use std::sync::OnceLock;

use sonosim_audio::Waveform;

use crate::error::FeatureError;

/// Components in a spectral envelope.
pub const ENVELOPE_BANDS: usize = 64;
/// Coefficients per frame in a cepstral sequence.
pub const CEPSTRAL_COEFFS: usize = 13;

/// Window/FFT size of the mel backend's analysis frames.
#[cfg(feature = "resample")]
const MEL_WINDOW: usize = 2048;
/// Hop between mel analysis frames.
#[cfg(feature = "resample")]
const MEL_HOP: usize = 512;
/// Window/FFT size of the fallback STFT.
const STFT_WINDOW: usize = 1024;
/// Hop between fallback STFT frames.
const STFT_HOP: usize = 512;

/// Which feature pipeline is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Mel filterbank + MFCC at the canonical sample rate.
    #[cfg(feature = "resample")]
    Mel,
    /// Native-rate STFT fallback.
    Stft,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "resample")]
            Self::Mel => write!(f, "mel"),
            Self::Stft => write!(f, "stft"),
        }
    }
}

impl Backend {
    /// Resolves the process-wide backend.
    ///
    /// Capability is decided by the `resample` feature and cached on first
    /// use; it is intentionally not re-evaluated per call.
    pub fn detect() -> Backend {
        static DETECTED: OnceLock<Backend> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            #[cfg(feature = "resample")]
            let backend = Backend::Mel;
            #[cfg(not(feature = "resample"))]
            let backend = Backend::Stft;
            tracing::debug!(%backend, "feature extraction backend resolved");
            backend
        })
    }
}

/// Turns waveforms into spectral envelopes and cepstral frame sequences.
///
/// Stateless apart from the backend choice made at construction.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    backend: Backend,
}

impl FeatureExtractor {
    /// Creates an extractor using the detected process-wide backend.
    pub fn new() -> Self {
        Self { backend: Backend::detect() }
    }

    /// Creates an extractor pinned to a specific backend.
    pub fn with_backend(backend: Backend) -> Self {
        Self { backend }
    }

    /// The active backend.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Computes the 64-component time-averaged log spectral envelope.
    pub fn envelope(&self, wave: &Waveform) -> Result<Vec<f64>, FeatureError> {
        match self.backend {
            #[cfg(feature = "resample")]
            Backend::Mel => mel_envelope(wave),
            Backend::Stft => stft_envelope(wave),
        }
    }

    /// Computes the per-frame sequence of 13 cepstral coefficients.
    pub fn frames(&self, wave: &Waveform) -> Result<Vec<Vec<f64>>, FeatureError> {
        match self.backend {
            #[cfg(feature = "resample")]
            Backend::Mel => mel_frames(wave),
            Backend::Stft => stft_frames(wave),
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "resample")]
fn mel_bank() -> &'static Vec<Vec<f64>> {
    static BANK: OnceLock<Vec<Vec<f64>>> = OnceLock::new();
    BANK.get_or_init(|| {
        mel::filter_bank(
            ENVELOPE_BANDS,
            MEL_WINDOW,
            sonosim_audio::CANONICAL_SAMPLE_RATE as usize,
        )
    })
}

/// Mel filterbank spectrogram `[T][ENVELOPE_BANDS]` at the canonical rate.
#[cfg(feature = "resample")]
fn mel_spectrogram(wave: &Waveform) -> Result<Vec<Vec<f64>>, FeatureError> {
    let wave = sonosim_audio::resampler::resample(wave, sonosim_audio::CANONICAL_SAMPLE_RATE)?;
    let power = stft::power_frames(wave.samples(), MEL_WINDOW, MEL_WINDOW, MEL_HOP)?;
    let bank = mel_bank();

    let mut frames = Vec::with_capacity(power.len());
    for spectrum in &power {
        let energies: Vec<f64> = bank
            .iter()
            .map(|filter| filter.iter().zip(spectrum).map(|(w, p)| w * p).sum())
            .collect();
        frames.push(energies);
    }
    Ok(frames)
}

#[cfg(feature = "resample")]
fn mel_envelope(wave: &Waveform) -> Result<Vec<f64>, FeatureError> {
    let frames = mel_spectrogram(wave)?;
    if frames.is_empty() {
        return Err(FeatureError::EmptyFeatures);
    }

    let mut envelope = vec![0.0f64; ENVELOPE_BANDS];
    for frame in &frames {
        for (acc, &e) in envelope.iter_mut().zip(frame) {
            *acc += e.ln_1p();
        }
    }
    for acc in &mut envelope {
        *acc /= frames.len() as f64;
    }
    Ok(envelope)
}

#[cfg(feature = "resample")]
fn mel_frames(wave: &Waveform) -> Result<Vec<Vec<f64>>, FeatureError> {
    let frames = mel_spectrogram(wave)?;
    if frames.is_empty() {
        return Err(FeatureError::EmptyFeatures);
    }
    Ok(frames
        .iter()
        .map(|energies| mfcc::cepstrum(energies, CEPSTRAL_COEFFS))
        .collect())
}

fn stft_envelope(wave: &Waveform) -> Result<Vec<f64>, FeatureError> {
    let frames = stft::magnitude_frames(wave.samples(), STFT_WINDOW, STFT_WINDOW, STFT_HOP)?;
    if frames.is_empty() {
        return Err(FeatureError::EmptyFeatures);
    }

    let mut envelope = vec![0.0f64; ENVELOPE_BANDS];
    for frame in &frames {
        for (acc, &m) in envelope.iter_mut().zip(frame.iter().take(ENVELOPE_BANDS)) {
            *acc += m.ln_1p();
        }
    }
    for acc in &mut envelope {
        *acc /= frames.len() as f64;
    }
    Ok(envelope)
}

fn stft_frames(wave: &Waveform) -> Result<Vec<Vec<f64>>, FeatureError> {
    let frames = stft::magnitude_frames(wave.samples(), STFT_WINDOW, STFT_WINDOW, STFT_HOP)?;
    if frames.is_empty() {
        return Err(FeatureError::EmptyFeatures);
    }
    Ok(frames
        .iter()
        .map(|frame| frame.iter().take(CEPSTRAL_COEFFS).copied().collect())
        .collect())
}

//! The three similarity operations.

use std::sync::OnceLock;

use sonosim_audio::Waveform;

use crate::dtw;
use crate::error::FeatureError;
use crate::features::{Backend, FeatureExtractor};
use crate::segment::SegmentWindows;

/// Guards the cosine denominator against division by zero.
pub const COSINE_EPS: f64 = 1e-9;

/// Scale factor mapping DTW alignment cost to a bounded similarity.
/// Empirically chosen sensitivity knob, not a derived quantity.
pub const DTW_COST_SCALE: f64 = 50.0;

/// Smallest window the raw distance will use, in samples.
pub const MIN_SEGMENT_STEP: usize = 256;

/// Window count the raw distance aims for on long recordings; the step
/// coarsens proportionally to input length beyond this.
pub const TARGET_SEGMENTS: usize = 2000;

/// Sentinel distance for degenerate raw comparisons.
pub const MAX_DISTANCE: f64 = f64::INFINITY;

/// Tuning knobs for the scoring operations, defaulting to the named
/// constants above.
#[derive(Debug, Clone)]
pub struct Tunables {
    pub cosine_eps: f64,
    pub dtw_cost_scale: f64,
    pub min_segment_step: usize,
    pub target_segments: usize,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            cosine_eps: COSINE_EPS,
            dtw_cost_scale: DTW_COST_SCALE,
            min_segment_step: MIN_SEGMENT_STEP,
            target_segments: TARGET_SEGMENTS,
        }
    }
}

/// Computes similarity scores between waveform pairs.
///
/// All operations are pure and side-effect-free, and none of them
/// propagates errors: internal failures degrade to a sentinel score
/// (0.0 for the bounded similarities, [`MAX_DISTANCE`] for the raw
/// distance) so a batch of comparisons survives pathological pairs.
/// Degraded results are logged at debug level.
#[derive(Debug, Clone, Default)]
pub struct SimilarityCalculator {
    extractor: FeatureExtractor,
    tunables: Tunables,
}

impl SimilarityCalculator {
    /// Creates a calculator on the detected process-wide backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator pinned to a specific backend.
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            extractor: FeatureExtractor::with_backend(backend),
            tunables: Tunables::default(),
        }
    }

    /// Replaces the tuning constants.
    pub fn with_tunables(mut self, tunables: Tunables) -> Self {
        self.tunables = tunables;
        self
    }

    /// The backend this calculator extracts features with.
    pub fn backend(&self) -> Backend {
        self.extractor.backend()
    }

    /// Cosine similarity of the spectral envelopes, mapped to [0, 1].
    /// Returns 0.0 on any internal failure.
    pub fn spectral_cosine(&self, a: &Waveform, b: &Waveform) -> f64 {
        match self.try_spectral_cosine(a, b) {
            Ok(score) => score,
            Err(err) => {
                tracing::debug!(error = %err, "spectral cosine degraded to sentinel");
                0.0
            }
        }
    }

    fn try_spectral_cosine(&self, a: &Waveform, b: &Waveform) -> Result<f64, FeatureError> {
        let e1 = self.extractor.envelope(a)?;
        let e2 = self.extractor.envelope(b)?;

        let dot: f64 = e1.iter().zip(&e2).map(|(x, y)| x * y).sum();
        let norm1 = e1.iter().map(|x| x * x).sum::<f64>().sqrt();
        let norm2 = e2.iter().map(|x| x * x).sum::<f64>().sqrt();
        let cos = dot / (norm1 * norm2 + self.tunables.cosine_eps);
        Ok((cos + 1.0) / 2.0)
    }

    /// DTW similarity of the cepstral frame sequences, mapped to [0, 1].
    /// Returns 0.0 on any internal failure.
    pub fn cepstral_dtw(&self, a: &Waveform, b: &Waveform) -> f64 {
        match self.try_cepstral_dtw(a, b) {
            Ok(score) => score,
            Err(err) => {
                tracing::debug!(error = %err, "cepstral dtw degraded to sentinel");
                0.0
            }
        }
    }

    fn try_cepstral_dtw(&self, a: &Waveform, b: &Waveform) -> Result<f64, FeatureError> {
        let seq1 = self.extractor.frames(a)?;
        let seq2 = self.extractor.frames(b)?;

        let cost = dtw::alignment_cost(&seq1, &seq2).ok_or(FeatureError::EmptyFeatures)?;
        let norm = seq1.len().max(seq2.len()) as f64;
        Ok(1.0 / (1.0 + cost / (norm * self.tunables.dtw_cost_scale)))
    }

    /// Mean Euclidean distance over index-aligned raw sample windows.
    /// Lower is more similar; degenerate input yields [`MAX_DISTANCE`].
    ///
    /// Operates directly on the native-rate samples without feature
    /// extraction; this is deliberately the only unbounded metric, meant
    /// to be combined with the bounded scores by the caller's own
    /// weighting policy.
    pub fn raw_segment_distance(&self, a: &Waveform, b: &Waveform) -> f64 {
        let min_len = a.len().min(b.len());
        if min_len == 0 {
            tracing::debug!("raw segment distance on empty waveform, returning sentinel");
            return MAX_DISTANCE;
        }

        let coarse = if self.tunables.target_segments == 0 {
            0
        } else {
            min_len / self.tunables.target_segments
        };
        let step = self.tunables.min_segment_step.max(coarse);

        let mut total = 0.0;
        let mut count = 0u64;
        for (x, y) in SegmentWindows::new(a.samples(), b.samples(), step) {
            let dist: f64 = x
                .iter()
                .zip(y)
                .map(|(p, q)| (p - q) * (p - q))
                .sum::<f64>()
                .sqrt();
            total += dist;
            count += 1;
        }

        if count == 0 {
            return MAX_DISTANCE;
        }
        total / count as f64
    }
}

fn default_calculator() -> &'static SimilarityCalculator {
    static DEFAULT: OnceLock<SimilarityCalculator> = OnceLock::new();
    DEFAULT.get_or_init(SimilarityCalculator::new)
}

/// Spectral cosine similarity in [0, 1] on the process-wide backend.
pub fn spectral_cosine_similarity(a: &Waveform, b: &Waveform) -> f64 {
    default_calculator().spectral_cosine(a, b)
}

/// Cepstral DTW similarity in [0, 1] on the process-wide backend.
pub fn cepstral_dtw_similarity(a: &Waveform, b: &Waveform) -> f64 {
    default_calculator().cepstral_dtw(a, b)
}

/// Raw segmented distance in [0, +inf) on the process-wide backend.
pub fn raw_segment_distance(a: &Waveform, b: &Waveform) -> f64 {
    default_calculator().raw_segment_distance(a, b)
}

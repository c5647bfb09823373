//! Band-limited sample rate conversion.
//!
//! Wraps rubato's FFT resampler for whole-buffer conversion of a mono
//! [`Waveform`]. The FFT resampler introduces a fixed output delay, which
//! is trimmed so the result lines up with the input signal, and the output
//! length is clamped to `round(len * target / source)`.

use rubato::{FftFixedInOut, Resampler};
use thiserror::Error;

use crate::waveform::Waveform;

/// Frames fed to rubato per processing block.
const CHUNK_SIZE: usize = 1024;

/// Errors raised during sample rate conversion.
#[derive(Debug, Error)]
pub enum ResampleError {
    #[error("resampler construction failed: {0}")]
    Construction(#[from] rubato::ResamplerConstructionError),

    #[error("resampler processing failed: {0}")]
    Process(#[from] rubato::ResampleError),
}

/// Converts a waveform to `target_rate`.
///
/// Same-rate input is returned as a plain copy without running the
/// resampler, and an empty waveform passes through as an empty waveform
/// at the target rate.
pub fn resample(wave: &Waveform, target_rate: u32) -> Result<Waveform, ResampleError> {
    if wave.sample_rate() == target_rate {
        return Ok(wave.clone());
    }
    if wave.is_empty() {
        return Ok(Waveform::new(target_rate, Vec::new()));
    }

    let src_rate = wave.sample_rate() as usize;
    let dst_rate = target_rate as usize;
    let mut resampler = FftFixedInOut::<f64>::new(src_rate, dst_rate, CHUNK_SIZE, 1)?;
    let delay = resampler.output_delay();
    let expected = expected_len(wave.len(), src_rate, dst_rate);

    let samples = wave.samples();
    let mut out: Vec<f64> = Vec::with_capacity(delay + expected);
    let mut pos = 0;
    while pos < samples.len() {
        let needed = resampler.input_frames_next();
        if samples.len() - pos >= needed {
            let block = [&samples[pos..pos + needed]];
            let produced = resampler.process(&block[..], None)?;
            out.extend_from_slice(&produced[0]);
            pos += needed;
        } else {
            let tail = [&samples[pos..]];
            let produced = resampler.process_partial(Some(&tail[..]), None)?;
            out.extend_from_slice(&produced[0]);
            pos = samples.len();
        }
    }

    // Flush internal state until the delay-compensated output is complete.
    while out.len() < delay + expected {
        let produced = resampler.process_partial(None::<&[&[f64]]>, None)?;
        if produced[0].is_empty() {
            break;
        }
        out.extend_from_slice(&produced[0]);
    }

    let start = delay.min(out.len());
    let end = (delay + expected).min(out.len());
    Ok(Waveform::new(target_rate, out[start..end].to_vec()))
}

fn expected_len(len: usize, src_rate: usize, dst_rate: usize) -> usize {
    ((len as u64 * dst_rate as u64 + src_rate as u64 / 2) / src_rate as u64) as usize
}

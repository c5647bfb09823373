//! Short-time spectral framing.
//!
//! Slides a Hann window across the signal, transforms each frame and
//! keeps the non-redundant half of the spectrum.

use crate::error::FeatureError;

use super::fft;
use super::mel;

/// Computes per-frame power spectra.
///
/// Frames of `window_size` samples are taken every `hop` samples,
/// Hann-windowed, zero-padded to `fft_size` and transformed. Returns
/// `[T][fft_size / 2 + 1]` with `T = (len - window_size) / hop + 1`.
///
/// A non-empty signal shorter than one window is zero-padded to a single
/// frame; only an empty signal is an error.
pub fn power_frames(
    samples: &[f64],
    window_size: usize,
    fft_size: usize,
    hop: usize,
) -> Result<Vec<Vec<f64>>, FeatureError> {
    debug_assert!(fft_size >= window_size);
    debug_assert!(hop > 0);
    if samples.is_empty() {
        return Err(FeatureError::TooShort {
            needed: window_size,
            got: 0,
        });
    }

    let padded;
    let samples = if samples.len() < window_size {
        padded = {
            let mut buf = samples.to_vec();
            buf.resize(window_size, 0.0);
            buf
        };
        &padded[..]
    } else {
        samples
    };

    let window = mel::hann_window(window_size);
    let num_frames = (samples.len() - window_size) / hop + 1;
    let half_fft = fft_size / 2 + 1;

    let mut frames = Vec::with_capacity(num_frames);
    let mut re = vec![0.0f64; fft_size];
    let mut im = vec![0.0f64; fft_size];

    for t in 0..num_frames {
        let start = t * hop;
        for i in 0..window_size {
            re[i] = samples[start + i] * window[i];
        }
        re[window_size..].fill(0.0);
        im.fill(0.0);

        fft::fft_in_place(&mut re, &mut im);

        let mut power = vec![0.0f64; half_fft];
        for k in 0..half_fft {
            power[k] = re[k] * re[k] + im[k] * im[k];
        }
        frames.push(power);
    }

    Ok(frames)
}

/// Computes per-frame magnitude spectra; shape as [`power_frames`].
pub fn magnitude_frames(
    samples: &[f64],
    window_size: usize,
    fft_size: usize,
    hop: usize,
) -> Result<Vec<Vec<f64>>, FeatureError> {
    let mut frames = power_frames(samples, window_size, fft_size, hop)?;
    for frame in &mut frames {
        for v in frame.iter_mut() {
            *v = v.sqrt();
        }
    }
    Ok(frames)
}

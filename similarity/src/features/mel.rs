//! Mel-scale utilities, filterbank generation and the analysis window.

use std::f64::consts::PI;

/// Generates a periodic Hann window of the given length.
pub fn hann_window(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / n as f64).cos())
        .collect()
}

/// Converts frequency in Hz to mel scale.
fn hz_to_mel(hz: f64) -> f64 {
    2595.0 * (1.0 + hz / 700.0).log10()
}

/// Converts mel scale frequency back to Hz.
fn mel_to_hz(mel: f64) -> f64 {
    700.0 * (10.0_f64.powf(mel / 2595.0) - 1.0)
}

/// Creates a triangular mel filterbank matrix.
///
/// Returns `[num_mels][half_fft]` where `half_fft = fft_size / 2 + 1`,
/// covering 0 Hz up to the Nyquist frequency.
pub fn filter_bank(num_mels: usize, fft_size: usize, sample_rate: usize) -> Vec<Vec<f64>> {
    let half_fft = fft_size / 2 + 1;
    let low_mel = hz_to_mel(0.0);
    let high_mel = hz_to_mel(sample_rate as f64 / 2.0);

    // num_mels + 2 equally spaced mel points mapped to FFT bins.
    let step = (high_mel - low_mel) / (num_mels + 1) as f64;
    let mut bins: Vec<usize> = (0..num_mels + 2)
        .map(|i| {
            let hz = mel_to_hz(low_mel + i as f64 * step);
            let bin = (hz * fft_size as f64 / sample_rate as f64).round() as usize;
            bin.min(half_fft - 1)
        })
        .collect();

    // Each filter needs at least one bin of width.
    for i in 1..bins.len() {
        if bins[i] <= bins[i - 1] {
            bins[i] = bins[i - 1] + 1;
        }
    }

    let mut bank = Vec::with_capacity(num_mels);
    for m in 0..num_mels {
        let (left, center, right) = (bins[m], bins[m + 1], bins[m + 2]);
        let mut filter = vec![0.0f64; half_fft];

        for k in left..center.min(half_fft) {
            filter[k] = (k - left) as f64 / (center - left) as f64;
        }
        for k in center..=right.min(half_fft - 1) {
            filter[k] = (right - k) as f64 / (right - center) as f64;
        }
        bank.push(filter);
    }
    bank
}

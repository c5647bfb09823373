//! In-place radix-2 Cooley-Tukey FFT.
//!
//! Small fixed-size transforms only (analysis windows of 1024 or 2048
//! samples), so a plain radix-2 kernel is plenty.

use std::f64::consts::PI;

/// Transforms `re`/`im` in place. Both slices must share the same
/// power-of-two length.
pub fn fft_in_place(re: &mut [f64], im: &mut [f64]) {
    let n = re.len();
    debug_assert_eq!(n, im.len());
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return;
    }

    // Bit-reversal permutation.
    let mut j = 0usize;
    for i in 0..n - 1 {
        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
        let mut bit = n >> 1;
        while bit <= j {
            j -= bit;
            bit >>= 1;
        }
        j += bit;
    }

    // Butterfly stages.
    let mut width = 2;
    while width <= n {
        let half = width >> 1;
        for start in (0..n).step_by(width) {
            for k in 0..half {
                let angle = -PI * k as f64 / half as f64;
                let (w_im, w_re) = angle.sin_cos();

                let a = start + k;
                let b = a + half;
                let t_re = w_re * re[b] - w_im * im[b];
                let t_im = w_re * im[b] + w_im * re[b];

                re[b] = re[a] - t_re;
                im[b] = im[a] - t_im;
                re[a] += t_re;
                im[a] += t_im;
            }
        }
        width <<= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_dft(input: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = input.len();
        let mut re = vec![0.0; n];
        let mut im = vec![0.0; n];
        for k in 0..n {
            for (t, &x) in input.iter().enumerate() {
                let angle = -2.0 * PI * k as f64 * t as f64 / n as f64;
                re[k] += x * angle.cos();
                im[k] += x * angle.sin();
            }
        }
        (re, im)
    }

    #[test]
    fn test_impulse_has_flat_spectrum() {
        let mut re = vec![0.0; 16];
        let mut im = vec![0.0; 16];
        re[0] = 1.0;
        fft_in_place(&mut re, &mut im);
        for k in 0..16 {
            assert!((re[k] - 1.0).abs() < 1e-12);
            assert!(im[k].abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_tone_peaks_at_its_bin() {
        let n = 64;
        let mut re: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 4.0 * i as f64 / n as f64).sin())
            .collect();
        let mut im = vec![0.0; n];
        fft_in_place(&mut re, &mut im);

        let mags: Vec<f64> = (0..n / 2)
            .map(|k| (re[k] * re[k] + im[k] * im[k]).sqrt())
            .collect();
        let peak = mags
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k)
            .unwrap();
        assert_eq!(peak, 4);
    }

    #[test]
    fn test_matches_naive_dft() {
        let input: Vec<f64> = (0..32).map(|i| ((i * 7 % 13) as f64 - 6.0) / 6.0).collect();
        let (want_re, want_im) = naive_dft(&input);

        let mut re = input.clone();
        let mut im = vec![0.0; input.len()];
        fft_in_place(&mut re, &mut im);

        for k in 0..input.len() {
            assert!((re[k] - want_re[k]).abs() < 1e-9, "re mismatch at bin {k}");
            assert!((im[k] - want_im[k]).abs() < 1e-9, "im mismatch at bin {k}");
        }
    }
}

//! Cepstral coefficients via an orthonormal DCT-II.

use std::f64::consts::PI;

/// Floor applied before taking the log of a mel energy.
const LOG_FLOOR: f64 = 1e-10;

/// Computes the first `n_out` coefficients of the orthonormal DCT-II.
pub fn dct_ii(input: &[f64], n_out: usize) -> Vec<f64> {
    let n = input.len();
    debug_assert!(n > 0);
    let mut out = Vec::with_capacity(n_out);
    for k in 0..n_out {
        let mut sum = 0.0;
        for (i, &x) in input.iter().enumerate() {
            sum += x * (PI * k as f64 * (2 * i + 1) as f64 / (2 * n) as f64).cos();
        }
        let scale = if k == 0 {
            (1.0 / n as f64).sqrt()
        } else {
            (2.0 / n as f64).sqrt()
        };
        out.push(sum * scale);
    }
    out
}

/// Converts one frame of mel filterbank energies into `n_coeffs` cepstral
/// coefficients: floored log followed by DCT-II.
pub fn cepstrum(mel_energies: &[f64], n_coeffs: usize) -> Vec<f64> {
    let log_mel: Vec<f64> = mel_energies.iter().map(|&e| e.max(LOG_FLOOR).ln()).collect();
    dct_ii(&log_mel, n_coeffs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dct_of_constant_is_dc_only() {
        let coeffs = dct_ii(&[3.0; 16], 4);
        // DC term is sqrt(n) * value for the orthonormal transform.
        assert!((coeffs[0] - 3.0 * 16.0_f64.sqrt()).abs() < 1e-9);
        for &c in &coeffs[1..] {
            assert!(c.abs() < 1e-9);
        }
    }

    #[test]
    fn test_dct_rows_are_orthonormal() {
        // Transforming a basis vector yields one column of the DCT matrix;
        // columns of an orthonormal matrix have unit norm.
        let n = 8;
        for i in 0..n {
            let mut basis = vec![0.0; n];
            basis[i] = 1.0;
            let col = dct_ii(&basis, n);
            let norm: f64 = col.iter().map(|c| c * c).sum();
            assert!((norm - 1.0).abs() < 1e-9, "column {i} norm was {norm}");
        }
    }

    #[test]
    fn test_cepstrum_width_and_log_floor() {
        let coeffs = cepstrum(&[0.0; 64], 13);
        assert_eq!(coeffs.len(), 13);
        assert!(coeffs.iter().all(|c| c.is_finite()));
    }
}

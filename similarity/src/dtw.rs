//! Dynamic time warping over frame sequences.

/// Minimum cumulative alignment cost between two sequences of
/// equal-dimensionality frames, using Euclidean distance as the local
/// cost. Returns `None` when either sequence is empty.
///
/// Classic O(n·m) dynamic programming with a rolling two-row table; frame
/// counts here are small (one frame per 512-sample hop), so the exact
/// alignment is affordable.
pub fn alignment_cost(a: &[Vec<f64>], b: &[Vec<f64>]) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let m = b.len();
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut cur = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for row in a {
        cur[0] = f64::INFINITY;
        for j in 1..=m {
            let local = euclidean(row, &b[j - 1]);
            let best = prev[j].min(cur[j - 1]).min(prev[j - 1]);
            cur[j] = local + best;
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    Some(prev[m])
}

fn euclidean(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

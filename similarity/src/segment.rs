//! Index-aligned window pairing for the raw distance.

/// Iterator over index-aligned slice pairs of two sample sequences.
///
/// Windows start every `step` samples within `[0, min(len_a, len_b))`;
/// the same index range is sliced from both sequences and the pair is
/// truncated to the shorter of the two slices, so both sides of every
/// yielded pair have equal length. Lazy and restartable: callers
/// reconstruct it per comparison, no iteration state persists.
#[derive(Debug, Clone)]
pub struct SegmentWindows<'a> {
    a: &'a [f64],
    b: &'a [f64],
    step: usize,
    pos: usize,
    end: usize,
}

impl<'a> SegmentWindows<'a> {
    /// Creates a windower with the given step size. A zero step yields an
    /// empty iterator.
    pub fn new(a: &'a [f64], b: &'a [f64], step: usize) -> Self {
        let end = if step == 0 { 0 } else { a.len().min(b.len()) };
        Self { a, b, step, pos: 0, end }
    }
}

impl<'a> Iterator for SegmentWindows<'a> {
    type Item = (&'a [f64], &'a [f64]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.end {
            return None;
        }
        let start = self.pos;
        self.pos += self.step;

        let stop_a = (start + self.step).min(self.a.len());
        let stop_b = (start + self.step).min(self.b.len());
        let len = (stop_a - start).min(stop_b - start);
        Some((&self.a[start..start + len], &self.b[start..start + len]))
    }
}

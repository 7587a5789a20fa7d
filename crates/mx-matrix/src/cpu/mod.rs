pub mod parallel;
pub mod partition;

use std::ops::Range;

use crate::backend::MatmulBackend;
use crate::element::{dot, Element};

/// Computes rows `rows` of `a @ b` into `out`.
///
/// `out` holds exactly the destination rows, so its first element is cell
/// `(rows.start, 0)` of the full product. This is the one kernel shared by
/// every backend.
pub(crate) fn multiply_rows<T: Element>(
    a: &[T],
    b: &[T],
    out: &mut [T],
    rows: Range<usize>,
    k: usize,
    n: usize,
) {
    debug_assert_eq!(out.len(), rows.len() * n);
    for (i, out_row) in rows.zip(out.chunks_exact_mut(n)) {
        let a_row = &a[i * k..(i + 1) * k];
        for (j, cell) in out_row.iter_mut().enumerate() {
            *cell = dot(a_row.iter().copied(), b[j..].iter().step_by(n).copied());
        }
    }
}

/// Single-threaded reference backend.
///
/// The plain triple loop, run on the calling thread. Used directly when no
/// concurrency is wanted and as the ground truth the parallel backend is
/// checked against.
#[derive(Debug, Clone, Copy)]
pub struct SequentialBackend;

impl SequentialBackend {
    pub fn new() -> Self {
        SequentialBackend
    }
}

impl Default for SequentialBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> MatmulBackend<T> for SequentialBackend {
    fn name(&self) -> &str {
        "sequential"
    }

    fn matmul_into(&self, a: &[T], b: &[T], out: &mut [T], m: usize, k: usize, n: usize) {
        multiply_rows(a, b, out, 0..m, k, n);
    }
}

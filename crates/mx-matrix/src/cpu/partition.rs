//! Row-band partitioning for the parallel multiply.

use std::ops::Range;

/// Splits `[0, rows)` into `workers` contiguous bands.
///
/// Every band but the last gets `rows / workers` rows; the last band also
/// takes the remainder. The bands are returned in order, never overlap, and
/// together cover `[0, rows)` exactly once. When `rows < workers` all bands
/// except the last are empty.
///
/// # Panics
/// Panics if `workers == 0`.
pub fn row_bands(rows: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "row_bands requires at least one worker");
    let per_band = rows / workers;
    let mut bands = Vec::with_capacity(workers);
    let mut start = 0;
    for w in 0..workers {
        let end = if w == workers - 1 {
            rows
        } else {
            start + per_band
        };
        bands.push(start..end);
        start = end;
    }
    bands
}

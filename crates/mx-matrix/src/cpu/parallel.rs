use std::thread;

use crate::backend::MatmulBackend;
use crate::config::ParallelConfig;
use crate::cpu::multiply_rows;
use crate::cpu::partition::row_bands;
use crate::element::Element;

/// Row-partitioned fork/join backend.
///
/// Each call splits the output rows into `W` contiguous bands, spawns one
/// scoped thread per non-empty band, and joins them all before returning.
/// Workers share the operands read-only and each writes only its own
/// disjoint slice of the output, so no locking is involved. Because every
/// cell is computed by the same kernel as [`SequentialBackend`], the result
/// does not depend on `W`.
///
/// With a single worker, or for products smaller than
/// [`ParallelConfig::min_parallel_work`], the work runs on the calling thread.
///
/// [`SequentialBackend`]: crate::SequentialBackend
#[derive(Debug, Clone, Default)]
pub struct ParallelBackend {
    config: ParallelConfig,
}

impl ParallelBackend {
    /// Backend with the default configuration (auto-detected worker count).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParallelConfig) -> Self {
        ParallelBackend { config }
    }

    /// Backend that always uses exactly `workers` bands, regardless of problem
    /// size.
    pub fn with_workers(workers: usize) -> Self {
        Self::with_config(
            ParallelConfig::default()
                .with_workers(workers)
                .with_min_parallel_work(0),
        )
    }

    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }
}

impl<T: Element> MatmulBackend<T> for ParallelBackend {
    fn name(&self) -> &str {
        "parallel"
    }

    fn matmul_into(&self, a: &[T], b: &[T], out: &mut [T], m: usize, k: usize, n: usize) {
        let workers = self.config.resolved_workers();
        let work = m.saturating_mul(k).saturating_mul(n);

        if workers == 1 || work < self.config.min_parallel_work {
            log::debug!("multiply [{m}x{k}] @ [{k}x{n}] on the calling thread");
            multiply_rows(a, b, out, 0..m, k, n);
            return;
        }

        log::debug!("multiply [{m}x{k}] @ [{k}x{n}] using {workers} workers");
        thread::scope(|s| {
            let mut rest = out;
            for band in row_bands(m, workers) {
                let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(band.len() * n);
                rest = tail;
                if band.is_empty() {
                    continue;
                }
                log::trace!("dispatching rows {}..{}", band.start, band.end);
                s.spawn(move || multiply_rows(a, b, chunk, band, k, n));
            }
        });
    }
}

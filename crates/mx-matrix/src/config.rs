use std::num::NonZeroUsize;
use std::thread;

use crate::error::{MatrixError, Result};

/// Environment variable overriding the worker count (0 means auto-detect).
pub const WORKERS_ENV: &str = "MX_MATRIX_WORKERS";
/// Environment variable overriding [`ParallelConfig::min_parallel_work`].
pub const MIN_PARALLEL_WORK_ENV: &str = "MX_MATRIX_MIN_PARALLEL_WORK";

/// Default multiply-add count below which a product stays on the calling
/// thread (a 32x32x32 product).
pub const DEFAULT_MIN_PARALLEL_WORK: usize = 32 * 32 * 32;

/// Tuning knobs for [`ParallelBackend`](crate::ParallelBackend).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Fixed number of workers; `None` asks the platform.
    pub workers: Option<NonZeroUsize>,
    /// Products with fewer multiply-adds than this run sequentially.
    pub min_parallel_work: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            workers: None,
            min_parallel_work: DEFAULT_MIN_PARALLEL_WORK,
        }
    }
}

impl ParallelConfig {
    /// Use exactly `workers` workers; `0` restores auto-detection.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = NonZeroUsize::new(workers);
        self
    }

    pub fn with_min_parallel_work(mut self, work: usize) -> Self {
        self.min_parallel_work = work;
        self
    }

    /// Default configuration overridden by `MX_MATRIX_WORKERS` and
    /// `MX_MATRIX_MIN_PARALLEL_WORK` when they are set.
    ///
    /// # Errors
    /// `InvalidConfig` if a variable is set but is not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = ParallelConfig::default();
        if let Some(workers) = parse_var(WORKERS_ENV, &lookup)? {
            config = config.with_workers(workers);
        }
        if let Some(work) = parse_var(MIN_PARALLEL_WORK_ENV, &lookup)? {
            config = config.with_min_parallel_work(work);
        }
        Ok(config)
    }

    /// The worker count to use: the configured value, or else the number of
    /// hardware execution contexts reported by the platform.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.get(),
            None => available_workers(),
        }
    }
}

/// Number of hardware execution contexts, or 1 if the platform cannot tell.
pub fn available_workers() -> usize {
    match thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(err) => {
            log::warn!("cannot determine available parallelism ({err}), using 1 worker");
            1
        }
    }
}

fn parse_var(
    key: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Option<usize>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|_| MatrixError::InvalidConfig { key, value: raw })
}

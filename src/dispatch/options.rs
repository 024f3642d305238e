use std::num::NonZeroUsize;
use std::thread;

use crate::validator::ValidationMode;

/// Controls how [`Dispatcher`](super::Dispatcher) fans out a batch.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Worker threads; 0 means one per available CPU.
    pub workers: usize,
    pub validation_mode: ValidationMode,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            workers: 0,
            validation_mode: ValidationMode::Strict,
        }
    }
}

impl DispatchOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Worker count actually used for a batch of `jobs` addresses.
    pub fn effective_workers(&self, jobs: usize) -> usize {
        let wanted = if self.workers == 0 {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        } else {
            self.workers
        };
        wanted.min(jobs).max(1)
    }
}

use crate::par::Scheduler;

pub mod comparative_sort;
pub mod counting_pass;
pub(crate) mod orchestrator;
pub mod radix_key;
pub mod sort_utils;
pub mod sorter;

/// Distinct values of one 8-bit digit.
pub const RADIX: usize = 256;

pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_FALLBACK_THRESHOLD: usize = 32;

/// Tuning for [`sorter::sort_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Upper bound on the number of sub-ranges each digit pass is split into.
    pub workers: usize,
    /// Inputs of at most this many keys are insertion sorted instead.
    pub fallback_threshold: usize,
    pub scheduler: Scheduler,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
            scheduler: Scheduler::default(),
        }
    }
}

impl SortConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_fallback_threshold(mut self, fallback_threshold: usize) -> Self {
        self.fallback_threshold = fallback_threshold;
        self
    }

    pub fn with_scheduler(mut self, scheduler: Scheduler) -> Self {
        self.scheduler = scheduler;
        self
    }
}

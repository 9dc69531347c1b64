use std::collections::TryReserveError;

/// Errors returned by [`crate::sort`] and [`crate::sort_with`].
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The auxiliary buffer or per-pass bookkeeping could not be reserved.
    /// The input is left untouched.
    #[error("failed to allocate sort buffers: {0}")]
    Allocation(#[from] TryReserveError),
    /// A worker thread could not be launched. The input contents are unspecified.
    #[error("failed to spawn sort worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
    /// Only non-negative keys can be sorted. Detected before any mutation.
    #[error("negative key at index {index}")]
    NegativeKey { index: usize },
}

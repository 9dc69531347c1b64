use std::ops::Range;

use crate::radix::RADIX;

/// Exclusive prefix sums: `sums[d]` is the number of keys with a digit below `d`.
#[inline]
pub fn get_prefix_sums(counts: &[usize; RADIX]) -> [usize; RADIX] {
    crate::scope!("get_prefix_sums");
    let mut sums = [0usize; RADIX];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// True when at most one digit value occurs, so a pass over it can't reorder anything.
#[inline]
pub fn is_homogenous_bucket(counts: &[usize; RADIX]) -> bool {
    crate::scope!("is_homogenous_bucket");
    let mut seen = false;
    for c in counts {
        if *c > 0 {
            if seen {
                return false;
            } else {
                seen = true;
            }
        }
    }

    true
}

/// Length of every sub-range but the last when `len` items are split over `workers`.
#[inline]
pub fn chunk_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

/// Splits `0..len` into `workers` contiguous ranges of [`chunk_len`] items, the last one
/// ending at `len`. Ranges that would start past the end are empty (`len..len`).
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = chunk_len(len, workers);
    (0..workers)
        .map(|i| {
            let start = (i * chunk).min(len);
            let end = if i == workers - 1 {
                len
            } else {
                ((i + 1) * chunk).min(len)
            };
            start..end
        })
        .collect()
}

/// Number of workers for `len` keys such that the sub-ranges are longer than
/// `threshold` (the last one may be shorter), capped at `max_workers`.
#[inline]
pub fn effective_workers(len: usize, threshold: usize, max_workers: usize) -> usize {
    (len.saturating_sub(1) / threshold.max(1)).clamp(1, max_workers.max(1))
}

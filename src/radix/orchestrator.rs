//! One parallel LSD pass over a single digit.
//!
//! Each pass runs as a sequence of fan-outs separated by joins:
//!
//!  1. count: every worker histograms its own sub-range and hands it back over a channel
//!  2. merge: the calling thread sums the histograms and lays out one region of the
//!     auxiliary buffer per (digit, worker), digit-major
//!  3. scatter: every worker writes its sub-range into its own regions
//!  4. copy back: every worker copies its sub-range of the auxiliary buffer into the keys
//!  5. reset: the shared histogram is cleared for the next digit
//!
//! No worker scatters before the merge is complete, and the regions are disjoint borrows of
//! the auxiliary buffer, so no locking is needed.

use std::{ops::Range, sync::mpsc::channel};

use arbitrary_chunks::ArbitraryChunks;

use crate::{
    par::Scheduler,
    radix::{
        counting_pass::{get_counts, scatter},
        radix_key::RadixKey,
        sort_utils::{get_prefix_sums, is_homogenous_bucket},
        RADIX,
    },
    SortError,
};

/// State shared by every pass of one sort. Allocated once by the driver.
pub(crate) struct SharedState<T> {
    aux: Vec<T>,
    global: [usize; RADIX],
    locals: Vec<[usize; RADIX]>,
    region_lens: Vec<usize>,
}

impl<T: RadixKey> SharedState<T> {
    pub(crate) fn try_new(data: &[T], workers: usize) -> Result<Self, SortError> {
        let mut aux = Vec::new();
        aux.try_reserve_exact(data.len())?;
        aux.extend_from_slice(data);

        let mut locals = Vec::new();
        locals.try_reserve_exact(workers)?;
        locals.resize(workers, [0usize; RADIX]);

        let mut region_lens = Vec::new();
        region_lens.try_reserve_exact(workers * RADIX)?;

        Ok(Self {
            aux,
            global: [0usize; RADIX],
            locals,
            region_lens,
        })
    }

    fn workers(&self) -> usize {
        self.locals.len()
    }

    /// Sums the local histograms into the global one and computes the length of every
    /// (digit, worker) region of the auxiliary buffer, digit-major.
    fn merge(&mut self) {
        crate::scope!("merge");
        for local in &self.locals {
            for (total, count) in self.global.iter_mut().zip(local) {
                *total += count;
            }
        }

        self.region_lens.clear();
        for digit in 0..RADIX {
            for local in &self.locals {
                self.region_lens.push(local[digit]);
            }
        }
    }

    fn reset(&mut self) {
        self.global = [0usize; RADIX];
        self.locals.fill([0usize; RADIX]);
        self.region_lens.clear();
    }
}

/// Keys of one sub-range and the regions of the auxiliary buffer they scatter into.
struct WorkerScatter<'a, T> {
    src: &'a [T],
    regions: Vec<&'a mut [T]>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PassOutcome {
    Scattered,
    /// Every key had the same digit, nothing moved.
    Skipped,
}

/// Stable sort of `data` by digit `level`.
///
/// `ranges` is the partition of `data` (one per worker, all but the last `chunk_len`
/// long). On return `state` is reset for the next digit.
pub(crate) fn run_digit_pass<T>(
    data: &mut [T],
    state: &mut SharedState<T>,
    ranges: &[Range<usize>],
    chunk_len: usize,
    level: usize,
    scheduler: Scheduler,
) -> Result<PassOutcome, SortError>
where
    T: RadixKey,
{
    crate::scope_print!("digit pass");
    debug_assert_eq!(ranges.len(), state.workers());
    let workers = state.workers();

    {
        crate::scope_print!("count");
        let (tx, rx) = channel();
        scheduler.par_chunks(
            data,
            &|worker, chunk: &[T]| {
                // The receiver outlives the fan-out.
                let _ = tx.send((worker, get_counts(chunk, level)));
            },
            chunk_len,
        )?;
        drop(tx);
        for (worker, counts) in rx {
            state.locals[worker] = counts;
        }
    }

    state.merge();
    log::trace!(
        "level {level}: digit starts {:?}",
        &get_prefix_sums(&state.global)[..8]
    );

    if is_homogenous_bucket(&state.global) {
        state.reset();
        return Ok(PassOutcome::Skipped);
    }

    {
        crate::scope_print!("scatter");
        let mut tasks: Vec<WorkerScatter<T>> = Vec::new();
        tasks.try_reserve_exact(workers)?;
        for range in ranges {
            let mut regions = Vec::new();
            regions.try_reserve_exact(RADIX)?;
            tasks.push(WorkerScatter {
                src: &data[range.clone()],
                regions,
            });
        }

        for (i, region) in state
            .aux
            .arbitrary_chunks_mut(&state.region_lens)
            .enumerate()
        {
            tasks[i % workers].regions.push(region);
        }

        scheduler.par_map(
            &mut tasks,
            &|_, task: &mut WorkerScatter<T>| scatter(task.src, &mut task.regions, level),
            workers as u32,
        )?;
    }

    {
        crate::scope_print!("copy back");
        let aux = &state.aux;
        scheduler.par_chunks_mut(
            data,
            &|worker, chunk: &mut [T]| {
                let start = worker * chunk_len;
                chunk.copy_from_slice(&aux[start..start + chunk.len()]);
            },
            chunk_len,
        )?;
    }

    state.reset();
    Ok(PassOutcome::Scattered)
}

use crate::{
    radix::{
        comparative_sort::insertion_sort,
        orchestrator::{run_digit_pass, PassOutcome, SharedState},
        radix_key::RadixKey,
        sort_utils::{chunk_len, effective_workers, partition},
        SortConfig,
    },
    SortError,
};

/// Single scan for the largest key, rejecting the first negative one.
#[inline]
fn max_key<T>(data: &[T]) -> Result<Option<T>, SortError>
where
    T: RadixKey,
{
    crate::scope!("max_key");
    let mut max: Option<T> = None;
    for (index, key) in data.iter().enumerate() {
        if key.is_negative() {
            return Err(SortError::NegativeKey { index });
        }
        if max.map_or(true, |m| *key > m) {
            max = Some(*key);
        }
    }
    Ok(max)
}

/// Sorts `data` in place with the default [`SortConfig`].
///
/// # Errors
///
/// [`SortError::NegativeKey`] if any key is negative, [`SortError::Allocation`] if the
/// auxiliary buffer can't be reserved. In both cases `data` is left untouched.
#[inline]
pub fn sort<T>(data: &mut [T]) -> Result<(), SortError>
where
    T: RadixKey,
{
    sort_with(data, &SortConfig::default())
}

/// Sorts `data` in place into non-decreasing order.
///
/// Inputs of at most `config.fallback_threshold` keys are insertion sorted. Larger inputs
/// get one parallel counting pass per significant byte of the largest key, each split over
/// at most `config.workers` sub-ranges.
///
/// # Errors
///
/// See [`sort`]. With [`crate::Scheduler::Raw`] a worker thread that fails to launch
/// returns [`SortError::WorkerSpawn`] and leaves `data` in an unspecified order.
pub fn sort_with<T>(data: &mut [T], config: &SortConfig) -> Result<(), SortError>
where
    T: RadixKey,
{
    crate::scope_print_major!("sort");

    // By definition, this is already sorted
    if data.len() <= 1 {
        return Ok(());
    }

    let Some(max) = max_key(data)? else {
        return Ok(());
    };

    if data.len() <= config.fallback_threshold {
        insertion_sort(data);
        return Ok(());
    }

    let levels = max.significant_levels();
    let workers = effective_workers(data.len(), config.fallback_threshold, config.workers);
    let ranges = partition(data.len(), workers);
    let chunk = chunk_len(data.len(), workers);
    log::debug!(
        "radix sort: len={} levels={levels} workers={workers} scheduler={:?} threads={}",
        data.len(),
        config.scheduler,
        config.scheduler.current_num_threads()
    );

    config.scheduler.init();
    let mut state = SharedState::try_new(data, workers)?;

    for level in 0..levels {
        let outcome = run_digit_pass(data, &mut state, &ranges, chunk, level, config.scheduler)?;
        if outcome == PassOutcome::Skipped {
            log::trace!("level {level}: all keys share one digit, skipped");
        }
    }

    Ok(())
}

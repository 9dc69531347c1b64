#![allow(dead_code)]

use pool_radix::{Scheduler, SortConfig};
use rand::{rngs::StdRng, SeedableRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Config that forces the parallel path even for short inputs.
pub fn parallel_config(scheduler: Scheduler) -> SortConfig {
    SortConfig::default()
        .with_workers(8)
        .with_fallback_threshold(4)
        .with_scheduler(scheduler)
}

/// Sorts a copy of `data` with `config` and compares it with `slice::sort`.
pub fn sort_and_verify<T>(data: &[T], config: &SortConfig)
where
    T: pool_radix::RadixKey + std::fmt::Debug,
{
    let mut expected = data.to_vec();
    expected.sort();

    let mut actual = data.to_vec();
    pool_radix::sort_with(&mut actual, config).unwrap();

    assert_eq!(
        actual,
        expected,
        "Sort mismatch at n={} with {:?}. First diff at index {}",
        data.len(),
        config.scheduler,
        actual
            .iter()
            .zip(expected.iter())
            .position(|(a, b)| a != b)
            .unwrap_or(data.len())
    );
}

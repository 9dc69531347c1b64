mod common;

use common::{parallel_config, seeded_rng, sort_and_verify};
use pool_radix::{Scheduler, SortConfig, SortError};
use rand::Rng;

fn random_u32(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = seeded_rng(seed);
    (0..n).map(|_| rng.random()).collect()
}

#[test]
fn test_concrete_scenarios() {
    let mut data = vec![170u32, 45, 75, 90, 802, 24, 2, 66];
    pool_radix::sort(&mut data).unwrap();
    assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);

    let mut zeros = vec![0u32, 0, 0];
    pool_radix::sort(&mut zeros).unwrap();
    assert_eq!(zeros, vec![0, 0, 0]);

    let mut single = vec![42i32];
    pool_radix::sort(&mut single).unwrap();
    assert_eq!(single, vec![42]);
}

#[test]
fn test_empty() {
    let mut data: Vec<u64> = vec![];
    pool_radix::sort(&mut data).unwrap();
    assert!(data.is_empty());
}

#[test]
fn test_every_scheduler_matches_std_sort() {
    for scheduler in Scheduler::ALL {
        for (i, n) in [33, 100, 1_000, 10_007, 100_000].into_iter().enumerate() {
            let data = random_u32(n, i as u64);
            sort_and_verify(&data, &SortConfig::default().with_scheduler(scheduler));
            sort_and_verify(&data, &parallel_config(scheduler));
        }
    }
}

#[test]
fn test_stress_large_random() {
    // Well above the worker count and the fallback threshold, so every pass has
    // several non-trivial sub-ranges writing into each other's part of the buffer.
    let data = random_u32(1_000_000, 7);
    sort_and_verify(&data, &SortConfig::default());
    sort_and_verify(&data, &SortConfig::default().with_scheduler(Scheduler::Rayon));
}

#[test]
fn test_small_value_range_many_duplicates() {
    let mut rng = seeded_rng(11);
    let data: Vec<u16> = (0..50_000).map(|_| rng.random_range(0..10)).collect();
    for scheduler in Scheduler::ALL {
        sort_and_verify(&data, &parallel_config(scheduler));
    }
}

#[test]
fn test_all_same() {
    let data = vec![0xDEADBEEFu32; 10_000];
    sort_and_verify(&data, &parallel_config(Scheduler::Raw));
}

#[test]
fn test_pre_sorted_and_reverse_sorted() {
    let sorted: Vec<u32> = (0..100_000).collect();
    let reversed: Vec<u32> = sorted.iter().rev().copied().collect();
    for scheduler in Scheduler::ALL {
        sort_and_verify(&sorted, &parallel_config(scheduler));
        sort_and_verify(&reversed, &parallel_config(scheduler));
    }
}

#[test]
fn test_fallback_boundary() {
    for n in 30..=34 {
        let data = random_u32(n, n as u64);
        sort_and_verify(&data, &SortConfig::default());
    }
}

#[test]
fn test_more_workers_than_keys() {
    let config = SortConfig::default()
        .with_workers(64)
        .with_fallback_threshold(0)
        .with_scheduler(Scheduler::Sequential);
    for n in 2..20 {
        sort_and_verify(&random_u32(n, 100 + n as u64), &config);
    }
}

#[test]
fn test_zero_workers_is_one_worker() {
    let config = SortConfig::default().with_workers(0);
    sort_and_verify(&random_u32(5_000, 3), &config);
}

#[test]
fn test_wide_and_signed_types() {
    let mut rng = seeded_rng(21);
    let u64s: Vec<u64> = (0..20_000).map(|_| rng.random()).collect();
    let i64s: Vec<i64> = (0..20_000).map(|_| rng.random_range(0..=i64::MAX)).collect();
    let i32s: Vec<i32> = (0..20_000).map(|_| rng.random_range(0..=i32::MAX)).collect();
    let u8s: Vec<u8> = (0..20_000).map(|_| rng.random()).collect();
    let u128s: Vec<u128> = (0..5_000).map(|_| rng.random()).collect();
    let config = SortConfig::default();
    sort_and_verify(&u64s, &config);
    sort_and_verify(&i64s, &config);
    sort_and_verify(&i32s, &config);
    sort_and_verify(&u8s, &config);
    sort_and_verify(&u128s, &config);
    sort_and_verify(&[u64::MAX, 0, u64::MAX - 1, 1], &parallel_config(Scheduler::Rayon));
}

#[test]
fn test_negative_key_is_rejected_untouched() {
    let mut data: Vec<i32> = (0..1_000).rev().collect();
    data[500] = -3;
    data[700] = -1;
    let original = data.clone();

    let err = pool_radix::sort(&mut data).unwrap_err();
    assert!(matches!(err, SortError::NegativeKey { index: 500 }));
    assert_eq!(err.to_string(), "negative key at index 500");
    assert_eq!(data, original);

    let mut small = vec![1i8, -1];
    assert!(matches!(
        pool_radix::sort(&mut small),
        Err(SortError::NegativeKey { index: 1 })
    ));
}

#[test]
fn test_idempotent() {
    let mut data = random_u32(50_000, 99);
    pool_radix::sort(&mut data).unwrap();
    let once = data.clone();
    pool_radix::sort(&mut data).unwrap();
    assert_eq!(data, once);
}

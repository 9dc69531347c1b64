//! The per-worker halves of a counting sort step: histogram a sub-range, then scatter it
//! into the regions the merge step reserved for it.

use crate::radix::{radix_key::RadixKey, RADIX};

/// Histogram of digit `level` over `bucket`.
#[inline]
pub fn get_counts<T>(bucket: &[T], level: usize) -> [usize; RADIX]
where
    T: RadixKey,
{
    crate::scope!("get_counts");
    let mut counts_1 = [0usize; RADIX];
    let mut counts_2 = [0usize; RADIX];
    let mut counts_3 = [0usize; RADIX];
    let mut counts_4 = [0usize; RADIX];
    let chunks = bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        counts_1[chunk[0].get_level(level) as usize] += 1;
        counts_2[chunk[1].get_level(level) as usize] += 1;
        counts_3[chunk[2].get_level(level) as usize] += 1;
        counts_4[chunk[3].get_level(level) as usize] += 1;
    });

    rem.iter().for_each(|v| {
        counts_1[v.get_level(level) as usize] += 1;
    });

    for i in 0..RADIX {
        counts_1[i] += counts_2[i];
        counts_1[i] += counts_3[i];
        counts_1[i] += counts_4[i];
    }

    counts_1
}

/// Scatters `src` into `regions`, one region per digit value, each exactly as long as the
/// number of keys in `src` with that digit.
///
/// Walks `src` backwards and fills every region from its end, so keys with equal digits
/// keep their relative order.
#[inline]
pub fn scatter<T>(src: &[T], regions: &mut [&mut [T]], level: usize)
where
    T: RadixKey,
{
    crate::scope!("scatter");
    debug_assert_eq!(regions.len(), RADIX);
    let mut ends = [0usize; RADIX];
    for (end, region) in ends.iter_mut().zip(regions.iter()) {
        *end = region.len();
    }

    for key in src.iter().rev() {
        let b = key.get_level(level) as usize;
        ends[b] -= 1;
        regions[b][ends[b]] = *key;
    }

    debug_assert!(ends.iter().all(|e| *e == 0));
}

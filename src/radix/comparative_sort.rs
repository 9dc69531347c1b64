//! `insertion_sort` is the fallback for ranges too small to be worth a digit pass.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * stable
//!  * single-threaded
//!
//! ## Performance
//!
//! O(n²) in the worst case, which only matters above the fallback threshold. Below it the
//! lack of count arrays and buffers makes it faster than a radix pass.

/// Sorts `bucket` into non-decreasing order, shifting larger elements right one slot at a
/// time. Equal elements keep their relative order.
pub(crate) fn insertion_sort<T>(bucket: &mut [T])
where
    T: Copy + Ord,
{
    crate::scope!("insertion_sort");
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut j = i;
        while j > 0 && bucket[j - 1] > key {
            bucket[j] = bucket[j - 1];
            j -= 1;
        }
        bucket[j] = key;
    }
}

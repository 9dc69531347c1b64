mod private {
    pub trait Sealed {}
}

/// Integer key that can be split into 8-bit digits, least significant first.
///
/// Sealed: implemented for every primitive integer type. Signed types are accepted so
/// callers don't have to convert, but negative values are rejected by the sort.
pub trait RadixKey: private::Sealed + Copy + Ord + Send + Sync + 'static {
    /// Number of 8-bit digits in the type.
    const LEVELS: usize;

    /// Digit `level` of the key, `(key >> 8 * level) & 0xFF`.
    fn get_level(&self, level: usize) -> u8;

    fn is_negative(&self) -> bool;

    /// Number of digits up to and including the most significant non-zero one.
    /// Only meaningful for non-negative keys.
    fn significant_levels(&self) -> usize;
}

macro_rules! impl_radix_key {
    ($($t:ty),* ; |$v:ident| $negative:expr) => ($(
        impl private::Sealed for $t {}

        impl RadixKey for $t {
            const LEVELS: usize = std::mem::size_of::<$t>();

            #[inline(always)]
            fn get_level(&self, level: usize) -> u8 {
                if level < Self::LEVELS {
                    (*self >> (level * 8)) as u8
                } else {
                    0
                }
            }

            #[inline(always)]
            fn is_negative(&self) -> bool {
                let $v = *self;
                $negative
            }

            #[inline(always)]
            fn significant_levels(&self) -> usize {
                ((<$t>::BITS - self.leading_zeros()) as usize).div_ceil(8)
            }
        }
    )*)
}

impl_radix_key!(u8, u16, u32, u64, u128, usize; |_v| false);
impl_radix_key!(i8, i16, i32, i64, i128, isize; |v| v < 0);

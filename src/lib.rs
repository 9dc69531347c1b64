//! Parallel LSD radix sort for non-negative integer keys.
//!
//! ```ignore
//! let mut data = vec![170u32, 45, 75, 90, 802, 24, 2, 66];
//! pool_radix::sort(&mut data)?;
//! assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
//! ```

use std::time::{Duration, Instant};

pub mod error;
pub mod par;
pub mod radix;

pub use error::SortError;
pub use par::Scheduler;
pub use radix::{
    radix_key::RadixKey,
    sorter::{sort, sort_with},
    SortConfig,
};

/// Profiling scope, compiled out unless the `profile` feature is enabled.
#[macro_export]
macro_rules! scope {
    ($name:expr) => {
        #[cfg(feature = "profile")]
        profiling::scope!($name);
    };
}

/// Profiling scope that also logs its elapsed time with the `scope_print` feature.
#[macro_export]
macro_rules! scope_print {
    ($name:expr) => {
        $crate::scope!($name);
        #[cfg(feature = "scope_print")]
        let _scope_print = $crate::ScopePrint::new($name);
    };
}

/// Like `scope_print!` but only for the few top level phases, enabled by `scope_print_major`.
#[macro_export]
macro_rules! scope_print_major {
    ($name:expr) => {
        $crate::scope!($name);
        #[cfg(feature = "scope_print_major")]
        let _scope_print = $crate::ScopePrint::new($name);
    };
}

/// Logs the time between its creation and drop.
#[doc(hidden)]
pub struct ScopePrint {
    name: &'static str,
    start: Instant,
}

impl ScopePrint {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopePrint {
    fn drop(&mut self) {
        log::info!("{:>10} {}", PrettyDuration(self.start.elapsed()), self.name);
    }
}

/// A wrapper struct for `std::time::Duration` to provide pretty-printing of durations.
#[doc(hidden)]
pub struct PrettyDuration(pub Duration);

impl std::fmt::Display for PrettyDuration {
    /// Durations are formatted as follows:
    /// - If the duration is greater than or equal to 1 second, it is formatted in seconds (s).
    /// - If the duration is greater than or equal to 1 millisecond but less than 1 second, it is formatted in milliseconds (ms).
    /// - If the duration is less than 1 millisecond, it is formatted in microseconds (µs).
    ///   In the case of seconds & milliseconds, the duration is always printed with a precision of two decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let duration = self.0;
        if duration.as_secs() > 0 {
            let seconds =
                duration.as_secs() as f64 + f64::from(duration.subsec_nanos()) / 1_000_000_000.0;
            write!(f, "{seconds:.2}s ")
        } else if duration.subsec_millis() > 0 {
            let milliseconds =
                duration.as_millis() as f64 + f64::from(duration.subsec_micros() % 1_000) / 1_000.0;
            write!(f, "{milliseconds:.2}ms")
        } else {
            let microseconds = duration.as_micros();
            write!(f, "{microseconds}µs")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrettyDuration;
    use std::time::Duration;

    #[test]
    fn pretty_duration_picks_unit() {
        assert_eq!(PrettyDuration(Duration::from_micros(250)).to_string(), "250µs");
        assert_eq!(PrettyDuration(Duration::from_millis(12)).to_string(), "12.00ms");
        assert_eq!(PrettyDuration(Duration::from_millis(1500)).to_string(), "1.50s ");
    }
}

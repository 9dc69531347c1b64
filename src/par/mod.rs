use std::{str::FromStr, sync::OnceLock};

use crate::SortError;

pub mod par_chili;
pub mod par_forte;
pub mod par_raw;
pub mod par_rayon;
pub mod par_sequential;

static AVAILABLE_PARALLELISM: OnceLock<usize> = OnceLock::new();

#[inline(always)]
pub fn cached_available_parallelism() -> usize {
    *AVAILABLE_PARALLELISM.get_or_init(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    })
}

/// Task system used to fan out the phases of each digit pass.
///
/// Every primitive joins all of its tasks before returning, so consecutive calls act as
/// barriers.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub enum Scheduler {
    Sequential,
    #[default]
    Forte,
    Chili,
    Rayon,
    Raw,
}

impl FromStr for Scheduler {
    type Err = String;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seq" => Ok(Self::Sequential),
            "forte" => Ok(Self::Forte),
            "chili" => Ok(Self::Chili),
            "rayon" => Ok(Self::Rayon),
            "raw" => Ok(Self::Raw),
            _ => Err(format!(
                "Unknown mode: '{s}', valid modes: 'seq', 'forte', 'chili', 'rayon', 'raw'"
            )),
        }
    }
}

impl Scheduler {
    pub const ALL: [Scheduler; 5] = [
        Scheduler::Sequential,
        Scheduler::Forte,
        Scheduler::Chili,
        Scheduler::Rayon,
        Scheduler::Raw,
    ];

    /// Calls `func(index, item)` for every item, split into roughly `chunks` tasks.
    #[inline(always)]
    pub fn par_map<T, F>(self, data: &mut [T], func: &F, chunks: u32) -> Result<(), SortError>
    where
        T: Send + Sync,
        F: Fn(usize, &mut T) + Send + Sync,
    {
        match self {
            Scheduler::Sequential => par_sequential::par_map(data, func),
            Scheduler::Forte => par_forte::par_map(data, func, chunks),
            Scheduler::Chili => par_chili::par_map(data, func, chunks),
            Scheduler::Rayon => par_rayon::par_map(data, func),
            Scheduler::Raw => return par_raw::par_map(data, func, chunks),
        }
        Ok(())
    }

    /// Calls `func(chunk_index, chunk)` for every `chunk_size` long chunk of `data`.
    #[inline(always)]
    pub fn par_chunks_mut<T, F>(
        self,
        data: &mut [T],
        func: &F,
        chunk_size: usize,
    ) -> Result<(), SortError>
    where
        T: Send + Sync,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        match self {
            Scheduler::Sequential => par_sequential::par_chunks_mut(data, func, chunk_size),
            Scheduler::Forte => par_forte::par_chunks_mut(data, func, chunk_size),
            Scheduler::Chili => par_chili::par_chunks_mut(data, func, chunk_size),
            Scheduler::Rayon => par_rayon::par_chunks_mut(data, func, chunk_size),
            Scheduler::Raw => return par_raw::par_chunks_mut(data, func, chunk_size),
        }
        Ok(())
    }

    /// Read-only version of [`Scheduler::par_chunks_mut`].
    #[inline(always)]
    pub fn par_chunks<T, F>(self, data: &[T], func: &F, chunk_size: usize) -> Result<(), SortError>
    where
        T: Send + Sync,
        F: Fn(usize, &[T]) + Send + Sync,
    {
        match self {
            Scheduler::Sequential => par_sequential::par_chunks(data, func, chunk_size),
            Scheduler::Forte => par_forte::par_chunks(data, func, chunk_size),
            Scheduler::Chili => par_chili::par_chunks(data, func, chunk_size),
            Scheduler::Rayon => par_rayon::par_chunks(data, func, chunk_size),
            Scheduler::Raw => return par_raw::par_chunks(data, func, chunk_size),
        }
        Ok(())
    }

    #[inline(always)]
    pub fn init(self) {
        if self == Scheduler::Forte {
            par_forte::init_forte();
        }
    }

    pub fn current_num_threads(self) -> usize {
        match self {
            Scheduler::Sequential => 1,
            Scheduler::Rayon => rayon::current_num_threads(),
            Scheduler::Forte | Scheduler::Chili | Scheduler::Raw => cached_available_parallelism(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn parses_every_mode() {
        for (name, sch) in [
            ("seq", Scheduler::Sequential),
            ("forte", Scheduler::Forte),
            ("chili", Scheduler::Chili),
            ("rayon", Scheduler::Rayon),
            ("raw", Scheduler::Raw),
        ] {
            assert_eq!(name.parse::<Scheduler>(), Ok(sch));
        }
        assert!("bevy".parse::<Scheduler>().is_err());
    }

    #[test]
    fn par_map_visits_every_index_once() {
        for sch in Scheduler::ALL {
            sch.init();
            for len in [0, 1, 7, 64, 1000] {
                let mut data = vec![usize::MAX; len];
                sch.par_map(&mut data, &|i: usize, v: &mut usize| *v = i, 8)
                    .unwrap();
                assert!(data.iter().enumerate().all(|(i, v)| i == *v), "{sch:?}");
            }
        }
    }

    #[test]
    fn par_chunks_mut_passes_chunk_index() {
        for sch in Scheduler::ALL {
            sch.init();
            for chunk_size in [1, 3, 16, 100] {
                let mut data: Vec<usize> = (0..97).collect();
                sch.par_chunks_mut(
                    &mut data,
                    &|chunk_id, chunk: &mut [usize]| {
                        for (i, v) in chunk.iter_mut().enumerate() {
                            assert_eq!(*v, chunk_id * chunk_size + i);
                            *v += 1;
                        }
                    },
                    chunk_size,
                )
                .unwrap();
                assert!(data.iter().enumerate().all(|(i, v)| i + 1 == *v), "{sch:?}");
            }
        }
    }

    #[test]
    fn par_chunks_covers_all_items() {
        for sch in Scheduler::ALL {
            sch.init();
            let data: Vec<usize> = (0..1000).collect();
            let sum = AtomicUsize::new(0);
            let chunks = AtomicUsize::new(0);
            sch.par_chunks(
                &data,
                &|chunk_id, chunk: &[usize]| {
                    assert_eq!(chunk[0], chunk_id * 128);
                    sum.fetch_add(chunk.iter().sum(), Ordering::Relaxed);
                    chunks.fetch_add(1, Ordering::Relaxed);
                },
                128,
            )
            .unwrap();
            assert_eq!(sum.into_inner(), 999 * 1000 / 2, "{sch:?}");
            assert_eq!(chunks.into_inner(), 8, "{sch:?}");
        }
    }
}

use std::thread;

use crate::{par::cached_available_parallelism, SortError};

/// Runs `job` on every part, one scoped OS thread per part except the last, which runs
/// on the calling thread. Stops dispatching at the first thread that fails to launch.
fn run_scoped<I, P, J>(parts: I, job: &J) -> Result<(), SortError>
where
    I: Iterator<Item = P>,
    P: Send,
    J: Fn(P) + Sync,
{
    let mut parts = parts.peekable();
    thread::scope(|s| {
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                job(part); // Run the last one on this thread
            } else {
                thread::Builder::new()
                    .name("radix-worker".into())
                    .spawn_scoped(s, move || job(part))
                    .map_err(SortError::WorkerSpawn)?;
            }
        }
        Ok(())
    })
}

#[inline(always)]
pub fn par_map<T, F>(data: &mut [T], func: &F, chunks: u32) -> Result<(), SortError>
where
    T: Send + Sync,
    F: Fn(usize, &mut T) + Send + Sync,
{
    if data.is_empty() {
        return Ok(());
    }
    // Limit the max number of chunks in this case since they are actual threads
    let max_chunks = cached_available_parallelism() * 6;
    let chunk_count = (chunks as usize).clamp(1, max_chunks);
    let chunk_size = data.len().div_ceil(chunk_count);

    run_scoped(
        data.chunks_mut(chunk_size).enumerate(),
        &|(chunk_id, chunk): (usize, &mut [T])| {
            let start = chunk_id * chunk_size;
            for (i, output) in chunk.iter_mut().enumerate() {
                func(start + i, output);
            }
        },
    )
}

#[inline(always)]
pub fn par_chunks_mut<T, F>(data: &mut [T], func: &F, chunk_size: usize) -> Result<(), SortError>
where
    T: Send + Sync,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    run_scoped(
        data.chunks_mut(chunk_size.max(1)).enumerate(),
        &|(chunk_id, chunk): (usize, &mut [T])| func(chunk_id, chunk),
    )
}

#[inline(always)]
pub fn par_chunks<T, F>(data: &[T], func: &F, chunk_size: usize) -> Result<(), SortError>
where
    T: Send + Sync,
    F: Fn(usize, &[T]) + Send + Sync,
{
    run_scoped(
        data.chunks(chunk_size.max(1)).enumerate(),
        &|(chunk_id, chunk): (usize, &[T])| func(chunk_id, chunk),
    )
}

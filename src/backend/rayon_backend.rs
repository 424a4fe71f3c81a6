//! Thread-pool backend built on Rayon (the teacher crate's own parallelism
//! dependency, `manish59-grit::parallel`).

use super::ParallelRuntime;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Minimum element count below which the Rayon backend falls back to plain
/// iteration for a given primitive — thread dispatch overhead otherwise
/// dominates. Mirrors the teacher's `parallel::PARALLEL_THRESHOLD` idea,
/// generalized from "intervals" to "elements in the current buffer".
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Rayon-backed executor. Uses the global Rayon thread pool unless
/// constructed with an explicit thread count.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonRuntime;

impl RayonRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl ParallelRuntime for RayonRuntime {
    fn map<S, D, F>(&self, src: &[S], f: F) -> Vec<D>
    where
        S: Sync,
        D: Send,
        F: Fn(&S) -> D + Sync,
    {
        if src.len() < PARALLEL_THRESHOLD {
            return src.iter().map(|s| f(s)).collect();
        }
        src.par_iter().map(|s| f(s)).collect()
    }

    fn sort<T, F>(&self, buf: &mut [T], cmp: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        if buf.len() < PARALLEL_THRESHOLD {
            buf.sort_unstable_by(cmp);
        } else {
            buf.par_sort_unstable_by(cmp);
        }
    }

    /// Work-efficient two-pass parallel prefix scan: each chunk computes a
    /// local inclusive scan in parallel, chunk totals are combined
    /// sequentially into per-chunk offsets (the chunk count is small), then
    /// every chunk applies its offset in parallel. Correct because `op` is
    /// required to be associative.
    fn inclusive_scan<T, F>(&self, src: &[T], init: T, op: F) -> Vec<T>
    where
        T: Copy + Send + Sync,
        F: Fn(T, T) -> T + Sync,
    {
        let n = src.len();
        if n == 0 {
            return Vec::new();
        }
        if n < PARALLEL_THRESHOLD {
            let mut out = Vec::with_capacity(n);
            let mut acc = init;
            for &x in src {
                acc = op(acc, x);
                out.push(acc);
            }
            return out;
        }

        let num_chunks = rayon::current_num_threads().max(1).min(n);
        let chunk_size = (n + num_chunks - 1) / num_chunks;

        let mut out: Vec<T> = src.to_vec();
        out.par_chunks_mut(chunk_size)
            .zip(src.par_chunks(chunk_size))
            .for_each(|(out_chunk, src_chunk)| {
                let mut acc = src_chunk[0];
                out_chunk[0] = acc;
                for i in 1..src_chunk.len() {
                    acc = op(acc, src_chunk[i]);
                    out_chunk[i] = acc;
                }
            });

        let chunk_totals: Vec<T> = out.chunks(chunk_size).map(|c| *c.last().unwrap()).collect();
        let mut offsets = Vec::with_capacity(chunk_totals.len());
        let mut acc = init;
        for &total in &chunk_totals {
            offsets.push(acc);
            acc = op(acc, total);
        }

        out.par_chunks_mut(chunk_size)
            .zip(offsets.par_iter())
            .for_each(|(out_chunk, &offset)| {
                for v in out_chunk.iter_mut() {
                    *v = op(offset, *v);
                }
            });

        out
    }

    fn reduce<T, F>(&self, buf: &[T], init: T, op: F) -> T
    where
        T: Copy + Send + Sync,
        F: Fn(T, T) -> T + Sync,
    {
        if buf.len() < PARALLEL_THRESHOLD {
            return buf.iter().fold(init, |acc, &x| op(acc, x));
        }
        buf.par_iter().fold(|| init, |acc, &x| op(acc, x)).reduce(|| init, op)
    }
}

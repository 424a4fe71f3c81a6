//! Single-threaded backend.
//!
//! Used for small inputs (thread spawn overhead dwarfs the work) and as the
//! reference implementation the `RayonRuntime` output is checked against in
//! tests.

use super::ParallelRuntime;
use std::cmp::Ordering;

/// Plain iterator-based executor; no threads, no dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialRuntime;

impl SequentialRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl ParallelRuntime for SequentialRuntime {
    fn map<S, D, F>(&self, src: &[S], f: F) -> Vec<D>
    where
        S: Sync,
        D: Send,
        F: Fn(&S) -> D + Sync,
    {
        src.iter().map(|s| f(s)).collect()
    }

    fn sort<T, F>(&self, buf: &mut [T], cmp: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        buf.sort_unstable_by(cmp);
    }

    fn inclusive_scan<T, F>(&self, src: &[T], init: T, op: F) -> Vec<T>
    where
        T: Copy + Send + Sync,
        F: Fn(T, T) -> T + Sync,
    {
        let mut out = Vec::with_capacity(src.len());
        let mut acc = init;
        for &x in src {
            acc = op(acc, x);
            out.push(acc);
        }
        out
    }

    fn reduce<T, F>(&self, buf: &[T], init: T, op: F) -> T
    where
        T: Copy + Send + Sync,
        F: Fn(T, T) -> T + Sync,
    {
        buf.iter().fold(init, |acc, &x| op(acc, x))
    }
}

//! The parallel-skeleton backend abstraction (spec §5).
//!
//! The counting core in [`crate::engine`] is written once against the
//! [`ParallelRuntime`] trait's four bulk-synchronous primitives; a concrete
//! runtime plugs in a single-threaded or thread-pool execution strategy. No
//! stage in the core has any direct dependency on `rayon` or any other
//! concurrency crate — only the backend implementations do.

mod rayon_backend;
mod sequential;

pub use rayon_backend::{RayonRuntime, PARALLEL_THRESHOLD};
pub use sequential::SequentialRuntime;

/// Four bulk-parallel primitives a counting-engine backend must provide.
///
/// Every method describes a single bulk-synchronous phase: the caller may
/// assume the phase runs to completion (no internal suspension visible
/// across the trait boundary) before the next call is made.
pub trait ParallelRuntime: Sync {
    /// `dst[i] = f(src[i])` for every `i`, in unspecified element order.
    fn map<S, D, F>(&self, src: &[S], f: F) -> Vec<D>
    where
        S: Sync,
        D: Send,
        F: Fn(&S) -> D + Sync;

    /// Sort `buf` in place under a total order, deterministic up to ties
    /// `cmp` itself leaves unordered.
    fn sort<T, F>(&self, buf: &mut [T], cmp: F)
    where
        T: Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync;

    /// `dst[i] = init (op) src[0] (op) ... (op) src[i]`. `op` must be
    /// associative; `init` is the scan's identity/seed.
    fn inclusive_scan<T, F>(&self, src: &[T], init: T, op: F) -> Vec<T>
    where
        T: Copy + Send + Sync,
        F: Fn(T, T) -> T + Sync;

    /// Fold-left equivalent under associativity of `op`.
    fn reduce<T, F>(&self, buf: &[T], init: T, op: F) -> T
    where
        T: Copy + Send + Sync,
        F: Fn(T, T) -> T + Sync;
}

//! The sort-and-scan counting core (spec §4).
//!
//! Turns the O(|A|·|B|) brute-force intersection count into an
//! O((n+m) log(n+m)) pipeline built from four bulk-parallel primitives:
//! materialize endpoints (map), sort endpoints, locate each A-interval's
//! endpoints in the sorted array (scatter), run two tagged inclusive scans,
//! then extract each count and reduce to a total.
//!
//! Every stage below is a free function over the [`ParallelRuntime`] trait;
//! none of them know whether they are running sequentially or on a thread
//! pool. [`count_intersections`] is the one public entry point — it always
//! returns both the per-interval vector and the total (spec §9: "one entry
//! point that always writes the per-interval vector and returns the total").

use crate::backend::{ParallelRuntime, RayonRuntime, SequentialRuntime};
use crate::config::{Backend, EngineConfig};
use crate::endpoint::{Endpoint, Extreme, Origin};
use crate::error::{Error, Result};
use crate::interval::Interval;

/// Run the full pipeline and return `(counts, total)`.
///
/// Preconditions (spec §6): `a[i].id == i` and `b[j].id == j` for all valid
/// indices; `lower <= upper` for every interval. Violating either is an
/// [`Error::InvalidInterval`], reported before any stage runs.
///
/// Postconditions: `counts.len() == a.len()`, `counts[i]` is the number of
/// `b` intervals intersecting `a[i]`, and the returned total equals
/// `counts.iter().sum()`.
pub fn count_intersections<T: Sync, U: Sync>(
    a: &[Interval<T>],
    b: &[Interval<U>],
    config: EngineConfig,
) -> Result<(Vec<i32>, i64)> {
    match config.backend {
        Backend::Sequential => run(a, b, &SequentialRuntime::new()),
        Backend::Rayon => run(a, b, &RayonRuntime::new()),
    }
}

fn run<T: Sync, U: Sync, R: ParallelRuntime>(
    a: &[Interval<T>],
    b: &[Interval<U>],
    runtime: &R,
) -> Result<(Vec<i32>, i64)> {
    validate(a)?;
    validate(b)?;

    let n = a.len();
    let m = b.len();
    if n == 0 {
        return Ok((Vec::new(), 0));
    }

    let endpoints = materialize(a, b, runtime);
    let endpoints = sort(endpoints, runtime);
    let (left_idx, right_idx) = index(&endpoints, n);
    let (n_lower_b, n_upper_b) = tagged_scans(&endpoints, runtime);
    extract_and_reduce(&left_idx, &right_idx, &n_lower_b, &n_upper_b, m, runtime)
}

fn validate<T>(intervals: &[Interval<T>]) -> Result<()> {
    for (i, iv) in intervals.iter().enumerate() {
        iv.validate(i)?;
    }
    Ok(())
}

/// Stage 1 (spec §4.1): fill four disjoint regions of one contiguous buffer.
///
/// `[0, n)` = A-lower, `[n, 2n)` = A-upper, `[2n, 2n+m)` = B-lower,
/// `[2n+m, 2(n+m))` = B-upper. The pre-sort layout is irrelevant to
/// correctness — it only exists so the four fills can run independently.
fn materialize<T: Sync, U: Sync, R: ParallelRuntime>(
    a: &[Interval<T>],
    b: &[Interval<U>],
    runtime: &R,
) -> Vec<Endpoint> {
    let n = a.len();
    let m = b.len();
    let mut endpoints = vec![
        Endpoint::new(0, 0, Extreme::Lower, Origin::A);
        2 * (n + m)
    ];

    let a_lower = runtime.map(a, |iv| Endpoint::new(iv.id, iv.lower, Extreme::Lower, Origin::A));
    let a_upper = runtime.map(a, |iv| Endpoint::new(iv.id, iv.upper, Extreme::Upper, Origin::A));
    let b_lower = runtime.map(b, |iv| Endpoint::new(iv.id, iv.lower, Extreme::Lower, Origin::B));
    let b_upper = runtime.map(b, |iv| Endpoint::new(iv.id, iv.upper, Extreme::Upper, Origin::B));

    endpoints[0..n].copy_from_slice(&a_lower);
    endpoints[n..2 * n].copy_from_slice(&a_upper);
    endpoints[2 * n..2 * n + m].copy_from_slice(&b_lower);
    endpoints[2 * n + m..2 * (n + m)].copy_from_slice(&b_upper);

    endpoints
}

/// Stage 2 (spec §4.2): total order over endpoints, via `Endpoint`'s `Ord`.
fn sort<R: ParallelRuntime>(mut endpoints: Vec<Endpoint>, runtime: &R) -> Vec<Endpoint> {
    runtime.sort(&mut endpoints, |x, y| x.cmp(y));
    endpoints
}

/// Stage 3 (spec §4.3): scatter each A-endpoint's sorted position back to
/// its interval id. Safe as an unsynchronized scatter because each target
/// cell is written at most once (endpoint uniqueness invariant, spec §3).
fn index(endpoints: &[Endpoint], n: usize) -> (Vec<usize>, Vec<usize>) {
    let mut left_idx = vec![0usize; n];
    let mut right_idx = vec![0usize; n];
    for (i, ep) in endpoints.iter().enumerate() {
        if ep.origin == Origin::A {
            match ep.extreme {
                Extreme::Lower => left_idx[ep.id as usize] = i,
                Extreme::Upper => right_idx[ep.id as usize] = i,
            }
        }
    }
    (left_idx, right_idx)
}

/// Stage 4 (spec §4.4): two independent tagged inclusive scans.
fn tagged_scans<R: ParallelRuntime>(endpoints: &[Endpoint], runtime: &R) -> (Vec<i64>, Vec<i64>) {
    let lower_b_flags: Vec<i64> = endpoints
        .iter()
        .map(|ep| (ep.origin == Origin::B && ep.extreme == Extreme::Lower) as i64)
        .collect();
    let upper_b_flags: Vec<i64> = endpoints
        .iter()
        .map(|ep| (ep.origin == Origin::B && ep.extreme == Extreme::Upper) as i64)
        .collect();

    let n_lower_b = runtime.inclusive_scan(&lower_b_flags, 0i64, |a, b| a + b);
    let n_upper_b = runtime.inclusive_scan(&upper_b_flags, 0i64, |a, b| a + b);
    (n_lower_b, n_upper_b)
}

/// Stage 5 (spec §4.5): `counts[i] = n_lower_b[right_idx[i]] - n_upper_b[left_idx[i]]`,
/// then reduce to the total.
fn extract_and_reduce<R: ParallelRuntime>(
    left_idx: &[usize],
    right_idx: &[usize],
    n_lower_b: &[i64],
    n_upper_b: &[i64],
    m: usize,
    runtime: &R,
) -> Result<(Vec<i32>, i64)> {
    let n = left_idx.len();
    let indices: Vec<usize> = (0..n).collect();
    let counts_i64: Vec<i64> = runtime.map(&indices, |&i| {
        n_lower_b[right_idx[i]] - n_upper_b[left_idx[i]]
    });

    let mut counts = Vec::with_capacity(n);
    for (i, &c) in counts_i64.iter().enumerate() {
        if c < 0 || c as u64 > m as u64 {
            return Err(Error::InvalidInterval {
                index: i,
                reason: format!("derived count {} out of range [0, {}]", c, m),
            });
        }
        counts.push(c as i32);
    }

    // Reduce in i128 so a pathological input can't silently wrap the
    // accumulator before we get a chance to report Overflow (spec §7).
    let widened: Vec<i128> = counts_i64.iter().map(|&c| c as i128).collect();
    let total_wide = runtime.reduce(&widened, 0i128, |a, b| a + b);
    let total = i64::try_from(total_wide).map_err(|_| Error::Overflow)?;
    Ok((counts, total))
}

// Clippy allows for the whole crate
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

//! A parallel sort-and-scan engine for counting interval intersections.
//!
//! Given two sets of closed integer intervals `A` and `B`, this crate
//! computes, for every interval in `A`, how many intervals in `B` it
//! intersects, plus the grand total across all of `A` — without ever
//! materializing the pairwise intersection matrix. The counting pipeline
//! (materialize endpoints, sort, index, tagged prefix scans, extract and
//! reduce) is expressed against the [`backend::ParallelRuntime`] trait, so it
//! runs identically whether the backend is single-threaded or Rayon-backed.
//!
//! # Example
//!
//! ```rust
//! use pisect::{config::EngineConfig, engine::count_intersections, interval::Interval};
//!
//! let a = vec![Interval::closed(0, 10, 20), Interval::closed(1, 30, 40)];
//! let b = vec![Interval::closed(0, 15, 25)];
//!
//! let (counts, total) = count_intersections(&a, &b, EngineConfig::default()).unwrap();
//! assert_eq!(counts, vec![1, 0]);
//! assert_eq!(total, 1);
//! ```

pub mod backend;
pub mod bench_gen;
pub mod config;
pub mod endpoint;
pub mod engine;
pub mod error;
pub mod interval;
pub mod io;

pub use config::{Backend, EngineConfig};
pub use engine::count_intersections;
pub use error::{Error, Result};
pub use interval::Interval;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backend::{ParallelRuntime, RayonRuntime, SequentialRuntime};
    pub use crate::config::{Backend, EngineConfig};
    pub use crate::engine::count_intersections;
    pub use crate::error::{Error, Result};
    pub use crate::interval::Interval;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() {
        let a = vec![Interval::closed(0, 10, 20), Interval::closed(1, 100, 200)];
        let b = vec![Interval::closed(0, 15, 25), Interval::closed(1, 18, 19)];

        let (counts, total) = count_intersections(&a, &b, EngineConfig::default()).unwrap();

        assert_eq!(counts, vec![2, 0]);
        assert_eq!(total, 2);
    }

    #[test]
    fn test_sequential_and_rayon_backends_agree() {
        let a = vec![Interval::closed(0, 0, 50), Interval::closed(1, 60, 100)];
        let b = vec![Interval::closed(0, 10, 20), Interval::closed(1, 90, 95)];

        let seq = count_intersections(&a, &b, EngineConfig::new(Backend::Sequential)).unwrap();
        let par = count_intersections(&a, &b, EngineConfig::new(Backend::Rayon)).unwrap();

        assert_eq!(seq, par);
    }
}

//! Synthetic random interval generation for the CLI's `-N` benchmark mode
//! (spec §6).
//!
//! Simplified from the teacher's `commands::generate` dataset generator:
//! that module builds BED files against a weighted human-genome chromosome
//! model with clustering and hotspots. The counting core has no chromosome
//! concept at all (one contig's worth of intervals per call), so this keeps
//! only the part that transfers: seeded `SmallRng` sampling of closed
//! `[lower, upper]` spans over a single coordinate axis.

use crate::interval::Interval;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Bounds for synthetic interval generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerateConfig {
    /// Number of intervals to produce.
    pub count: usize,
    /// Inclusive bounds of the coordinate axis intervals are drawn from.
    pub axis_max: i32,
    /// Inclusive bounds on interval length.
    pub len_min: i32,
    pub len_max: i32,
    /// RNG seed, for reproducible benchmark runs.
    pub seed: u64,
}

impl GenerateConfig {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            axis_max: 1_000_000_000,
            len_min: 1,
            len_max: 10_000,
            seed,
        }
    }
}

/// Generate `config.count` random closed intervals with dense, zero-based ids.
pub fn generate(config: &GenerateConfig) -> Vec<Interval<()>> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut out = Vec::with_capacity(config.count);
    for id in 0..config.count {
        let len = rng.gen_range(config.len_min..=config.len_max);
        let max_start = (config.axis_max - len).max(0);
        let lower = rng.gen_range(0..=max_start);
        let upper = lower + len;
        out.push(Interval::closed(id as u32, lower, upper));
    }
    out
}

//! Engine configuration: selects the execution backend for a call to
//! [`crate::engine::count_intersections`].
//!
//! Unlike a compile-time feature flag, this is a small, cheaply-constructed
//! value the caller builds once and passes in, per spec §5's "backend
//! abstraction" and §9's design note that backend selection must be a
//! runtime-selected strategy parameter rather than a compile-time flag.

use crate::backend::PARALLEL_THRESHOLD;

/// Which concrete [`ParallelRuntime`] a call should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Single-threaded; appropriate for small inputs or deterministic tests.
    Sequential,
    /// Rayon thread-pool backed; appropriate for large inputs.
    #[default]
    Rayon,
}

/// Engine-wide configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    pub backend: Backend,
}

impl EngineConfig {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Pick [`Backend::Sequential`] below `threshold` total endpoints,
    /// [`Backend::Rayon`] at or above it. Mirrors the teacher's
    /// `parallel::PARALLEL_THRESHOLD` small-input fallback, generalized from
    /// "interval count" to "endpoint count" (the quantity the engine's
    /// stages actually scan over).
    pub fn auto(total_endpoints: usize) -> Self {
        if total_endpoints < PARALLEL_THRESHOLD {
            Self::new(Backend::Sequential)
        } else {
            Self::new(Backend::Rayon)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_picks_sequential_for_small_input() {
        let cfg = EngineConfig::auto(100);
        assert_eq!(cfg.backend, Backend::Sequential);
    }

    #[test]
    fn test_auto_picks_rayon_for_large_input() {
        let cfg = EngineConfig::auto(1_000_000);
        assert_eq!(cfg.backend, Backend::Rayon);
    }
}

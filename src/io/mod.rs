//! Out-of-core input collaborators (spec §6).
//!
//! These modules produce `Interval` batches for the counting core; none of
//! them are part of the algorithmic core itself, and `engine.rs` never
//! depends on anything in here.

#[cfg(feature = "bam")]
pub mod bam;
pub mod bed;

pub use bed::{BedRegion, ContigTable};

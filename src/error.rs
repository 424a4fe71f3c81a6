//! Error taxonomy for the counting engine and its I/O collaborators.

use std::io;
use thiserror::Error;

/// Errors surfaced by [`crate::engine::count_intersections`] and its
/// collaborators.
///
/// The engine performs no local recovery: any of these variants is a fatal
/// failure of the call, and no partial `counts` vector is returned alongside
/// them.
#[derive(Error, Debug)]
pub enum Error {
    /// `lower > upper`, or `id` fell outside `[0, n)` for its owning set.
    #[error("invalid interval at index {index}: {reason}")]
    InvalidInterval { index: usize, reason: String },

    /// A working buffer could not be allocated.
    #[error("allocation failure while sizing buffers for {n_endpoints} endpoints")]
    AllocationFailure { n_endpoints: usize },

    /// The total pair count would not fit the chosen accumulator width.
    #[error("intersection total overflowed the 64-bit accumulator")]
    Overflow,

    /// I/O error while reading a BAM or BED collaborator input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A BED line failed to parse.
    #[error("BED parse error at line {line}: {message}")]
    BedParse { line: usize, message: String },

    /// A BAM/contig lookup failed.
    #[error("BAM error: {0}")]
    Bam(String),
}

pub type Result<T> = std::result::Result<T, Error>;

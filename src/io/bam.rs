//! Streaming BAM alignment reader (out-of-core collaborator, spec §6).
//!
//! Grounded on the pack's one BAM-reading reference (`rust_htslib::bam`):
//! open by path, read the header's target table once, then iterate records,
//! converting each mapped alignment's `(pos, reference_end)` span into a
//! 1-based inclusive `Interval`. Feature-gated behind `bam` since
//! `rust-htslib` is the one dependency here with no counterpart in the
//! teacher's own stack.

use crate::error::{Error, Result};
use crate::interval::Interval;
use rust_htslib::bam::ext::BamRecordExtensions;
use rust_htslib::bam::{self, Read as _};
use std::collections::HashMap;
use std::path::Path;

/// Read every mapped alignment from a BAM file, grouped by target (contig) id.
///
/// Unmapped records and records with a negative `tid` are skipped. Within
/// each contig group, intervals are assigned dense, zero-based ids in file
/// order, matching the `id == position` invariant the counting core requires.
pub fn read_grouped_by_contig<P: AsRef<Path>>(
    path: P,
) -> Result<HashMap<i32, Vec<Interval<()>>>> {
    let mut reader = bam::Reader::from_path(path).map_err(|e| Error::Bam(e.to_string()))?;

    let mut groups: HashMap<i32, Vec<Interval<()>>> = HashMap::new();
    for record in reader.records() {
        let rec = record.map_err(|e| Error::Bam(e.to_string()))?;
        if rec.is_unmapped() {
            continue;
        }
        let tid = rec.tid();
        if tid < 0 {
            continue;
        }

        let pos = rec.pos();
        let end = rec.reference_end();
        if end <= pos {
            continue;
        }

        // 0-based half-open [pos, end) -> 1-based closed [pos+1, end].
        let lower = (pos + 1) as i32;
        let upper = end as i32;

        let bucket = groups.entry(tid).or_default();
        let id = bucket.len() as u32;
        bucket.push(Interval::closed(id, lower, upper));
    }

    Ok(groups)
}

/// Build a `(name, tid)` table from a BAM file's header, for resolving BED
/// contig names against this file's target ids (spec §6).
pub fn read_contig_names<P: AsRef<Path>>(path: P) -> Result<Vec<(String, i32)>> {
    let reader = bam::Reader::from_path(path).map_err(|e| Error::Bam(e.to_string()))?;
    let header = reader.header().to_owned();

    let mut names = Vec::with_capacity(header.target_count() as usize);
    for tid in 0..header.target_count() {
        let raw = header.tid2name(tid).to_owned();
        let name = std::str::from_utf8(&raw)
            .map_err(|_| Error::Bam(format!("non-UTF-8 contig name for tid {tid}")))?
            .to_string();
        names.push((name, tid as i32));
    }
    Ok(names)
}

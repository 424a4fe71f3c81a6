//! CLI driver for the interval-intersection counting engine.
//!
//! Usage: pisect [-m BAM_file -d BED_file] [-N n_intervals] [-r nreps]
//!
//! Mirrors the original C++ driver's flag set one-for-one: either `-N`
//! generates a random benchmark input, or `-m`/`-d` together load real
//! alignment/target data. All progress and error reporting lives here;
//! the engine crate itself never prints anything.

use clap::Parser;
use pisect::bench_gen::GenerateConfig;
use pisect::config::EngineConfig;
use pisect::engine::count_intersections;
use pisect::error::{Error, Result};
#[cfg(feature = "bam")]
use pisect::interval::Interval;
#[cfg(feature = "bam")]
use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "pisect")]
#[command(author = "Manish Kumar Bobbili")]
#[command(version)]
#[command(about = "Count interval intersections between two sets using a parallel sort-and-scan engine", long_about = None)]
struct Cli {
    /// BAM file with alignment intervals
    #[arg(short = 'm', value_name = "BAM_file_name")]
    bam: Option<PathBuf>,

    /// BED file with target intervals
    #[arg(short = 'd', value_name = "BED_file_name")]
    bed: Option<PathBuf>,

    /// Generate n_intervals random intervals (half A, half B) instead of
    /// reading BAM/BED input
    #[arg(short = 'N', value_name = "n_intervals")]
    n_intervals: Option<usize>,

    /// Number of replications to run
    #[arg(short = 'r', default_value_t = 1, value_name = "nreps")]
    nreps: usize,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.n_intervals {
        Some(n) => run_random_input(n, cli.nreps),
        None => match (cli.bam, cli.bed) {
            (Some(bam), Some(bed)) => run_bam_and_bed(&bam, &bed, cli.nreps),
            _ => {
                eprintln!(
                    "FATAL: You must either provide a number of intervals with -N\n\
                     or specify BAM and BED files using -m and -d\n"
                );
                process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_random_input(n: usize, nreps: usize) -> Result<()> {
    let mut total_elapsed = std::time::Duration::ZERO;

    for r in 0..nreps {
        println!("**");
        println!("** Replication {r} of {nreps}");
        println!("**");
        println!("Generating random input...");

        let half = n / 2;
        let a = pisect::bench_gen::generate(&GenerateConfig::new(half, 2 * r as u64));
        let b = pisect::bench_gen::generate(&GenerateConfig::new(half, 2 * r as u64 + 1));

        let config = EngineConfig::auto(2 * (a.len() + b.len()));
        let start = Instant::now();
        let (_, total) = count_intersections(&a, &b, config)?;
        let elapsed = start.elapsed();
        total_elapsed += elapsed;

        println!("{total} intersections");
    }

    println!("Intersection time {:.6}", total_elapsed.as_secs_f64() / nreps as f64);
    Ok(())
}

#[cfg(feature = "bam")]
fn run_bam_and_bed(bam_path: &std::path::Path, bed_path: &std::path::Path, nreps: usize) -> Result<()> {
    use pisect::io::{bam, bed};

    let contig_names = bam::read_contig_names(bam_path)?;
    let contigs = bed::ContigTable::from_names(contig_names.clone());
    let alignments = bam::read_grouped_by_contig(bam_path)?;
    println!("Loaded {} alignments", alignments.len());

    let regions = bed::read_regions(bed_path)?;
    let mut targets: HashMap<i32, Vec<(i32, i32)>> = HashMap::new();
    for region in regions {
        let tid = contigs.resolve(&region.contig).ok_or_else(|| {
            Error::BedParse {
                line: 0,
                message: format!("contig '{}' not found in BAM header", region.contig),
            }
        })?;
        targets.entry(tid).or_default().push((region.start, region.end));
    }
    println!("Loaded {} target intervals", targets.len());

    let mut total_elapsed = std::time::Duration::ZERO;
    for r in 0..nreps {
        println!("**");
        println!("** Replication {r} of {nreps}");
        println!("**");

        for (name, tid) in &contig_names {
            let (Some(contig_alignments), Some(contig_targets)) =
                (alignments.get(tid), targets.get(tid))
            else {
                continue;
            };

            let windows: Vec<Interval<()>> = contig_targets
                .iter()
                .enumerate()
                .map(|(id, &(start, end))| Interval::closed(id as u32, start, end))
                .collect();

            print!(
                "Contig \"{name}\" has {} alignments and {} target intervals... ",
                contig_alignments.len(),
                windows.len()
            );

            let config = EngineConfig::auto(2 * (contig_alignments.len() + windows.len()));
            let start = Instant::now();
            let (_, total) = count_intersections(contig_alignments, &windows, config)?;
            let elapsed = start.elapsed();
            total_elapsed += elapsed;

            println!("{total} intersections");
        }
    }

    println!(
        "**\n** Average intersection time (s) {:.6}\n**\n",
        total_elapsed.as_secs_f64() / nreps as f64
    );
    Ok(())
}

#[cfg(not(feature = "bam"))]
fn run_bam_and_bed(_bam_path: &std::path::Path, _bed_path: &std::path::Path, _nreps: usize) -> Result<()> {
    Err(Error::Bam(
        "this build was compiled without BAM support; rebuild with --features bam".to_string(),
    ))
}

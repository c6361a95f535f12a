//! Best-covered point locator for L1 range swarms.
//!
//! Reads newline-separated `pos=<x,y,z>, r=R` records, reports the range
//! with the largest radius and how many centers it covers, then runs the
//! octree search for the lattice point covered by the most ranges.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use range_search::{parse_ranges, search, RangeSet};

/// Best-covered point locator for L1 range swarms.
#[derive(Parser, Debug)]
#[command(name = "locate_swarm")]
#[command(about = "Finds the lattice point covered by the most ranges")]
struct Args {
	/// Path to a swarm file, one `pos=<x,y,z>, r=R` record per line.
	input: PathBuf,

	/// Print only the winning point's distance from the origin.
	#[arg(short, long)]
	quiet: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let text = fs::read_to_string(&args.input)
		.with_context(|| format!("Failed to read swarm file: {}", args.input.display()))?;
	let records = parse_ranges(&text).context("Parsing swarm records")?;
	let set = RangeSet::new(records).context("Validating swarm records")?;

	if args.quiet {
		println!("{}", search(&set).distance);
		return Ok(());
	}

	println!("Loaded {} ranges from: {}", set.len(), args.input.display());

	let strongest = set.strongest();
	println!(
		"Strongest range: pos=<{},{},{}>, r={} covering {} centers",
		strongest.center.x,
		strongest.center.y,
		strongest.center.z,
		strongest.radius,
		set.coverage_of_strongest()
	);

	println!("\nSearching...");
	let outcome = search(&set);
	println!(
		"  ✓ best point: ({}, {}, {})",
		outcome.point.x, outcome.point.y, outcome.point.z
	);
	println!("  ✓ ranges covering it: {}", outcome.count);
	println!("  ✓ distance from origin: {}", outcome.distance);

	let stats = outcome.stats;
	println!(
		"\nExpanded {} tiles, enqueued {}, peak frontier {}, {} µs",
		stats.tiles_expanded, stats.tiles_enqueued, stats.peak_frontier_len, stats.elapsed_us
	);

	Ok(())
}

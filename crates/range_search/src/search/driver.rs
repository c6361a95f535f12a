//! Best-first search driver.
//!
//! Seeds one root tile covering every range, then pops the best tile and
//! subdivides it until a single lattice point surfaces. A tile's count
//! never understates any point inside it, so the first unit tile popped is
//! already the answer; no other frontier entry can beat it and the
//! runner-up bound never has to be revisited.

use glam::I64Vec3;
use web_time::Instant;

use super::queue::Frontier;
use super::tile::Tile;
use crate::error::InputError;
use crate::range::{Range, RangeSet};

/// Counters describing one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
  /// Tiles popped and split into octants.
  pub tiles_expanded: usize,
  /// Tiles pushed onto the frontier, root included.
  pub tiles_enqueued: usize,
  /// Largest simultaneous frontier occupancy.
  pub peak_frontier_len: usize,
  /// Wall-clock duration of the run, in microseconds.
  pub elapsed_us: u64,
}

/// The winning lattice point and how the search got there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
  /// Point covered by the most ranges, nearest the origin among ties.
  pub point: I64Vec3,
  /// Number of ranges covering `point`.
  pub count: usize,
  /// Manhattan distance from the origin to `point`.
  pub distance: i64,
  /// Run counters.
  pub stats: SearchStats,
}

/// Smallest power of two at or above `n`, computed in integers.
fn next_pow2(n: i64) -> i64 {
  debug_assert!(n >= 1, "power-of-two bound needs a positive seed, got {n}");
  (n as u64).next_power_of_two() as i64
}

/// Builds the root tile enclosing every point any range can reach.
///
/// With `bound` the smallest power of two above the set's max reach, the
/// cube `[-bound, bound - 1]` per axis holds every reachable point, and
/// its power-of-two edge halves cleanly all the way down to unit tiles.
pub fn root_tile(ranges: &RangeSet) -> Tile {
  let bound = next_pow2(ranges.max_reach() + 1);
  Tile::new(I64Vec3::splat(-bound), bound * 2, ranges)
}

/// Runs the search to the first unit tile and returns it as the outcome.
///
/// Terminates because every expansion halves the edge and the root edge is
/// finite. The frontier cannot drain first: children cover their parent
/// exactly, so the subtree around any covered point survives every
/// expansion down to its unit tile.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "range_search::search"))]
pub fn search(ranges: &RangeSet) -> SearchOutcome {
  let started = Instant::now();
  let mut stats = SearchStats::default();

  let mut frontier = Frontier::new();
  frontier.push(root_tile(ranges));
  stats.tiles_enqueued += 1;

  loop {
    let tile = frontier
      .pop()
      .expect("frontier cannot drain before a unit tile is reached");

    if tile.is_point() {
      stats.peak_frontier_len = frontier.peak_len();
      stats.elapsed_us = started.elapsed().as_micros() as u64;
      return SearchOutcome {
        point: tile.corner,
        count: tile.count,
        distance: tile.origin_distance,
        stats,
      };
    }

    for child in tile.subdivide(ranges) {
      frontier.push(child);
      stats.tiles_enqueued += 1;
    }
    stats.tiles_expanded += 1;
  }
}

/// Validates `ranges` and searches for the best-covered lattice point.
///
/// This is the one-call entry point: rejects malformed input up front,
/// then runs [`search`] on the validated set.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "range_search::find_best_point"))]
pub fn find_best_point(ranges: Vec<Range>) -> Result<SearchOutcome, InputError> {
  let set = RangeSet::new(ranges)?;
  Ok(search(&set))
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

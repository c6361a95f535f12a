//! Best-first frontier ordering.
//!
//! The heap order is the whole correctness argument of the search: a
//! tile's count upper-bounds every point inside it, so when the best tile
//! is a single point no other frontier entry can beat it.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::tile::Tile;

/// Composite priority key, compared lexicographically.
pub type SearchKey = (usize, Reverse<i64>, Reverse<i64>, Reverse<[i64; 3]>);

impl Tile {
  /// Priority key: most intersections first, then nearest the origin,
  /// then smallest size, then lexicographically smallest corner.
  ///
  /// The first three levels carry the optimality argument. The corner
  /// level only makes the order total, so pop sequences are identical
  /// across runs. Key equality implies tile equality: the key carries
  /// every field.
  pub fn cmp_key(&self) -> SearchKey {
    (
      self.count,
      Reverse(self.origin_distance),
      Reverse(self.size),
      Reverse(self.corner.to_array()),
    )
  }
}

impl Ord for Tile {
  fn cmp(&self, other: &Self) -> Ordering {
    self.cmp_key().cmp(&other.cmp_key())
  }
}

impl PartialOrd for Tile {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Max-heap frontier over [`Tile::cmp_key`] with peak-occupancy tracking.
#[derive(Debug, Default)]
pub struct Frontier {
  heap: BinaryHeap<Tile>,
  peak_len: usize,
}

impl Frontier {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, tile: Tile) {
    self.heap.push(tile);
    self.peak_len = self.peak_len.max(self.heap.len());
  }

  /// Removes and returns the best tile under the search order.
  pub fn pop(&mut self) -> Option<Tile> {
    self.heap.pop()
  }

  pub fn len(&self) -> usize {
    self.heap.len()
  }

  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  /// Largest simultaneous occupancy seen so far.
  pub fn peak_len(&self) -> usize {
    self.peak_len
  }
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod queue_test;

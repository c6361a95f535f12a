//! L1 signal ranges and the validated range set.
//!
//! A [`Range`] is a closed Manhattan-distance ball on the integer lattice.
//! The [`RangeSet`] owns the full collection and answers the one geometric
//! query the search needs: how many ranges reach into an axis-aligned box.

use glam::I64Vec3;
use rayon::prelude::*;

use crate::error::InputError;

/// Set size at which box-intersection counting switches to rayon.
///
/// Below this the sequential scan wins; the fork/join overhead is larger
/// than the whole predicate pass on puzzle-scale sets.
pub const PARALLEL_CUTOVER: usize = 4096;

/// Manhattan (L1) distance between two lattice points.
#[inline]
pub fn manhattan(a: I64Vec3, b: I64Vec3) -> i64 {
  let d = (a - b).abs();
  d.x + d.y + d.z
}

/// A closed L1 ball: every lattice point within `radius` of `center`.
///
/// Radius 0 is a valid single-point range. Negative radii are representable
/// but rejected by [`RangeSet::new`] before any search runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
  /// Ball center.
  pub center: I64Vec3,
  /// Coverage reach in Manhattan distance.
  pub radius: i64,
}

impl Range {
  pub fn new(center: I64Vec3, radius: i64) -> Self {
    Self { center, radius }
  }

  /// True when `point` lies inside this range (boundary included).
  #[inline]
  pub fn covers(&self, point: I64Vec3) -> bool {
    manhattan(self.center, point) <= self.radius
  }

  /// True when this range covers at least one lattice point of the closed
  /// box `[lo, hi]`.
  ///
  /// Clamping the center into the box yields the box point nearest to the
  /// center under L1, so one distance test decides intersection exactly.
  #[inline]
  pub fn reaches_box(&self, lo: I64Vec3, hi: I64Vec3) -> bool {
    manhattan(self.center.clamp(lo, hi), self.center) <= self.radius
  }

  /// Largest absolute coordinate this range can reach on any axis.
  #[inline]
  pub fn reach(&self) -> i64 {
    self.center.abs().max_element() + self.radius
  }
}

/// The validated, immutable collection of ranges a search runs against.
///
/// Construction rejects empty sets and negative radii, so every consumer
/// can rely on at least one well-formed range being present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSet {
  ranges: Vec<Range>,
}

impl RangeSet {
  /// Validates and wraps a collection of ranges.
  pub fn new(ranges: Vec<Range>) -> Result<Self, InputError> {
    if ranges.is_empty() {
      return Err(InputError::EmptySet);
    }
    if let Some((index, range)) = ranges.iter().enumerate().find(|(_, r)| r.radius < 0) {
      return Err(InputError::NegativeRadius {
        index,
        radius: range.radius,
      });
    }
    Ok(Self { ranges })
  }

  pub fn len(&self) -> usize {
    self.ranges.len()
  }

  /// Always false: the constructor rejects empty sets.
  pub fn is_empty(&self) -> bool {
    self.ranges.is_empty()
  }

  pub fn ranges(&self) -> &[Range] {
    &self.ranges
  }

  /// How many ranges cover at least one lattice point of the closed box
  /// `[lo, hi]`.
  ///
  /// The scan is embarrassingly parallel and order-independent, so the
  /// rayon path above [`PARALLEL_CUTOVER`] returns exactly the sequential
  /// count.
  pub fn count_intersecting_box(&self, lo: I64Vec3, hi: I64Vec3) -> usize {
    debug_assert!(
      lo.cmple(hi).all(),
      "box corners must be ordered: lo {lo}, hi {hi}"
    );
    if self.ranges.len() >= PARALLEL_CUTOVER {
      self
        .ranges
        .par_iter()
        .filter(|range| range.reaches_box(lo, hi))
        .count()
    } else {
      self
        .ranges
        .iter()
        .filter(|range| range.reaches_box(lo, hi))
        .count()
    }
  }

  /// The range with the largest radius. Ties keep the earliest record, so
  /// the answer is stable across runs.
  pub fn strongest(&self) -> Range {
    let mut best = self.ranges[0];
    for range in &self.ranges[1..] {
      if range.radius > best.radius {
        best = *range;
      }
    }
    best
  }

  /// How many range centers the strongest range covers (its own included).
  pub fn coverage_of_strongest(&self) -> usize {
    let strongest = self.strongest();
    self
      .ranges
      .iter()
      .filter(|range| strongest.covers(range.center))
      .count()
  }

  /// Largest absolute coordinate any range can reach on any axis. Seeds
  /// the root tile bound.
  pub fn max_reach(&self) -> i64 {
    self
      .ranges
      .iter()
      .map(Range::reach)
      .max()
      .unwrap_or(0)
  }
}

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

//! Cubic lattice tiles and their octant subdivision.
//!
//! A tile is a power-of-two cube of lattice points plus two derived facts
//! baked in at construction: how many ranges reach it and how close it
//! comes to the origin. The search never recomputes either.

use glam::I64Vec3;
use smallvec::SmallVec;

use crate::range::{manhattan, RangeSet};

/// A cube of `size^3` lattice points with derived search facts.
///
/// `corner` is the minimum corner; the cube spans the closed box
/// `[corner, corner + size - 1]` per axis. `size` is always a power of
/// two, so subdivision halves exactly all the way down to single points.
///
/// `count` upper-bounds the coverage of every point inside the tile: any
/// range reaching a point of the tile also reaches the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
  /// Minimum corner of the cube.
  pub corner: I64Vec3,
  /// Edge length in lattice points, always a power of two, at least 1.
  pub size: i64,
  /// How many ranges reach at least one point of the cube.
  pub count: usize,
  /// Manhattan distance from the origin to the nearest point of the cube.
  pub origin_distance: i64,
}

impl Tile {
  /// Builds a tile and derives its count and origin distance.
  pub fn new(corner: I64Vec3, size: i64, ranges: &RangeSet) -> Self {
    debug_assert!(
      size >= 1 && (size & (size - 1)) == 0,
      "tile size must be a power of two, got {size}"
    );
    let max_corner = corner + I64Vec3::splat(size - 1);
    let count = ranges.count_intersecting_box(corner, max_corner);
    let origin_distance = manhattan(I64Vec3::ZERO.clamp(corner, max_corner), I64Vec3::ZERO);
    Self {
      corner,
      size,
      count,
      origin_distance,
    }
  }

  /// Maximum corner of the closed cube.
  #[inline]
  pub fn max_corner(&self) -> I64Vec3 {
    self.corner + I64Vec3::splat(self.size - 1)
  }

  /// True once the tile is a single lattice point.
  #[inline]
  pub fn is_point(&self) -> bool {
    self.size == 1
  }

  /// True when `point` lies inside the closed cube.
  pub fn contains(&self, point: I64Vec3) -> bool {
    point.cmpge(self.corner).all() && point.cmple(self.max_corner()).all()
  }

  /// Splits into eight half-size children covering the same points.
  ///
  /// Octant bit 0 offsets X, bit 1 offsets Y, bit 2 offsets Z. Children
  /// partition the parent exactly: every point lands in exactly one child.
  pub fn subdivide(&self, ranges: &RangeSet) -> SmallVec<[Tile; 8]> {
    debug_assert!(self.size > 1, "cannot subdivide a unit tile");
    let half = self.size / 2;
    let mut children = SmallVec::new();
    for octant in 0..8u8 {
      let offset = I64Vec3::new(
        ((octant & 1) as i64) * half,
        (((octant >> 1) & 1) as i64) * half,
        (((octant >> 2) & 1) as i64) * half,
      );
      children.push(Tile::new(self.corner + offset, half, ranges));
    }
    children
  }
}

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use super::*;
use crate::range::Range;

/// Small deterministic swarm for structural tests.
fn lcg_swarm(seed: u64, len: usize) -> Vec<Range> {
  let mut state = seed;
  let mut step = move || {
    state = state
      .wrapping_mul(6364136223846793005)
      .wrapping_add(1442695040888963407);
    (state >> 33) as i64
  };
  (0..len)
    .map(|_| {
      let center = I64Vec3::new(step() % 32 - 16, step() % 32 - 16, step() % 32 - 16);
      Range::new(center, step().rem_euclid(12))
    })
    .collect()
}

/// Construction derives the intersection count from clamp-to-box tests.
#[test]
fn new_derives_count_from_clamped_distances() {
  let set = RangeSet::new(vec![
    Range::new(I64Vec3::ZERO, 4),
    Range::new(I64Vec3::new(10, 0, 0), 2),
    Range::new(I64Vec3::new(5, 5, 5), 0),
  ])
  .unwrap();

  // Box [0,3]^3: only the origin range reaches in.
  assert_eq!(Tile::new(I64Vec3::ZERO, 4, &set).count, 1);
  // Box [8,11]x[0,3]x[0,3]: only the (10,0,0) range.
  assert_eq!(Tile::new(I64Vec3::new(8, 0, 0), 4, &set).count, 1);
  // Box [0,7]^3 additionally swallows the point range at (5,5,5).
  assert_eq!(Tile::new(I64Vec3::ZERO, 8, &set).count, 2);
}

/// Origin distance is measured to the nearest point of the closed cube.
#[test]
fn origin_distance_uses_nearest_cube_point() {
  let set = RangeSet::new(vec![Range::new(I64Vec3::ZERO, 1)]).unwrap();

  let straddling = Tile::new(I64Vec3::splat(-2), 4, &set);
  assert_eq!(straddling.origin_distance, 0, "origin inside the cube");

  let positive = Tile::new(I64Vec3::new(3, 4, 5), 2, &set);
  assert_eq!(positive.origin_distance, 12, "nearest point is the min corner");

  let negative = Tile::new(I64Vec3::splat(-8), 2, &set);
  assert_eq!(negative.origin_distance, 21, "nearest point is the max corner");
}

/// The cube is closed: both corners are inside, one step out is not.
#[test]
fn contains_is_corner_inclusive() {
  let set = RangeSet::new(vec![Range::new(I64Vec3::ZERO, 1)]).unwrap();
  let tile = Tile::new(I64Vec3::new(-2, 0, 2), 4, &set);
  assert_eq!(tile.max_corner(), I64Vec3::new(1, 3, 5));
  assert!(tile.contains(tile.corner));
  assert!(tile.contains(tile.max_corner()));
  assert!(!tile.contains(tile.corner - I64Vec3::new(1, 0, 0)));
  assert!(!tile.contains(tile.max_corner() + I64Vec3::new(0, 0, 1)));
}

/// Only size-1 tiles are points.
#[test]
fn is_point_at_unit_size() {
  let set = RangeSet::new(vec![Range::new(I64Vec3::ZERO, 1)]).unwrap();
  assert!(Tile::new(I64Vec3::new(7, -3, 0), 1, &set).is_point());
  assert!(!Tile::new(I64Vec3::new(7, -3, 0), 2, &set).is_point());
}

/// Subdivision offsets children by octant bits: X bit 0, Y bit 1, Z bit 2.
#[test]
fn subdivide_places_children_by_octant_bits() {
  let set = RangeSet::new(vec![Range::new(I64Vec3::ZERO, 1)]).unwrap();
  let parent = Tile::new(I64Vec3::new(-2, -2, -2), 4, &set);
  let children = parent.subdivide(&set);

  assert_eq!(children.len(), 8);
  for child in &children {
    assert_eq!(child.size, 2, "children halve the parent edge");
  }
  assert_eq!(children[0].corner, parent.corner);
  assert_eq!(children[1].corner, parent.corner + I64Vec3::new(2, 0, 0));
  assert_eq!(children[2].corner, parent.corner + I64Vec3::new(0, 2, 0));
  assert_eq!(children[4].corner, parent.corner + I64Vec3::new(0, 0, 2));
  assert_eq!(children[7].corner, parent.corner + I64Vec3::splat(2));
}

/// Children partition the parent: every point lands in exactly one child.
#[test]
fn children_partition_parent_exactly() {
  let set = RangeSet::new(lcg_swarm(11, 8)).unwrap();
  let parent = Tile::new(I64Vec3::new(-2, -2, -2), 4, &set);
  let children = parent.subdivide(&set);

  for x in -2..2 {
    for y in -2..2 {
      for z in -2..2 {
        let point = I64Vec3::new(x, y, z);
        let holders = children.iter().filter(|c| c.contains(point)).count();
        assert_eq!(holders, 1, "point {point} must land in exactly one child");
      }
    }
  }
}

/// A child can never intersect more ranges than its parent.
#[test]
fn subdivision_never_increases_count() {
  let set = RangeSet::new(lcg_swarm(0xA5A5, 40)).unwrap();
  let mut stack = vec![Tile::new(I64Vec3::splat(-32), 64, &set)];
  while let Some(tile) = stack.pop() {
    for child in tile.subdivide(&set) {
      assert!(
        child.count <= tile.count,
        "child {:?} exceeds parent count {}",
        child,
        tile.count
      );
      if child.size > 4 {
        stack.push(child);
      }
    }
  }
}

/// Coverage does not leak: a range reaching the parent reaches a child.
#[test]
fn every_range_reaching_parent_reaches_a_child() {
  let set = RangeSet::new(lcg_swarm(77, 24)).unwrap();
  let parent = Tile::new(I64Vec3::splat(-16), 32, &set);
  let children = parent.subdivide(&set);

  for range in set.ranges() {
    if range.reaches_box(parent.corner, parent.max_corner()) {
      assert!(
        children
          .iter()
          .any(|c| range.reaches_box(c.corner, c.max_corner())),
        "range at {} lost during subdivision",
        range.center
      );
    }
  }
}

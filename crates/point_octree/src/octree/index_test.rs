use std::collections::HashSet;

use super::*;
use crate::test_utils::{build_with_capacity, clustered_points, random_points, store_of, unit_axes_points};
use crate::types::Point;

// =========================================================================
// Batch 1: Partition Invariants
// =========================================================================

/// Every point index appears in exactly one leaf.
#[test]
fn test_every_point_in_exactly_one_leaf() {
  let points = random_points(2_000, 1);
  let (_, index) = build_with_capacity(&points, 16);

  let mut seen = HashSet::new();
  for leaf in index.leaves() {
    for &p in leaf.points {
      assert!(seen.insert(p), "point {} appears in two leaves", p);
    }
  }
  assert_eq!(seen.len(), points.len(), "some points are missing from the tree");
}

/// The leaf holding a point has bounds that contain its position.
#[test]
fn test_leaf_bounds_contain_their_points() {
  let points = random_points(2_000, 2);
  let (store, index) = build_with_capacity(&points, 8);

  for leaf in index.leaves() {
    for &p in leaf.points {
      assert!(
        leaf.bounds.contains_point(store.position(p)),
        "point {} at {:?} outside leaf bounds {:?}",
        p,
        store.position(p),
        leaf.bounds
      );
    }
  }
}

/// Descending by octant from the root reaches the leaf that stores the point.
#[test]
fn test_leaf_containing_finds_stored_point() {
  let points = clustered_points(6, 300, 3);
  let (store, index) = build_with_capacity(&points, 12);

  for p in 0..store.len() as u32 {
    let leaf = index.leaf_containing(store.position(p));
    assert!(
      leaf.points.contains(&p),
      "point {} not found in the leaf its position keys to",
      p
    );
  }
}

/// Children bounds tile the parent: union is the parent, overlaps have no
/// volume.
#[test]
fn test_children_bounds_tile_parent() {
  let points = random_points(1_000, 4);
  let (_, index) = build_with_capacity(&points, 4);

  let mut stack = vec![(index.root(), index.bounds())];
  let mut branches = 0;
  while let Some((id, bounds)) = stack.pop() {
    let Some(children) = index.node(id).children() else {
      continue;
    };
    branches += 1;

    let child_bounds: Vec<Aabb3> = (0..8u8).map(|o| bounds.child(o)).collect();
    let union = child_bounds
      .iter()
      .fold(child_bounds[0], |acc, b| acc.including(b.min).including(b.max));
    assert_eq!(union, bounds, "children do not cover parent");

    let total: f32 = child_bounds.iter().map(Aabb3::volume).sum();
    assert!((total - bounds.volume()).abs() <= bounds.volume() * 1e-5);

    for i in 0..8 {
      for j in (i + 1)..8 {
        let a = child_bounds[i];
        let b = child_bounds[j];
        let overlap = (a.max.min(b.max) - a.min.max(b.min)).max(glam::Vec3::ZERO);
        assert_eq!(overlap.element_product(), 0.0, "octants {} and {} overlap", i, j);
      }
    }

    for (octant, &child) in children.iter().enumerate() {
      stack.push((child, child_bounds[octant]));
    }
  }
  assert!(branches > 0, "fixture should produce branches");
}

// =========================================================================
// Batch 2: Threshold Convergence
// =========================================================================

#[test]
fn test_leaves_respect_capacity() {
  for capacity in [1, 4, 16, 128] {
    let points = random_points(3_000, 5 + capacity as u64);
    let (_, index) = build_with_capacity(&points, capacity);
    let stats = index.stats();

    assert!(
      stats.largest_leaf <= capacity,
      "capacity {}: largest leaf {}",
      capacity,
      stats.largest_leaf
    );
    assert_eq!(stats.oversized_leaf_count, 0);
  }
}

#[test]
fn test_small_input_is_single_leaf() {
  let points = random_points(10, 6);
  let (_, index) = build_with_capacity(&points, 10);

  assert!(index.node(index.root()).is_leaf());
  assert_eq!(index.node_count(), 1);
  assert_eq!(index.node(index.root()).points().len(), 10);
}

/// Branches always have 8 children, so node count is 8 * branches + 1.
#[test]
fn test_node_count_shape() {
  let points = random_points(5_000, 7);
  let (_, index) = build_with_capacity(&points, 32);
  let stats = index.stats();

  assert_eq!(stats.node_count, 8 * stats.branch_count + 1);
  assert_eq!(stats.leaf_count, 7 * stats.branch_count + 1);
}

// =========================================================================
// Batch 3: Degenerate Inputs
// =========================================================================

/// More coincident points than a leaf can hold stay in one oversized leaf
/// instead of recursing forever.
#[test]
fn test_coincident_points_make_oversized_leaf() {
  let mut points = vec![Point::new(glam::Vec3::splat(0.3), 0); 50];
  points.extend(random_points(200, 8));
  let (store, index) = build_with_capacity(&points, 4);

  let leaf = index.leaf_containing(glam::Vec3::splat(0.3));
  assert!(leaf.points.len() >= 50, "coincident points were separated");
  assert!(leaf.depth < index.config().max_depth, "should stop before the depth cap");

  let stats = index.stats();
  assert_eq!(stats.oversized_leaf_count, 1);
  assert_eq!(stats.point_count, store.len());
}

/// Near-coincident points that never separate stop at the depth cap.
#[test]
fn test_depth_cap_bounds_recursion() {
  let base = glam::Vec3::new(0.1, 0.2, 0.3);
  let points: Vec<Point> = (0..6)
    .map(|i| Point::new(base + glam::Vec3::splat(i as f32 * 1e-7), 0))
    .collect();
  let store = store_of(&points);
  let config = OctreeConfig::default()
    .with_max_points_per_leaf(1)
    .with_max_depth(5);
  let index = OctreeIndex::build(&store, &config);

  let stats = index.stats();
  assert!(stats.max_depth <= 5);
  assert_eq!(stats.oversized_leaf_count, 1);
  assert_eq!(stats.largest_leaf, 6);
}

#[test]
fn test_empty_store_builds_empty_leaf() {
  let store = CoordinateStore::default();
  let index = OctreeIndex::build(&store, &OctreeConfig::default());

  assert!(index.is_empty());
  assert_eq!(index.node_count(), 1);
  assert!(index.node(index.root()).points().is_empty());
}

/// Points on every face, edge and corner of the root cube land in a leaf
/// whose bounds contain them.
#[test]
fn test_boundary_points_partition_consistently() {
  let mut points = Vec::new();
  for x in [-1.0, 0.0, 1.0] {
    for y in [-1.0, 0.0, 1.0] {
      for z in [-1.0, 0.0, 1.0] {
        points.push(Point::new(glam::Vec3::new(x, y, z), 0));
      }
    }
  }
  let (store, index) = build_with_capacity(&points, 1);

  assert_eq!(index.bounds(), Aabb3::ROOT);
  for p in 0..store.len() as u32 {
    let leaf = index.leaf_containing(store.position(p));
    assert_eq!(leaf.points, &[p], "point {} shares or misses its leaf", p);
    assert!(leaf.bounds.contains_point(store.position(p)));
  }
}

/// Unnormalized input widens the root instead of breaking containment.
#[test]
fn test_out_of_cube_points_widen_root() {
  let points = vec![
    Point::new(glam::Vec3::new(3.0, 0.0, 0.0), 0),
    Point::new(glam::Vec3::new(-0.5, -2.0, 0.5), 0),
    Point::new(glam::Vec3::ZERO, 0),
  ];
  let (store, index) = build_with_capacity(&points, 1);

  assert_eq!(index.bounds().max.x, 3.0);
  assert_eq!(index.bounds().min.y, -2.0);
  for leaf in index.leaves() {
    for &p in leaf.points {
      assert!(leaf.bounds.contains_point(store.position(p)));
    }
  }
}

/// Same point set in another order yields the same leaf contents.
#[test]
fn test_build_is_order_independent() {
  let points = random_points(500, 9);
  let mut reversed = points.clone();
  reversed.reverse();

  let (_, forward) = build_with_capacity(&points, 8);
  let (_, backward) = build_with_capacity(&reversed, 8);

  let last = points.len() as u32 - 1;
  let shapes = |index: &OctreeIndex, remap: &dyn Fn(u32) -> u32| -> Vec<Vec<u32>> {
    index
      .leaves()
      .iter()
      .map(|leaf| {
        let mut ids: Vec<u32> = leaf.points.iter().map(|&p| remap(p)).collect();
        ids.sort_unstable();
        ids
      })
      .collect()
  };

  assert_eq!(forward.stats(), backward.stats());
  assert_eq!(shapes(&forward, &|p| p), shapes(&backward, &|p| last - p));
}

// =========================================================================
// Batch 4: Scenario
// =========================================================================

#[test]
fn test_unit_axes_fixture_shape() {
  let (_, index) = build_with_capacity(&unit_axes_points(), 1);

  let non_empty = index.leaves().iter().filter(|l| !l.points.is_empty()).count();
  assert!(non_empty >= 4, "expected at least 4 non-empty leaves, got {}", non_empty);
  assert_eq!(index.stats().largest_leaf, 1);
}

//! Test utilities: point fixtures and a brute-force reference search.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::octree::{Neighbor, OctreeConfig, OctreeIndex};
use crate::store::CoordinateStore;
use crate::types::{Point, PointIndex};

// =============================================================================
// Fixtures
// =============================================================================

/// `count` points uniformly distributed in the root cube.
pub fn random_points(count: usize, seed: u64) -> Vec<Point> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count)
    .map(|_| Point::new(random_position(&mut rng), rng.random()))
    .collect()
}

/// Points packed into a few tight clusters, the skewed distribution that
/// stresses pruning.
pub fn clustered_points(clusters: usize, per_cluster: usize, seed: u64) -> Vec<Point> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut points = Vec::with_capacity(clusters * per_cluster);
  for _ in 0..clusters {
    let center = random_position(&mut rng) * 0.9;
    for _ in 0..per_cluster {
      let offset = random_position(&mut rng) * 0.05;
      points.push(Point::new(center + offset, 0));
    }
  }
  points
}

pub fn random_position(rng: &mut StdRng) -> Vec3 {
  Vec3::new(
    rng.random_range(-1.0..=1.0),
    rng.random_range(-1.0..=1.0),
    rng.random_range(-1.0..=1.0),
  )
}

/// The four-point fixture: origin plus the three unit axis points.
pub fn unit_axes_points() -> Vec<Point> {
  vec![
    Point::new(Vec3::ZERO, 0),
    Point::new(Vec3::X, 1),
    Point::new(Vec3::Y, 2),
    Point::new(Vec3::Z, 3),
  ]
}

pub fn store_of(points: &[Point]) -> CoordinateStore {
  CoordinateStore::from_points(points).expect("fixture points are finite")
}

pub fn build_with_capacity(points: &[Point], max_points_per_leaf: usize) -> (CoordinateStore, OctreeIndex) {
  let store = store_of(points);
  let config = OctreeConfig::default().with_max_points_per_leaf(max_points_per_leaf);
  let index = OctreeIndex::build(&store, &config);
  (store, index)
}

// =============================================================================
// Reference Search
// =============================================================================

/// Exhaustive linear scan, same distance arithmetic as the index.
pub fn brute_force_nearest(
  store: &CoordinateStore,
  query: Vec3,
  exclude: Option<PointIndex>,
) -> Option<Neighbor> {
  let mut best: Option<(PointIndex, f32)> = None;
  for index in 0..store.len() as PointIndex {
    if Some(index) == exclude {
      continue;
    }
    let distance_sq = store.position(index).distance_squared(query);
    if best.map_or(true, |(_, best_sq)| distance_sq < best_sq) {
      best = Some((index, distance_sq));
    }
  }
  best.map(|(index, distance_sq)| Neighbor {
    index,
    distance: distance_sq.sqrt(),
  })
}

/// Assert an index answer matches the reference. Distances must agree
/// exactly; indices may differ only on a genuine tie.
pub fn assert_same_neighbor(
  store: &CoordinateStore,
  query: Vec3,
  actual: Option<Neighbor>,
  expected: Option<Neighbor>,
) {
  match (actual, expected) {
    (None, None) => {}
    (Some(actual), Some(expected)) => {
      assert_eq!(
        actual.distance, expected.distance,
        "distance mismatch for query {:?}: index {:?}, brute force {:?}",
        query, actual, expected
      );
      if actual.index != expected.index {
        let a = store.position(actual.index).distance_squared(query);
        let b = store.position(expected.index).distance_squared(query);
        assert_eq!(a, b, "different neighbors without a tie for {:?}", query);
      }
    }
    (actual, expected) => panic!(
      "presence mismatch for query {:?}: index {:?}, brute force {:?}",
      query, actual, expected
    ),
  }
}

//! Exact nearest-neighbor search over an [`OctreeIndex`].
//!
//! Branch-and-bound depth-first traversal:
//!
//! 1. Descend into the octant containing the query first; it most likely
//!    holds the answer and tightens the best distance early.
//! 2. Rank the 7 siblings by the distance from the query to their bounds
//!    (zero if inside) and visit them nearest-first.
//! 3. A sibling whose box is no closer than the best hit so far cannot
//!    improve it; it and every sibling after it are skipped.
//!
//! All comparisons use squared distances; the square root is taken once
//! for the returned [`Neighbor`].

use glam::Vec3;
use smallvec::SmallVec;

use super::{Aabb3, NodeId, OctreeIndex, OctreeNode};
use crate::store::CoordinateStore;
use crate::types::PointIndex;

/// Result of a nearest-neighbor query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
  /// Index of the closest point.
  pub index: PointIndex,
  /// Euclidean distance in normalized space.
  pub distance: f32,
}

impl OctreeIndex {
  /// Closest stored point to an arbitrary position.
  ///
  /// Returns `None` for an empty index or a non-finite `position` (NaN or
  /// infinite components). A finite query far enough away that every squared
  /// distance overflows still gets a point, with an infinite distance.
  ///
  /// When several points are equally close, the first one reached by the
  /// traversal wins; the traversal order is fixed, so repeated queries always
  /// agree.
  pub fn nearest_to_position(&self, store: &CoordinateStore, position: Vec3) -> Option<Neighbor> {
    if !position.is_finite() {
      return None;
    }
    self.search(store, position, None)
  }

  /// Closest *other* point to stored point `index`.
  ///
  /// Returns `None` when no other point exists (a single-point cloud) or
  /// when `index` is out of range for `store`.
  pub fn nearest_to_point(&self, store: &CoordinateStore, index: PointIndex) -> Option<Neighbor> {
    let position = store.get_position(index)?;
    self.search(store, position, Some(index))
  }

  fn search(
    &self,
    store: &CoordinateStore,
    query: Vec3,
    exclude: Option<PointIndex>,
  ) -> Option<Neighbor> {
    debug_assert_eq!(
      store.len(),
      self.point_count(),
      "index queried with a store it was not built from"
    );

    let mut search = Search {
      index: self,
      store,
      query,
      exclude,
      best: None,
      best_distance_sq: f32::INFINITY,
    };
    search.visit(self.root(), self.bounds());

    search.best.map(|index| Neighbor {
      index,
      distance: search.best_distance_sq.sqrt(),
    })
  }
}

struct Search<'a> {
  index: &'a OctreeIndex,
  store: &'a CoordinateStore,
  query: Vec3,
  exclude: Option<PointIndex>,
  best: Option<PointIndex>,
  best_distance_sq: f32,
}

impl Search<'_> {
  fn visit(&mut self, id: NodeId, bounds: Aabb3) {
    let index = self.index;
    let children = match index.node(id) {
      OctreeNode::Leaf(points) => {
        self.scan(points);
        return;
      }
      OctreeNode::Branch(children) => children,
    };

    let home = bounds.octant_of(self.query);
    self.visit(children[home as usize], bounds.child(home));

    let mut siblings: SmallVec<[(f32, u8, Aabb3); 7]> = SmallVec::new();
    for octant in (0..8u8).filter(|&octant| octant != home) {
      let child_bounds = bounds.child(octant);
      let lower_bound = child_bounds.distance_squared_to(self.query);
      if self.may_improve(lower_bound) {
        siblings.push((lower_bound, octant, child_bounds));
      }
    }
    siblings.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    for (lower_bound, octant, child_bounds) in siblings {
      // Sorted: nothing after this one can be closer either.
      if !self.may_improve(lower_bound) {
        break;
      }
      self.visit(children[octant as usize], child_bounds);
    }
  }

  /// Until a candidate is found anything improves, even an overflowed
  /// (infinite) distance.
  #[inline]
  fn may_improve(&self, distance_sq: f32) -> bool {
    self.best.is_none() || distance_sq < self.best_distance_sq
  }

  fn scan(&mut self, points: &[PointIndex]) {
    for &index in points {
      if Some(index) == self.exclude {
        continue;
      }
      let distance_sq = self.store.position(index).distance_squared(self.query);
      if self.may_improve(distance_sq) {
        self.best_distance_sq = distance_sq;
        self.best = Some(index);
      }
    }
  }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

//! Shape statistics for a built index.

use std::fmt;

use super::OctreeIndex;

/// Structural summary of an [`OctreeIndex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
  /// Points indexed.
  pub point_count: usize,
  /// Arena nodes (leaves + branches).
  pub node_count: usize,
  pub branch_count: usize,
  pub leaf_count: usize,
  /// Leaves holding no points.
  pub empty_leaf_count: usize,
  /// Leaves above `max_points_per_leaf` (coincident points or depth cap).
  pub oversized_leaf_count: usize,
  /// Deepest leaf (root = 0).
  pub max_depth: u32,
  /// Most points held by a single leaf.
  pub largest_leaf: usize,
}

impl OctreeStats {
  /// Average points per non-empty leaf.
  pub fn mean_leaf_occupancy(&self) -> f64 {
    let occupied = self.leaf_count - self.empty_leaf_count;
    if occupied == 0 {
      0.0
    } else {
      self.point_count as f64 / occupied as f64
    }
  }
}

impl OctreeIndex {
  /// Walk the tree and summarize its shape.
  pub fn stats(&self) -> OctreeStats {
    let capacity = self.config().max_points_per_leaf;
    let mut stats = OctreeStats {
      point_count: self.point_count(),
      node_count: self.node_count(),
      ..Default::default()
    };

    for leaf in self.leaves() {
      stats.leaf_count += 1;
      stats.max_depth = stats.max_depth.max(leaf.depth);
      stats.largest_leaf = stats.largest_leaf.max(leaf.points.len());
      if leaf.points.is_empty() {
        stats.empty_leaf_count += 1;
      }
      if leaf.points.len() > capacity {
        stats.oversized_leaf_count += 1;
      }
    }
    stats.branch_count = stats.node_count - stats.leaf_count;
    stats
  }
}

impl fmt::Display for OctreeStats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} nodes ({} branches, {} leaves, {} empty, {} oversized), depth {}, largest leaf {}, {:.1} points/leaf",
      self.node_count,
      self.branch_count,
      self.leaf_count,
      self.empty_leaf_count,
      self.oversized_leaf_count,
      self.max_depth,
      self.largest_leaf,
      self.mean_leaf_occupancy()
    )
  }
}

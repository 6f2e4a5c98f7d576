//! OctreeConfig - leaf capacity and depth limits for index construction.

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_POINTS_PER_LEAF, MAX_DEPTH_LIMIT};

/// Configuration for octree construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OctreeConfig {
  /// A leaf holding more points than this is split into 8 children.
  ///
  /// Smaller values give deeper trees and cheaper leaf scans at the cost of
  /// more nodes. 16-128 is the useful range.
  pub max_points_per_leaf: usize,

  /// Deepest level a split may produce (root = 0).
  ///
  /// Leaves at this depth are kept oversized instead of splitting further.
  /// Never honored beyond [`MAX_DEPTH_LIMIT`].
  pub max_depth: u32,
}

impl OctreeConfig {
  /// Replace the leaf capacity.
  pub fn with_max_points_per_leaf(mut self, max_points_per_leaf: usize) -> Self {
    self.max_points_per_leaf = max_points_per_leaf;
    self
  }

  /// Replace the depth cap, clamped to [`MAX_DEPTH_LIMIT`].
  pub fn with_max_depth(mut self, max_depth: u32) -> Self {
    self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
    self
  }

  /// Whether a leaf at `depth` holding `count` points must be split.
  #[inline]
  pub fn should_split(&self, count: usize, depth: u32) -> bool {
    count > self.max_points_per_leaf && depth < self.max_depth.min(MAX_DEPTH_LIMIT)
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      max_points_per_leaf: DEFAULT_MAX_POINTS_PER_LEAF,
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

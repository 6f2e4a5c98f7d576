//! OctreeNode - arena-resident tree node.
//!
//! Nodes live in one `Vec` owned by [`super::OctreeIndex`]; branches refer to
//! their children by [`NodeId`], so no node is ever reachable from two
//! parents and no interior mutability is needed.

use crate::types::PointIndex;

/// Offset of a node inside the index arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
  #[inline]
  pub(crate) fn from_index(index: usize) -> Self {
    debug_assert!(index <= u32::MAX as usize, "octree arena overflow");
    Self(index as u32)
  }

  /// Arena offset.
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// A leaf holding point indices, or a branch over exactly 8 children.
///
/// Children are ordered by octant key:
/// - bit 0: +X half
/// - bit 1: +Y half
/// - bit 2: +Z half
#[derive(Clone, Debug, PartialEq)]
pub enum OctreeNode {
  /// Unordered indices of the points inside this node's bounds.
  Leaf(Vec<PointIndex>),
  /// One child per octant.
  Branch([NodeId; 8]),
}

impl OctreeNode {
  pub fn is_leaf(&self) -> bool {
    matches!(self, OctreeNode::Leaf(_))
  }

  /// Point indices of a leaf; empty for a branch.
  pub fn points(&self) -> &[PointIndex] {
    match self {
      OctreeNode::Leaf(points) => points,
      OctreeNode::Branch(_) => &[],
    }
  }

  /// Child ids of a branch.
  pub fn children(&self) -> Option<&[NodeId; 8]> {
    match self {
      OctreeNode::Leaf(_) => None,
      OctreeNode::Branch(children) => Some(children),
    }
  }

  /// Get child id for `octant` (0-7). Returns None for leaves.
  pub fn get_child(&self, octant: u8) -> Option<NodeId> {
    self
      .children()
      .and_then(|children| children.get(octant as usize).copied())
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

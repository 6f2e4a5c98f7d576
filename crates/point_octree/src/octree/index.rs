//! OctreeIndex - one-shot bulk construction over a [`CoordinateStore`].
//!
//! # Build
//!
//! ```text
//! resolve(indices, bounds, depth):
//!   |indices| <= max_points_per_leaf  -> Leaf(indices)
//!   depth == max_depth                -> Leaf(indices)   (oversized)
//!   all positions identical           -> Leaf(indices)   (oversized)
//!   otherwise                         -> bucket by octant_of(position)
//!                                        Branch([resolve(bucket_i, child_i, depth + 1); 8])
//! ```
//!
//! Bulk partitioning keeps the tree independent of input order; spatially
//! sorted input cannot produce a degenerate chain.

use glam::Vec3;

use super::{Aabb3, NodeId, OctreeConfig, OctreeNode};
use crate::store::CoordinateStore;
use crate::types::PointIndex;

/// Immutable octree over the points of a [`CoordinateStore`].
///
/// Holds point indices only; positions are always read from the store the
/// index was built from, which must be passed back to every query.
#[derive(Clone, Debug)]
pub struct OctreeIndex {
  nodes: Vec<OctreeNode>,
  root: NodeId,
  bounds: Aabb3,
  config: OctreeConfig,
  point_count: usize,
}

/// Borrowed view of one leaf, produced by [`OctreeIndex::leaves`].
#[derive(Clone, Copy, Debug)]
pub struct LeafView<'a> {
  pub id: NodeId,
  pub bounds: Aabb3,
  /// Root = 0.
  pub depth: u32,
  pub points: &'a [PointIndex],
}

impl OctreeIndex {
  /// Build the index over every point of `store`.
  ///
  /// The root bounds are `[-1, 1]³`. Points outside the cube (a caller that
  /// skipped normalization) widen the root so containment still holds. An
  /// empty store yields a single empty leaf.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build", fields(points = store.len())))]
  pub fn build(store: &CoordinateStore, config: &OctreeConfig) -> Self {
    let bounds = root_bounds(store);
    let indices: Vec<PointIndex> = (0..store.len() as PointIndex).collect();

    let mut builder = Builder {
      store,
      config,
      nodes: Vec::new(),
    };
    let root = builder.resolve(indices, bounds, 0);

    #[cfg(feature = "tracing")]
    tracing::debug!(nodes = builder.nodes.len(), "octree built");

    Self {
      nodes: builder.nodes,
      root,
      bounds,
      config: *config,
      point_count: store.len(),
    }
  }

  /// Root node id.
  pub fn root(&self) -> NodeId {
    self.root
  }

  /// Bounds of the root node.
  pub fn bounds(&self) -> Aabb3 {
    self.bounds
  }

  /// Configuration the index was built with.
  pub fn config(&self) -> &OctreeConfig {
    &self.config
  }

  /// Number of indexed points.
  pub fn point_count(&self) -> usize {
    self.point_count
  }

  pub fn is_empty(&self) -> bool {
    self.point_count == 0
  }

  /// Number of arena nodes (leaves and branches).
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Look up a node.
  ///
  /// # Panics
  /// Panics if `id` does not belong to this index.
  #[inline]
  pub fn node(&self, id: NodeId) -> &OctreeNode {
    &self.nodes[id.index()]
  }

  /// Leaf whose bounds contain `position`, following the same octant rule
  /// as construction.
  pub fn leaf_containing(&self, position: Vec3) -> LeafView<'_> {
    let mut id = self.root;
    let mut bounds = self.bounds;
    let mut depth = 0;
    loop {
      let octant = bounds.octant_of(position);
      let Some(child) = self.node(id).get_child(octant) else {
        break;
      };
      id = child;
      bounds = bounds.child(octant);
      depth += 1;
    }
    LeafView {
      id,
      bounds,
      depth,
      points: self.node(id).points(),
    }
  }

  /// All leaves with their derived bounds, depth-first in octant order.
  pub fn leaves(&self) -> Vec<LeafView<'_>> {
    let mut leaves = Vec::new();
    let mut stack = vec![(self.root, self.bounds, 0u32)];
    while let Some((id, bounds, depth)) = stack.pop() {
      match self.node(id) {
        OctreeNode::Leaf(points) => leaves.push(LeafView {
          id,
          bounds,
          depth,
          points,
        }),
        OctreeNode::Branch(children) => {
          // Reverse so octant 0 is popped first.
          for octant in (0..8u8).rev() {
            stack.push((children[octant as usize], bounds.child(octant), depth + 1));
          }
        }
      }
    }
    leaves
  }
}

/// Root cube, widened to cover any point outside `[-1, 1]³`.
fn root_bounds(store: &CoordinateStore) -> Aabb3 {
  let bounds = store.positions().fold(Aabb3::ROOT, Aabb3::including);

  #[cfg(feature = "tracing")]
  {
    if bounds != Aabb3::ROOT {
      tracing::warn!(?bounds, "points outside the normalized cube; widening root bounds");
    }
  }

  bounds
}

struct Builder<'a> {
  store: &'a CoordinateStore,
  config: &'a OctreeConfig,
  nodes: Vec<OctreeNode>,
}

impl Builder<'_> {
  fn push(&mut self, node: OctreeNode) -> NodeId {
    let id = NodeId::from_index(self.nodes.len());
    self.nodes.push(node);
    id
  }

  fn resolve(&mut self, indices: Vec<PointIndex>, bounds: Aabb3, depth: u32) -> NodeId {
    if !self.config.should_split(indices.len(), depth) {
      #[cfg(feature = "tracing")]
      {
        if indices.len() > self.config.max_points_per_leaf {
          tracing::debug!(depth, points = indices.len(), "depth cap reached; keeping oversized leaf");
        }
      }
      return self.push(OctreeNode::Leaf(indices));
    }

    if self.all_coincident(&indices) {
      #[cfg(feature = "tracing")]
      tracing::debug!(depth, points = indices.len(), "coincident points; keeping oversized leaf");
      return self.push(OctreeNode::Leaf(indices));
    }

    let mut buckets: [Vec<PointIndex>; 8] = Default::default();
    for index in indices {
      let octant = bounds.octant_of(self.store.position(index));
      buckets[octant as usize].push(index);
    }

    let mut children = [NodeId::from_index(0); 8];
    for (octant, bucket) in buckets.into_iter().enumerate() {
      children[octant] = self.resolve(bucket, bounds.child(octant as u8), depth + 1);
    }
    self.push(OctreeNode::Branch(children))
  }

  /// True when every point sits at exactly the same position; no amount of
  /// splitting can separate them.
  fn all_coincident(&self, indices: &[PointIndex]) -> bool {
    let Some((&first, rest)) = indices.split_first() else {
      return true;
    };
    let anchor = self.store.position(first);
    rest.iter().all(|&index| self.store.position(index) == anchor)
  }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

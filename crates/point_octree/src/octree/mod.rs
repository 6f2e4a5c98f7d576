//! Octree module for nearest-neighbor queries over a point cloud.
//!
//! The tree is an arena of [`OctreeNode`]s built once from a
//! [`crate::CoordinateStore`]; node bounds are implicit and recomputed from
//! the root while descending.
//!
//! # Octant Convention
//!
//! ```text
//! octant = (x >= cx) | (y >= cy) << 1 | (z >= cz) << 2
//! ```
//!
//! Ties on a split plane select the upper half, during construction and
//! queries alike.
//!
//! # Module Structure
//!
//! - [`bounds`]: `Aabb3` - cube math (center, octant key, child bounds,
//!   box distance)
//! - [`node`]: `OctreeNode`, `NodeId` - arena node types
//! - [`config`]: `OctreeConfig` - leaf capacity and depth cap
//! - [`index`]: `OctreeIndex` - bulk construction and traversal helpers
//! - [`query`]: branch-and-bound nearest neighbor
//! - [`stats`]: `OctreeStats` - shape summary

pub mod bounds;
pub mod config;
pub mod index;
pub mod node;
pub mod query;
pub mod stats;

// Re-exports
pub use bounds::Aabb3;
pub use config::OctreeConfig;
pub use index::{LeafView, OctreeIndex};
pub use node::{NodeId, OctreeNode};
pub use query::Neighbor;
pub use stats::OctreeStats;

//! point_octree - nearest-neighbor sizing for geodetic point clouds
//!
//! This crate turns a set of `latitude longitude elevation intensity`
//! samples into normalized structure-of-arrays coordinates, indexes them in
//! an octree and derives a per-point radius (half the distance to the
//! nearest other point) used to size rendering primitives.
//!
//! # Features
//!
//! - **Coordinate Store**: dense `x`/`y`/`z`/`intensity` columns normalized
//!   into the `[-1, 1]³` cube
//! - **Octree Index**: one-shot recursive bulk partition into an arena of
//!   nodes addressed by [`octree::NodeId`]
//! - **Nearest Neighbor**: exact branch-and-bound search, by position or by
//!   stored point with self-exclusion
//! - **Radius Derivation**: data-parallel map over all points on rayon's
//!   pool
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use point_octree::{build, radius, Point};
//!
//! let points = [
//!   Point::new(Vec3::new(0.0, 0.0, 0.0), 10),
//!   Point::new(Vec3::new(1.0, 0.0, 0.0), 20),
//!   Point::new(Vec3::new(0.0, 1.0, 0.0), 30),
//! ];
//!
//! let (store, index) = build(&points, 16).unwrap();
//! let nearest = index.nearest_to_point(&store, 0).unwrap();
//! assert_eq!(nearest.distance, 1.0);
//!
//! let radii = radius::derive_radii(&index, &store);
//! assert_eq!(radii[0], 0.5);
//! ```

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_POINTS_PER_LEAF, MAX_DEPTH_LIMIT, NO_NEIGHBOR_RADIUS};
pub use error::{BuildError, LoadError, ParseError, ParseErrorKind};
pub use types::{AxisRange, GeodeticBounds, Point, PointIndex, RawPoint};

// Structure-of-arrays coordinate columns
pub mod store;
pub use store::CoordinateStore;

// Geodetic -> normalized cube mapping
pub mod normalize;

// Text point file parsing
pub mod loader;

// Octree index and nearest-neighbor queries
pub mod octree;
pub use octree::{Neighbor, OctreeConfig, OctreeIndex, OctreeStats};

// Per-point radius derivation
pub mod radius;
pub use radius::{derive_radii, derive_radii_sequential};

// Load -> normalize -> index -> radii facade
pub mod cloud;
pub use cloud::{LoadStats, PointCloud, PointCloudOptions};

#[cfg(test)]
pub mod test_utils;

/// Build the coordinate store and octree index from normalized points.
///
/// Coordinates are expected to be normalized already (see
/// [`normalize::normalize`]). Fails with [`BuildError::EmptyInput`] when
/// `points` is empty and [`BuildError::NonFiniteCoordinate`] when any
/// coordinate is NaN or infinite.
pub fn build(
  points: &[Point],
  max_points_per_leaf: usize,
) -> Result<(CoordinateStore, OctreeIndex), BuildError> {
  if points.is_empty() {
    return Err(BuildError::EmptyInput);
  }

  let store = CoordinateStore::from_points(points)?;
  let config = OctreeConfig::default().with_max_points_per_leaf(max_points_per_leaf);
  let index = OctreeIndex::build(&store, &config);
  Ok((store, index))
}

//! PointCloud - load, normalize, index and size a point cloud in one go.
//!
//! ```text
//! file ─► parse ─► RawPoint[] ─► normalize ─► CoordinateStore
//!                                                  │
//!                                     OctreeIndex::build
//!                                                  │
//!                                           derive_radii ─► radii[]
//! ```
//!
//! The index is fully built before the first radius query runs; afterwards
//! nothing is mutated and the cloud can be shared across threads.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use web_time::Instant;

use crate::error::{BuildError, LoadError};
use crate::loader;
use crate::normalize;
use crate::octree::{Neighbor, OctreeConfig, OctreeIndex};
use crate::radius;
use crate::store::CoordinateStore;
use crate::types::{GeodeticBounds, Point, PointIndex, RawPoint};

/// How a [`PointCloud`] is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointCloudOptions {
  /// Octree construction settings.
  pub octree: OctreeConfig,
  /// Derive radii on rayon's pool (`true`) or on the calling thread.
  pub parallel_radii: bool,
}

impl Default for PointCloudOptions {
  fn default() -> Self {
    Self {
      octree: OctreeConfig::default(),
      parallel_radii: true,
    }
  }
}

/// Wall-clock time spent in each construction phase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadStats {
  pub normalize_time: Duration,
  pub index_time: Duration,
  pub radius_time: Duration,
}

impl LoadStats {
  pub fn total(&self) -> Duration {
    self.normalize_time + self.index_time + self.radius_time
  }
}

/// A fully indexed point cloud with per-point radii.
#[derive(Clone, Debug)]
pub struct PointCloud {
  store: CoordinateStore,
  index: OctreeIndex,
  radii: Vec<f32>,
  stats: LoadStats,
}

impl PointCloud {
  /// Read a point file and build the cloud.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip(options), name = "cloud::load"))]
  pub fn load(path: &Path, options: &PointCloudOptions) -> Result<Self, LoadError> {
    let raw = loader::read_points(path)?;
    Ok(Self::from_raw_points(&raw, options)?)
  }

  /// Normalize raw geodetic records and build the cloud.
  pub fn from_raw_points(raw: &[RawPoint], options: &PointCloudOptions) -> Result<Self, BuildError> {
    let start = Instant::now();
    let (points, bounds) = normalize::normalize(raw)?;
    let store = CoordinateStore::from_points(&points)?.with_geodetic_bounds(bounds);
    let normalize_time = start.elapsed();

    Ok(Self::from_store(store, options, normalize_time))
  }

  /// Build the cloud from already normalized points.
  pub fn from_points(points: &[Point], options: &PointCloudOptions) -> Result<Self, BuildError> {
    if points.is_empty() {
      return Err(BuildError::EmptyInput);
    }
    let start = Instant::now();
    let store = CoordinateStore::from_points(points)?;
    let normalize_time = start.elapsed();

    Ok(Self::from_store(store, options, normalize_time))
  }

  fn from_store(store: CoordinateStore, options: &PointCloudOptions, normalize_time: Duration) -> Self {
    let start = Instant::now();
    let index = OctreeIndex::build(&store, &options.octree);
    let index_time = start.elapsed();

    let start = Instant::now();
    let radii = if options.parallel_radii {
      radius::derive_radii(&index, &store)
    } else {
      radius::derive_radii_sequential(&index, &store)
    };
    let radius_time = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::info!(
      points = store.len(),
      index_ms = index_time.as_secs_f64() * 1e3,
      radius_ms = radius_time.as_secs_f64() * 1e3,
      "point cloud ready"
    );

    Self {
      store,
      index,
      radii,
      stats: LoadStats {
        normalize_time,
        index_time,
        radius_time,
      },
    }
  }

  pub fn len(&self) -> usize {
    self.store.len()
  }

  pub fn is_empty(&self) -> bool {
    self.store.is_empty()
  }

  /// Normalized record of point `index`.
  ///
  /// # Panics
  /// Panics if `index` is out of range.
  pub fn point(&self, index: PointIndex) -> Point {
    self.store.point(index)
  }

  /// Iterate over all points in index order.
  pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
    (0..self.len() as PointIndex).map(|index| self.point(index))
  }

  /// Radius of point `index`.
  ///
  /// # Panics
  /// Panics if `index` is out of range.
  pub fn radius(&self, index: PointIndex) -> f32 {
    self.radii[index as usize]
  }

  /// All radii, parallel to the coordinate columns.
  pub fn radii(&self) -> &[f32] {
    &self.radii
  }

  pub fn store(&self) -> &CoordinateStore {
    &self.store
  }

  pub fn index(&self) -> &OctreeIndex {
    &self.index
  }

  /// Raw extent the coordinates were normalized from, when built from raw
  /// records.
  pub fn geodetic_bounds(&self) -> Option<&GeodeticBounds> {
    self.store.geodetic_bounds()
  }

  pub fn load_stats(&self) -> &LoadStats {
    &self.stats
  }

  /// Closest point to a normalized position.
  pub fn nearest_to_position(&self, position: Vec3) -> Option<Neighbor> {
    self.index.nearest_to_position(&self.store, position)
  }

  /// Closest other point to stored point `index`.
  pub fn nearest_to_point(&self, index: PointIndex) -> Option<Neighbor> {
    self.index.nearest_to_point(&self.store, index)
  }
}

#[cfg(test)]
#[path = "cloud_test.rs"]
mod cloud_test;

//! CoordinateStore - structure-of-arrays point columns.
//!
//! Hot columns (`x`, `y`, `z`) stay tight so leaf scans touch contiguous
//! memory; the slices are handed out as-is for GPU upload.

use glam::Vec3;

use crate::error::BuildError;
use crate::types::{GeodeticBounds, Point, PointIndex};

/// Normalized point coordinates plus intensities.
///
/// All columns share the same length and slot `i` always describes the same
/// point. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateStore {
  x: Vec<f32>,
  y: Vec<f32>,
  z: Vec<f32>,
  intensity: Vec<u8>,
  geodetic_bounds: Option<GeodeticBounds>,
}

impl CoordinateStore {
  /// Copy normalized points into columns.
  ///
  /// An empty slice yields an empty store; rejecting empty input is the job
  /// of [`crate::build`].
  pub fn from_points(points: &[Point]) -> Result<Self, BuildError> {
    if points.len() > PointIndex::MAX as usize {
      return Err(BuildError::TooManyPoints {
        count: points.len(),
      });
    }

    let mut store = Self {
      x: Vec::with_capacity(points.len()),
      y: Vec::with_capacity(points.len()),
      z: Vec::with_capacity(points.len()),
      intensity: Vec::with_capacity(points.len()),
      geodetic_bounds: None,
    };

    for (index, point) in points.iter().enumerate() {
      if !point.position.is_finite() {
        return Err(BuildError::NonFiniteCoordinate {
          index: index as PointIndex,
        });
      }
      store.x.push(point.position.x);
      store.y.push(point.position.y);
      store.z.push(point.position.z);
      store.intensity.push(point.intensity);
    }

    Ok(store)
  }

  /// Attach the raw extent the coordinates were normalized from.
  pub fn with_geodetic_bounds(mut self, bounds: GeodeticBounds) -> Self {
    self.geodetic_bounds = Some(bounds);
    self
  }

  pub fn len(&self) -> usize {
    self.x.len()
  }

  pub fn is_empty(&self) -> bool {
    self.x.is_empty()
  }

  /// Position of a stored point.
  ///
  /// # Panics
  /// Panics if `index` is out of range.
  #[inline]
  pub fn position(&self, index: PointIndex) -> Vec3 {
    let i = index as usize;
    Vec3::new(self.x[i], self.y[i], self.z[i])
  }

  /// Position of a stored point, or `None` if `index` is out of range.
  #[inline]
  pub fn get_position(&self, index: PointIndex) -> Option<Vec3> {
    ((index as usize) < self.len()).then(|| self.position(index))
  }

  /// Full record of a stored point.
  ///
  /// # Panics
  /// Panics if `index` is out of range.
  pub fn point(&self, index: PointIndex) -> Point {
    Point::new(self.position(index), self.intensity[index as usize])
  }

  /// Iterate over all positions in index order.
  pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
    self
      .x
      .iter()
      .zip(&self.y)
      .zip(&self.z)
      .map(|((&x, &y), &z)| Vec3::new(x, y, z))
  }

  pub fn x(&self) -> &[f32] {
    &self.x
  }

  pub fn y(&self) -> &[f32] {
    &self.y
  }

  pub fn z(&self) -> &[f32] {
    &self.z
  }

  pub fn intensities(&self) -> &[u8] {
    &self.intensity
  }

  pub fn geodetic_bounds(&self) -> Option<&GeodeticBounds> {
    self.geodetic_bounds.as_ref()
  }
}

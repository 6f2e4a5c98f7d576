//! Core value types: point records and per-axis ranges.

use glam::Vec3;

/// Stable identifier of a point inside a [`crate::CoordinateStore`].
pub type PointIndex = u32;

/// A normalized point as handed to [`crate::build`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
  /// Position inside the `[-1, 1]³` cube.
  pub position: Vec3,
  /// Return intensity (0-255).
  pub intensity: u8,
}

impl Point {
  pub fn new(position: Vec3, intensity: u8) -> Self {
    Self {
      position,
      intensity,
    }
  }
}

/// A parsed, not yet normalized, input record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPoint {
  pub latitude: f64,
  pub longitude: f64,
  pub elevation: f64,
  pub intensity: u8,
}

impl RawPoint {
  pub fn new(latitude: f64, longitude: f64, elevation: f64, intensity: u8) -> Self {
    Self {
      latitude,
      longitude,
      elevation,
      intensity,
    }
  }
}

/// Closed range `[min, max]` over one raw axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
  /// Lower bound (inclusive).
  pub min: f64,
  /// Upper bound (inclusive).
  pub max: f64,
}

impl AxisRange {
  /// Degenerate range holding a single value.
  #[inline]
  pub fn point(value: f64) -> Self {
    Self {
      min: value,
      max: value,
    }
  }

  /// Smallest range covering both `self` and `value`.
  #[inline]
  pub fn including(self, value: f64) -> Self {
    Self {
      min: self.min.min(value),
      max: self.max.max(value),
    }
  }

  #[inline]
  pub fn length(&self) -> f64 {
    self.max - self.min
  }

  #[inline]
  pub fn half_length(&self) -> f64 {
    self.length() / 2.0
  }

  /// Midpoint, computed as `min + half_length`.
  #[inline]
  pub fn center(&self) -> f64 {
    self.min + self.half_length()
  }
}

/// Raw (pre-normalization) extent of a cloud, kept for traceability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticBounds {
  pub latitude: AxisRange,
  pub longitude: AxisRange,
  pub elevation: AxisRange,
}

impl GeodeticBounds {
  /// Extent of `points`, or `None` when there are none.
  pub fn from_points(points: &[RawPoint]) -> Option<Self> {
    let (first, rest) = points.split_first()?;
    let seed = Self {
      latitude: AxisRange::point(first.latitude),
      longitude: AxisRange::point(first.longitude),
      elevation: AxisRange::point(first.elevation),
    };
    Some(rest.iter().fold(seed, |bounds, p| Self {
      latitude: bounds.latitude.including(p.latitude),
      longitude: bounds.longitude.including(p.longitude),
      elevation: bounds.elevation.including(p.elevation),
    }))
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

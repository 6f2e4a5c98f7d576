//! Geodetic -> normalized cube mapping.
//!
//! Axis assignment (y is up):
//!
//! ```text
//! x ← longitude
//! y ← elevation
//! z ← latitude
//! ```
//!
//! Every axis is mapped with `(value - center) / half_length` over the range
//! spanned by the whole input, so the data extent lands on `[-1, 1]`.

use glam::Vec3;

use crate::error::BuildError;
use crate::types::{AxisRange, GeodeticBounds, Point, PointIndex, RawPoint};

/// Map one raw value into `[-1, 1]` relative to `range`.
///
/// A zero-length range (every point shares the value) maps to 0. The result
/// is clamped so rounding at the extremes never leaves the root cube.
#[inline]
pub fn normalize_value(value: f64, range: &AxisRange) -> f32 {
  let half_length = range.half_length();
  if half_length == 0.0 {
    return 0.0;
  }
  (((value - range.center()) / half_length) as f32).clamp(-1.0, 1.0)
}

/// Normalize a single record against precomputed bounds.
#[inline]
pub fn normalize_point(raw: &RawPoint, bounds: &GeodeticBounds) -> Point {
  Point::new(
    Vec3::new(
      normalize_value(raw.longitude, &bounds.longitude),
      normalize_value(raw.elevation, &bounds.elevation),
      normalize_value(raw.latitude, &bounds.latitude),
    ),
    raw.intensity,
  )
}

/// Normalize all records into the root cube.
///
/// Returns the normalized points (same order) and the raw bounds they were
/// normalized against.
pub fn normalize(raw: &[RawPoint]) -> Result<(Vec<Point>, GeodeticBounds), BuildError> {
  if let Some(index) = raw.iter().position(|p| {
    !(p.latitude.is_finite() && p.longitude.is_finite() && p.elevation.is_finite())
  }) {
    return Err(BuildError::NonFiniteCoordinate {
      index: index as PointIndex,
    });
  }

  let bounds = GeodeticBounds::from_points(raw).ok_or(BuildError::EmptyInput)?;
  let points = raw.iter().map(|p| normalize_point(p, &bounds)).collect();
  Ok((points, bounds))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

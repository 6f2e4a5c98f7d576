//! Axis-aligned bounding cube of an octree node.

use glam::Vec3;

use crate::constants::ROOT_HALF_EXTENT;

/// Single-precision axis-aligned bounding box.
///
/// Octree node bounds are never stored; they are derived top-down from the
/// root with [`Aabb3::child`] while descending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
  /// Minimum corner (inclusive).
  pub min: Vec3,
  /// Maximum corner (inclusive).
  pub max: Vec3,
}

impl Aabb3 {
  /// The normalized root cube `[-1, 1]³`.
  pub const ROOT: Self = Self {
    min: Vec3::splat(-ROOT_HALF_EXTENT),
    max: Vec3::splat(ROOT_HALF_EXTENT),
  };

  /// Create a new AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Get the center of the AABB.
  ///
  /// This is the split point for both [`Aabb3::octant_of`] and
  /// [`Aabb3::child`]; they must never compute it differently.
  #[inline]
  pub fn center(&self) -> Vec3 {
    (self.min + self.max) * 0.5
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  #[inline]
  pub fn volume(&self) -> f32 {
    self.size().element_product()
  }

  /// Check if this AABB contains a point (boundary included).
  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    point.cmpge(self.min).all() && point.cmple(self.max).all()
  }

  /// Grow to cover `point`.
  #[inline]
  pub fn including(self, point: Vec3) -> Self {
    Self {
      min: self.min.min(point),
      max: self.max.max(point),
    }
  }

  /// Octant key of `point` relative to the center.
  ///
  /// - bit 0: x >= center.x
  /// - bit 1: y >= center.y
  /// - bit 2: z >= center.z
  ///
  /// Points on a split plane go to the upper half.
  #[inline]
  pub fn octant_of(&self, point: Vec3) -> u8 {
    let center = self.center();
    (point.x >= center.x) as u8 | ((point.y >= center.y) as u8) << 1 | ((point.z >= center.z) as u8) << 2
  }

  /// Bounds of child `octant` (0-7), bisecting every axis at the center.
  #[inline]
  pub fn child(&self, octant: u8) -> Self {
    debug_assert!(octant < 8, "octant must be 0-7, got {}", octant);
    let center = self.center();
    let pick = |bit: u8, min: f32, mid: f32, max: f32| {
      if octant & bit != 0 {
        (mid, max)
      } else {
        (min, mid)
      }
    };
    let (min_x, max_x) = pick(1, self.min.x, center.x, self.max.x);
    let (min_y, max_y) = pick(2, self.min.y, center.y, self.max.y);
    let (min_z, max_z) = pick(4, self.min.z, center.z, self.max.z);
    Self {
      min: Vec3::new(min_x, min_y, min_z),
      max: Vec3::new(max_x, max_y, max_z),
    }
  }

  /// Squared distance from `point` to the nearest point of this box.
  ///
  /// Zero when the point is inside. A lower bound on the squared distance to
  /// anything stored under a node with these bounds.
  #[inline]
  pub fn distance_squared_to(&self, point: Vec3) -> f32 {
    point.clamp(self.min, self.max).distance_squared(point)
  }
}

impl Default for Aabb3 {
  fn default() -> Self {
    Self::ROOT
  }
}

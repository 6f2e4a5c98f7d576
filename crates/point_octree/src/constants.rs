//! Tuning constants shared by the index, the query engine and the radius
//! deriver.
//!
//! # Normalized Space
//!
//! ```text
//! raw axis value  ──►  (value - center) / half_length  ──►  [-1, 1]
//!
//!        -1                     0                     +1
//!         ├─────────────────────┼─────────────────────┤
//!         └───── axis bit clear ────┘└───── axis bit set ────┘
//!                      (ties at 0 set the bit)
//! ```

/// Leaf capacity used when the caller does not pick one.
pub const DEFAULT_MAX_POINTS_PER_LEAF: usize = 128;

/// Depth cap for recursive splitting.
///
/// After 32 bisections a cell is ~4.7e-10 wide, well below f32 spacing at
/// the cube's extremes, so deeper splits cannot separate anything.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Highest depth cap accepted by [`crate::OctreeConfig`]; larger requests are
/// clamped.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Half side length of the root cube.
pub const ROOT_HALF_EXTENT: f32 = 1.0;

/// Radius written for a point that has no neighbor (clouds of one point).
pub const NO_NEIGHBOR_RADIUS: f32 = f32::INFINITY;

/// Points per rayon work item during radius derivation.
pub const RADIUS_CHUNK_SIZE: usize = 1024;

/// Fields per line in the point file: latitude, longitude, elevation,
/// intensity.
pub const FIELDS_PER_LINE: usize = 4;

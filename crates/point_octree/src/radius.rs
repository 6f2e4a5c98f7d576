//! Per-point radius derivation.
//!
//! `radius[i]` is half the distance from point `i` to its nearest other
//! point, so neighboring primitives just touch. A point with no neighbor
//! gets [`NO_NEIGHBOR_RADIUS`].
//!
//! Queries are read-only against an immutable index, so the parallel path
//! splits the output into fixed chunks and lets each rayon worker fill a
//! disjoint slice; no locking is involved.

use rayon::prelude::*;

use crate::constants::{NO_NEIGHBOR_RADIUS, RADIUS_CHUNK_SIZE};
use crate::octree::OctreeIndex;
use crate::store::CoordinateStore;
use crate::types::PointIndex;

/// Radius of a single point.
#[inline]
pub fn radius_of(index: &OctreeIndex, store: &CoordinateStore, point: PointIndex) -> f32 {
  index
    .nearest_to_point(store, point)
    .map_or(NO_NEIGHBOR_RADIUS, |neighbor| neighbor.distance / 2.0)
}

/// Radii for every point, computed on rayon's thread pool.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "radius::derive_radii", fields(points = store.len())))]
pub fn derive_radii(index: &OctreeIndex, store: &CoordinateStore) -> Vec<f32> {
  let mut radii = vec![NO_NEIGHBOR_RADIUS; store.len()];
  radii
    .par_chunks_mut(RADIUS_CHUNK_SIZE)
    .enumerate()
    .for_each(|(chunk, slots)| fill_chunk(index, store, chunk * RADIUS_CHUNK_SIZE, slots));
  radii
}

/// Radii for every point on the calling thread.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "radius::derive_radii_sequential", fields(points = store.len())))]
pub fn derive_radii_sequential(index: &OctreeIndex, store: &CoordinateStore) -> Vec<f32> {
  let mut radii = vec![NO_NEIGHBOR_RADIUS; store.len()];
  fill_chunk(index, store, 0, &mut radii);
  radii
}

fn fill_chunk(index: &OctreeIndex, store: &CoordinateStore, first: usize, slots: &mut [f32]) {
  for (offset, slot) in slots.iter_mut().enumerate() {
    *slot = radius_of(index, store, (first + offset) as PointIndex);
  }
}

#[cfg(test)]
#[path = "radius_test.rs"]
mod radius_test;

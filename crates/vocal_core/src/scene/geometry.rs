//! Segment-list geometry for edge polylines.
//!
//! An edge with `S` slab points is drawn as `S + 1` independent segments:
//!
//! ```text
//! slot:   0     1  2     3  4           2S+1
//!         v1 ── s0 s0 ── s1 s1 ── ... ── v2
//! ```
//!
//! Interior points are duplicated so each segment can be recolored alone.

use glam::Vec3;

use super::Normalizer;
use crate::graph::Point;

/// Number of coordinate slots for an edge with `slab_count` interior points.
#[inline]
pub const fn coordinate_count(slab_count: usize) -> usize {
  2 * (slab_count + 1)
}

/// Build normalized segment coordinates for `v1 → slabs → v2`.
pub fn segment_coords(v1: Point, slabs: &[Point], v2: Point, normalizer: &Normalizer) -> Vec<Vec3> {
  let mut coords = Vec::with_capacity(coordinate_count(slabs.len()));
  coords.push(normalizer.to_scene(v1));
  for &slab in slabs {
    let p = normalizer.to_scene(slab);
    coords.push(p);
    coords.push(p);
  }
  coords.push(normalizer.to_scene(v2));
  coords
}

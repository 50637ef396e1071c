//! Vertex - skeleton junction or end point.

use smallvec::SmallVec;

use super::{EdgeId, Point};

/// Index of a vertex inside its [`super::Tree`].
pub type VertexId = usize;

/// Skeleton vertex.
///
/// A vertex usually covers a single voxel, but junctions found by the analysis
/// stage may span several. Geometry and slice lookups use the first point.
#[derive(Clone, Debug, Default)]
pub struct Vertex {
  /// Voxels belonging to this vertex. Must not be empty.
  pub points: Vec<Point>,
  /// Incident edges, in the order the analysis stage produced them.
  pub branches: SmallVec<[EdgeId; 4]>,
  pub(crate) visited: bool,
  pub(crate) visit_order: Option<u32>,
  pub(crate) predecessor: Option<EdgeId>,
}

impl Vertex {
  pub fn new(points: Vec<Point>) -> Self {
    Self {
      points,
      ..Self::default()
    }
  }

  /// Single-voxel vertex.
  pub fn at(point: Point) -> Self {
    Self::new(vec![point])
  }

  /// Representative point used for geometry and slicing.
  #[inline]
  pub fn first_point(&self) -> Option<Point> {
    self.points.first().copied()
  }

  pub fn is_visited(&self) -> bool {
    self.visited
  }

  /// Discovery order within the tree, assigned once by the scene builder.
  pub fn visit_order(&self) -> Option<u32> {
    self.visit_order
  }

  /// Edge through which this vertex was first reached.
  pub fn predecessor(&self) -> Option<EdgeId> {
    self.predecessor
  }

  pub(crate) fn reset_traversal(&mut self) {
    self.visited = false;
    self.visit_order = None;
    self.predecessor = None;
  }

  pub(crate) fn mark_visited(&mut self, order: u32) {
    self.visited = true;
    self.visit_order = Some(order);
  }
}

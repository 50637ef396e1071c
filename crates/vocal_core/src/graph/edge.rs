//! Edge - skeleton branch between two vertices.

use super::{Point, VertexId};

/// Index of an edge inside its [`super::Tree`].
pub type EdgeId = usize;

/// Classification assigned during the depth-first walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeKind {
  /// Not reached by the walk (unreachable, or a suppressed duplicate).
  #[default]
  Undefined,
  /// The walk discovered a new vertex through this edge.
  Tree,
  /// The opposite vertex was already visited: the edge closes a cycle.
  Back,
}

/// Skeleton branch.
///
/// Endpoints are unordered for equality purposes: two edges are duplicates when
/// they connect the same pair of vertices regardless of direction.
#[derive(Clone, Debug)]
pub struct Edge {
  pub v1: VertexId,
  pub v2: VertexId,
  /// Interior path points from `v1` towards `v2`.
  pub slabs: Vec<Point>,
  pub(crate) kind: EdgeKind,
}

impl Edge {
  pub fn new(v1: VertexId, v2: VertexId, slabs: Vec<Point>) -> Self {
    Self {
      v1,
      v2,
      slabs,
      kind: EdgeKind::Undefined,
    }
  }

  pub fn kind(&self) -> EdgeKind {
    self.kind
  }

  /// Endpoint that is not `vertex`, or `None` if `vertex` is not an endpoint.
  ///
  /// For a self-loop the opposite vertex is the vertex itself.
  #[inline]
  pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
    if vertex == self.v1 {
      Some(self.v2)
    } else if vertex == self.v2 {
      Some(self.v1)
    } else {
      None
    }
  }

  /// Endpoint pair in canonical (ascending) order.
  #[inline]
  pub fn endpoint_pair(&self) -> (VertexId, VertexId) {
    if self.v1 <= self.v2 {
      (self.v1, self.v2)
    } else {
      (self.v2, self.v1)
    }
  }

  /// True if both edges connect the same unordered vertex pair.
  #[inline]
  pub fn same_endpoints(&self, other: &Edge) -> bool {
    self.endpoint_pair() == other.endpoint_pair()
  }

  pub fn is_self_loop(&self) -> bool {
    self.v1 == self.v2
  }

  /// Default voxel size of the edge: its slabs plus both endpoints.
  pub fn voxel_span(&self) -> i64 {
    self.slabs.len() as i64 + 2
  }
}

/// Non-owning back-reference from rendered geometry to its logical edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeRef {
  /// Index of the tree in the forest.
  pub tree: usize,
  /// Index of the edge in that tree.
  pub edge: EdgeId,
}

impl EdgeRef {
  pub const fn new(tree: usize, edge: EdgeId) -> Self {
    Self { tree, edge }
  }
}

impl std::fmt::Display for EdgeRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{}", self.tree, self.edge)
  }
}

#[cfg(test)]
#[path = "edge_test.rs"]
mod edge_test;

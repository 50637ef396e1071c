//! Tree and Forest containers, plus a builder that wires vertex branches.

use super::{Edge, EdgeId, EdgeRef, Point, Vertex, VertexId};
use crate::error::GraphError;

/// One connected component of the skeleton.
#[derive(Clone, Debug, Default)]
pub struct Tree {
  pub vertices: Vec<Vertex>,
  pub edges: Vec<Edge>,
}

impl Tree {
  pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
    Self { vertices, edges }
  }

  pub fn has_edges(&self) -> bool {
    !self.edges.is_empty()
  }

  /// Look up an edge, failing if the id is not part of this tree.
  pub fn edge(&self, tree: usize, id: EdgeId) -> Result<&Edge, GraphError> {
    self
      .edges
      .get(id)
      .ok_or_else(|| GraphError::structural(tree, format!("edge {id} is not in the tree")))
  }

  /// Look up a vertex, failing if the id is not part of this tree.
  pub fn vertex(&self, tree: usize, id: VertexId) -> Result<&Vertex, GraphError> {
    self
      .vertices
      .get(id)
      .ok_or_else(|| GraphError::structural(tree, format!("vertex {id} is not in the tree")))
  }

  /// First point of the vertex, failing on unknown or point-less vertices.
  pub fn vertex_point(&self, tree: usize, id: VertexId) -> Result<Point, GraphError> {
    self
      .vertex(tree, id)?
      .first_point()
      .ok_or_else(|| GraphError::structural(tree, format!("vertex {id} has no points")))
  }

  /// Representative points of both endpoints of an edge.
  pub fn edge_endpoints(&self, tree: usize, id: EdgeId) -> Result<(Point, Point), GraphError> {
    let edge = self.edge(tree, id)?;
    let p1 = self.vertex_point(tree, edge.v1)?;
    let p2 = self.vertex_point(tree, edge.v2)?;
    Ok((p1, p2))
  }

  /// Check every edge/vertex cross-reference in the tree.
  ///
  /// `tree` is the index of this tree in its forest, used for reporting.
  pub fn validate(&self, tree: usize) -> Result<(), GraphError> {
    for id in 0..self.edges.len() {
      self.edge_endpoints(tree, id)?;
    }
    for (vid, vertex) in self.vertices.iter().enumerate() {
      for &eid in &vertex.branches {
        let edge = self.edge(tree, eid)?;
        if edge.opposite(vid).is_none() {
          return Err(GraphError::structural(
            tree,
            format!("vertex {vid} lists edge {eid} which does not touch it"),
          ));
        }
      }
    }
    Ok(())
  }

  pub(crate) fn reset_traversal(&mut self) {
    for vertex in &mut self.vertices {
      vertex.reset_traversal();
    }
    for edge in &mut self.edges {
      edge.kind = super::EdgeKind::Undefined;
    }
  }
}

/// Incremental tree construction with automatic branch wiring.
///
/// ```ignore
/// let mut builder = TreeBuilder::new();
/// let a = builder.vertex(Point::new(0, 0, 0));
/// let b = builder.vertex(Point::new(2, 0, 0));
/// builder.edge(a, b, vec![Point::new(1, 0, 0)]);
/// let tree = builder.build();
/// ```
#[derive(Default)]
pub struct TreeBuilder {
  tree: Tree,
}

impl TreeBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a single-voxel vertex.
  pub fn vertex(&mut self, point: Point) -> VertexId {
    self.vertex_with_points(vec![point])
  }

  /// Add a vertex covering several voxels.
  pub fn vertex_with_points(&mut self, points: Vec<Point>) -> VertexId {
    self.tree.vertices.push(Vertex::new(points));
    self.tree.vertices.len() - 1
  }

  /// Add an edge and register it as a branch of both endpoints.
  ///
  /// A self-loop is registered once. Unknown endpoints are recorded as-is so
  /// that malformed input can be reproduced; they fail at validation time.
  pub fn edge(&mut self, v1: VertexId, v2: VertexId, slabs: Vec<Point>) -> EdgeId {
    let id = self.tree.edges.len();
    self.tree.edges.push(Edge::new(v1, v2, slabs));
    if let Some(vertex) = self.tree.vertices.get_mut(v1) {
      vertex.branches.push(id);
    }
    if v2 != v1 {
      if let Some(vertex) = self.tree.vertices.get_mut(v2) {
        vertex.branches.push(id);
      }
    }
    id
  }

  pub fn build(self) -> Tree {
    self.tree
  }
}

/// Ordered collection of skeleton trees.
#[derive(Clone, Debug, Default)]
pub struct Forest {
  pub trees: Vec<Tree>,
}

impl Forest {
  pub fn new(trees: Vec<Tree>) -> Self {
    Self { trees }
  }

  pub fn is_empty(&self) -> bool {
    self.trees.is_empty()
  }

  /// Trees that contribute to derived structures, with their forest index.
  pub fn non_empty_trees(&self) -> impl Iterator<Item = (usize, &Tree)> {
    self.trees.iter().enumerate().filter(|(_, t)| t.has_edges())
  }

  /// Resolve a back-reference.
  pub fn edge(&self, edge: EdgeRef) -> Option<&Edge> {
    self.trees.get(edge.tree)?.edges.get(edge.edge)
  }

  /// Total edge count across all trees.
  pub fn edge_count(&self) -> usize {
    self.trees.iter().map(|t| t.edges.len()).sum()
  }

  /// Check every tree; see [`Tree::validate`].
  pub fn validate(&self) -> Result<(), GraphError> {
    for (index, tree) in self.non_empty_trees() {
      tree.validate(index)?;
    }
    Ok(())
  }
}

impl From<Vec<Tree>> for Forest {
  fn from(trees: Vec<Tree>) -> Self {
    Self { trees }
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

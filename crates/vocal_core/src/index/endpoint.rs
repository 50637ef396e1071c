//! EndpointIndex - edges meeting at a voxel.

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::graph::{EdgeRef, Forest, Point};

/// Mapping from an endpoint voxel (first point of `v1` or `v2`) to the edges
/// that end there. Junctions map to several edges.
#[derive(Clone, Debug, Default)]
pub struct EndpointIndex {
  endpoints: HashMap<Point, HashSet<EdgeRef>>,
}

impl EndpointIndex {
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "index::endpoints"))]
  pub fn build(forest: &Forest) -> Result<Self, GraphError> {
    let mut index = Self::default();
    for (tree_index, tree) in forest.trees.iter().enumerate() {
      for edge_index in 0..tree.edges.len() {
        let edge_ref = EdgeRef::new(tree_index, edge_index);
        let (p1, p2) = tree.edge_endpoints(tree_index, edge_index)?;
        index.endpoints.entry(p1).or_default().insert(edge_ref);
        index.endpoints.entry(p2).or_default().insert(edge_ref);
      }
    }
    Ok(index)
  }

  pub fn edges_at(&self, point: Point) -> Option<&HashSet<EdgeRef>> {
    self.endpoints.get(&point)
  }

  /// Number of edges ending at `point`.
  pub fn degree(&self, point: Point) -> usize {
    self.endpoints.get(&point).map_or(0, HashSet::len)
  }

  pub fn len(&self) -> usize {
    self.endpoints.len()
  }

  pub fn is_empty(&self) -> bool {
    self.endpoints.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[test]
  fn test_junction_collects_incident_edges() {
    let forest = forest_of(vec![triangle_tree()]);
    let index = EndpointIndex::build(&forest).unwrap();

    assert_eq!(index.len(), 3);
    for corner in [Point::new(0, 0, 0), Point::new(4, 0, 1), Point::new(0, 4, 2)] {
      assert_eq!(index.degree(corner), 2);
    }
    assert!(index.edges_at(Point::new(2, 0, 0)).is_none(), "slabs are not endpoints");
  }

  #[test]
  fn test_chain_ends_have_degree_one() {
    let forest = forest_of(vec![chain_tree(3)]);
    let index = EndpointIndex::build(&forest).unwrap();

    assert_eq!(index.degree(Point::new(0, 0, 0)), 1);
    assert_eq!(index.degree(Point::new(2, 0, 1)), 2);
    assert_eq!(index.degree(Point::new(4, 0, 2)), 1);
    assert!(index
      .edges_at(Point::new(2, 0, 1))
      .unwrap()
      .contains(&EdgeRef::new(0, 1)));
  }
}

//! SliceIndex - which edges pass through a given slice.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::ops::RangeInclusive;

use crate::error::GraphError;
use crate::graph::{EdgeRef, Forest};

/// Mapping from slice coordinate to the set of edges touching that slice.
///
/// An edge is registered under the slice of its `v1` first point, its `v2`
/// first point, and every slab point. Registration is idempotent.
#[derive(Clone, Debug, Default)]
pub struct SliceIndex {
  slices: HashMap<i32, HashSet<EdgeRef>>,
}

impl SliceIndex {
  /// Scan every edge of every tree once.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "index::slices"))]
  pub fn build(forest: &Forest) -> Result<Self, GraphError> {
    let mut index = Self::default();
    for (tree_index, tree) in forest.trees.iter().enumerate() {
      for (edge_index, edge) in tree.edges.iter().enumerate() {
        let edge_ref = EdgeRef::new(tree_index, edge_index);
        let (p1, p2) = tree.edge_endpoints(tree_index, edge_index)?;
        index.insert(p1.slice(), edge_ref);
        index.insert(p2.slice(), edge_ref);
        for slab in &edge.slabs {
          index.insert(slab.slice(), edge_ref);
        }
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(slices = index.len(), "slice index built");

    Ok(index)
  }

  fn insert(&mut self, slice: i32, edge: EdgeRef) {
    self.slices.entry(slice).or_default().insert(edge);
  }

  /// Edges touching `slice`, if any.
  pub fn edges_at(&self, slice: i32) -> Option<&HashSet<EdgeRef>> {
    self.slices.get(&slice)
  }

  pub fn contains(&self, slice: i32, edge: EdgeRef) -> bool {
    self
      .slices
      .get(&slice)
      .is_some_and(|edges| edges.contains(&edge))
  }

  /// Occupied slices in ascending order.
  pub fn slices(&self) -> Vec<i32> {
    let mut slices: Vec<i32> = self.slices.keys().copied().collect();
    slices.sort_unstable();
    slices
  }

  /// Slices under which `edge` is registered, ascending.
  pub fn slices_of(&self, edge: EdgeRef) -> Vec<i32> {
    let mut slices: Vec<i32> = self
      .slices
      .iter()
      .filter(|(_, edges)| edges.contains(&edge))
      .map(|(&z, _)| z)
      .collect();
    slices.sort_unstable();
    slices
  }

  /// Distinct edges touching any slice in `range` (viewport-scoped query).
  pub fn edges_in_range(&self, range: RangeInclusive<i32>) -> BTreeSet<EdgeRef> {
    self
      .slices
      .iter()
      .filter(|(z, _)| range.contains(*z))
      .flat_map(|(_, edges)| edges.iter().copied())
      .collect()
  }

  /// Number of occupied slices.
  pub fn len(&self) -> usize {
    self.slices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slices.is_empty()
  }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod slice_test;

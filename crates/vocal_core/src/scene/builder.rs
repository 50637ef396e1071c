//! Depth-first scene construction with edge de-duplication and classification.
//!
//! Each non-empty tree is walked iteratively from its first edge's `v1`. A
//! frame on the stack pairs a vertex with the scene node it will be attached
//! under, so a vertex and its parent node are always pushed and popped
//! together.
//!
//! # Per-vertex expansion
//!
//! 1. Frames for already visited vertices are dropped (a vertex can be queued
//!    by several branches before it is expanded).
//! 2. The vertex is marked visited, gets the next visit order, and its
//!    predecessor edge becomes [`EdgeKind::Tree`].
//! 3. Branches are de-duplicated: an edge identical to, or sharing its
//!    unordered endpoint pair with, an edge already accepted at this vertex
//!    is skipped. Two polylines for one logical edge would make picks
//!    ambiguous.
//! 4. Each remaining unclassified edge either leads to an unvisited vertex
//!    (polyline + new frame) or closes a cycle ([`EdgeKind::Back`]).

use smallvec::SmallVec;
#[cfg(feature = "tracing")]
use tracing::debug;

use super::geometry::segment_coords;
use super::{ImageDims, Normalizer, NodeId, Polyline, SceneConfig, SceneGraph, SceneNodeKind};
use crate::error::{ConfigError, GraphError};
use crate::graph::{EdgeId, EdgeKind, EdgeRef, Forest, Tree, VertexId};
use crate::ledger::ClassIndex;

/// Counters gathered while building a scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
  /// Trees that produced a tree node (trees with at least one edge).
  pub trees_built: usize,
  /// Vertices expanded.
  pub vertices_visited: usize,
  /// Polyline leaves created.
  pub polylines_built: usize,
  /// Edges classified as closing a cycle.
  pub back_edges: usize,
  /// Branch examinations skipped as duplicates of an accepted edge.
  pub duplicates_suppressed: usize,
  /// Frames dropped because their vertex was already visited.
  pub stale_frames: usize,
}

impl TraversalStats {
  fn merge(&mut self, other: &TraversalStats) {
    self.trees_built += other.trees_built;
    self.vertices_visited += other.vertices_visited;
    self.polylines_built += other.polylines_built;
    self.back_edges += other.back_edges;
    self.duplicates_suppressed += other.duplicates_suppressed;
    self.stale_frames += other.stale_frames;
  }
}

/// Output from scene construction.
#[derive(Clone, Debug)]
pub struct SceneOutput {
  pub scene: SceneGraph,
  pub stats: TraversalStats,
}

/// Builds a [`SceneGraph`] from a forest.
#[derive(Clone, Debug)]
pub struct SceneBuilder {
  config: SceneConfig,
  normalizer: Normalizer,
}

impl SceneBuilder {
  pub fn new(dims: ImageDims, config: SceneConfig) -> Result<Self, ConfigError> {
    dims.validate()?;
    config.validate()?;
    Ok(Self {
      normalizer: Normalizer::new(dims, config.scale),
      config,
    })
  }

  pub fn config(&self) -> &SceneConfig {
    &self.config
  }

  /// Walk every non-empty tree and build the scene.
  ///
  /// Vertex traversal state and edge classifications in `forest` are reset
  /// per tree and rewritten. On error the partially built scene is dropped.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "scene::build"))]
  pub fn build(&self, forest: &mut Forest) -> Result<SceneOutput, GraphError> {
    let mut scene = SceneGraph::new();
    let mut stats = TraversalStats::default();

    for (index, tree) in forest.trees.iter_mut().enumerate() {
      if !tree.has_edges() {
        continue;
      }
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("tree", index).entered();

      let tree_stats = self.build_tree(index, tree, &mut scene)?;

      #[cfg(feature = "tracing")]
      debug!(
        vertices = tree_stats.vertices_visited,
        polylines = tree_stats.polylines_built,
        back_edges = tree_stats.back_edges,
        "tree built"
      );
      stats.merge(&tree_stats);
    }

    #[cfg(feature = "tracing")]
    debug!(?stats, nodes = scene.len(), "scene built");

    Ok(SceneOutput { scene, stats })
  }

  fn build_tree(
    &self,
    index: usize,
    tree: &mut Tree,
    scene: &mut SceneGraph,
  ) -> Result<TraversalStats, GraphError> {
    let mut stats = TraversalStats {
      trees_built: 1,
      ..Default::default()
    };

    tree.reset_traversal();
    let start = tree.edge(index, 0)?.v1;
    tree.vertex_point(index, start)?;

    let tree_node = scene.add_child(scene.root(), SceneNodeKind::Tree { tree: index });
    let mut stack: Vec<(VertexId, NodeId)> = vec![(start, tree_node)];
    let mut visit_order = 0u32;
    let mut accepted: SmallVec<[EdgeId; 8]> = SmallVec::new();

    while let Some((vid, parent)) = stack.pop() {
      let vertex = tree.vertex(index, vid)?;
      if vertex.visited {
        stats.stale_frames += 1;
        continue;
      }
      let predecessor = vertex.predecessor;
      let branches = vertex.branches.clone();
      let position = self.normalizer.to_scene(tree.vertex_point(index, vid)?);

      tree.vertices[vid].mark_visited(visit_order);
      visit_order += 1;
      stats.vertices_visited += 1;
      if let Some(pred) = predecessor {
        tree.edges[pred].kind = EdgeKind::Tree;
      }

      let vertex_node = scene.add_child(
        parent,
        SceneNodeKind::Vertex {
          tree: index,
          vertex: vid,
          position,
          point_size: self.config.vertex_thickness,
        },
      );

      accepted.clear();
      for eid in branches {
        let edge = tree.edge(index, eid)?;
        let opposite = edge.opposite(vid).ok_or_else(|| {
          GraphError::structural(index, format!("vertex {vid} lists edge {eid} which does not touch it"))
        })?;
        let duplicate = accepted
          .iter()
          .any(|&seen| seen == eid || tree.edges[seen].same_endpoints(edge));
        if duplicate {
          stats.duplicates_suppressed += 1;
          continue;
        }
        accepted.push(eid);

        // Back edges are final; the tree edge we arrived through was
        // consumed when this vertex was discovered.
        if edge.kind != EdgeKind::Undefined {
          continue;
        }

        if !tree.vertex(index, opposite)?.visited {
          let polyline = self.polyline(index, tree, eid)?;
          let edge_ref = EdgeRef::new(index, eid);
          let edge_node = scene.add_child(vertex_node, SceneNodeKind::Edge { edge: edge_ref });
          scene.add_child(edge_node, SceneNodeKind::Polyline(polyline));
          stats.polylines_built += 1;

          stack.push((opposite, edge_node));
          tree.vertices[opposite].predecessor = Some(eid);
        } else {
          tree.edges[eid].kind = EdgeKind::Back;
          stats.back_edges += 1;
        }
      }
    }

    Ok(stats)
  }

  fn polyline(&self, index: usize, tree: &Tree, eid: EdgeId) -> Result<Polyline, GraphError> {
    let (p1, p2) = tree.edge_endpoints(index, eid)?;
    let coords = segment_coords(p1, &tree.edges[eid].slabs, p2, &self.normalizer);
    Ok(Polyline {
      edge: EdgeRef::new(index, eid),
      coords,
      color: self.config.edge_color,
      class: ClassIndex::UNASSIGNED,
      thickness: self.config.edge_thickness,
    })
  }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

//! SceneGraph - arena-backed hierarchy handed to the renderer.
//!
//! ```text
//! Root
//! └── Tree
//!     └── Vertex (root vertex of the tree)
//!         ├── Edge ──┬── Polyline   (leaf: EdgeRef + coordinates + color)
//!         │          └── Vertex     (vertex discovered through this edge)
//!         │              └── ...
//!         └── Edge ── ...
//! ```
//!
//! Only leaf color and class attribution may change after construction.

use std::collections::HashMap;

use glam::Vec3;
use smallvec::SmallVec;

use crate::graph::{EdgeRef, VertexId};
use crate::ledger::{ClassIndex, Color};

/// Index of a node in its [`SceneGraph`].
pub type NodeId = usize;

/// Renderable polyline for one logical edge.
///
/// Coordinates are stored as independent segments: pairs `(2i, 2i + 1)`.
/// Interior junctions appear twice so every segment can be colored on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
  /// Logical edge this geometry was built from.
  pub edge: EdgeRef,
  pub coords: Vec<Vec3>,
  pub color: Color,
  /// Class the edge is currently attributed to.
  pub class: ClassIndex,
  pub thickness: f32,
}

impl Polyline {
  pub fn segment_count(&self) -> usize {
    self.coords.len() / 2
  }

  /// Iterate segments as (start, end) pairs.
  pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
    self.coords.chunks_exact(2).map(|pair| (pair[0], pair[1]))
  }
}

/// What a scene node represents.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneNodeKind {
  /// Scene root. Children are trees.
  Root,
  /// One non-empty tree of the forest.
  Tree { tree: usize },
  /// A visited vertex.
  Vertex {
    tree: usize,
    vertex: VertexId,
    /// Normalized position of the vertex's first point.
    position: Vec3,
    point_size: f32,
  },
  /// Groups an edge's polyline with the subtree reached through the edge.
  Edge { edge: EdgeRef },
  /// Leaf geometry.
  Polyline(Polyline),
}

#[derive(Clone, Debug)]
pub struct SceneNode {
  pub parent: Option<NodeId>,
  pub children: SmallVec<[NodeId; 4]>,
  pub kind: SceneNodeKind,
}

/// Scene hierarchy with one polyline leaf per logical edge.
#[derive(Clone, Debug)]
pub struct SceneGraph {
  nodes: Vec<SceneNode>,
  edge_leaves: HashMap<EdgeRef, NodeId>,
}

impl SceneGraph {
  /// Index of the root node.
  pub const ROOT: NodeId = 0;

  /// Scene with only a root node.
  pub fn new() -> Self {
    Self {
      nodes: vec![SceneNode {
        parent: None,
        children: SmallVec::new(),
        kind: SceneNodeKind::Root,
      }],
      edge_leaves: HashMap::new(),
    }
  }

  pub fn root(&self) -> NodeId {
    Self::ROOT
  }

  pub(crate) fn add_child(&mut self, parent: NodeId, kind: SceneNodeKind) -> NodeId {
    let id = self.nodes.len();
    if let SceneNodeKind::Polyline(polyline) = &kind {
      self.edge_leaves.insert(polyline.edge, id);
    }
    self.nodes.push(SceneNode {
      parent: Some(parent),
      children: SmallVec::new(),
      kind,
    });
    self.nodes[parent].children.push(id);
    id
  }

  pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
    self.nodes.get(id)
  }

  pub fn children(&self, id: NodeId) -> &[NodeId] {
    self
      .nodes
      .get(id)
      .map(|n| n.children.as_slice())
      .unwrap_or(&[])
  }

  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.nodes.get(id)?.parent
  }

  /// Total node count, root included.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// True if the scene holds nothing but its root.
  pub fn is_empty(&self) -> bool {
    self.nodes.len() == 1
  }

  pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
    self.nodes.iter().enumerate()
  }

  /// All polyline leaves with their node ids.
  pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &Polyline)> {
    self.nodes.iter().enumerate().filter_map(|(id, n)| match &n.kind {
      SceneNodeKind::Polyline(p) => Some((id, p)),
      _ => None,
    })
  }

  pub fn leaf_count(&self) -> usize {
    self.edge_leaves.len()
  }

  pub fn polyline(&self, id: NodeId) -> Option<&Polyline> {
    match &self.nodes.get(id)?.kind {
      SceneNodeKind::Polyline(p) => Some(p),
      _ => None,
    }
  }

  /// Leaf rendering the given edge, if the edge produced one.
  pub fn leaf_for_edge(&self, edge: EdgeRef) -> Option<NodeId> {
    self.edge_leaves.get(&edge).copied()
  }

  /// Container node of a tree, by forest index.
  pub fn tree_node(&self, tree: usize) -> Option<NodeId> {
    self
      .children(Self::ROOT)
      .iter()
      .copied()
      .find(|&id| matches!(self.nodes[id].kind, SceneNodeKind::Tree { tree: t } if t == tree))
  }

  /// Resolve a picked node to its logical edge.
  ///
  /// Polylines and their edge containers resolve; vertices and trees do not.
  pub fn resolve_pick(&self, id: NodeId) -> Option<EdgeRef> {
    match &self.nodes.get(id)?.kind {
      SceneNodeKind::Polyline(p) => Some(p.edge),
      SceneNodeKind::Edge { edge } => Some(*edge),
      _ => None,
    }
  }

  /// Recolor a leaf and record its class. Returns false for non-leaf nodes.
  pub fn set_leaf_color(&mut self, id: NodeId, color: Color, class: ClassIndex) -> bool {
    match self.nodes.get_mut(id).map(|n| &mut n.kind) {
      Some(SceneNodeKind::Polyline(p)) => {
        p.color = color;
        p.class = class;
        true
      }
      _ => false,
    }
  }

  /// Return every leaf drawn in `color` to `default` and unassign it.
  ///
  /// Returns the number of leaves reset.
  pub fn reset_color(&mut self, color: Color, default: Color) -> usize {
    let mut reset = 0;
    for node in &mut self.nodes {
      if let SceneNodeKind::Polyline(p) = &mut node.kind {
        if p.color == color {
          p.color = default;
          p.class = ClassIndex::UNASSIGNED;
          reset += 1;
        }
      }
    }
    reset
  }
}

impl Default for SceneGraph {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

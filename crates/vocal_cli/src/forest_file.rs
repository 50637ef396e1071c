//! JSON skeleton forest as written by the analysis stage.
//!
//! ```json
//! { "trees": [ {
//!     "vertices": [ { "points": [[0, 0, 0]] }, { "points": [[2, 0, 0]] } ],
//!     "edges": [ { "v1": 0, "v2": 1, "slabs": [[1, 0, 0]] } ]
//! } ] }
//! ```
//!
//! Vertices may carry an explicit `branches` list. When any vertex of a tree
//! does, branches are taken verbatim for the whole tree; otherwise they are
//! derived from the edge list.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use vocal_core::{Edge, Forest, Point, Tree, TreeBuilder, Vertex};

#[derive(Debug, Deserialize)]
pub struct ForestFile {
	pub trees: Vec<TreeFile>,
}

#[derive(Debug, Deserialize)]
pub struct TreeFile {
	pub vertices: Vec<VertexFile>,
	#[serde(default)]
	pub edges: Vec<EdgeFile>,
}

#[derive(Debug, Deserialize)]
pub struct VertexFile {
	pub points: Vec<[i32; 3]>,
	#[serde(default)]
	pub branches: Option<Vec<usize>>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeFile {
	pub v1: usize,
	pub v2: usize,
	#[serde(default)]
	pub slabs: Vec<[i32; 3]>,
}

impl ForestFile {
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read forest file: {}", path.display()))?;
		serde_json::from_str(&content)
			.with_context(|| format!("Failed to parse forest JSON: {}", path.display()))
	}

	/// Convert to the graph model and check every cross-reference.
	pub fn into_forest(self) -> Result<Forest> {
		let forest = Forest::new(self.trees.into_iter().map(TreeFile::into_tree).collect());
		forest.validate().context("Forest failed structural validation")?;
		Ok(forest)
	}
}

fn points(raw: Vec<[i32; 3]>) -> Vec<Point> {
	raw.into_iter().map(Point::from).collect()
}

impl TreeFile {
	fn into_tree(self) -> Tree {
		if self.vertices.iter().any(|v| v.branches.is_some()) {
			return self.into_tree_verbatim();
		}
		let mut builder = TreeBuilder::new();
		for vertex in self.vertices {
			builder.vertex_with_points(points(vertex.points));
		}
		for edge in self.edges {
			builder.edge(edge.v1, edge.v2, points(edge.slabs));
		}
		builder.build()
	}

	fn into_tree_verbatim(self) -> Tree {
		let vertices = self
			.vertices
			.into_iter()
			.map(|v| {
				let mut vertex = Vertex::new(points(v.points));
				vertex.branches = v.branches.unwrap_or_default().into_iter().collect();
				vertex
			})
			.collect();
		let edges = self
			.edges
			.into_iter()
			.map(|e| Edge::new(e.v1, e.v2, points(e.slabs)))
			.collect();
		Tree::new(vertices, edges)
	}
}

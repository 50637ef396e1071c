//! Test fixtures: small hand-built trees and generated lattices.

use std::collections::{BTreeSet, VecDeque};

use crate::graph::{Forest, Point, Tree, TreeBuilder, VertexId};

/// V1(0,0,0) - slab(1,0,0) - V2(2,0,0).
pub fn single_edge_tree() -> Tree {
  let mut builder = TreeBuilder::new();
  let a = builder.vertex(Point::new(0, 0, 0));
  let b = builder.vertex(Point::new(2, 0, 0));
  builder.edge(a, b, vec![Point::new(1, 0, 0)]);
  builder.build()
}

/// Three vertices joined in a cycle: A-B, B-C, C-A.
pub fn triangle_tree() -> Tree {
  let mut builder = TreeBuilder::new();
  let a = builder.vertex(Point::new(0, 0, 0));
  let b = builder.vertex(Point::new(4, 0, 1));
  let c = builder.vertex(Point::new(0, 4, 2));
  builder.edge(a, b, vec![Point::new(2, 0, 0)]);
  builder.edge(b, c, vec![Point::new(2, 2, 1)]);
  builder.edge(c, a, vec![Point::new(0, 2, 1)]);
  builder.build()
}

/// A-B twice (second reversed, different path) plus B-C.
pub fn parallel_edge_tree() -> Tree {
  let mut builder = TreeBuilder::new();
  let a = builder.vertex(Point::new(0, 0, 0));
  let b = builder.vertex(Point::new(3, 0, 0));
  let c = builder.vertex(Point::new(6, 0, 0));
  builder.edge(a, b, vec![Point::new(1, 0, 0), Point::new(2, 0, 0)]);
  builder.edge(b, a, vec![Point::new(2, 1, 0), Point::new(1, 1, 0)]);
  builder.edge(b, c, Vec::new());
  builder.build()
}

/// Path of `n` vertices along x, one slab between neighbours.
pub fn chain_tree(n: usize) -> Tree {
  let mut builder = TreeBuilder::new();
  let ids: Vec<VertexId> = (0..n)
    .map(|i| builder.vertex(Point::new(2 * i as i32, 0, i as i32)))
    .collect();
  for pair in ids.windows(2) {
    let x = 2 * pair[0] as i32 + 1;
    builder.edge(pair[0], pair[1], vec![Point::new(x, 0, pair[0] as i32)]);
  }
  builder.build()
}

/// `w` x `h` lattice of vertices with horizontal and vertical edges.
pub fn grid_tree(w: usize, h: usize) -> Tree {
  let mut builder = TreeBuilder::new();
  let id = |x: usize, y: usize| y * w + x;
  for y in 0..h {
    for x in 0..w {
      builder.vertex(Point::new(4 * x as i32, 4 * y as i32, (x + y) as i32));
    }
  }
  for y in 0..h {
    for x in 0..w {
      let here = Point::new(4 * x as i32, 4 * y as i32, (x + y) as i32);
      if x + 1 < w {
        builder.edge(id(x, y), id(x + 1, y), vec![Point::new(here.x + 2, here.y, here.z)]);
      }
      if y + 1 < h {
        builder.edge(id(x, y), id(x, y + 1), vec![Point::new(here.x, here.y + 2, here.z)]);
      }
    }
  }
  builder.build()
}

pub fn forest_of(trees: Vec<Tree>) -> Forest {
  Forest::new(trees)
}

/// Distinct unordered endpoint pairs (self-loops excluded) among edges
/// reachable from the first edge's `v1`.
pub fn reachable_pairs(tree: &Tree) -> BTreeSet<(VertexId, VertexId)> {
  let mut pairs = BTreeSet::new();
  let Some(first) = tree.edges.first() else {
    return pairs;
  };
  let mut seen = vec![false; tree.vertices.len()];
  let mut queue = VecDeque::from([first.v1]);
  seen[first.v1] = true;
  while let Some(v) = queue.pop_front() {
    for &eid in &tree.vertices[v].branches {
      let edge = &tree.edges[eid];
      if !edge.is_self_loop() {
        pairs.insert(edge.endpoint_pair());
      }
      if let Some(o) = edge.opposite(v) {
        if !seen[o] {
          seen[o] = true;
          queue.push_back(o);
        }
      }
    }
  }
  pairs
}

/// Vertices reachable from the first edge's `v1`.
pub fn reachable_vertices(tree: &Tree) -> usize {
  let Some(first) = tree.edges.first() else {
    return 0;
  };
  let mut seen = vec![false; tree.vertices.len()];
  let mut stack = vec![first.v1];
  seen[first.v1] = true;
  let mut count = 0;
  while let Some(v) = stack.pop() {
    count += 1;
    for &eid in &tree.vertices[v].branches {
      if let Some(o) = tree.edges[eid].opposite(v) {
        if !seen[o] {
          seen[o] = true;
          stack.push(o);
        }
      }
    }
  }
  count
}

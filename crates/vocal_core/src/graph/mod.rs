//! Skeleton graph model consumed from the analysis stage.
//!
//! A [`Forest`] is an ordered list of [`Tree`]s, each one connected component
//! of the skeleton. Vertices and edges are stored in per-tree arenas and refer
//! to each other by index ([`VertexId`], [`EdgeId`]), so the graph is plain
//! owned data with no shared pointers.
//!
//! # Traversal State
//!
//! Vertices carry a visited flag, a visit order and a predecessor edge; edges
//! carry an [`EdgeKind`] classification. All of these are written only by the
//! scene builder during its single pass and are read-only afterwards.
//!
//! # Module Structure
//!
//! - [`point`]: `Point` - integer voxel coordinate
//! - [`vertex`]: `Vertex` - junction/end point with incident branches
//! - [`edge`]: `Edge`, `EdgeKind`, `EdgeRef` - skeleton branch with slab path
//! - [`tree`]: `Tree`, `TreeBuilder`, `Forest`

pub mod edge;
pub mod point;
pub mod tree;
pub mod vertex;

pub use edge::{Edge, EdgeId, EdgeKind, EdgeRef};
pub use point::Point;
pub use tree::{Forest, Tree, TreeBuilder};
pub use vertex::{Vertex, VertexId};

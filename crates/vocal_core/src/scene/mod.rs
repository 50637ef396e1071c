//! Scene construction from a skeleton forest.
//!
//! The builder produces a hierarchy isomorphic to the depth-first walk of
//! each tree: one polyline leaf per logical edge, with every leaf carrying an
//! [`EdgeRef`](crate::graph::EdgeRef) back to the edge it draws.
//!
//! # Module Structure
//!
//! - [`config`]: `SceneConfig`, `ImageDims`, `Normalizer` - scale and coordinate mapping
//! - [`node`]: `SceneGraph` - arena hierarchy handed to the renderer
//! - [`geometry`]: segment-list coordinates for an edge
//! - [`builder`]: `SceneBuilder` - traversal, de-duplication, classification

pub mod builder;
pub mod config;
pub mod geometry;
pub mod node;

pub use builder::{SceneBuilder, SceneOutput, TraversalStats};
pub use config::{ImageDims, Normalizer, SceneConfig};
pub use node::{NodeId, Polyline, SceneGraph, SceneNode, SceneNodeKind};

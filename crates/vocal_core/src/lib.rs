//! vocal_core - Skeleton forest to pickable scene with calibrated volumes
//!
//! Takes the skeleton of a segmented 3D image (a forest of vertex/edge trees
//! over integer voxel coordinates) and produces what an interactive viewer
//! needs to measure it:
//!
//! - **Scene hierarchy**: depth-first walk of each tree into a renderable
//!   hierarchy with one polyline leaf per logical edge. Duplicate branches
//!   are suppressed and every edge is classified as tree or back edge.
//! - **Slice index**: slice (z) to the edges passing through it, for
//!   slice-scoped display.
//! - **Volume ledger**: user-defined color classes accumulating voxel counts
//!   and calibrated physical volume as edges are picked.
//!
//! # Example
//!
//! ```ignore
//! use vocal_core::{AnalyzedForest, Calibration, Color, ImageDims, SceneConfig};
//!
//! let analyzed = AnalyzedForest::new(forest, ImageDims::new(512, 512, 64), &SceneConfig::default())?;
//! let mut session = analyzed.session(&Calibration::new(0.2, 0.2, 1.0, "um"));
//!
//! let dendrites = session.ledger_mut().add_class(Color::RED)?;
//! let edge = vocal_core::EdgeRef::new(0, 3);
//! session.pick_edge(edge, analyzed.voxel_span(edge).unwrap_or(0))?;
//!
//! println!("{} {}^3", session.ledger().volume_of(dendrites)?, session.ledger().units());
//! ```

pub mod analyzed;
pub mod error;
pub mod graph;
pub mod index;
pub mod ledger;
pub mod scene;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use analyzed::{AnalyzeError, AnalyzedForest};
pub use error::{ConfigError, GraphError, LedgerError, SessionError};
pub use graph::{Edge, EdgeId, EdgeKind, EdgeRef, Forest, Point, Tree, TreeBuilder, Vertex, VertexId};
pub use index::{EndpointIndex, SliceIndex};
pub use ledger::{Calibration, ClassIndex, Color, ColorClass, VolumeLedger};
pub use scene::{
  ImageDims, NodeId, Polyline, SceneBuilder, SceneConfig, SceneGraph, SceneNode, SceneNodeKind,
  SceneOutput, TraversalStats,
};
pub use session::{PickOutcome, VolumeSession};

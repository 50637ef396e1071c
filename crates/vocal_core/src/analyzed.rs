//! AnalyzedForest - one image's skeleton with its scene and lookup tables.
//!
//! ```text
//! Forest ──► SliceIndex
//!        ──► EndpointIndex
//!        ──► SceneBuilder ──► SceneGraph (+ edge classification in Forest)
//! ```
//!
//! Indexes are built before the scene so structural errors surface from the
//! cheapest pass first.

use thiserror::Error;

use crate::error::{ConfigError, GraphError};
use crate::graph::{Edge, EdgeRef, Forest};
use crate::index::{EndpointIndex, SliceIndex};
use crate::ledger::{Calibration, VolumeLedger};
use crate::scene::{ImageDims, SceneBuilder, SceneConfig, SceneGraph, TraversalStats};
use crate::session::VolumeSession;

/// Why an [`AnalyzedForest`] could not be assembled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeError {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error(transparent)]
  Graph(#[from] GraphError),
}

#[derive(Clone, Debug)]
pub struct AnalyzedForest {
  forest: Forest,
  scene: SceneGraph,
  slices: SliceIndex,
  endpoints: EndpointIndex,
  stats: TraversalStats,
  config: SceneConfig,
}

impl AnalyzedForest {
  /// Index the forest and build its scene. Takes ownership since the build
  /// writes traversal state into the forest.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "analyze"))]
  pub fn new(mut forest: Forest, dims: ImageDims, config: &SceneConfig) -> Result<Self, AnalyzeError> {
    let builder = SceneBuilder::new(dims, config.clone())?;
    let slices = SliceIndex::build(&forest)?;
    let endpoints = EndpointIndex::build(&forest)?;
    let output = builder.build(&mut forest)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
      trees = forest.trees.len(),
      edges = forest.edge_count(),
      leaves = output.scene.leaf_count(),
      slices = slices.len(),
      "forest analyzed"
    );

    Ok(Self {
      forest,
      scene: output.scene,
      slices,
      endpoints,
      stats: output.stats,
      config: config.clone(),
    })
  }

  pub fn forest(&self) -> &Forest {
    &self.forest
  }

  pub fn scene(&self) -> &SceneGraph {
    &self.scene
  }

  pub fn slices(&self) -> &SliceIndex {
    &self.slices
  }

  pub fn endpoints(&self) -> &EndpointIndex {
    &self.endpoints
  }

  pub fn stats(&self) -> &TraversalStats {
    &self.stats
  }

  pub fn edge(&self, edge: EdgeRef) -> Option<&Edge> {
    self.forest.edge(edge)
  }

  /// Voxels covered by an edge: both endpoints plus its slabs.
  pub fn voxel_span(&self, edge: EdgeRef) -> Option<i64> {
    self.edge(edge).map(Edge::voxel_span)
  }

  /// Start an accounting session over this scene with an empty ledger.
  ///
  /// The session gets its own copy of the scene so the pristine geometry
  /// stays available here.
  pub fn session(&self, calibration: &Calibration) -> VolumeSession {
    VolumeSession::new(
      self.scene.clone(),
      VolumeLedger::new(calibration),
      self.config.edge_color,
    )
  }

  pub fn into_forest(self) -> Forest {
    self.forest
  }
}

//! Error types for scene construction, indexing and volume accounting.

use thiserror::Error;

use crate::graph::EdgeRef;
use crate::ledger::{ClassIndex, Color};

/// Structural problems in a forest handed over by the analysis stage.
///
/// These are not recoverable for the image that produced them: construction
/// aborts and no partially built scene is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
  #[error("structural integrity violation in tree {tree}: {detail}")]
  StructuralIntegrity { tree: usize, detail: String },
}

impl GraphError {
  pub(crate) fn structural(tree: usize, detail: impl Into<String>) -> Self {
    GraphError::StructuralIntegrity {
      tree,
      detail: detail.into(),
    }
  }
}

/// Ledger failures. The ledger is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
  #[error("color {0} is already used by another class")]
  DuplicateColor(Color),

  #[error("class index {index} out of range ({len} classes)")]
  IndexOutOfRange { index: ClassIndex, len: usize },
}

/// Invalid construction parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error("image dimensions must be positive, got {width}x{height}x{depth}")]
  InvalidDimensions { width: u32, height: u32, depth: u32 },

  #[error("scene scale must be finite and positive, got {0}")]
  InvalidScale(f32),

  #[error("calibration spacing must be finite, got {0}")]
  InvalidCalibration(f64),
}

/// Failures surfaced by [`crate::session::VolumeSession`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
  #[error("scene node {0} is not part of an edge")]
  NotAnEdge(usize),

  #[error("edge {0} has no leaf in the scene")]
  NoLeaf(EdgeRef),

  #[error(transparent)]
  Ledger(#[from] LedgerError),
}

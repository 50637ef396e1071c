//! VolumeSession - attributes picked edges to color classes.
//!
//! Keeps leaf colors and ledger counts in step. A pick toggles the edge:
//!
//! ```text
//! leaf class        pick result
//! ──────────────    ──────────────────────────────────────────────
//! unassigned     →  current class   (+voxels, class color)
//! current class  →  unassigned      (-voxels, default color)
//! other class    →  current class   (-voxels old, +voxels current)
//! ```

use crate::error::SessionError;
use crate::graph::EdgeRef;
use crate::ledger::{ClassIndex, Color, VolumeLedger};
use crate::scene::{NodeId, SceneGraph};

/// Result of one pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
  /// Edge added to the current class.
  Attributed { edge: EdgeRef, class: ClassIndex },
  /// Edge removed from the current class.
  Released { edge: EdgeRef, class: ClassIndex },
  /// Edge moved from another class to the current one.
  Moved {
    edge: EdgeRef,
    from: ClassIndex,
    to: ClassIndex,
  },
  /// No class exists yet; nothing changed.
  Ignored { edge: EdgeRef },
}

/// Interactive session state for one image.
#[derive(Clone, Debug)]
pub struct VolumeSession {
  scene: SceneGraph,
  ledger: VolumeLedger,
  default_color: Color,
}

impl VolumeSession {
  /// `default_color` is the color of unassigned edges.
  pub fn new(scene: SceneGraph, ledger: VolumeLedger, default_color: Color) -> Self {
    Self {
      scene,
      ledger,
      default_color,
    }
  }

  pub fn scene(&self) -> &SceneGraph {
    &self.scene
  }

  pub fn ledger(&self) -> &VolumeLedger {
    &self.ledger
  }

  /// Class management (add, select). Accounting goes through [`Self::pick`].
  pub fn ledger_mut(&mut self) -> &mut VolumeLedger {
    &mut self.ledger
  }

  pub fn into_parts(self) -> (SceneGraph, VolumeLedger) {
    (self.scene, self.ledger)
  }

  /// Toggle attribution of the edge drawn by `node`.
  ///
  /// `node` may be the polyline leaf or its edge container. `voxels` is the
  /// size of the edge in voxels.
  pub fn pick(&mut self, node: NodeId, voxels: i64) -> Result<PickOutcome, SessionError> {
    let edge = self
      .scene
      .resolve_pick(node)
      .ok_or(SessionError::NotAnEdge(node))?;
    let leaf = self
      .scene
      .leaf_for_edge(edge)
      .ok_or(SessionError::NotAnEdge(node))?;
    let previous = self
      .scene
      .polyline(leaf)
      .map(|p| p.class)
      .ok_or(SessionError::NotAnEdge(node))?;
    let current = self.ledger.current_class();

    if previous.is_unassigned() && current.is_unassigned() {
      return Ok(PickOutcome::Ignored { edge });
    }

    // Validate before mutating so a failure leaves both sides untouched.
    if !previous.is_unassigned() {
      self.ledger.class(previous)?;
    }
    let current_color = if current.is_unassigned() {
      None
    } else {
      Some(self.ledger.color_of(current)?)
    };

    let outcome = match current_color {
      Some(color) if previous.is_unassigned() => {
        self.ledger.update_voxel_count(current, voxels)?;
        self.scene.set_leaf_color(leaf, color, current);
        PickOutcome::Attributed {
          edge,
          class: current,
        }
      }
      Some(color) if previous != current => {
        self.ledger.update_voxel_count(previous, -voxels)?;
        self.ledger.update_voxel_count(current, voxels)?;
        self.scene.set_leaf_color(leaf, color, current);
        PickOutcome::Moved {
          edge,
          from: previous,
          to: current,
        }
      }
      _ => {
        self.ledger.update_voxel_count(previous, -voxels)?;
        self
          .scene
          .set_leaf_color(leaf, self.default_color, ClassIndex::UNASSIGNED);
        PickOutcome::Released {
          edge,
          class: previous,
        }
      }
    };
    Ok(outcome)
  }

  /// Pick by logical edge rather than scene node.
  pub fn pick_edge(&mut self, edge: EdgeRef, voxels: i64) -> Result<PickOutcome, SessionError> {
    let leaf = self
      .scene
      .leaf_for_edge(edge)
      .ok_or(SessionError::NoLeaf(edge))?;
    self.pick(leaf, voxels)
  }

  /// Zero a class and return its edges to the default color.
  ///
  /// Returns the number of leaves reset.
  pub fn clear_class(&mut self, index: ClassIndex) -> Result<usize, SessionError> {
    let color = self.ledger.color_of(index)?;
    self.ledger.clear_voxel_count(index)?;
    Ok(self.scene.reset_color(color, self.default_color))
  }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

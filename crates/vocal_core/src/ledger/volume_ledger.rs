//! VolumeLedger - append-only list of color classes with calibrated volumes.

use super::{Calibration, ClassIndex, Color};
use crate::error::LedgerError;

/// One accumulation bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorClass {
  pub color: Color,
  /// Signed running total. Negative values are representable when more
  /// voxels are released than were attributed.
  pub voxel_count: i64,
  /// Always `voxel_count * multiplier`.
  pub volume: f64,
}

/// Calibrated volume ledger for one image.
///
/// Classes are never removed and no two classes share a color. Every failing
/// call leaves the ledger untouched.
#[derive(Clone, Debug)]
pub struct VolumeLedger {
  classes: Vec<ColorClass>,
  current: ClassIndex,
  multiplier: f64,
  units: String,
}

impl VolumeLedger {
  /// Create an empty ledger. The voxel volume is fixed from here on.
  pub fn new(calibration: &Calibration) -> Self {
    Self {
      classes: Vec::new(),
      current: ClassIndex::UNASSIGNED,
      multiplier: calibration.voxel_volume(),
      units: calibration.units.clone(),
    }
  }

  /// Append a class with zero count and make it current.
  pub fn add_class(&mut self, color: Color) -> Result<ClassIndex, LedgerError> {
    if self.classes.iter().any(|c| c.color == color) {
      return Err(LedgerError::DuplicateColor(color));
    }
    self.classes.push(ColorClass {
      color,
      voxel_count: 0,
      volume: 0.0,
    });
    self.current = ClassIndex(self.classes.len() - 1);
    Ok(self.current)
  }

  /// Active class, or [`ClassIndex::UNASSIGNED`] while the ledger is empty.
  pub fn current_class(&self) -> ClassIndex {
    self.current
  }

  /// Switch the active class. No accounting side effect.
  pub fn set_current_class(&mut self, index: ClassIndex) -> Result<(), LedgerError> {
    self.class(index)?;
    self.current = index;
    Ok(())
  }

  /// Add a signed delta to a class and recompute its volume.
  ///
  /// [`ClassIndex::UNASSIGNED`] is accepted and ignored.
  pub fn update_voxel_count(&mut self, index: ClassIndex, delta: i64) -> Result<(), LedgerError> {
    if index.is_unassigned() {
      return Ok(());
    }
    let multiplier = self.multiplier;
    let class = self.class_mut(index)?;
    class.voxel_count += delta;
    class.volume = class.voxel_count as f64 * multiplier;
    Ok(())
  }

  /// Bring a class back to zero voxels and zero volume.
  pub fn clear_voxel_count(&mut self, index: ClassIndex) -> Result<(), LedgerError> {
    if index.is_unassigned() {
      return Ok(());
    }
    let count = self.class(index)?.voxel_count;
    self.update_voxel_count(index, -count)
  }

  pub fn volume_of(&self, index: ClassIndex) -> Result<f64, LedgerError> {
    Ok(self.class(index)?.volume)
  }

  pub fn color_of(&self, index: ClassIndex) -> Result<Color, LedgerError> {
    Ok(self.class(index)?.color)
  }

  pub fn voxel_count_of(&self, index: ClassIndex) -> Result<i64, LedgerError> {
    Ok(self.class(index)?.voxel_count)
  }

  /// Color of the active class, if any.
  pub fn selected_color(&self) -> Option<Color> {
    self.class(self.current).ok().map(|c| c.color)
  }

  /// Index of the class using `color`.
  pub fn find_color(&self, color: Color) -> Option<ClassIndex> {
    self
      .classes
      .iter()
      .position(|c| c.color == color)
      .map(ClassIndex)
  }

  pub fn class(&self, index: ClassIndex) -> Result<&ColorClass, LedgerError> {
    let len = self.classes.len();
    self
      .classes
      .get(index.0)
      .ok_or(LedgerError::IndexOutOfRange { index, len })
  }

  fn class_mut(&mut self, index: ClassIndex) -> Result<&mut ColorClass, LedgerError> {
    let len = self.classes.len();
    self
      .classes
      .get_mut(index.0)
      .ok_or(LedgerError::IndexOutOfRange { index, len })
  }

  /// Iterate classes with their indices, in creation order.
  pub fn classes(&self) -> impl Iterator<Item = (ClassIndex, &ColorClass)> {
    self
      .classes
      .iter()
      .enumerate()
      .map(|(i, c)| (ClassIndex(i), c))
  }

  /// Volume of one voxel in calibrated units.
  pub fn multiplier(&self) -> f64 {
    self.multiplier
  }

  /// Calibration unit label, for display only.
  pub fn units(&self) -> &str {
    &self.units
  }

  /// Sum of all class volumes.
  pub fn total_volume(&self) -> f64 {
    self.classes.iter().map(|c| c.volume).sum()
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }
}

#[cfg(test)]
#[path = "volume_ledger_test.rs"]
mod volume_ledger_test;

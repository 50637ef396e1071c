//! Physical voxel spacing supplied with the image.

use crate::error::ConfigError;

/// Per-axis physical size of one voxel, plus the unit label for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Calibration {
  pub pixel_width: f64,
  pub pixel_height: f64,
  pub pixel_depth: f64,
  pub units: String,
}

impl Calibration {
  pub fn new(pixel_width: f64, pixel_height: f64, pixel_depth: f64, units: impl Into<String>) -> Self {
    Self {
      pixel_width,
      pixel_height,
      pixel_depth,
      units: units.into(),
    }
  }

  /// Physical volume represented by one voxel.
  #[inline]
  pub fn voxel_volume(&self) -> f64 {
    self.pixel_width * self.pixel_height * self.pixel_depth
  }

  /// Reject NaN or infinite spacing. Zero and negative spacing are accepted.
  pub fn validate(&self) -> Result<(), ConfigError> {
    for value in [self.pixel_width, self.pixel_height, self.pixel_depth] {
      if !value.is_finite() {
        return Err(ConfigError::InvalidCalibration(value));
      }
    }
    Ok(())
  }
}

impl Default for Calibration {
  /// Uncalibrated image: one voxel is one cubic pixel.
  fn default() -> Self {
    Self::new(1.0, 1.0, 1.0, "pixel")
  }
}

//! SceneConfig and ImageDims - parameters for scene construction.

use glam::Vec3;

use crate::error::ConfigError;
use crate::graph::Point;
use crate::ledger::Color;

/// Size of the source image stack in voxels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDims {
  pub width: u32,
  pub height: u32,
  /// Number of slices. Recorded for hosts; z is normalized by height.
  pub depth: u32,
}

impl ImageDims {
  pub fn new(width: u32, height: u32, depth: u32) -> Self {
    Self {
      width,
      height,
      depth,
    }
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.width == 0 || self.height == 0 || self.depth == 0 {
      return Err(ConfigError::InvalidDimensions {
        width: self.width,
        height: self.height,
        depth: self.depth,
      });
    }
    Ok(())
  }
}

/// Configuration for scene construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
  /// Uniform scale applied after normalization.
  pub scale: f32,
  /// Color of edges not attributed to any class.
  pub edge_color: Color,
  /// Line width hint for edge polylines.
  pub edge_thickness: f32,
  /// Point size hint for vertex markers.
  pub vertex_thickness: f32,
}

impl Default for SceneConfig {
  fn default() -> Self {
    Self {
      scale: 1.5,
      edge_color: Color::WHITE,
      edge_thickness: 2.0,
      vertex_thickness: 2.0,
    }
  }
}

impl SceneConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_scale(mut self, scale: f32) -> Self {
    self.scale = scale;
    self
  }

  pub fn with_edge_color(mut self, color: Color) -> Self {
    self.edge_color = color;
    self
  }

  pub fn with_edge_thickness(mut self, thickness: f32) -> Self {
    self.edge_thickness = thickness;
    self
  }

  pub fn with_vertex_thickness(mut self, thickness: f32) -> Self {
    self.vertex_thickness = thickness;
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if !self.scale.is_finite() || self.scale <= 0.0 {
      return Err(ConfigError::InvalidScale(self.scale));
    }
    Ok(())
  }
}

/// Maps voxel coordinates into scene space.
///
/// ```text
/// scene = (x / width, y / height, z / height) * scale
/// ```
///
/// z is divided by the image height, not the stack depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
  width: f32,
  height: f32,
  scale: f32,
}

impl Normalizer {
  pub fn new(dims: ImageDims, scale: f32) -> Self {
    Self {
      width: dims.width as f32,
      height: dims.height as f32,
      scale,
    }
  }

  #[inline]
  pub fn to_scene(&self, point: Point) -> Vec3 {
    Vec3::new(
      point.x as f32 / self.width,
      point.y as f32 / self.height,
      point.z as f32 / self.height,
    ) * self.scale
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

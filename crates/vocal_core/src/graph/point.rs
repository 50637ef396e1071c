//! Point - integer voxel coordinate.

use std::fmt;

/// Voxel coordinate in image space. `z` identifies the slice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Point {
  pub x: i32,
  pub y: i32,
  pub z: i32,
}

impl Point {
  pub const fn new(x: i32, y: i32, z: i32) -> Self {
    Self { x, y, z }
  }

  /// Slice coordinate of this point.
  #[inline]
  pub fn slice(&self) -> i32 {
    self.z
  }
}

impl From<[i32; 3]> for Point {
  fn from([x, y, z]: [i32; 3]) -> Self {
    Self { x, y, z }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.x, self.y, self.z)
  }
}

//! Display colors and class indices.

use std::fmt;

/// 8-bit RGB display color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Color {
  pub const WHITE: Self = Self::rgb(255, 255, 255);
  pub const RED: Self = Self::rgb(255, 0, 0);
  pub const GREEN: Self = Self::rgb(0, 255, 0);
  pub const BLUE: Self = Self::rgb(0, 0, 255);
  pub const YELLOW: Self = Self::rgb(255, 255, 0);
  pub const MAGENTA: Self = Self::rgb(255, 0, 255);
  pub const CYAN: Self = Self::rgb(0, 255, 255);

  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Normalized [0, 1] channels for renderers.
  pub fn to_rgb_f32(self) -> [f32; 3] {
    [
      self.r as f32 / 255.0,
      self.g as f32 / 255.0,
      self.b as f32 / 255.0,
    ]
  }
}

impl Default for Color {
  fn default() -> Self {
    Self::WHITE
  }
}

impl From<[u8; 3]> for Color {
  fn from([r, g, b]: [u8; 3]) -> Self {
    Self { r, g, b }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

/// Position of a class in a [`super::VolumeLedger`].
///
/// [`ClassIndex::UNASSIGNED`] marks geometry not attributed to any class; it
/// is accepted by accounting calls as a no-op and never names a real class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ClassIndex(pub usize);

impl ClassIndex {
  pub const UNASSIGNED: Self = Self(usize::MAX);

  #[inline]
  pub fn is_unassigned(self) -> bool {
    self == Self::UNASSIGNED
  }

  pub fn get(self) -> Option<usize> {
    (!self.is_unassigned()).then_some(self.0)
  }
}

impl Default for ClassIndex {
  fn default() -> Self {
    Self::UNASSIGNED
  }
}

impl fmt::Display for ClassIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_unassigned() {
      write!(f, "unassigned")
    } else {
      write!(f, "{}", self.0)
    }
  }
}

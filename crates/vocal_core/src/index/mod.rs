//! Read-only lookup tables built once from a forest.
//!
//! - [`SliceIndex`]: slice (z) → edges passing through it
//! - [`EndpointIndex`]: endpoint voxel → edges ending there
//!
//! Neither index reads or writes edge classification, so they can be built
//! before or after the scene.

pub mod endpoint;
pub mod slice;

pub use endpoint::EndpointIndex;
pub use slice::SliceIndex;

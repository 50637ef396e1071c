//! Volume accounting per user-defined color class.
//!
//! Each class pairs a display color with a running voxel count. The physical
//! volume of a class is always `voxel_count * multiplier`, where the
//! multiplier is the volume of one voxel taken from the image calibration.
//!
//! ```text
//! pick edge (voxels = n) ──► update_voxel_count(class, +n) ──► volume = count * multiplier
//! unpick edge            ──► update_voxel_count(class, -n)
//! ```

pub mod calibration;
pub mod color;
pub mod volume_ledger;

pub use calibration::Calibration;
pub use color::{ClassIndex, Color};
pub use volume_ledger::{ColorClass, VolumeLedger};

//! Control-point loading, saving and merging.
//!
//! Control points are manually placed 3D coordinates used to guide
//! bias-field correction of a white-matter segmentation. Two editors working
//! on the same subject produce two control-point files; this crate combines
//! them into one deduplicated set:
//!
//! - **Text format** - the line-oriented `x y z` / `info` / `numpoints` /
//!   `useRealRAS` format, parsed tolerantly and written back with
//!   fixed-point coordinates
//! - **Merge** - union of two point sets under a minimum-separation
//!   tolerance, with a hard error when the two files disagree on the RAS
//!   coordinate convention
//!
//! # Example
//!
//! ```
//! use surf_controlpoints::{merge, ControlPointFile, DEFAULT_MIN_SEPARATION};
//! use nalgebra::Point3;
//!
//! let a = ControlPointFile::from_points(
//!     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
//!     true,
//! );
//! let b = ControlPointFile::from_points(
//!     vec![Point3::new(0.0, 0.0, 0.005), Point3::new(5.0, 0.0, 0.0)],
//!     true,
//! );
//!
//! // The near-duplicate collapses; the distinct point is appended
//! let merged = merge(&a, &b, DEFAULT_MIN_SEPARATION).unwrap();
//! assert_eq!(merged.point_count(), 3);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod format;
mod merge;

pub use error::{CpError, CpResult};
pub use format::ControlPointFile;
pub use merge::{merge, MergedPointSet, DEFAULT_MIN_SEPARATION};

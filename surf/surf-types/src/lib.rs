//! Core surface types for surfcomp.
//!
//! This crate provides the foundational type for surface comparison:
//!
//! - [`Surface`] - An ordered 3D point set with optional triangle connectivity
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. The
//! distance crates downstream report distances in whatever unit the input
//! coordinates carry (millimeters for anatomical surfaces).
//!
//! # Point Order
//!
//! Point order is meaningful: distance fields computed downstream are
//! returned aligned to the order of a surface's point array, so a field can
//! be overlaid on the originating mesh without reindexing.
//!
//! # Example
//!
//! ```
//! use surf_types::{Surface, Point3};
//!
//! let mut surface = Surface::new();
//! surface.points.push(Point3::new(0.0, 0.0, 0.0));
//! surface.points.push(Point3::new(1.0, 0.0, 0.0));
//! surface.points.push(Point3::new(0.5, 1.0, 0.0));
//! surface.faces.push([0, 1, 2]);
//!
//! assert_eq!(surface.point_count(), 3);
//! assert_eq!(surface.face_count(), 1);
//! assert!(!surface.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod surface;

pub use surface::Surface;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

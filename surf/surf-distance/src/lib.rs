//! Nearest-neighbour distance fields and Hausdorff distances between
//! surfaces.
//!
//! This crate quantifies geometric disagreement between two point sets (or
//! triangulated surfaces) representing the same structure:
//!
//! - **Nearest-neighbour field** - for every source point, the index of and
//!   distance to its closest target point, aligned to source order
//! - **Hausdorff distances** - directed (A→B, B→A) and symmetric worst-case
//!   nearest-neighbour distances
//! - **Surface comparison** - one call producing the per-vertex field plus
//!   the Hausdorff triple for a surface pair
//!
//! # Determinism
//!
//! Queries run against a KD-tree, distance ties resolve to the lowest target
//! index, and the parallel field evaluation writes each slot independently,
//! so repeated runs on the same input are bit-identical. Directed Hausdorff
//! distances are computed from the same nearest-neighbour primitive as the
//! per-vertex field; the reported forward distance always equals the field's
//! maximum.
//!
//! # Errors
//!
//! Degenerate input (an empty set where a distance is required) is an
//! explicit [`DistanceError`], never a NaN or sentinel result.
//!
//! # Example
//!
//! ```
//! use surf_distance::{hausdorff, nearest_neighbours};
//! use nalgebra::Point3;
//!
//! let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
//! let b = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
//!
//! let field = nearest_neighbours(&a, &b).unwrap();
//! assert_eq!(field.distances, vec![0.0, 1.0]);
//!
//! let d = hausdorff(&a, &b).unwrap();
//! assert_eq!((d.forward, d.reverse, d.symmetric), (1.0, 1.0, 1.0));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod compare;
mod error;
mod hausdorff;
mod nearest;

pub use compare::{compare_surfaces, SurfaceComparison};
pub use error::{DistanceError, DistanceResult};
pub use hausdorff::{directed_hausdorff, hausdorff, HausdorffDistances};
pub use nearest::{nearest_neighbours, NearestField};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

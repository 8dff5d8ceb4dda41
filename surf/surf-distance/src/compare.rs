//! Whole-surface comparison.
//!
//! Bundles the per-vertex distance field and the Hausdorff triple for one
//! ordered surface pair. This is the unit of work a batch driver fans out
//! over editor pairs; every call is pure, so callers may run comparisons
//! concurrently without locking.

use tracing::debug;

use surf_types::Surface;

use crate::error::{DistanceError, DistanceResult};
use crate::hausdorff::{hausdorff, HausdorffDistances};
use crate::nearest::{nearest_neighbours, NearestField};

/// Result of comparing a source surface against a target surface.
#[derive(Debug, Clone)]
pub struct SurfaceComparison {
    /// Per-vertex nearest-neighbour field from source to target, aligned to
    /// the source surface's point order. This is the field a viewer overlays
    /// on the source mesh.
    pub field: NearestField,

    /// Directed and symmetric Hausdorff distances, computed from the same
    /// nearest-neighbour primitive as `field`.
    pub distances: HausdorffDistances,

    /// Number of points in the source surface.
    pub source_points: usize,

    /// Number of points in the target surface.
    pub target_points: usize,
}

impl std::fmt::Display for SurfaceComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} points: {}",
            self.source_points, self.target_points, self.distances
        )
    }
}

/// Compares two surfaces, producing the per-vertex source→target distance
/// field and the Hausdorff distance triple.
///
/// Faces on either surface are ignored; only point coordinates enter the
/// computation.
///
/// # Errors
///
/// Returns an error if either surface has no points.
///
/// # Example
///
/// ```
/// use surf_distance::compare_surfaces;
/// use surf_types::{Surface, Point3};
///
/// let a = Surface::from_parts(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
///     Vec::new(),
/// );
/// let b = Surface::from_parts(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     Vec::new(),
/// );
///
/// let comparison = compare_surfaces(&a, &b).unwrap();
/// assert_eq!(comparison.field.distances, vec![0.0, 1.0]);
/// assert_eq!(comparison.distances.symmetric, 1.0);
/// ```
pub fn compare_surfaces(a: &Surface, b: &Surface) -> DistanceResult<SurfaceComparison> {
    if a.is_empty() {
        return Err(DistanceError::EmptySourceSet);
    }
    if b.is_empty() {
        return Err(DistanceError::EmptyTargetSet);
    }

    debug!(
        source_points = a.point_count(),
        target_points = b.point_count(),
        "comparing surfaces"
    );

    let field = nearest_neighbours(&a.points, &b.points)?;
    let distances = hausdorff(&a.points, &b.points)?;

    debug!(%distances, "surface comparison complete");

    Ok(SurfaceComparison {
        field,
        distances,
        source_points: a.point_count(),
        target_points: b.point_count(),
    })
}

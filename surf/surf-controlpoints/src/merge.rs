//! Tolerance-based union of two control-point sets.
//!
//! The merged set starts as a copy of the first set's points; each point of
//! the second set is appended only if its nearest distance to the first set
//! exceeds the minimum-separation tolerance. Every point of the second set
//! is judged on its own nearest distance against the first set's original
//! points, so the outcome does not depend on the order the second set is
//! traversed in.

use nalgebra::Point3;
use tracing::debug;

use surf_distance::nearest_neighbours;

use crate::error::{CpError, CpResult};
use crate::format::ControlPointFile;

/// Minimum separation for two control points to be considered distinct, in
/// the coordinate unit of the input (millimeters for anatomical data).
pub const DEFAULT_MIN_SEPARATION: f64 = 0.01;

/// Result of merging two control-point files.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPointSet {
    /// The merged points: all of the first set, then every point of the
    /// second set that cleared the separation tolerance, in input order.
    pub points: Vec<Point3<f64>>,

    /// The coordinate-convention flag shared by both inputs.
    pub use_real_ras: bool,

    /// Number of points contributed by the first set.
    pub first_count: usize,

    /// Number of points in the second set before merging.
    pub second_count: usize,

    /// Number of second-set points appended as distinct.
    pub appended: usize,
}

impl MergedPointSet {
    /// Total number of points in the merged set.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Convert into a [`ControlPointFile`] ready for serialization.
    #[must_use]
    pub fn into_control_points(self) -> ControlPointFile {
        ControlPointFile::from_points(self.points, self.use_real_ras)
    }
}

impl std::fmt::Display for MergedPointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "merged {} + {} points → {} ({} appended from second set)",
            self.first_count,
            self.second_count,
            self.points.len(),
            self.appended
        )
    }
}

/// Merges two control-point files under a minimum-separation tolerance.
///
/// A point of `second` within `tolerance` of some point of `first` is
/// treated as the same manually placed point and dropped; one farther than
/// `tolerance` from every point of `first` is appended as distinct.
///
/// # Arguments
///
/// * `first` - Base point set; all of its points are retained
/// * `second` - Candidate points, each tested against `first`
/// * `tolerance` - Minimum separation, typically [`DEFAULT_MIN_SEPARATION`]
///
/// # Errors
///
/// Returns [`CpError::ConventionMismatch`] if the two files disagree on the
/// `useRealRAS` flag; their coordinates live in incompatible spaces and must
/// not be combined.
///
/// # Example
///
/// ```
/// use surf_controlpoints::{merge, ControlPointFile, DEFAULT_MIN_SEPARATION};
/// use nalgebra::Point3;
///
/// let a = ControlPointFile::from_points(vec![Point3::new(0.0, 0.0, 0.0)], true);
/// let b = ControlPointFile::from_points(vec![Point3::new(0.0, 0.0, 0.02)], true);
///
/// let merged = merge(&a, &b, DEFAULT_MIN_SEPARATION).unwrap();
/// assert_eq!(merged.point_count(), 2);
/// ```
pub fn merge(
    first: &ControlPointFile,
    second: &ControlPointFile,
    tolerance: f64,
) -> CpResult<MergedPointSet> {
    if first.use_real_ras != second.use_real_ras {
        return Err(CpError::ConventionMismatch {
            first: first.use_real_ras,
            second: second.use_real_ras,
        });
    }

    let mut points = first.points.clone();

    let appended = if first.points.is_empty() {
        // Nothing to separate from; the union is the second set
        points.extend_from_slice(&second.points);
        second.points.len()
    } else if second.points.is_empty() {
        0
    } else {
        let field = nearest_neighbours(&second.points, &first.points)?;
        let mut appended = 0;
        for (p, &d) in second.points.iter().zip(&field.distances) {
            if d > tolerance {
                points.push(*p);
                appended += 1;
            }
        }
        appended
    };

    let merged = MergedPointSet {
        points,
        use_real_ras: first.use_real_ras,
        first_count: first.points.len(),
        second_count: second.points.len(),
        appended,
    };

    debug!(%merged, tolerance, "merged control point sets");

    Ok(merged)
}

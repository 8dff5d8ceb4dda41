//! Directed and symmetric Hausdorff distances between point sets.
//!
//! Both directions are computed from the same nearest-neighbour primitive as
//! the per-vertex field in [`crate::nearest`], so the reported forward
//! distance always equals the maximum of the corresponding field.

use nalgebra::Point3;

use crate::error::{DistanceError, DistanceResult};
use crate::nearest::nearest_neighbours;

/// Directed and symmetric Hausdorff distances between two point sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HausdorffDistances {
    /// Directed distance A→B: max over A of the nearest distance to B.
    pub forward: f64,

    /// Directed distance B→A: max over B of the nearest distance to A.
    pub reverse: f64,

    /// Symmetric distance: `max(forward, reverse)`.
    pub symmetric: f64,
}

impl std::fmt::Display for HausdorffDistances {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "forward {:.3}, reverse {:.3}, symmetric {:.3}",
            self.forward, self.reverse, self.symmetric
        )
    }
}

/// Computes the directed Hausdorff distance from `a` to `b`.
///
/// This is the worst-case nearest-neighbour distance: the largest distance
/// from any point of `a` to its closest point in `b`.
///
/// # Errors
///
/// Returns [`DistanceError::EmptySourceSet`] if `a` is empty and
/// [`DistanceError::EmptyTargetSet`] if `b` is empty; distance to or from an
/// empty set is undefined.
///
/// # Example
///
/// ```
/// use surf_distance::directed_hausdorff;
/// use nalgebra::Point3;
///
/// let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
/// let b = vec![Point3::new(0.0, 0.0, 0.0)];
///
/// let d = directed_hausdorff(&a, &b).unwrap();
/// assert!((d - 1.0).abs() < 1e-12);
/// ```
pub fn directed_hausdorff(a: &[Point3<f64>], b: &[Point3<f64>]) -> DistanceResult<f64> {
    if a.is_empty() {
        return Err(DistanceError::EmptySourceSet);
    }

    let field = nearest_neighbours(a, b)?;
    field.max_distance().ok_or(DistanceError::EmptySourceSet)
}

/// Computes forward, reverse and symmetric Hausdorff distances between `a`
/// and `b`.
///
/// # Errors
///
/// Returns an error if either point set is empty.
///
/// # Example
///
/// ```
/// use surf_distance::hausdorff;
/// use nalgebra::Point3;
///
/// let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
/// let b = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
///
/// let d = hausdorff(&a, &b).unwrap();
/// assert_eq!(d.forward, 1.0);
/// assert_eq!(d.reverse, 1.0);
/// assert_eq!(d.symmetric, 1.0);
/// ```
pub fn hausdorff(a: &[Point3<f64>], b: &[Point3<f64>]) -> DistanceResult<HausdorffDistances> {
    let forward = directed_hausdorff(a, b)?;
    let reverse = directed_hausdorff(b, a)?;

    Ok(HausdorffDistances {
        forward,
        reverse,
        symmetric: forward.max(reverse),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};

    fn random_points(count: usize, seed: u64) -> Vec<Point3<f64>> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Point3::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_identical_sets_are_zero() {
        let points = random_points(40, 5);
        let d = hausdorff(&points, &points).unwrap();

        assert_eq!(d.forward, 0.0);
        assert_eq!(d.reverse, 0.0);
        assert_eq!(d.symmetric, 0.0);
    }

    #[test]
    fn test_symmetric_is_max_of_directions() {
        let a = random_points(30, 21);
        let b = random_points(25, 22);

        let d = hausdorff(&a, &b).unwrap();
        assert_eq!(d.symmetric, d.forward.max(d.reverse));
        assert!(d.symmetric >= d.forward);
        assert!(d.symmetric >= d.reverse);
    }

    #[test]
    fn test_direction_swap() {
        let a = random_points(30, 31);
        let b = random_points(25, 32);

        let ab = hausdorff(&a, &b).unwrap();
        let ba = hausdorff(&b, &a).unwrap();

        assert_eq!(ab.forward, ba.reverse);
        assert_eq!(ab.reverse, ba.forward);
        assert_eq!(ab.symmetric, ba.symmetric);
    }

    #[test]
    fn test_known_distances() {
        let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let b = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];

        let d = hausdorff(&a, &b).unwrap();
        assert_eq!(d.forward, 1.0);
        assert_eq!(d.reverse, 1.0);
        assert_eq!(d.symmetric, 1.0);
    }

    #[test]
    fn test_asymmetric_sets() {
        // b contains a, plus an outlier far from every point of a
        let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let mut b = a.clone();
        b.push(Point3::new(0.0, 0.0, 5.0));

        let d = hausdorff(&a, &b).unwrap();
        assert_eq!(d.forward, 0.0);
        assert_relative_eq!(d.reverse, 5.0, epsilon = 1e-12);
        assert_relative_eq!(d.symmetric, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_matches_field_maximum() {
        let a = random_points(40, 61);
        let b = random_points(35, 62);

        let field = nearest_neighbours(&a, &b).unwrap();
        let d = hausdorff(&a, &b).unwrap();

        assert_eq!(d.forward, field.max_distance().unwrap());
    }

    #[test]
    fn test_empty_sets_are_errors() {
        let points = vec![Point3::new(0.0, 0.0, 0.0)];

        assert_eq!(hausdorff(&[], &points), Err(DistanceError::EmptySourceSet));
        assert_eq!(hausdorff(&points, &[]), Err(DistanceError::EmptyTargetSet));
        assert_eq!(
            directed_hausdorff(&[], &points),
            Err(DistanceError::EmptySourceSet)
        );
        assert_eq!(
            directed_hausdorff(&points, &[]),
            Err(DistanceError::EmptyTargetSet)
        );
    }

    #[test]
    fn test_single_point_sets() {
        let a = vec![Point3::new(0.0, 0.0, 0.0)];
        let b = vec![Point3::new(3.0, 4.0, 0.0)];

        let d = hausdorff(&a, &b).unwrap();
        assert_relative_eq!(d.forward, 5.0, epsilon = 1e-12);
        assert_relative_eq!(d.reverse, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let d = HausdorffDistances {
            forward: 1.25,
            reverse: 0.5,
            symmetric: 1.25,
        };
        let text = format!("{d}");
        assert!(text.contains("1.250"));
        assert!(text.contains("0.500"));
    }
}

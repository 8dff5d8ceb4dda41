//! Per-point nearest-neighbour distance fields.
//!
//! For every point of a source set, finds the closest point of a target set
//! and reports its index and Euclidean distance. The field is returned in
//! source order so it can be overlaid on the originating mesh.
//!
//! Queries run against a KD-tree built over the target set and are evaluated
//! in parallel across source points. Ties (several target points at the same
//! minimal distance) resolve to the lowest target index, so repeated runs on
//! the same input are bit-identical.

use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::Point3;
use rayon::prelude::*;

use crate::error::{DistanceError, DistanceResult};

/// A nearest-neighbour distance field from a source point set to a target
/// point set.
///
/// Entry `i` describes the target point closest to source point `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearestField {
    /// Index into the target set of the closest target point, per source point.
    pub indices: Vec<usize>,

    /// Euclidean distance to that target point, per source point.
    pub distances: Vec<f64>,
}

impl NearestField {
    /// Number of source points the field covers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Whether the field is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Largest distance in the field, or `None` if the field is empty.
    ///
    /// This is the directed Hausdorff distance of the source set to the
    /// target set.
    #[must_use]
    pub fn max_distance(&self) -> Option<f64> {
        self.distances.iter().copied().reduce(f64::max)
    }
}

/// Builds a KD-tree over a point set, keyed by point index.
pub(crate) fn build_kdtree(points: &[Point3<f64>]) -> KdTree<f64, 3> {
    let mut tree: KdTree<f64, 3> = KdTree::new();
    for (i, p) in points.iter().enumerate() {
        tree.add(&[p.x, p.y, p.z], i as u64);
    }
    tree
}

/// Finds the closest target point to a query, resolving distance ties to the
/// lowest target index.
pub(crate) fn nearest_in_tree(tree: &KdTree<f64, 3>, query: &Point3<f64>) -> (usize, f64) {
    let q = [query.x, query.y, query.z];
    let nearest = tree.nearest_one::<SquaredEuclidean>(&q);

    // A second query at the minimal radius surfaces every co-minimal target;
    // the lowest index wins.
    let mut best_item = nearest.item;
    for neighbour in tree.within::<SquaredEuclidean>(&q, nearest.distance) {
        if neighbour.distance == nearest.distance && neighbour.item < best_item {
            best_item = neighbour.item;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let index = best_item as usize;
    (index, nearest.distance.sqrt())
}

/// Computes the nearest-neighbour distance field from `source` to `target`.
///
/// # Arguments
///
/// * `source` - Query points; may be empty (yields an empty field)
/// * `target` - Reference points; must contain at least one point
///
/// # Returns
///
/// A [`NearestField`] aligned to `source` order.
///
/// # Errors
///
/// Returns [`DistanceError::EmptyTargetSet`] if `target` is empty.
///
/// # Example
///
/// ```
/// use surf_distance::nearest_neighbours;
/// use nalgebra::Point3;
///
/// let source = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
/// let target = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
///
/// let field = nearest_neighbours(&source, &target).unwrap();
/// assert_eq!(field.indices, vec![0, 0]);
/// assert_eq!(field.distances, vec![0.0, 1.0]);
/// ```
pub fn nearest_neighbours(
    source: &[Point3<f64>],
    target: &[Point3<f64>],
) -> DistanceResult<NearestField> {
    if target.is_empty() {
        return Err(DistanceError::EmptyTargetSet);
    }
    if source.is_empty() {
        return Ok(NearestField::default());
    }

    let tree = build_kdtree(target);

    // Each output slot depends only on its own source point, so the parallel
    // map stays deterministic.
    let (indices, distances): (Vec<usize>, Vec<f64>) = source
        .par_iter()
        .map(|p| nearest_in_tree(&tree, p))
        .unzip();

    Ok(NearestField { indices, distances })
}

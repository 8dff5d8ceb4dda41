//! Triangulated surface storage.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangulated surface: an ordered point set plus triangle connectivity.
///
/// Points are stored in the order the originating mesh indexes its vertices.
/// Faces reference points by index and are carried through for downstream
/// rendering and annotation; the distance computations in this workspace
/// never read them.
///
/// # Example
///
/// ```
/// use surf_types::{Surface, Point3};
///
/// let surface = Surface::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.5, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// assert_eq!(surface.point_count(), 3);
/// assert_eq!(surface.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Surface {
    /// Point coordinates, in originating-mesh vertex order.
    pub points: Vec<Point3<f64>>,

    /// Triangle faces as indices into the point array.
    pub faces: Vec<[u32; 3]>,
}

impl Surface {
    /// Create a new empty surface.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a surface with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(point_count: usize, face_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a surface from a point array and a face array.
    #[inline]
    #[must_use]
    pub const fn from_parts(points: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { points, faces }
    }

    /// Create a surface from raw coordinate and index data.
    ///
    /// Returns an empty surface if either array length is not divisible by 3.
    ///
    /// # Example
    ///
    /// ```
    /// use surf_types::Surface;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let indices = [0, 1, 2];
    ///
    /// let surface = Surface::from_raw(&positions, &indices);
    /// assert_eq!(surface.point_count(), 3);
    /// assert_eq!(surface.face_count(), 1);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let points = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { points, faces }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the surface has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

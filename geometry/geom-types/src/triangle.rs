//! Triangles with concrete vertex positions.

use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeomResult, check_index};

/// A triangle in 3D.
///
/// Winding is counter-clockwise when viewed from the side the normal points to.
///
/// # Example
///
/// ```
/// use geom_types::{Triangle3, Point3};
///
/// let tri = Triangle3::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-10);
/// assert!((tri.normal().unwrap().z - 1.0).abs() < 1e-10);
/// assert!(tri.vertex(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle3 {
    /// Vertices in winding order.
    pub v: [Point3<f64>; 3],
}

impl Triangle3 {
    /// Create a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v: [v0, v1, v2] }
    }

    /// Checked vertex access.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeomError::IndexOutOfRange`] for `index > 2`.
    pub fn vertex(&self, index: usize) -> GeomResult<Point3<f64>> {
        check_index("triangle vertex", index, 3).map(|i| self.v[i])
    }

    /// Edge vector `v[(i + 1) % 3] - v[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeomError::IndexOutOfRange`] for `index > 2`.
    pub fn edge(&self, index: usize) -> GeomResult<Vector3<f64>> {
        check_index("triangle edge", index, 3).map(|i| self.v[(i + 1) % 3] - self.v[i])
    }

    /// Cross product of the two edges leaving `v[0]`; its length is twice the area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        (self.v[1] - self.v[0]).cross(&(self.v[2] - self.v[0]))
    }

    /// Unit normal, or `None` for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON * f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Centroid.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v[0].coords + self.v[1].coords + self.v[2].coords) / 3.0)
    }

    /// Point with barycentric coordinates `(b0, b1, b2)`.
    #[must_use]
    pub fn from_barycentric(&self, b: [f64; 3]) -> Point3<f64> {
        Point3::from(self.v[0].coords * b[0] + self.v[1].coords * b[1] + self.v[2].coords * b[2])
    }

    /// The same triangle with reversed winding.
    #[must_use]
    pub const fn flipped(&self) -> Self {
        Self::new(self.v[0], self.v[2], self.v[1])
    }
}

/// A triangle in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle2 {
    /// Vertices in winding order.
    pub v: [Point2<f64>; 3],
}

impl Triangle2 {
    /// Create a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point2<f64>, v1: Point2<f64>, v2: Point2<f64>) -> Self {
        Self { v: [v0, v1, v2] }
    }

    /// Checked vertex access.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeomError::IndexOutOfRange`] for `index > 2`.
    pub fn vertex(&self, index: usize) -> GeomResult<Point2<f64>> {
        check_index("triangle vertex", index, 3).map(|i| self.v[i])
    }

    /// Twice the signed area; positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area2(&self) -> f64 {
        let e0 = self.v[1] - self.v[0];
        let e1 = self.v[2] - self.v[0];
        e0.x * e1.y - e0.y * e1.x
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.signed_area2().abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeomError;

    fn unit_tri() -> Triangle3 {
        Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_vertex_access() {
        let tri = unit_tri();
        assert_eq!(tri.vertex(1), Ok(Point3::new(1.0, 0.0, 0.0)));
        assert!(matches!(
            tri.vertex(3),
            Err(GeomError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
    }

    #[test]
    fn test_edges() {
        let tri = unit_tri();
        let e2 = tri.edge(2).unwrap();
        assert!((e2.y + 1.0).abs() < 1e-12);
        assert!(tri.edge(4).is_err());
    }

    #[test]
    fn test_degenerate_normal() {
        let tri = Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(tri.normal().is_none());
        assert!(tri.area().abs() < 1e-12);
    }

    #[test]
    fn test_centroid_and_barycentric() {
        let tri = unit_tri();
        let c = tri.centroid();
        let b = tri.from_barycentric([1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
        assert!((c - b).norm() < 1e-12);
        assert_eq!(tri.from_barycentric([0.0, 1.0, 0.0]), tri.v[1]);
    }

    #[test]
    fn test_flipped_normal() {
        let tri = unit_tri();
        let n = tri.flipped().normal().unwrap();
        assert!((n.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle2_signed_area() {
        let ccw =
            Triangle2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(0.0, 2.0));
        assert!((ccw.signed_area2() - 4.0).abs() < 1e-12);
        let cw = Triangle2::new(ccw.v[0], ccw.v[2], ccw.v[1]);
        assert!(cw.signed_area2() < 0.0);
        assert!((cw.area() - 2.0).abs() < 1e-12);
    }
}

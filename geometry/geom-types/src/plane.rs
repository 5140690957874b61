//! Planes and halfspaces.
//!
//! A plane is stored as a unit `normal` plus a `constant` (the signed
//! distance of the plane from the origin along the normal). The same value
//! doubles as a halfspace `{x : dot(normal, x) >= constant}`.

use nalgebra::{Point2, Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plane in 3D, also used as the halfspace on its positive side.
///
/// # Example
///
/// ```
/// use geom_types::{Plane3, Point3, Vector3};
///
/// let plane = Plane3::from_point_normal(Point3::new(0.0, 0.0, 2.0), Vector3::z()).unwrap();
/// assert!((plane.constant - 2.0).abs() < 1e-12);
/// assert!((plane.signed_distance(&Point3::new(5.0, 5.0, 3.0)) - 1.0).abs() < 1e-12);
/// assert!(plane.contains(&Point3::new(0.0, 0.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane3 {
    /// Unit normal.
    pub normal: Vector3<f64>,
    /// Signed distance from the origin along `normal`.
    pub constant: f64,
}

/// Halfspace `{x : dot(normal, x) >= constant}` in 3D.
pub type Halfspace3 = Plane3;

impl Plane3 {
    /// Create a plane from a normal (assumed unit length) and a constant.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector3<f64>, constant: f64) -> Self {
        Self { normal, constant }
    }

    /// Create a plane through `point` with the given normal.
    ///
    /// The normal is normalized. Returns `None` for a zero-length normal.
    #[must_use]
    pub fn from_point_normal(point: Point3<f64>, normal: Vector3<f64>) -> Option<Self> {
        let normal = normal.try_normalize(f64::EPSILON)?;
        Some(Self::new(normal, normal.dot(&point.coords)))
    }

    /// Create the plane through three points, oriented by the right-hand rule.
    ///
    /// Returns `None` when the points are collinear.
    #[must_use]
    pub fn from_points(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Option<Self> {
        Self::from_point_normal(a, (b - a).cross(&(c - a)))
    }

    /// Signed distance of `point`; positive on the normal side.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.constant
    }

    /// Whether `point` lies in the closed positive halfspace.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        point - self.normal * self.signed_distance(point)
    }

    /// Any point on the plane.
    #[must_use]
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.normal * self.constant)
    }

    /// The same plane with its normal reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(-self.normal, -self.constant)
    }
}

/// Halfspace `{x : dot(normal, x) >= constant}` in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Halfspace2 {
    /// Unit normal.
    pub normal: Vector2<f64>,
    /// Signed distance from the origin along `normal`.
    pub constant: f64,
}

impl Halfspace2 {
    /// Create a halfspace from a normal (assumed unit length) and a constant.
    #[inline]
    #[must_use]
    pub const fn new(normal: Vector2<f64>, constant: f64) -> Self {
        Self { normal, constant }
    }

    /// Halfspace bounded by the line through `point` with the given normal.
    ///
    /// Returns `None` for a zero-length normal.
    #[must_use]
    pub fn from_point_normal(point: Point2<f64>, normal: Vector2<f64>) -> Option<Self> {
        let normal = normal.try_normalize(f64::EPSILON)?;
        Some(Self::new(normal, normal.dot(&point.coords)))
    }

    /// Signed distance of `point`; positive inside.
    #[inline]
    #[must_use]
    pub fn signed_distance(&self, point: &Point2<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.constant
    }

    /// Whether `point` lies in the closed halfspace.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        self.signed_distance(point) >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane3::from_points(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        )
        .unwrap();
        assert!((plane.normal.z - 1.0).abs() < 1e-12);
        assert!((plane.constant - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_plane_collinear_points() {
        let plane = Plane3::from_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        assert!(plane.is_none());
    }

    #[test]
    fn test_plane_zero_normal() {
        assert!(Plane3::from_point_normal(Point3::origin(), Vector3::zeros()).is_none());
    }

    #[test]
    fn test_plane_project() {
        let plane = Plane3::new(Vector3::z(), 1.0);
        let p = plane.project(&Point3::new(3.0, 4.0, 7.0));
        assert!((p.z - 1.0).abs() < 1e-12);
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!(plane.signed_distance(&plane.origin()).abs() < 1e-12);
    }

    #[test]
    fn test_plane_flipped() {
        let plane = Plane3::new(Vector3::x(), 2.0);
        let p = Point3::new(5.0, 0.0, 0.0);
        assert!((plane.signed_distance(&p) + plane.flipped().signed_distance(&p)).abs() < 1e-12);
    }

    #[test]
    fn test_halfspace2() {
        let h =
            Halfspace2::from_point_normal(Point2::new(1.0, 0.0), Vector2::new(2.0, 0.0)).unwrap();
        assert!(h.contains(&Point2::new(1.5, 9.0)));
        assert!(!h.contains(&Point2::new(0.5, 0.0)));
        assert!((h.signed_distance(&Point2::new(3.0, 0.0)) - 2.0).abs() < 1e-12);
    }
}

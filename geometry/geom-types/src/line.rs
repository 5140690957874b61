//! Lines, rays and segments in 2D and 3D.
//!
//! Lines and rays carry an `origin` and a unit `direction`. Segments use the
//! centered form: a `center`, a unit `direction` and a half-length `extent`,
//! so the endpoints are `center ± extent * direction`.

use nalgebra::{Point2, Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An infinite line in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line3 {
    /// A point on the line.
    pub origin: Point3<f64>,
    /// Unit direction.
    pub direction: Vector3<f64>,
}

impl Line3 {
    /// Create a line. `direction` is expected to be unit length.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Line through two points; `None` if they coincide.
    #[must_use]
    pub fn through(p0: Point3<f64>, p1: Point3<f64>) -> Option<Self> {
        let direction = (p1 - p0).try_normalize(f64::EPSILON)?;
        Some(Self::new(p0, direction))
    }

    /// `origin + t * direction`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// A ray in 3D, parameterized for `t >= 0`.
///
/// # Example
///
/// ```
/// use geom_types::{Ray3, Point3, Vector3};
///
/// let ray = Ray3::new(Point3::origin(), Vector3::x());
/// let p = ray.point_at(5.0);
/// assert!((p.x - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray3 {
    /// Start of the ray.
    pub origin: Point3<f64>,
    /// Unit direction.
    pub direction: Vector3<f64>,
}

impl Ray3 {
    /// Create a ray. `direction` is expected to be unit length.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Create a ray, normalizing `direction`. `None` for a zero direction.
    #[must_use]
    pub fn normalized(origin: Point3<f64>, direction: Vector3<f64>) -> Option<Self> {
        Some(Self::new(origin, direction.try_normalize(f64::EPSILON)?))
    }

    /// `origin + t * direction`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }

    /// The supporting line.
    #[inline]
    #[must_use]
    pub const fn line(&self) -> Line3 {
        Line3::new(self.origin, self.direction)
    }
}

impl Default for Ray3 {
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::x())
    }
}

/// A segment in 3D in centered form.
///
/// # Example
///
/// ```
/// use geom_types::{Segment3, Point3};
///
/// let seg = Segment3::from_endpoints(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0));
/// assert!((seg.extent - 2.0).abs() < 1e-12);
/// assert!((seg.center.x - 2.0).abs() < 1e-12);
/// let [p0, p1] = seg.endpoints();
/// assert!(((p1 - p0).norm() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment3 {
    /// Midpoint.
    pub center: Point3<f64>,
    /// Unit direction from `p0` to `p1`.
    pub direction: Vector3<f64>,
    /// Half-length.
    pub extent: f64,
}

impl Segment3 {
    /// Create a segment in centered form.
    #[inline]
    #[must_use]
    pub const fn new(center: Point3<f64>, direction: Vector3<f64>, extent: f64) -> Self {
        Self {
            center,
            direction,
            extent,
        }
    }

    /// Create a segment from its endpoints.
    ///
    /// Coincident endpoints give a zero-extent segment along +X.
    #[must_use]
    pub fn from_endpoints(p0: Point3<f64>, p1: Point3<f64>) -> Self {
        let delta = p1 - p0;
        let length = delta.norm();
        let center = Point3::from((p0.coords + p1.coords) * 0.5);
        if length <= f64::EPSILON {
            return Self::new(center, Vector3::x(), 0.0);
        }
        Self::new(center, delta / length, 0.5 * length)
    }

    /// Start point `center - extent * direction`.
    #[inline]
    #[must_use]
    pub fn p0(&self) -> Point3<f64> {
        self.center - self.direction * self.extent
    }

    /// End point `center + extent * direction`.
    #[inline]
    #[must_use]
    pub fn p1(&self) -> Point3<f64> {
        self.center + self.direction * self.extent
    }

    /// Both endpoints.
    #[must_use]
    pub fn endpoints(&self) -> [Point3<f64>; 2] {
        [self.p0(), self.p1()]
    }

    /// Point at signed distance `t` from the center, `t` in `[-extent, extent]`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.center + self.direction * t
    }

    /// Full length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        2.0 * self.extent
    }

    /// The supporting line, with the segment center as origin.
    #[inline]
    #[must_use]
    pub const fn line(&self) -> Line3 {
        Line3::new(self.center, self.direction)
    }
}

/// An infinite line in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line2 {
    /// A point on the line.
    pub origin: Point2<f64>,
    /// Unit direction.
    pub direction: Vector2<f64>,
}

impl Line2 {
    /// Create a line. `direction` is expected to be unit length.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// Line through two points; `None` if they coincide.
    #[must_use]
    pub fn through(p0: Point2<f64>, p1: Point2<f64>) -> Option<Self> {
        let direction = (p1 - p0).try_normalize(f64::EPSILON)?;
        Some(Self::new(p0, direction))
    }

    /// `origin + t * direction`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        self.origin + self.direction * t
    }
}

/// A ray in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray2 {
    /// Start of the ray.
    pub origin: Point2<f64>,
    /// Unit direction.
    pub direction: Vector2<f64>,
}

impl Ray2 {
    /// Create a ray. `direction` is expected to be unit length.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point2<f64>, direction: Vector2<f64>) -> Self {
        Self { origin, direction }
    }

    /// `origin + t * direction`.
    #[inline]
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        self.origin + self.direction * t
    }
}

/// A segment in 2D in centered form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment2 {
    /// Midpoint.
    pub center: Point2<f64>,
    /// Unit direction from `p0` to `p1`.
    pub direction: Vector2<f64>,
    /// Half-length.
    pub extent: f64,
}

impl Segment2 {
    /// Create a segment in centered form.
    #[inline]
    #[must_use]
    pub const fn new(center: Point2<f64>, direction: Vector2<f64>, extent: f64) -> Self {
        Self {
            center,
            direction,
            extent,
        }
    }

    /// Create a segment from its endpoints.
    #[must_use]
    pub fn from_endpoints(p0: Point2<f64>, p1: Point2<f64>) -> Self {
        let delta = p1 - p0;
        let length = delta.norm();
        let center = Point2::from((p0.coords + p1.coords) * 0.5);
        if length <= f64::EPSILON {
            return Self::new(center, Vector2::x(), 0.0);
        }
        Self::new(center, delta / length, 0.5 * length)
    }

    /// Start point.
    #[inline]
    #[must_use]
    pub fn p0(&self) -> Point2<f64> {
        self.center - self.direction * self.extent
    }

    /// End point.
    #[inline]
    #[must_use]
    pub fn p1(&self) -> Point2<f64> {
        self.center + self.direction * self.extent
    }

    /// Both endpoints.
    #[must_use]
    pub fn endpoints(&self) -> [Point2<f64>; 2] {
        [self.p0(), self.p1()]
    }
}

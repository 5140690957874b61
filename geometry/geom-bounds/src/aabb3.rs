//! Axis-aligned bounding box in 3D.

use geom_types::{GeomResult, Interval, Ray3, check_index};
use nalgebra::{Isometry3, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nan_eq;
use crate::slab::clip_slabs;

/// An axis-aligned bounding box (AABB) in 3D.
///
/// The Empty box ([`Aabb3::empty`]) has NaN corners. It is the identity of
/// [`Aabb3::contain`]: containing a point in an Empty box yields a degenerate
/// box at that point. Equality treats NaN as equal to NaN, so two Empty boxes
/// compare equal.
///
/// # Example
///
/// ```
/// use geom_bounds::Aabb3;
/// use geom_types::Point3;
///
/// let aabb = Aabb3::empty()
///     .contain_point(&Point3::new(0.0, 0.0, 0.0))
///     .contain_point(&Point3::new(10.0, 5.0, 3.0));
///
/// assert!(aabb.contains_point(&Point3::new(5.0, 2.0, 1.0)));
/// assert!((aabb.volume() - 150.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb3 {
    /// Create an AABB from two opposite corners, reordered per axis.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// The Empty sentinel (NaN corners).
    #[must_use]
    pub fn empty() -> Self {
        let nan = Point3::new(f64::NAN, f64::NAN, f64::NAN);
        Self { min: nan, max: nan }
    }

    /// Degenerate box at a single point.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Box from a center and half-widths.
    #[must_use]
    pub fn from_center_extent(center: Point3<f64>, extent: Vector3<f64>) -> Self {
        let extent = extent.abs();
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    /// Smallest box containing every point; Empty for no points.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |aabb, p| aabb.contain_point(p))
    }

    /// Whether this is the Empty sentinel.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x.is_nan()
            || self.min.y.is_nan()
            || self.min.z.is_nan()
            || self.max.x.is_nan()
            || self.max.y.is_nan()
            || self.max.z.is_nan()
    }

    /// Grow the box to include `point`.
    ///
    /// An Empty box becomes the degenerate box at `point`.
    #[must_use]
    pub fn contain_point(&self, point: &Point3<f64>) -> Self {
        if self.is_empty() {
            return Self::from_point(*point);
        }
        Self {
            min: Point3::new(
                self.min.x.min(point.x),
                self.min.y.min(point.y),
                self.min.z.min(point.z),
            ),
            max: Point3::new(
                self.max.x.max(point.x),
                self.max.y.max(point.y),
                self.max.z.max(point.z),
            ),
        }
    }

    /// Union with another box. Empty is the identity.
    #[must_use]
    pub fn contain(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        self.contain_point(&other.min).contain_point(&other.max)
    }

    /// Whether `point` lies inside (boundary included). Always false when Empty.
    #[must_use]
    pub fn contains_point(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Whether `other` lies entirely inside. The Empty box is inside every box.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Per-axis overlap test with tolerance `epsilon`.
    ///
    /// Exits as soon as one axis separates. Empty boxes never collide.
    #[must_use]
    pub fn collide(&self, other: &Self, epsilon: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        for i in 0..3 {
            if self.max[i] + epsilon < other.min[i] || other.max[i] + epsilon < self.min[i] {
                return false;
            }
        }
        true
    }

    /// The overlapping region, or Empty when the boxes are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.collide(other, 0.0) {
            return Self::empty();
        }
        Self {
            min: Point3::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: Point3::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        }
    }

    /// Expand by `margin` on every side. Negative margins shrink.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector3::repeat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Half-widths.
    #[inline]
    #[must_use]
    pub fn extent(&self) -> Vector3<f64> {
        (self.max - self.min) * 0.5
    }

    /// Full widths.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Volume; 0 for Empty.
    #[must_use]
    pub fn volume(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Surface area; 0 for Empty.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let s = self.size();
        2.0 * s.z.mul_add(s.x, s.x.mul_add(s.y, s.y * s.z))
    }

    /// Index of the longest axis.
    #[must_use]
    pub fn longest_axis(&self) -> usize {
        self.size().imax()
    }

    /// Corner `index` in `0..8`; bit 0 selects max X, bit 1 max Y, bit 2 max Z.
    ///
    /// # Errors
    ///
    /// Returns [`geom_types::GeomError::IndexOutOfRange`] for `index > 7`.
    pub fn corner(&self, index: usize) -> GeomResult<Point3<f64>> {
        let i = check_index("aabb corner", index, 8)?;
        Ok(Point3::new(
            if i & 1 == 0 { self.min.x } else { self.max.x },
            if i & 2 == 0 { self.min.y } else { self.max.y },
            if i & 4 == 0 { self.min.z } else { self.max.z },
        ))
    }

    /// All eight corners in bit order.
    #[must_use]
    pub fn corners(&self) -> [Point3<f64>; 8] {
        std::array::from_fn(|i| {
            Point3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Parameter range `[t_enter, t_exit]` (with `t >= 0`) where the ray is
    /// inside the box, or `None` on a miss.
    #[must_use]
    pub fn ray_interval(&self, ray: &Ray3, zero: f64) -> Option<Interval> {
        if self.is_empty() {
            return None;
        }
        let local = ray.origin - self.center();
        let extent = self.extent();
        clip_slabs(
            &[local.x, local.y, local.z],
            &[ray.direction.x, ray.direction.y, ray.direction.z],
            &[extent.x, extent.y, extent.z],
            Interval::new(0.0, f64::INFINITY),
            zero,
        )
    }

    /// Box enclosing this box after a rigid transform.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Self {
        if self.is_empty() {
            return *self;
        }
        let corners = self.corners().map(|c| iso * c);
        Self::from_points(corners.iter())
    }
}

impl Default for Aabb3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Aabb3 {
    fn eq(&self, other: &Self) -> bool {
        (0..3).all(|i| nan_eq(self.min[i], other.min[i]) && nan_eq(self.max[i], other.max[i]))
    }
}

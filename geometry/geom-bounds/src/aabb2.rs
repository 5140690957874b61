//! Axis-aligned bounding box in 2D.

use geom_types::{GeomResult, Interval, Ray2, check_index};
use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nan_eq;
use crate::slab::clip_slabs;

/// An axis-aligned bounding box in 2D.
///
/// Shares the Empty (NaN) convention of [`crate::Aabb3`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl Aabb2 {
    /// Create an AABB from two opposite corners, reordered per axis.
    #[must_use]
    pub fn new(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The Empty sentinel (NaN corners).
    #[must_use]
    pub fn empty() -> Self {
        let nan = Point2::new(f64::NAN, f64::NAN);
        Self { min: nan, max: nan }
    }

    /// Degenerate box at a single point.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point2<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Box from a center and half-widths.
    #[must_use]
    pub fn from_center_extent(center: Point2<f64>, extent: Vector2<f64>) -> Self {
        let extent = extent.abs();
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    /// Smallest box containing every point; Empty for no points.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2<f64>>) -> Self {
        points
            .into_iter()
            .fold(Self::empty(), |aabb, p| aabb.contain_point(p))
    }

    /// Whether this is the Empty sentinel.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x.is_nan() || self.min.y.is_nan() || self.max.x.is_nan() || self.max.y.is_nan()
    }

    /// Grow the box to include `point`.
    #[must_use]
    pub fn contain_point(&self, point: &Point2<f64>) -> Self {
        if self.is_empty() {
            return Self::from_point(*point);
        }
        Self {
            min: Point2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
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

    /// Whether `point` lies inside (boundary included).
    #[must_use]
    pub fn contains_point(&self, point: &Point2<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Whether `other` lies entirely inside.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.is_empty() || (self.contains_point(&other.min) && self.contains_point(&other.max))
    }

    /// Per-axis overlap test with tolerance `epsilon`. Empty boxes never collide.
    #[must_use]
    pub fn collide(&self, other: &Self, epsilon: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        for i in 0..2 {
            if self.max[i] + epsilon < other.min[i] || other.max[i] + epsilon < self.min[i] {
                return false;
            }
        }
        true
    }

    /// The overlapping region, or Empty when disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.collide(other, 0.0) {
            return Self::empty();
        }
        Self {
            min: Point2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    /// Expand by `margin` on every side. Negative margins shrink.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        let m = Vector2::repeat(margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Half-widths.
    #[inline]
    #[must_use]
    pub fn extent(&self) -> Vector2<f64> {
        (self.max - self.min) * 0.5
    }

    /// Full widths.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Area; 0 for Empty.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let s = self.size();
        s.x * s.y
    }

    /// Corner `index` in `0..4`; bit 0 selects max X, bit 1 max Y.
    ///
    /// # Errors
    ///
    /// Returns [`geom_types::GeomError::IndexOutOfRange`] for `index > 3`.
    pub fn corner(&self, index: usize) -> GeomResult<Point2<f64>> {
        let i = check_index("aabb corner", index, 4)?;
        Ok(Point2::new(
            if i & 1 == 0 { self.min.x } else { self.max.x },
            if i & 2 == 0 { self.min.y } else { self.max.y },
        ))
    }

    /// Parameter range (with `t >= 0`) where the ray is inside the box.
    #[must_use]
    pub fn ray_interval(&self, ray: &Ray2, zero: f64) -> Option<Interval> {
        if self.is_empty() {
            return None;
        }
        let local = ray.origin - self.center();
        let extent = self.extent();
        clip_slabs(
            &[local.x, local.y],
            &[ray.direction.x, ray.direction.y],
            &[extent.x, extent.y],
            Interval::new(0.0, f64::INFINITY),
            zero,
        )
    }
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Aabb2 {
    fn eq(&self, other: &Self) -> bool {
        (0..2).all(|i| nan_eq(self.min[i], other.min[i]) && nan_eq(self.max[i], other.max[i]))
    }
}

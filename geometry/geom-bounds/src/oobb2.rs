//! Oriented bounding box in 2D.

use geom_types::{GeomResult, Interval, Ray2, check_index};
use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aabb2::Aabb2;
use crate::nan_eq;
use crate::slab::clip_slabs;

/// An oriented bounding box in 2D, produced by the rotating-calipers fitter.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Oobb2 {
    /// Box center.
    pub center: Point2<f64>,
    /// Half-widths along each axis (non-negative).
    pub extent: Vector2<f64>,
    /// First axis.
    pub axis_x: Vector2<f64>,
    /// Second axis, `axis_x` turned a quarter counter-clockwise.
    pub axis_y: Vector2<f64>,
}

impl Oobb2 {
    /// Create an OOBB from a center, half-widths and an axis pair.
    #[must_use]
    pub fn new(center: Point2<f64>, extent: Vector2<f64>, axes: [Vector2<f64>; 2]) -> Self {
        Self {
            center,
            extent: extent.abs(),
            axis_x: axes[0],
            axis_y: axes[1],
        }
    }

    /// Box whose first axis is at `angle` radians from +X.
    #[must_use]
    pub fn from_angle(center: Point2<f64>, extent: Vector2<f64>, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(center, extent, [Vector2::new(c, s), Vector2::new(-s, c)])
    }

    /// The Empty sentinel.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            center: Point2::new(f64::NAN, f64::NAN),
            extent: Vector2::repeat(f64::NAN),
            axis_x: Vector2::x(),
            axis_y: Vector2::y(),
        }
    }

    /// Whether this is the Empty sentinel.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.center.coords.iter().any(|c| c.is_nan()) || self.extent.iter().any(|e| e.is_nan())
    }

    /// Box covering an AABB, with world axes.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb2) -> Self {
        if aabb.is_empty() {
            return Self::empty();
        }
        Self::new(aabb.center(), aabb.extent(), [Vector2::x(), Vector2::y()])
    }

    /// Angle of the first axis from +X, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.axis_x.y.atan2(self.axis_x.x)
    }

    /// Axis `index` in `0..2`.
    ///
    /// # Errors
    ///
    /// Returns [`geom_types::GeomError::IndexOutOfRange`] for `index > 1`.
    pub fn axis(&self, index: usize) -> GeomResult<Vector2<f64>> {
        Ok(self.axes()[check_index("oobb axis", index, 2)?])
    }

    /// The axis pair.
    #[inline]
    #[must_use]
    pub const fn axes(&self) -> [Vector2<f64>; 2] {
        [self.axis_x, self.axis_y]
    }

    /// Coordinates of `point` in the box frame.
    #[must_use]
    pub fn local_coords(&self, point: &Point2<f64>) -> Vector2<f64> {
        let d = point - self.center;
        Vector2::new(d.dot(&self.axis_x), d.dot(&self.axis_y))
    }

    fn corner_unchecked(&self, index: usize) -> Point2<f64> {
        let sx = if index & 1 == 0 { -self.extent.x } else { self.extent.x };
        let sy = if index & 2 == 0 { -self.extent.y } else { self.extent.y };
        self.center + self.axis_x * sx + self.axis_y * sy
    }

    /// Corner `index` in `0..4`; bit 0 takes `+extent.x`, bit 1 `+extent.y`.
    ///
    /// # Errors
    ///
    /// Returns [`geom_types::GeomError::IndexOutOfRange`] for `index > 3`.
    pub fn corner(&self, index: usize) -> GeomResult<Point2<f64>> {
        Ok(self.corner_unchecked(check_index("oobb corner", index, 4)?))
    }

    /// Corners in bit order.
    #[must_use]
    pub fn vertices(&self) -> [Point2<f64>; 4] {
        std::array::from_fn(|i| self.corner_unchecked(i))
    }

    /// Corners as a counter-clockwise quad (for a right-handed frame).
    #[must_use]
    pub fn polygon(&self) -> [Point2<f64>; 4] {
        [
            self.corner_unchecked(0),
            self.corner_unchecked(1),
            self.corner_unchecked(3),
            self.corner_unchecked(2),
        ]
    }

    /// The axis-aligned box enclosing this box.
    #[must_use]
    pub fn to_aabb(&self) -> Aabb2 {
        if self.is_empty() {
            return Aabb2::empty();
        }
        Aabb2::from_points(self.vertices().iter())
    }

    /// Area; 0 for Empty.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        4.0 * self.extent.x * self.extent.y
    }

    /// Whether `point` lies inside, allowing `epsilon` slack per axis.
    #[must_use]
    pub fn contains_point(&self, point: &Point2<f64>, epsilon: f64) -> bool {
        let local = self.local_coords(point);
        local.x.abs() <= self.extent.x + epsilon && local.y.abs() <= self.extent.y + epsilon
    }

    /// Grow the box to include `point`, recentering along each violated axis.
    #[must_use]
    pub fn contain_point(&self, point: &Point2<f64>) -> Self {
        if self.is_empty() {
            return Self::new(*point, Vector2::zeros(), [Vector2::x(), Vector2::y()]);
        }
        let mut grown = *self;
        for (i, axis) in self.axes().iter().enumerate() {
            let local = (point - grown.center).dot(axis);
            let e = grown.extent[i];
            if local.abs() > e {
                let lo = local.min(-e);
                let hi = local.max(e);
                grown.extent[i] = (hi - lo) * 0.5;
                grown.center += axis * ((hi + lo) * 0.5);
            }
        }
        grown
    }

    /// Grow the box to include every corner of `other`.
    #[must_use]
    pub fn contain(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        other
            .vertices()
            .iter()
            .fold(*self, |acc, v| acc.contain_point(v))
    }

    /// Separating-axis overlap test over the four face axes.
    #[must_use]
    pub fn collide(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let d = other.center - self.center;
        let a = self.axes();
        let b = other.axes();
        let separated = |axis: &Vector2<f64>| {
            let ra = self.extent.x * a[0].dot(axis).abs() + self.extent.y * a[1].dot(axis).abs();
            let rb = other.extent.x * b[0].dot(axis).abs() + other.extent.y * b[1].dot(axis).abs();
            d.dot(axis).abs() > ra + rb
        };
        !(a.iter().any(separated) || b.iter().any(separated))
    }

    /// Parameter range (with `t >= 0`) where the ray is inside the box.
    #[must_use]
    pub fn ray_interval(&self, ray: &Ray2, zero: f64) -> Option<Interval> {
        if self.is_empty() {
            return None;
        }
        let origin = self.local_coords(&ray.origin);
        clip_slabs(
            &[origin.x, origin.y],
            &[ray.direction.dot(&self.axis_x), ray.direction.dot(&self.axis_y)],
            &[self.extent.x, self.extent.y],
            Interval::new(0.0, f64::INFINITY),
            zero,
        )
    }

    /// Entry parameter of the ray, or `None` on a miss.
    #[must_use]
    pub fn intersects_ray(&self, ray: &Ray2, zero: f64) -> Option<f64> {
        self.ray_interval(ray, zero).map(|range| range.a)
    }

    /// Whether the axes are unit length and orthogonal within `epsilon`.
    #[must_use]
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        (self.axis_x.norm() - 1.0).abs() <= epsilon
            && (self.axis_y.norm() - 1.0).abs() <= epsilon
            && self.axis_x.dot(&self.axis_y).abs() <= epsilon
    }
}

impl Default for Oobb2 {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Oobb2 {
    fn eq(&self, other: &Self) -> bool {
        (0..2).all(|i| {
            nan_eq(self.center[i], other.center[i])
                && nan_eq(self.extent[i], other.extent[i])
                && nan_eq(self.axis_x[i], other.axis_x[i])
                && nan_eq(self.axis_y[i], other.axis_y[i])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn unit() -> Oobb2 {
        Oobb2::from_angle(Point2::origin(), Vector2::new(1.0, 1.0), 0.0)
    }

    #[test]
    fn test_from_angle_round_trip() {
        let b = Oobb2::from_angle(Point2::new(1.0, 2.0), Vector2::new(2.0, 1.0), 0.7);
        assert_relative_eq!(b.angle(), 0.7, epsilon = 1e-12);
        assert!(b.is_orthonormal(1e-12));
        assert_relative_eq!(b.area(), 8.0);
    }

    #[test]
    fn test_polygon_is_ccw() {
        let poly = Oobb2::from_angle(Point2::origin(), Vector2::new(2.0, 1.0), 0.3).polygon();
        let mut twice_area = 0.0;
        for i in 0..4 {
            let p = poly[i];
            let q = poly[(i + 1) % 4];
            twice_area += p.x * q.y - q.x * p.y;
        }
        assert_relative_eq!(twice_area, 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_collide() {
        let a = unit();
        let near = Oobb2::from_angle(Point2::new(2.3, 0.0), Vector2::new(1.0, 1.0), FRAC_PI_4);
        let far = Oobb2::from_angle(Point2::new(2.5, 0.0), Vector2::new(1.0, 1.0), FRAC_PI_4);
        assert!(a.collide(&near));
        assert!(near.collide(&a));
        assert!(!a.collide(&far));
        assert!(!far.collide(&a));
        assert!(!a.collide(&Oobb2::empty()));
    }

    #[test]
    fn test_contain_point() {
        let grown = unit().contain_point(&Point2::new(0.0, -4.0));
        assert_relative_eq!(grown.center, Point2::new(0.0, -1.5));
        assert_relative_eq!(grown.extent, Vector2::new(1.0, 2.5));
        let p = Point2::new(3.0, 3.0);
        assert_eq!(Oobb2::empty().contain_point(&p).center, p);
    }

    #[test]
    fn test_ray() {
        let ray = Ray2::new(Point2::new(-5.0, 0.0), Vector2::x());
        assert_relative_eq!(unit().intersects_ray(&ray, 1e-12).unwrap(), 4.0);
        let miss = Ray2::new(Point2::new(-5.0, 3.0), Vector2::x());
        assert!(unit().intersects_ray(&miss, 1e-12).is_none());
    }

    #[test]
    fn test_to_aabb_and_back() {
        let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 2.0));
        let back = Oobb2::from_aabb(&aabb).to_aabb();
        assert_relative_eq!(back.min, aabb.min);
        assert_relative_eq!(back.max, aabb.max);
        assert!(unit().corner(4).is_err());
        assert!(unit().axis(2).is_err());
    }
}

//! Oriented bounding box in 3D.

use geom_types::{GeomResult, Interval, Ray3, check_index};
use nalgebra::{Isometry3, Matrix4, Point3, Rotation3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::aabb3::Aabb3;
use crate::nan_eq;
use crate::slab::clip_slabs;

/// An oriented bounding box (OOBB) in 3D.
///
/// The box is `center + Σ tᵢ·axisᵢ` with `|tᵢ| ≤ extentᵢ`. The three axes
/// must be mutually orthogonal unit vectors; SAT, distance and slab queries
/// all rely on it (see [`Oobb3::is_orthonormal`]).
///
/// # Example
///
/// ```
/// use geom_bounds::Oobb3;
/// use geom_types::{Point3, Ray3, Vector3};
///
/// let oobb = Oobb3::axis_aligned(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
/// let ray = Ray3::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
///
/// let t = oobb.intersects_ray(&ray, 1e-12).unwrap();
/// assert!((t - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Oobb3 {
    /// Box center.
    pub center: Point3<f64>,
    /// Half-widths along each axis (non-negative).
    pub extent: Vector3<f64>,
    /// First axis.
    pub axis_x: Vector3<f64>,
    /// Second axis.
    pub axis_y: Vector3<f64>,
    /// Third axis.
    pub axis_z: Vector3<f64>,
}

impl Oobb3 {
    /// Create an OOBB from a center, half-widths and an axis frame.
    ///
    /// Negative half-widths are taken by magnitude.
    #[must_use]
    pub fn new(center: Point3<f64>, extent: Vector3<f64>, axes: [Vector3<f64>; 3]) -> Self {
        Self {
            center,
            extent: extent.abs(),
            axis_x: axes[0],
            axis_y: axes[1],
            axis_z: axes[2],
        }
    }

    /// Box aligned with the world axes.
    #[must_use]
    pub fn axis_aligned(center: Point3<f64>, extent: Vector3<f64>) -> Self {
        Self::new(center, extent, [Vector3::x(), Vector3::y(), Vector3::z()])
    }

    /// The Empty sentinel: NaN center and extent, world axes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            center: Point3::new(f64::NAN, f64::NAN, f64::NAN),
            extent: Vector3::repeat(f64::NAN),
            axis_x: Vector3::x(),
            axis_y: Vector3::y(),
            axis_z: Vector3::z(),
        }
    }

    /// Whether this is the Empty sentinel.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.center.coords.iter().any(|c| c.is_nan()) || self.extent.iter().any(|e| e.is_nan())
    }

    /// Box covering an AABB, with world axes. Empty maps to Empty.
    #[must_use]
    pub fn from_aabb(aabb: &Aabb3) -> Self {
        if aabb.is_empty() {
            return Self::empty();
        }
        Self::axis_aligned(aabb.center(), aabb.extent())
    }

    /// Box for a unit cube scaled by `scale`, rotated, then translated.
    ///
    /// `scale` holds full side lengths, so the half-widths are `|scale| / 2`.
    #[must_use]
    pub fn from_scale_rotation_translation(
        scale: Vector3<f64>,
        rotation: &Rotation3<f64>,
        translation: Vector3<f64>,
    ) -> Self {
        Self {
            center: Point3::from(translation),
            extent: scale.abs() * 0.5,
            axis_x: rotation * Vector3::x(),
            axis_y: rotation * Vector3::y(),
            axis_z: rotation * Vector3::z(),
        }
    }

    /// Axis `index` in `0..3`.
    ///
    /// # Errors
    ///
    /// Returns [`geom_types::GeomError::IndexOutOfRange`] for `index > 2`.
    pub fn axis(&self, index: usize) -> GeomResult<Vector3<f64>> {
        Ok(self.axes()[check_index("oobb axis", index, 3)?])
    }

    /// The axis frame.
    #[inline]
    #[must_use]
    pub const fn axes(&self) -> [Vector3<f64>; 3] {
        [self.axis_x, self.axis_y, self.axis_z]
    }

    /// Coordinates of `point` in the box frame, relative to the center.
    #[must_use]
    pub fn local_coords(&self, point: &Point3<f64>) -> Vector3<f64> {
        let d = point - self.center;
        Vector3::new(d.dot(&self.axis_x), d.dot(&self.axis_y), d.dot(&self.axis_z))
    }

    /// Map box-frame coordinates back to world space.
    #[must_use]
    pub fn world_point(&self, local: &Vector3<f64>) -> Point3<f64> {
        self.center + self.axis_x * local.x + self.axis_y * local.y + self.axis_z * local.z
    }

    fn corner_unchecked(&self, index: usize) -> Point3<f64> {
        let sign = |bit: usize| if index & bit == 0 { -1.0 } else { 1.0 };
        self.center
            + self.axis_x * (sign(1) * self.extent.x)
            + self.axis_y * (sign(2) * self.extent.y)
            + self.axis_z * (sign(4) * self.extent.z)
    }

    /// Corner `index` in `0..8`; a set bit 0/1/2 takes `+extent` along X/Y/Z.
    ///
    /// # Errors
    ///
    /// Returns [`geom_types::GeomError::IndexOutOfRange`] for `index > 7`.
    pub fn corner(&self, index: usize) -> GeomResult<Point3<f64>> {
        Ok(self.corner_unchecked(check_index("oobb corner", index, 8)?))
    }

    /// All eight corners in bit order.
    #[must_use]
    pub fn vertices(&self) -> [Point3<f64>; 8] {
        std::array::from_fn(|i| self.corner_unchecked(i))
    }

    /// The axis-aligned box enclosing this box.
    #[must_use]
    pub fn to_aabb(&self) -> Aabb3 {
        if self.is_empty() {
            return Aabb3::empty();
        }
        Aabb3::from_points(self.vertices().iter())
    }

    /// Affine transform taking the unit cube `[-0.5, 0.5]³` onto this box.
    #[must_use]
    #[rustfmt::skip]
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let x = self.axis_x * (2.0 * self.extent.x);
        let y = self.axis_y * (2.0 * self.extent.y);
        let z = self.axis_z * (2.0 * self.extent.z);
        let c = self.center;
        Matrix4::new(
            x.x, y.x, z.x, c.x,
            x.y, y.y, z.y, c.y,
            x.z, y.z, z.z, c.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Volume; 0 for Empty.
    #[must_use]
    pub fn volume(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        8.0 * self.extent.x * self.extent.y * self.extent.z
    }

    /// Surface area; 0 for Empty.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let e = self.extent;
        8.0 * e.z.mul_add(e.x, e.x.mul_add(e.y, e.y * e.z))
    }

    /// Whether `point` lies inside, allowing `epsilon` slack per axis.
    #[must_use]
    pub fn contains_point(&self, point: &Point3<f64>, epsilon: f64) -> bool {
        let local = self.local_coords(point);
        (0..3).all(|i| local[i].abs() <= self.extent[i] + epsilon)
    }

    /// Grow the box to include `point`.
    ///
    /// Each axis whose local coordinate exceeds the extent is widened just far
    /// enough on that side and the center is shifted along that axis. The
    /// frame never rotates, so the result is generally larger than a fresh
    /// fit. An Empty box becomes a degenerate box at `point`.
    #[must_use]
    pub fn contain_point(&self, point: &Point3<f64>) -> Self {
        if self.is_empty() {
            return Self::axis_aligned(*point, Vector3::zeros());
        }
        let mut grown = *self;
        let axes = self.axes();
        for (i, axis) in axes.iter().enumerate() {
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

    /// Grow the box to include every corner of `other`. Empty is the identity.
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

    /// Separating-axis overlap test.
    ///
    /// Tests the three face axes of each box, then the nine edge cross
    /// products. When some pair of axes satisfies `|dot| > 1 - parallel`, the
    /// cross products are degenerate; the test then reports an overlap once
    /// the face axes fail to separate. Empty boxes never collide.
    #[must_use]
    pub fn collide(&self, other: &Self, parallel: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a = self.axes();
        let b = other.axes();
        let ea = self.extent;
        let eb = other.extent;
        let d = other.center - self.center;
        let cutoff = 1.0 - parallel;

        let mut c = [[0.0; 3]; 3];
        let mut abs_c = [[0.0; 3]; 3];
        let mut has_parallel_pair = false;
        for i in 0..3 {
            for j in 0..3 {
                c[i][j] = a[i].dot(&b[j]);
                abs_c[i][j] = c[i][j].abs();
                if abs_c[i][j] > cutoff {
                    has_parallel_pair = true;
                }
            }
        }

        let ad = [d.dot(&a[0]), d.dot(&a[1]), d.dot(&a[2])];

        for i in 0..3 {
            let r1 = eb[0] * abs_c[i][0] + eb[1] * abs_c[i][1] + eb[2] * abs_c[i][2];
            if ad[i].abs() > ea[i] + r1 {
                return false;
            }
        }

        for j in 0..3 {
            let r0 = ea[0] * abs_c[0][j] + ea[1] * abs_c[1][j] + ea[2] * abs_c[2][j];
            if d.dot(&b[j]).abs() > r0 + eb[j] {
                return false;
            }
        }

        if has_parallel_pair {
            return true;
        }

        for i in 0..3 {
            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                let r = (ad[i2] * c[i1][j] - ad[i1] * c[i2][j]).abs();
                let r0 = ea[i1] * abs_c[i2][j] + ea[i2] * abs_c[i1][j];
                let r1 = eb[j1] * abs_c[i][j2] + eb[j2] * abs_c[i][j1];
                if r > r0 + r1 {
                    return false;
                }
            }
        }
        true
    }

    /// Parameter range (with `t >= 0`) where the ray is inside the box.
    #[must_use]
    pub fn ray_interval(&self, ray: &Ray3, zero: f64) -> Option<Interval> {
        if self.is_empty() {
            return None;
        }
        let origin = self.local_coords(&ray.origin);
        let axes = self.axes();
        let direction = [
            ray.direction.dot(&axes[0]),
            ray.direction.dot(&axes[1]),
            ray.direction.dot(&axes[2]),
        ];
        clip_slabs(
            &[origin.x, origin.y, origin.z],
            &direction,
            &[self.extent.x, self.extent.y, self.extent.z],
            Interval::new(0.0, f64::INFINITY),
            zero,
        )
    }

    /// Entry parameter of the ray, or `None` on a miss.
    ///
    /// A ray starting inside the box enters at `t = 0`.
    #[must_use]
    pub fn intersects_ray(&self, ray: &Ray3, zero: f64) -> Option<f64> {
        self.ray_interval(ray, zero).map(|range| range.a)
    }

    /// This box after a rigid transform.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            center: iso * self.center,
            extent: self.extent,
            axis_x: iso.rotation * self.axis_x,
            axis_y: iso.rotation * self.axis_y,
            axis_z: iso.rotation * self.axis_z,
        }
    }

    /// Whether the axes are unit length and mutually orthogonal within `epsilon`.
    #[must_use]
    pub fn is_orthonormal(&self, epsilon: f64) -> bool {
        let a = self.axes();
        a.iter().all(|v| (v.norm() - 1.0).abs() <= epsilon)
            && a[0].dot(&a[1]).abs() <= epsilon
            && a[1].dot(&a[2]).abs() <= epsilon
            && a[2].dot(&a[0]).abs() <= epsilon
    }
}

impl Default for Oobb3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Oobb3 {
    fn eq(&self, other: &Self) -> bool {
        (0..3).all(|i| {
            nan_eq(self.center[i], other.center[i])
                && nan_eq(self.extent[i], other.extent[i])
                && nan_eq(self.axis_x[i], other.axis_x[i])
                && nan_eq(self.axis_y[i], other.axis_y[i])
                && nan_eq(self.axis_z[i], other.axis_z[i])
        })
    }
}

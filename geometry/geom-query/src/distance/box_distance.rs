//! Point to box and box to box.
//!
//! Each coordinate is clamped to the box range independently and only the
//! clamped coordinates contribute to the squared distance.

use geom_bounds::{Aabb2, Aabb3, Oobb2, Oobb3};
use geom_types::{Point2, Point3, Vector2, Vector3};

use crate::result::DistanceResult;

/// Clamp `value` into `[lo, hi]`, returning the clamped value and the
/// squared excess.
#[inline]
fn clamp_axis(value: f64, lo: f64, hi: f64) -> (f64, f64) {
    if value < lo {
        let delta = lo - value;
        (lo, delta * delta)
    } else if value > hi {
        let delta = value - hi;
        (hi, delta * delta)
    } else {
        (value, 0.0)
    }
}

fn undefined<P: Copy>(point: &P, nan: P) -> DistanceResult<P> {
    DistanceResult::new(f64::NAN, [*point, nan], &[])
}

/// Distance from a point to an axis-aligned 2D box.
#[must_use]
pub fn point_aabb2(point: &Point2<f64>, aabb: &Aabb2) -> DistanceResult<Point2<f64>> {
    if aabb.is_empty() {
        return undefined(point, aabb.min);
    }
    let mut closest = *point;
    let mut sqr = 0.0;
    for i in 0..2 {
        let (c, d) = clamp_axis(point[i], aabb.min[i], aabb.max[i]);
        closest[i] = c;
        sqr += d;
    }
    DistanceResult::new(sqr, [*point, closest], &[])
}

/// Distance from a point to an axis-aligned 3D box.
///
/// # Example
///
/// ```
/// use geom_bounds::Aabb3;
/// use geom_query::point_aabb3;
/// use geom_types::Point3;
///
/// let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// let result = point_aabb3(&Point3::new(2.0, 0.5, 3.0), &aabb);
/// assert!((result.sqr_distance - 5.0).abs() < 1e-12);
/// assert_eq!(result.closest[1], Point3::new(1.0, 0.5, 1.0));
/// ```
#[must_use]
pub fn point_aabb3(point: &Point3<f64>, aabb: &Aabb3) -> DistanceResult<Point3<f64>> {
    if aabb.is_empty() {
        return undefined(point, aabb.min);
    }
    let mut closest = *point;
    let mut sqr = 0.0;
    for i in 0..3 {
        let (c, d) = clamp_axis(point[i], aabb.min[i], aabb.max[i]);
        closest[i] = c;
        sqr += d;
    }
    DistanceResult::new(sqr, [*point, closest], &[])
}

/// Distance from a point to an oriented 2D box.
#[must_use]
pub fn point_oobb2(point: &Point2<f64>, oobb: &Oobb2) -> DistanceResult<Point2<f64>> {
    if oobb.is_empty() {
        return undefined(point, oobb.center);
    }
    let local = oobb.local_coords(point);
    let mut clamped = Vector2::zeros();
    let mut sqr = 0.0;
    for i in 0..2 {
        let (c, d) = clamp_axis(local[i], -oobb.extent[i], oobb.extent[i]);
        clamped[i] = c;
        sqr += d;
    }
    let closest = oobb.center + oobb.axis_x * clamped.x + oobb.axis_y * clamped.y;
    DistanceResult::new(sqr, [*point, closest], &[])
}

/// Distance from a point to an oriented 3D box.
#[must_use]
pub fn point_oobb3(point: &Point3<f64>, oobb: &Oobb3) -> DistanceResult<Point3<f64>> {
    if oobb.is_empty() {
        return undefined(point, oobb.center);
    }
    let local = oobb.local_coords(point);
    let mut clamped = Vector3::zeros();
    let mut sqr = 0.0;
    for i in 0..3 {
        let (c, d) = clamp_axis(local[i], -oobb.extent[i], oobb.extent[i]);
        clamped[i] = c;
        sqr += d;
    }
    DistanceResult::new(sqr, [*point, oobb.world_point(&clamped)], &[])
}

/// Distance between two axis-aligned 3D boxes.
///
/// Along an axis where the boxes overlap, both closest points sit at the
/// middle of the overlap. Overlapping boxes have distance zero.
#[must_use]
pub fn aabb_aabb3(a: &Aabb3, b: &Aabb3) -> DistanceResult<Point3<f64>> {
    if a.is_empty() || b.is_empty() {
        let nan = Point3::new(f64::NAN, f64::NAN, f64::NAN);
        return DistanceResult::new(f64::NAN, [nan, nan], &[]);
    }
    let mut on_a = Point3::origin();
    let mut on_b = Point3::origin();
    let mut sqr = 0.0;
    for i in 0..3 {
        if a.max[i] < b.min[i] {
            (on_a[i], on_b[i]) = (a.max[i], b.min[i]);
        } else if b.max[i] < a.min[i] {
            (on_a[i], on_b[i]) = (a.min[i], b.max[i]);
        } else {
            let mid = 0.5 * (a.min[i].max(b.min[i]) + a.max[i].min(b.max[i]));
            (on_a[i], on_b[i]) = (mid, mid);
        }
        let gap = on_b[i] - on_a[i];
        sqr += gap * gap;
    }
    DistanceResult::new(sqr, [on_a, on_b], &[])
}

//! Lines, rays and segments against oriented boxes.
//!
//! The linear component is moved into box-local coordinates and its
//! parameter range is clipped against the box slabs with
//! [`geom_bounds::clip_slabs`]. A direction component at or below `zero` is
//! parallel to its slab, so the origin must already lie inside that slab.
//!
//! Results report [`IntersectionKind::Point`] when the clipped range has
//! collapsed to a single parameter (a grazing contact) and
//! [`IntersectionKind::Segment`] otherwise.

use geom_bounds::{Oobb2, Oobb3, clip_slabs};
use geom_types::{Interval, Line3, Point2, Point3, Ray2, Ray3, Segment3, Vector3};

use crate::result::{IntersectionKind, IntersectionResult};

fn clip_oobb3(
    origin: &Point3<f64>,
    direction: &Vector3<f64>,
    oobb: &Oobb3,
    range: Interval,
    zero: f64,
) -> Option<Interval> {
    let local = oobb.local_coords(origin);
    let axes = oobb.axes();
    clip_slabs(
        &[local.x, local.y, local.z],
        &[direction.dot(&axes[0]), direction.dot(&axes[1]), direction.dot(&axes[2])],
        &[oobb.extent.x, oobb.extent.y, oobb.extent.z],
        range,
        zero,
    )
}

fn linear_result<P>(range: Option<Interval>, point_at: impl Fn(f64) -> P) -> IntersectionResult<P> {
    match range {
        None => IntersectionResult::not_intersect(),
        Some(range) if range.b > range.a => {
            IntersectionResult::segment(range, point_at(range.a), point_at(range.b))
        }
        Some(range) => IntersectionResult::point(range.a, point_at(range.a)),
    }
}

/// Intersection of an infinite line with a box.
///
/// The interval holds the line parameters where it enters and leaves.
#[must_use]
pub fn intersect_line_oobb3(
    line: &Line3,
    oobb: &Oobb3,
    zero: f64,
) -> IntersectionResult<Point3<f64>> {
    if oobb.is_empty() {
        return IntersectionResult::invalid();
    }
    let range = clip_oobb3(&line.origin, &line.direction, oobb, Interval::unbounded(), zero);
    linear_result(range, |t| line.point_at(t))
}

/// Intersection of a ray with a box.
///
/// A ray starting inside the box enters at `t = 0`.
///
/// # Example
///
/// ```
/// use geom_bounds::Oobb3;
/// use geom_query::intersect_ray_oobb3;
/// use geom_types::{Point3, Ray3, Vector3};
///
/// let oobb = Oobb3::axis_aligned(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
/// let ray = Ray3::new(Point3::new(0.0, 0.0, -5.0), Vector3::z());
/// let hit = intersect_ray_oobb3(&ray, &oobb, 1e-12);
/// assert!(hit.intersects());
/// assert!((hit.interval.a - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn intersect_ray_oobb3(ray: &Ray3, oobb: &Oobb3, zero: f64) -> IntersectionResult<Point3<f64>> {
    if oobb.is_empty() {
        return IntersectionResult::invalid();
    }
    let forward = Interval::new(0.0, f64::INFINITY);
    let range = clip_oobb3(&ray.origin, &ray.direction, oobb, forward, zero);
    linear_result(range, |t| ray.point_at(t))
}

/// Intersection of a segment with a box, in the segment's centered
/// parameter `[-extent, extent]`.
#[must_use]
pub fn intersect_segment_oobb3(
    segment: &Segment3,
    oobb: &Oobb3,
    zero: f64,
) -> IntersectionResult<Point3<f64>> {
    if oobb.is_empty() {
        return IntersectionResult::invalid();
    }
    let range = clip_oobb3(
        &segment.center,
        &segment.direction,
        oobb,
        Interval::new(-segment.extent, segment.extent),
        zero,
    );
    linear_result(range, |t| segment.point_at(t))
}

/// Intersection of a 2D ray with a 2D box.
#[must_use]
pub fn intersect_ray_oobb2(ray: &Ray2, oobb: &Oobb2, zero: f64) -> IntersectionResult<Point2<f64>> {
    if oobb.is_empty() {
        return IntersectionResult::invalid();
    }
    linear_result(oobb.ray_interval(ray, zero), |t| ray.point_at(t))
}

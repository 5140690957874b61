//! Point to line, ray, segment and plane.

use geom_types::{Line3, Plane3, Point2, Point3, Ray3, Segment2, Segment3};

use crate::result::DistanceResult;

/// Distance from a point to an infinite line.
#[must_use]
pub fn point_line3(point: &Point3<f64>, line: &Line3) -> DistanceResult<Point3<f64>> {
    let t = line.direction.dot(&(point - line.origin));
    let closest = line.point_at(t);
    DistanceResult::new((point - closest).norm_squared(), [*point, closest], &[t])
}

/// Distance from a point to a ray. Points behind the origin measure to it.
#[must_use]
pub fn point_ray3(point: &Point3<f64>, ray: &Ray3) -> DistanceResult<Point3<f64>> {
    let t = ray.direction.dot(&(point - ray.origin)).max(0.0);
    let closest = ray.point_at(t);
    DistanceResult::new((point - closest).norm_squared(), [*point, closest], &[t])
}

/// Distance from a point to a segment.
///
/// The parameter runs over `[0, 1]` from `p0` to `p1`. The endpoints are
/// tested first, `p1` before `p0`, so a point level with an endpoint snaps to
/// it exactly.
///
/// # Example
///
/// ```
/// use geom_query::point_segment3;
/// use geom_types::{Point3, Segment3};
///
/// let seg = Segment3::from_endpoints(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
/// let result = point_segment3(&Point3::new(3.0, 1.0, 0.0), &seg);
/// assert_eq!(result.closest[1], Point3::new(2.0, 0.0, 0.0));
/// assert_eq!(result.parameters[0], 1.0);
/// ```
#[must_use]
pub fn point_segment3(point: &Point3<f64>, segment: &Segment3) -> DistanceResult<Point3<f64>> {
    let [p0, p1] = segment.endpoints();
    let direction = p1 - p0;

    let (t, closest) = if direction.dot(&(point - p1)) >= 0.0 {
        (1.0, p1)
    } else if direction.dot(&(point - p0)) <= 0.0 {
        (0.0, p0)
    } else {
        let sqr_length = direction.norm_squared();
        if sqr_length > 0.0 {
            let t = direction.dot(&(point - p0)) / sqr_length;
            (t, p0 + direction * t)
        } else {
            (0.0, p0)
        }
    };
    DistanceResult::new((point - closest).norm_squared(), [*point, closest], &[t])
}

/// Distance from a point to a 2D segment. Same conventions as
/// [`point_segment3`].
#[must_use]
pub fn point_segment2(point: &Point2<f64>, segment: &Segment2) -> DistanceResult<Point2<f64>> {
    let [p0, p1] = segment.endpoints();
    let direction = p1 - p0;

    let (t, closest) = if direction.dot(&(point - p1)) >= 0.0 {
        (1.0, p1)
    } else if direction.dot(&(point - p0)) <= 0.0 {
        (0.0, p0)
    } else {
        let sqr_length = direction.norm_squared();
        if sqr_length > 0.0 {
            let t = direction.dot(&(point - p0)) / sqr_length;
            (t, p0 + direction * t)
        } else {
            (0.0, p0)
        }
    };
    DistanceResult::new((point - closest).norm_squared(), [*point, closest], &[t])
}

/// Distance from a point to a plane. The parameter is the signed distance,
/// positive on the normal side.
#[must_use]
pub fn point_plane(point: &Point3<f64>, plane: &Plane3) -> DistanceResult<Point3<f64>> {
    let signed = plane.signed_distance(point);
    let closest = point - plane.normal * signed;
    DistanceResult::new(signed * signed, [*point, closest], &[signed])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geom_types::Vector3;

    #[test]
    fn test_point_line_and_ray() {
        let line = Line3::new(Point3::origin(), Vector3::x());
        let p = Point3::new(-3.0, 4.0, 0.0);
        let on_line = point_line3(&p, &line);
        assert_relative_eq!(on_line.distance, 4.0);
        assert_relative_eq!(on_line.parameters[0], -3.0);

        let on_ray = point_ray3(&p, &Ray3::new(Point3::origin(), Vector3::x()));
        assert_relative_eq!(on_ray.distance, 5.0);
        assert_eq!(on_ray.closest[1], Point3::origin());
    }

    #[test]
    fn test_point_segment_regions() {
        let seg = Segment3::from_endpoints(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0));

        let before = point_segment3(&Point3::new(-1.0, 1.0, 0.0), &seg);
        assert_eq!(before.closest[1], Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(before.parameters[0], 0.0);
        assert_relative_eq!(before.sqr_distance, 2.0);

        let middle = point_segment3(&Point3::new(1.0, 2.0, 0.0), &seg);
        assert_relative_eq!(middle.parameters[0], 0.25);
        assert_relative_eq!(middle.distance, 2.0);

        let level = point_segment3(&Point3::new(4.0, 3.0, 0.0), &seg);
        assert_eq!(level.closest[1], Point3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(level.parameters[0], 1.0);
    }

    #[test]
    fn test_point_on_degenerate_segment() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let seg = Segment3::from_endpoints(p, p);
        let result = point_segment3(&Point3::new(1.0, 1.0, 3.0), &seg);
        assert_relative_eq!(result.distance, 2.0);
    }

    #[test]
    fn test_point_segment2() {
        let seg = Segment2::from_endpoints(Point2::new(0.0, 0.0), Point2::new(0.0, 2.0));
        let result = point_segment2(&Point2::new(1.0, 1.0), &seg);
        assert_relative_eq!(result.distance, 1.0);
        assert_relative_eq!(result.closest[1], Point2::new(0.0, 1.0));
        let far = point_segment2(&Point2::new(0.0, 5.0), &seg);
        assert_relative_eq!(far.closest[1], Point2::new(0.0, 2.0));
    }

    #[test]
    fn test_point_plane_signed() {
        let plane = Plane3::new(Vector3::z(), 1.0);
        let below = point_plane(&Point3::new(2.0, 3.0, -1.0), &plane);
        assert_relative_eq!(below.distance, 2.0);
        assert_relative_eq!(below.parameters[0], -2.0);
        assert_relative_eq!(below.closest[1], Point3::new(2.0, 3.0, 1.0));
    }
}

//! Distances between lines and segments in 3D.

use geom_types::{Line3, Point3, Segment3};

use super::PARALLEL_EPSILON;
use crate::result::DistanceResult;

/// Distance between a line and a segment.
///
/// Parameters are the line parameter and the centered segment parameter in
/// `[-extent, extent]`. When the two are parallel, the segment center and
/// its projection on the line are reported.
#[must_use]
pub fn line_segment3(line: &Line3, segment: &Segment3) -> DistanceResult<Point3<f64>> {
    let diff = line.origin - segment.center;
    let a01 = -line.direction.dot(&segment.direction);
    let b0 = diff.dot(&line.direction);
    let det = (1.0 - a01 * a01).abs();

    let (s0, s1) = if det >= PARALLEL_EPSILON {
        let b1 = -diff.dot(&segment.direction);
        let s1 = a01 * b0 - b1;
        let ext_det = segment.extent * det;
        if s1 < -ext_det {
            let s1 = -segment.extent;
            (-(a01 * s1 + b0), s1)
        } else if s1 > ext_det {
            let s1 = segment.extent;
            (-(a01 * s1 + b0), s1)
        } else {
            // Both closest points are interior.
            ((a01 * b1 - b0) / det, s1 / det)
        }
    } else {
        (-b0, 0.0)
    };

    let on_line = line.point_at(s0);
    let on_segment = segment.point_at(s1);
    DistanceResult::new((on_line - on_segment).norm_squared(), [on_line, on_segment], &[s0, s1])
}

/// Distance between two infinite lines.
///
/// Parallel lines report the origin of `l1` and its projection on `l0`.
///
/// # Example
///
/// ```
/// use geom_query::line_line3;
/// use geom_types::{Line3, Point3, Vector3};
///
/// let a = Line3::new(Point3::origin(), Vector3::x());
/// let b = Line3::new(Point3::new(0.0, 0.0, 2.0), Vector3::y());
/// assert!((line_line3(&a, &b).distance - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn line_line3(l0: &Line3, l1: &Line3) -> DistanceResult<Point3<f64>> {
    let diff = l0.origin - l1.origin;
    let a01 = -l0.direction.dot(&l1.direction);
    let b0 = diff.dot(&l0.direction);
    let det = (1.0 - a01 * a01).abs();

    let (s0, s1) = if det >= PARALLEL_EPSILON {
        let b1 = -diff.dot(&l1.direction);
        ((a01 * b1 - b0) / det, (a01 * b0 - b1) / det)
    } else {
        (-b0, 0.0)
    };

    let p0 = l0.point_at(s0);
    let p1 = l1.point_at(s1);
    DistanceResult::new((p0 - p1).norm_squared(), [p0, p1], &[s0, s1])
}

/// Distance between two segments.
///
/// Parameters run over `[0, 1]` from `p0` to `p1` of each segment.
/// Degenerate (zero-length) segments are treated as points.
#[must_use]
pub fn segment_segment3(a: &Segment3, b: &Segment3) -> DistanceResult<Point3<f64>> {
    let start_a = a.p0();
    let start_b = b.p0();
    let dir_a = a.p1() - start_a;
    let dir_b = b.p1() - start_b;
    let r = start_a - start_b;
    let aa = dir_a.dot(&dir_a);
    let ee = dir_b.dot(&dir_b);
    let f = dir_b.dot(&r);

    let (s, t) = if aa <= f64::EPSILON && ee <= f64::EPSILON {
        (0.0, 0.0)
    } else if aa <= f64::EPSILON {
        (0.0, (f / ee).clamp(0.0, 1.0))
    } else {
        let c = dir_a.dot(&r);
        if ee <= f64::EPSILON {
            ((-c / aa).clamp(0.0, 1.0), 0.0)
        } else {
            let bb = dir_a.dot(&dir_b);
            let denom = aa * ee - bb * bb;
            // Parallel segments start from s = 0.
            let s = if denom > PARALLEL_EPSILON * aa * ee {
                ((bb * f - c * ee) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let t_num = bb * s + f;
            if t_num < 0.0 {
                ((-c / aa).clamp(0.0, 1.0), 0.0)
            } else if t_num > ee {
                (((bb - c) / aa).clamp(0.0, 1.0), 1.0)
            } else {
                (s, t_num / ee)
            }
        }
    };

    let on_a = start_a + dir_a * s;
    let on_b = start_b + dir_b * t;
    DistanceResult::new((on_a - on_b).norm_squared(), [on_a, on_b], &[s, t])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geom_types::Vector3;

    #[test]
    fn test_line_segment_interior() {
        let line = Line3::new(Point3::origin(), Vector3::x());
        let seg = Segment3::from_endpoints(Point3::new(2.0, -1.0, 3.0), Point3::new(2.0, 1.0, 3.0));
        let result = line_segment3(&line, &seg);
        assert_relative_eq!(result.distance, 3.0, epsilon = 1e-12);
        assert_relative_eq!(result.closest[0], Point3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(result.closest[1], Point3::new(2.0, 0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_line_segment_clamped_end() {
        let line = Line3::new(Point3::origin(), Vector3::x());
        let seg = Segment3::from_endpoints(Point3::new(1.0, 2.0, 0.5), Point3::new(1.0, 5.0, 0.5));
        let result = line_segment3(&line, &seg);
        assert_relative_eq!(result.closest[1], Point3::new(1.0, 2.0, 0.5), epsilon = 1e-12);
        assert_relative_eq!(result.parameters[1], -seg.extent, epsilon = 1e-12);
        assert_relative_eq!(result.sqr_distance, 4.25, epsilon = 1e-12);
    }

    #[test]
    fn test_line_segment_parallel() {
        let line = Line3::new(Point3::origin(), Vector3::x());
        let seg = Segment3::from_endpoints(Point3::new(3.0, 2.0, 0.0), Point3::new(5.0, 2.0, 0.0));
        let result = line_segment3(&line, &seg);
        assert_relative_eq!(result.distance, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.closest[1], seg.center, epsilon = 1e-12);
    }

    #[test]
    fn test_skew_and_parallel_lines() {
        let a = Line3::new(Point3::new(1.0, 0.0, 0.0), Vector3::x());
        let b = Line3::new(Point3::new(0.0, 4.0, 2.0), Vector3::y());
        let result = line_line3(&a, &b);
        assert_relative_eq!(result.distance, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.closest[0], Point3::origin(), epsilon = 1e-12);
        assert_relative_eq!(result.closest[1], Point3::new(0.0, 0.0, 2.0), epsilon = 1e-12);

        let c = Line3::new(Point3::new(7.0, 3.0, 4.0), -Vector3::x());
        assert_relative_eq!(line_line3(&a, &c).distance, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_segment_cases() {
        let a = Segment3::from_endpoints(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));

        // Crossing above the middle.
        let b = Segment3::from_endpoints(Point3::new(1.0, -1.0, 1.0), Point3::new(1.0, 1.0, 1.0));
        let crossing = segment_segment3(&a, &b);
        assert_relative_eq!(crossing.distance, 1.0, epsilon = 1e-12);
        assert_relative_eq!(crossing.parameters[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(crossing.parameters[1], 0.5, epsilon = 1e-12);

        // Endpoint to endpoint.
        let c = Segment3::from_endpoints(Point3::new(3.0, 1.0, 0.0), Point3::new(5.0, 3.0, 0.0));
        let ends = segment_segment3(&a, &c);
        assert_relative_eq!(ends.closest[0], Point3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(ends.closest[1], Point3::new(3.0, 1.0, 0.0), epsilon = 1e-12);

        // Collinear and overlapping.
        let d = Segment3::from_endpoints(Point3::new(1.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(segment_segment3(&a, &d).distance, 0.0, epsilon = 1e-12);

        // A point against a segment.
        let p = Point3::new(1.0, 3.0, 0.0);
        let dot = Segment3::from_endpoints(p, p);
        let to_point = segment_segment3(&a, &dot);
        assert_relative_eq!(to_point.distance, 3.0, epsilon = 1e-12);
    }
}

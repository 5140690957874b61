//! Line and segment to triangle.

use geom_types::{Line3, Point3, Segment3, Triangle3, Vector3};

use super::PARALLEL_EPSILON;
use super::linear::line_segment3;
use super::point_triangle::point_triangle3;
use crate::result::DistanceResult;

/// Two unit vectors completing `w` (unit) to a right-handed frame.
fn complement_basis(w: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let u = if w.x.abs() >= w.y.abs() {
        let inv = 1.0 / (w.x * w.x + w.z * w.z).sqrt();
        Vector3::new(-w.z * inv, 0.0, w.x * inv)
    } else {
        let inv = 1.0 / (w.y * w.y + w.z * w.z).sqrt();
        Vector3::new(0.0, w.z * inv, -w.y * inv)
    };
    let v = w.cross(&u);
    (u, v)
}

/// Distance between a line and a triangle.
///
/// Parameters are the line parameter followed by the barycentric
/// coordinates of the closest triangle point. A line that pierces the
/// triangle has distance zero; otherwise the closest points lie on one of
/// the triangle edges.
#[must_use]
pub fn line_triangle3(line: &Line3, triangle: &Triangle3) -> DistanceResult<Point3<f64>> {
    let v = triangle.v;
    let edge0 = v[1] - v[0];
    let edge1 = v[2] - v[0];

    if let Some(normal) = edge0.cross(&edge1).try_normalize(0.0) {
        if normal.dot(&line.direction).abs() > PARALLEL_EPSILON {
            // Solve for the piercing point in the plane orthogonal to the line.
            let diff = line.origin - v[0];
            let (u, w) = complement_basis(&line.direction);
            let (ud_e0, ud_e1, ud_diff) = (u.dot(&edge0), u.dot(&edge1), u.dot(&diff));
            let (wd_e0, wd_e1, wd_diff) = (w.dot(&edge0), w.dot(&edge1), w.dot(&diff));
            let inv_det = 1.0 / (ud_e0 * wd_e1 - ud_e1 * wd_e0);
            let b1 = (wd_e1 * ud_diff - ud_e1 * wd_diff) * inv_det;
            let b2 = (ud_e0 * wd_diff - wd_e0 * ud_diff) * inv_det;
            let b0 = 1.0 - b1 - b2;
            if b0 >= 0.0 && b1 >= 0.0 && b2 >= 0.0 {
                let d = &line.direction;
                let t = b1 * d.dot(&edge0) + b2 * d.dot(&edge1) - d.dot(&diff);
                let on_line = line.point_at(t);
                let on_triangle = v[0] + edge0 * b1 + edge1 * b2;
                return DistanceResult::new(0.0, [on_line, on_triangle], &[t, b0, b1, b2]);
            }
        }
    }

    let mut best: Option<DistanceResult<Point3<f64>>> = None;
    for (i0, i1) in [(2, 0), (0, 1), (1, 2)] {
        let edge = Segment3::from_endpoints(v[i0], v[i1]);
        let candidate = line_segment3(line, &edge);
        if best.as_ref().is_none_or(|b| candidate.sqr_distance < b.sqr_distance) {
            let ratio = if edge.extent > 0.0 {
                candidate.parameters[1] / edge.extent
            } else {
                0.0
            };
            let mut bary = [0.0; 3];
            bary[i0] = 0.5 * (1.0 - ratio);
            bary[i1] = 1.0 - bary[i0];
            let params = [candidate.parameters[0], bary[0], bary[1], bary[2]];
            best = Some(DistanceResult::new(candidate.sqr_distance, candidate.closest, &params));
        }
    }
    match best {
        Some(result) => result,
        None => DistanceResult::new(f64::NAN, [line.origin, v[0]], &[]),
    }
}

/// Distance between a segment and a triangle.
///
/// Runs the line query on the supporting line. When its closest parameter
/// falls outside `[-extent, extent]`, the endpoint on that side is measured
/// with [`point_triangle3`] instead. Parameters are the centered segment
/// parameter followed by the barycentric coordinates.
///
/// # Example
///
/// ```
/// use geom_query::segment_triangle3;
/// use geom_types::{Point3, Segment3, Triangle3};
///
/// let tri = Triangle3::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let seg = Segment3::from_endpoints(Point3::new(0.2, 0.2, 1.0), Point3::new(0.2, 0.2, 3.0));
/// let result = segment_triangle3(&seg, &tri);
/// assert!((result.distance - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn segment_triangle3(segment: &Segment3, triangle: &Triangle3) -> DistanceResult<Point3<f64>> {
    let on_line = line_triangle3(&segment.line(), triangle);
    let t = on_line.parameters[0];

    let endpoint = if t < -segment.extent {
        Some((segment.p0(), -segment.extent))
    } else if t > segment.extent {
        Some((segment.p1(), segment.extent))
    } else {
        None
    };

    match endpoint {
        None => on_line,
        Some((point, t)) => {
            let result = point_triangle3(&point, triangle);
            let p = &result.parameters;
            DistanceResult::new(result.sqr_distance, result.closest, &[t, p[0], p[1], p[2]])
        }
    }
}

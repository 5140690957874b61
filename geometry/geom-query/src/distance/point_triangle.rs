//! Point to triangle.
//!
//! The closest point is `v0 + s * e0 + t * e1` with `e0 = v1 - v0`,
//! `e1 = v2 - v0`. The unconstrained minimizer `(s, t)` falls in one of seven
//! regions of the `(s, t)` plane relative to the triangle `s, t >= 0,
//! s + t <= 1`:
//!
//! ```text
//!        t
//!    \ 2 |
//!     \  |
//!      \ |
//!       \|
//!        +
//!        |\
//!    3   | \   1
//!        | 0\
//!  ------+---+------ s
//!    4   | 5  \  6
//! ```
//!
//! Region 0 is the interior; regions 1, 3, 5 are edges; regions 2, 4, 6 are
//! vertices, where the minimum can still lie on either adjacent edge.

use geom_types::{Point3, Segment3, Triangle3};

use super::PARALLEL_EPSILON;
use super::point_linear::point_segment3;
use crate::result::DistanceResult;

/// Minimizer along the edge `t = 0` (or `s = 0`): parameter in `[0, 1]`
/// for the quadratic `a * x^2 + 2 * b * x + c`.
#[inline]
fn edge_parameter(a: f64, b: f64) -> f64 {
    if b >= 0.0 {
        0.0
    } else if -b >= a {
        1.0
    } else {
        -b / a
    }
}

/// Minimizer on the edge `s + t = 1`, returned as `s`.
#[inline]
fn hypotenuse_parameter(numer: f64, denom: f64) -> f64 {
    if numer <= 0.0 {
        0.0
    } else if numer >= denom {
        1.0
    } else {
        numer / denom
    }
}

/// Distance from a point to a triangle.
///
/// `parameters` holds the barycentric coordinates of the closest point.
/// Triangles with (nearly) parallel edges are measured against their three
/// edges instead.
///
/// # Example
///
/// ```
/// use geom_query::point_triangle3;
/// use geom_types::{Point3, Triangle3};
///
/// let tri = Triangle3::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let result = point_triangle3(&Point3::new(0.0, 0.0, 5.0), &tri);
/// assert!((result.distance - 5.0).abs() < 1e-12);
/// assert_eq!(result.closest[1], Point3::new(0.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn point_triangle3(point: &Point3<f64>, triangle: &Triangle3) -> DistanceResult<Point3<f64>> {
    let [v0, v1, v2] = triangle.v;
    let diff = v0 - point;
    let edge0 = v1 - v0;
    let edge1 = v2 - v0;
    let a00 = edge0.dot(&edge0);
    let a01 = edge0.dot(&edge1);
    let a11 = edge1.dot(&edge1);
    let b0 = diff.dot(&edge0);
    let b1 = diff.dot(&edge1);
    let det = (a00 * a11 - a01 * a01).abs();

    if det <= PARALLEL_EPSILON * a00 * a11 {
        return degenerate(point, triangle);
    }

    let mut s = a01 * b1 - a11 * b0;
    let mut t = a01 * b0 - a00 * b1;

    if s + t <= det {
        if s < 0.0 {
            if t < 0.0 {
                // Region 4.
                if b0 < 0.0 {
                    t = 0.0;
                    s = edge_parameter(a00, b0);
                } else {
                    s = 0.0;
                    t = edge_parameter(a11, b1);
                }
            } else {
                // Region 3.
                s = 0.0;
                t = edge_parameter(a11, b1);
            }
        } else if t < 0.0 {
            // Region 5.
            t = 0.0;
            s = edge_parameter(a00, b0);
        } else {
            // Region 0.
            let inv_det = 1.0 / det;
            s *= inv_det;
            t *= inv_det;
        }
    } else if s < 0.0 {
        // Region 2.
        let tmp0 = a01 + b0;
        let tmp1 = a11 + b1;
        if tmp1 > tmp0 {
            s = hypotenuse_parameter(tmp1 - tmp0, a00 - 2.0 * a01 + a11);
            t = 1.0 - s;
        } else {
            s = 0.0;
            t = if tmp1 <= 0.0 { 1.0 } else { edge_parameter(a11, b1) };
        }
    } else if t < 0.0 {
        // Region 6.
        let tmp0 = a01 + b1;
        let tmp1 = a00 + b0;
        if tmp1 > tmp0 {
            t = hypotenuse_parameter(tmp1 - tmp0, a00 - 2.0 * a01 + a11);
            s = 1.0 - t;
        } else {
            t = 0.0;
            s = if tmp1 <= 0.0 { 1.0 } else { edge_parameter(a00, b0) };
        }
    } else {
        // Region 1.
        s = hypotenuse_parameter(a11 + b1 - a01 - b0, a00 - 2.0 * a01 + a11);
        t = 1.0 - s;
    }

    let closest = v0 + edge0 * s + edge1 * t;
    DistanceResult::new(
        (point - closest).norm_squared(),
        [*point, closest],
        &[1.0 - s - t, s, t],
    )
}

/// Nearest of the three edges of a sliver or collapsed triangle.
fn degenerate(point: &Point3<f64>, triangle: &Triangle3) -> DistanceResult<Point3<f64>> {
    let v = triangle.v;
    let mut best: Option<DistanceResult<Point3<f64>>> = None;
    for (i0, i1) in [(0, 1), (1, 2), (2, 0)] {
        let edge = Segment3::from_endpoints(v[i0], v[i1]);
        let on_edge = point_segment3(point, &edge);
        if best.as_ref().is_none_or(|b| on_edge.sqr_distance < b.sqr_distance) {
            let u = on_edge.parameters[0];
            let mut bary = [0.0; 3];
            bary[i0] = 1.0 - u;
            bary[i1] = u;
            best = Some(DistanceResult::new(on_edge.sqr_distance, on_edge.closest, &bary));
        }
    }
    match best {
        Some(result) => result,
        None => DistanceResult::new(f64::NAN, [*point, v[0]], &[]),
    }
}

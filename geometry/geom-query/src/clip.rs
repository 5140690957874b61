//! Halfspace clipping of polygons, triangles and segments, and the 2D box/box
//! intersection polygon built on it.
//!
//! Every routine keeps the part of its input on the non-negative side of the
//! halfspace (`signed_distance >= 0`). Cut vertices are interpolated linearly
//! along edges whose endpoints have strictly opposite signs.

use geom_bounds::{Aabb2, Oobb2};
use geom_types::{Halfspace2, Halfspace3, Interval, Point2, Point3, Segment3, Triangle3};

use crate::result::{IntersectionKind, IntersectionResult};

/// Sign of a signed distance: `1`, `-1` or `0`.
#[inline]
fn sign(d: f64) -> i8 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// Sutherland–Hodgman step against one halfspace.
///
/// All vertices inside (none negative) keeps the polygon; none strictly
/// inside drops it. Otherwise the walk starts at the first positive vertex.
fn clip_convex<P: Copy>(
    polygon: &[P],
    distance: &[f64],
    lerp: impl Fn(&P, &P, f64) -> P,
) -> Vec<P> {
    let positive = distance.iter().filter(|&&d| d > 0.0).count();
    let negative = distance.iter().filter(|&&d| d < 0.0).count();
    if negative == 0 {
        return polygon.to_vec();
    }
    if positive == 0 {
        return Vec::new();
    }

    let n = polygon.len();
    let start = distance.iter().position(|&d| d > 0.0).unwrap_or(0);
    let mut clipped = Vec::with_capacity(n + 1);
    for k in 0..n {
        let i = (start + k) % n;
        let j = (i + 1) % n;
        let (di, dj) = (distance[i], distance[j]);
        if di >= 0.0 {
            clipped.push(polygon[i]);
        }
        if (di > 0.0 && dj < 0.0) || (di < 0.0 && dj > 0.0) {
            clipped.push(lerp(&polygon[i], &polygon[j], di / (di - dj)));
        }
    }
    clipped
}

/// Part of a convex polygon inside a 2D halfspace.
///
/// Returns the polygon unchanged when no vertex is outside, and an empty
/// vector when no vertex is strictly inside (a polygon touching the boundary
/// line is dropped).
///
/// # Example
///
/// ```
/// use geom_query::clip_polygon2;
/// use geom_types::{Halfspace2, Point2, Vector2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// // Keep x >= 1.
/// let half = clip_polygon2(&square, &Halfspace2::new(Vector2::x(), 1.0));
/// assert_eq!(half.len(), 4);
/// assert!(half.iter().all(|p| p.x >= 1.0));
/// ```
#[must_use]
pub fn clip_polygon2(polygon: &[Point2<f64>], halfspace: &Halfspace2) -> Vec<Point2<f64>> {
    let distance: Vec<f64> = polygon.iter().map(|p| halfspace.signed_distance(p)).collect();
    clip_convex(polygon, &distance, |a, b, t| a + (b - a) * t)
}

/// Part of a convex planar polygon inside a 3D halfspace.
///
/// Same conventions as [`clip_polygon2`].
#[must_use]
pub fn clip_polygon3(polygon: &[Point3<f64>], halfspace: &Halfspace3) -> Vec<Point3<f64>> {
    let distance: Vec<f64> = polygon.iter().map(|p| halfspace.signed_distance(p)).collect();
    clip_convex(polygon, &distance, |a, b, t| a + (b - a) * t)
}

/// Part of a triangle inside a halfspace.
///
/// The result is classified by how many vertices are strictly inside,
/// strictly outside and on the boundary:
///
/// | inside | outside | on | result |
/// |--------|---------|----|--------|
/// | any | 0 | any | the whole triangle |
/// | 0 | 3 | 0 | empty |
/// | 0 | 2 | 1 | the touching vertex |
/// | 0 | 1 | 2 | the boundary edge |
/// | 1 | 2 | 0 | triangle with two cut vertices |
/// | 1 | 1 | 1 | triangle with one cut vertex |
/// | 2 | 1 | 0 | quadrilateral with two cut vertices |
///
/// Polygon vertices keep the winding of the input triangle.
#[must_use]
pub fn clip_triangle(
    triangle: &Triangle3,
    halfspace: &Halfspace3,
) -> IntersectionResult<Point3<f64>> {
    let v = triangle.v;
    let d = v.map(|p| halfspace.signed_distance(&p));
    let s = d.map(sign);
    let positive = s.iter().filter(|&&x| x > 0).count();
    let negative = s.iter().filter(|&&x| x < 0).count();
    let cut = |a: usize, b: usize| v[a] + (v[b] - v[a]) * (d[a] / (d[a] - d[b]));
    let find = |target: i8| s.iter().position(|&x| x == target).unwrap_or(0);

    match (positive, negative) {
        (_, 0) => IntersectionResult::with_points(IntersectionKind::Polygon, v.to_vec()),
        (0, 3) => IntersectionResult::not_intersect(),
        (0, 2) => IntersectionResult::with_points(IntersectionKind::Point, vec![v[find(0)]]),
        (0, 1) => {
            let m = find(-1);
            let points = vec![v[(m + 1) % 3], v[(m + 2) % 3]];
            IntersectionResult::with_points(IntersectionKind::Segment, points)
        }
        (1, 2) => {
            let k = find(1);
            let (i, j) = ((k + 1) % 3, (k + 2) % 3);
            let points = vec![v[k], cut(k, i), cut(j, k)];
            IntersectionResult::with_points(IntersectionKind::Polygon, points)
        }
        (1, 1) => {
            let k = find(1);
            let (i, j) = ((k + 1) % 3, (k + 2) % 3);
            let points = if s[i] < 0 {
                vec![v[k], cut(k, i), v[j]]
            } else {
                vec![v[k], v[i], cut(j, k)]
            };
            IntersectionResult::with_points(IntersectionKind::Polygon, points)
        }
        (2, 1) => {
            let k = find(-1);
            let (i, j) = ((k + 1) % 3, (k + 2) % 3);
            let points = vec![v[i], v[j], cut(j, k), cut(k, i)];
            IntersectionResult::with_points(IntersectionKind::Polygon, points)
        }
        _ => IntersectionResult::invalid(),
    }
}

/// Part of a segment inside a halfspace.
///
/// The interval of the result is in the segment's centered parameter,
/// `[-extent, extent]`. A segment that only touches the boundary with one
/// endpoint clips to that point.
#[must_use]
pub fn clip_segment(segment: &Segment3, halfspace: &Halfspace3) -> IntersectionResult<Point3<f64>> {
    let [p0, p1] = segment.endpoints();
    let e = segment.extent;
    let (d0, d1) = (halfspace.signed_distance(&p0), halfspace.signed_distance(&p1));
    let crossing = || {
        let s = d0 / (d0 - d1);
        (-e + 2.0 * e * s, p0 + (p1 - p0) * s)
    };

    match (sign(d0), sign(d1)) {
        (0 | 1, 0 | 1) => IntersectionResult::segment(Interval::new(-e, e), p0, p1),
        (-1, -1) => IntersectionResult::not_intersect(),
        (0, -1) => IntersectionResult::point(-e, p0),
        (-1, 0) => IntersectionResult::point(e, p1),
        (1, -1) => {
            let (t, p) = crossing();
            IntersectionResult::segment(Interval::new(-e, t), p0, p)
        }
        _ => {
            let (t, p) = crossing();
            IntersectionResult::segment(Interval::new(t, e), p, p1)
        }
    }
}

/// The four inward halfspaces bounding a 2D box.
fn box_halfspaces(oobb: &Oobb2) -> [Halfspace2; 4] {
    let cx = oobb.axis_x.dot(&oobb.center.coords);
    let cy = oobb.axis_y.dot(&oobb.center.coords);
    [
        Halfspace2::new(oobb.axis_x, cx - oobb.extent.x),
        Halfspace2::new(-oobb.axis_x, -cx - oobb.extent.x),
        Halfspace2::new(oobb.axis_y, cy - oobb.extent.y),
        Halfspace2::new(-oobb.axis_y, -cy - oobb.extent.y),
    ]
}

/// Intersection polygon of two 2D oriented boxes.
///
/// Clips the quad of `a` against each edge halfspace of `b` in turn. An
/// empty intermediate result stops early with
/// [`IntersectionStatus::NotIntersect`](crate::IntersectionStatus::NotIntersect).
/// Boxes that only touch do not intersect. Empty boxes give an
/// [`IntersectionStatus::Invalid`](crate::IntersectionStatus::Invalid) result.
///
/// # Example
///
/// ```
/// use geom_bounds::Oobb2;
/// use geom_query::{IntersectionKind, intersect_oobb2};
/// use geom_types::{Point2, Vector2};
///
/// let a = Oobb2::from_angle(Point2::origin(), Vector2::new(1.0, 1.0), 0.0);
/// let b = Oobb2::from_angle(Point2::new(1.0, 1.0), Vector2::new(1.0, 1.0), 0.0);
/// let overlap = intersect_oobb2(&a, &b);
/// assert_eq!(overlap.kind, IntersectionKind::Polygon);
/// assert_eq!(overlap.points.len(), 4);
/// ```
#[must_use]
pub fn intersect_oobb2(a: &Oobb2, b: &Oobb2) -> IntersectionResult<Point2<f64>> {
    if a.is_empty() || b.is_empty() {
        return IntersectionResult::invalid();
    }
    let mut polygon = a.polygon().to_vec();
    for halfspace in &box_halfspaces(b) {
        polygon = clip_polygon2(&polygon, halfspace);
        if polygon.is_empty() {
            return IntersectionResult::not_intersect();
        }
    }
    IntersectionResult::with_points(IntersectionKind::Polygon, polygon)
}

/// Overlap region of two axis-aligned 2D boxes as a polygon.
///
/// Touching boxes intersect in a segment or a point. The polygon is
/// counter-clockwise from the minimum corner.
#[must_use]
pub fn intersect_aabb2(a: &Aabb2, b: &Aabb2) -> IntersectionResult<Point2<f64>> {
    if a.is_empty() || b.is_empty() {
        return IntersectionResult::invalid();
    }
    if !a.collide(b, 0.0) {
        return IntersectionResult::not_intersect();
    }
    let r = a.intersection(b);
    let (wide, tall) = (r.max.x > r.min.x, r.max.y > r.min.y);
    match (wide, tall) {
        (true, true) => IntersectionResult::with_points(
            IntersectionKind::Polygon,
            vec![r.min, Point2::new(r.max.x, r.min.y), r.max, Point2::new(r.min.x, r.max.y)],
        ),
        (false, false) => IntersectionResult::with_points(IntersectionKind::Point, vec![r.min]),
        _ => IntersectionResult::with_points(IntersectionKind::Segment, vec![r.min, r.max]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::IntersectionStatus;
    use approx::assert_relative_eq;
    use geom_types::{Vector2, Vector3};

    fn polygon_area(polygon: &[Point2<f64>]) -> f64 {
        let n = polygon.len();
        0.5 * (0..n)
            .map(|i| {
                let (a, b) = (polygon[i], polygon[(i + 1) % n]);
                a.x * b.y - a.y * b.x
            })
            .sum::<f64>()
    }

    fn unit_triangle() -> Triangle3 {
        Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_polygon_all_inside_and_outside() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let keep = clip_polygon2(&square, &Halfspace2::new(Vector2::x(), -1.0));
        assert_eq!(keep, square.to_vec());

        let drop = clip_polygon2(&square, &Halfspace2::new(Vector2::x(), 2.0));
        assert!(drop.is_empty());

        // Touching the boundary line from outside.
        let touch = clip_polygon2(&square, &Halfspace2::new(Vector2::x(), 1.0));
        assert!(touch.is_empty());
    }

    #[test]
    fn test_polygon_diagonal_cut() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let n = Vector2::new(1.0, 1.0).normalize();
        let clipped = clip_polygon2(&square, &Halfspace2::new(n, n.dot(&Vector2::new(1.0, 1.0))));
        assert_eq!(clipped.len(), 3);
        assert_relative_eq!(polygon_area(&clipped), 2.0, epsilon = 1e-12);
        assert_eq!(clipped[0], Point2::new(2.0, 2.0));
    }

    #[test]
    fn test_polygon3_cut() {
        let quad = [
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ];
        let clipped = clip_polygon3(&quad, &Halfspace3::new(Vector3::y(), 0.5));
        assert_eq!(clipped.len(), 4);
        assert!(clipped.iter().all(|p| p.y >= 0.5 - 1e-12));
    }

    #[test]
    fn test_triangle_sign_patterns() {
        let tri = unit_triangle();

        let whole = clip_triangle(&tri, &Halfspace3::new(Vector3::z(), -1.0));
        assert_eq!(whole.kind, IntersectionKind::Polygon);
        assert_eq!(whole.points.len(), 3);

        let coplanar = clip_triangle(&tri, &Halfspace3::new(Vector3::z(), 0.0));
        assert_eq!(coplanar.points.len(), 3);

        let none = clip_triangle(&tri, &Halfspace3::new(Vector3::z(), 1.0));
        assert_eq!(none.status, IntersectionStatus::NotIntersect);

        // Only the vertex (1,0,0) is on x = 1.
        let vertex = clip_triangle(&tri, &Halfspace3::new(Vector3::x(), 1.0));
        assert_eq!(vertex.kind, IntersectionKind::Point);
        assert_eq!(vertex.points, vec![Point3::new(1.0, 0.0, 0.0)]);

        // Edge on y = 0 with the apex outside.
        let edge = clip_triangle(&tri, &Halfspace3::new(-Vector3::y(), 0.0));
        assert_eq!(edge.kind, IntersectionKind::Segment);
        assert_eq!(edge.points, vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_triangle_cut_shapes() {
        let tri = unit_triangle();

        // One vertex inside: x >= 0.5.
        let one = clip_triangle(&tri, &Halfspace3::new(Vector3::x(), 0.5));
        assert_eq!(one.points.len(), 3);
        assert_eq!(one.points[0], Point3::new(1.0, 0.0, 0.0));
        assert!(one.points.iter().all(|p| p.x >= 0.5 - 1e-12));

        // Two vertices inside: x <= 0.5.
        let two = clip_triangle(&tri, &Halfspace3::new(-Vector3::x(), -0.5));
        assert_eq!(two.points.len(), 4);
        assert!(two.points.iter().all(|p| p.x <= 0.5 + 1e-12));

        // One in, one out, one on: the plane x = y through (0,0,0).
        let n = Vector3::new(1.0, -1.0, 0.0).normalize();
        let mixed = clip_triangle(&tri, &Halfspace3::new(n, 0.0));
        assert_eq!(mixed.points.len(), 3);
        assert_eq!(mixed.points[0], Point3::new(1.0, 0.0, 0.0));
        let cut = mixed.points[1];
        assert_relative_eq!(cut, Point3::new(0.5, 0.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_segment_patterns() {
        let seg = Segment3::from_endpoints(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 3.0));

        let all = clip_segment(&seg, &Halfspace3::new(Vector3::z(), -2.0));
        assert_eq!(all.kind, IntersectionKind::Segment);
        assert_relative_eq!(all.interval.a, -2.0);
        assert_relative_eq!(all.interval.b, 2.0);

        let none = clip_segment(&seg, &Halfspace3::new(Vector3::z(), 5.0));
        assert!(!none.intersects());

        let touch = clip_segment(&seg, &Halfspace3::new(Vector3::z(), 3.0));
        assert_eq!(touch.kind, IntersectionKind::Point);
        assert_eq!(touch.points, vec![Point3::new(0.0, 0.0, 3.0)]);

        let upper = clip_segment(&seg, &Halfspace3::new(Vector3::z(), 1.0));
        assert_eq!(upper.kind, IntersectionKind::Segment);
        assert_relative_eq!(upper.points[0], Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(upper.interval.a, 0.0, epsilon = 1e-12);
        assert_relative_eq!(upper.interval.b, 2.0);

        let lower = clip_segment(&seg, &Halfspace3::new(-Vector3::z(), -1.0));
        assert_relative_eq!(lower.points[1], Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(lower.interval.b, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_oobb2_overlap_polygon() {
        let a = Oobb2::from_angle(Point2::origin(), Vector2::new(1.0, 1.0), 0.0);
        let b = Oobb2::from_angle(Point2::new(1.0, 1.0), Vector2::new(1.0, 1.0), 0.0);
        let result = intersect_oobb2(&a, &b);
        assert!(result.intersects());
        assert_relative_eq!(polygon_area(&result.points).abs(), 1.0, epsilon = 1e-12);

        let rotated = Oobb2::from_angle(
            Point2::origin(),
            Vector2::new(1.0, 1.0),
            std::f64::consts::FRAC_PI_4,
        );
        let octagon = intersect_oobb2(&a, &rotated);
        assert_eq!(octagon.points.len(), 8);
        // Square minus four corner triangles with legs 2 - sqrt(2).
        let leg = 2.0 - 2f64.sqrt();
        assert_relative_eq!(
            polygon_area(&octagon.points).abs(),
            4.0 - 2.0 * leg * leg,
            epsilon = 1e-12,
        );

        let far = Oobb2::from_angle(Point2::new(5.0, 0.0), Vector2::new(1.0, 1.0), 0.3);
        assert_eq!(intersect_oobb2(&a, &far).status, IntersectionStatus::NotIntersect);
        assert_eq!(intersect_oobb2(&a, &Oobb2::empty()).status, IntersectionStatus::Invalid);
    }

    #[test]
    fn test_aabb2_overlap() {
        let a = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = Aabb2::new(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));
        let overlap = intersect_aabb2(&a, &b);
        assert_eq!(overlap.kind, IntersectionKind::Polygon);
        assert_eq!(overlap.points[0], Point2::new(1.0, 1.0));
        assert_eq!(overlap.points[2], Point2::new(2.0, 2.0));

        let side = Aabb2::new(Point2::new(2.0, 0.5), Point2::new(3.0, 1.5));
        assert_eq!(intersect_aabb2(&a, &side).kind, IntersectionKind::Segment);

        let corner = Aabb2::new(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0));
        assert_eq!(intersect_aabb2(&a, &corner).kind, IntersectionKind::Point);

        let far = Aabb2::new(Point2::new(5.0, 5.0), Point2::new(6.0, 6.0));
        assert!(!intersect_aabb2(&a, &far).intersects());
    }
}

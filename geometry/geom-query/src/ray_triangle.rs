//! Ray/triangle intersection (Möller–Trumbore).

use geom_types::{Point3, Ray3, Triangle3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a ray hits a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayTriangleHit {
    /// Ray parameter of the hit.
    pub t: f64,
    /// Hit point.
    pub point: Point3<f64>,
    /// Barycentric coordinates of the hit on the triangle.
    pub barycentric: [f64; 3],
}

/// First intersection of a ray with a triangle, from either side.
///
/// Returns `None` when the ray misses, points away, or runs parallel to the
/// triangle plane (`|det| <= zero`). Degenerate triangles never hit.
///
/// # Example
///
/// ```
/// use geom_query::intersect_ray_triangle;
/// use geom_types::{Point3, Ray3, Triangle3, Vector3};
///
/// let tri = Triangle3::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// let ray = Ray3::new(Point3::new(0.25, 0.25, 2.0), -Vector3::z());
/// let hit = intersect_ray_triangle(&ray, &tri, 1e-12).unwrap();
/// assert!((hit.t - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn intersect_ray_triangle(
    ray: &Ray3,
    triangle: &Triangle3,
    zero: f64,
) -> Option<RayTriangleHit> {
    let [v0, v1, v2] = triangle.v;
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(&edge2);
    let det = edge1.dot(&h);
    if det.abs() <= zero {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = ray.origin - v0;
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * ray.direction.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    if t < 0.0 {
        return None;
    }
    Some(RayTriangleHit {
        t,
        point: ray.point_at(t),
        barycentric: [1.0 - u - v, u, v],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geom_types::Vector3;

    const ZERO: f64 = 1e-12;

    fn tri() -> Triangle3 {
        Triangle3::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn test_hit_from_both_sides() {
        let down = Ray3::new(Point3::new(0.5, 0.5, 3.0), -Vector3::z());
        let hit = intersect_ray_triangle(&down, &tri(), ZERO).unwrap();
        assert_relative_eq!(hit.t, 3.0);
        assert_relative_eq!(hit.point, Point3::new(0.5, 0.5, 0.0));
        assert_relative_eq!(tri().from_barycentric(hit.barycentric), hit.point, epsilon = 1e-12);

        let up = Ray3::new(Point3::new(0.5, 0.5, -1.0), Vector3::z());
        assert_relative_eq!(intersect_ray_triangle(&up, &tri(), ZERO).unwrap().t, 1.0);
    }

    #[test]
    fn test_misses() {
        let outside = Ray3::new(Point3::new(1.5, 1.5, 3.0), -Vector3::z());
        assert!(intersect_ray_triangle(&outside, &tri(), ZERO).is_none());

        let away = Ray3::new(Point3::new(0.5, 0.5, 3.0), Vector3::z());
        assert!(intersect_ray_triangle(&away, &tri(), ZERO).is_none());

        let parallel = Ray3::new(Point3::new(-1.0, 0.5, 0.0), Vector3::x());
        assert!(intersect_ray_triangle(&parallel, &tri(), ZERO).is_none());
    }

    #[test]
    fn test_degenerate_triangle_never_hits() {
        let flat = Triangle3::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        );
        let ray = Ray3::new(Point3::new(0.5, 0.0, 1.0), -Vector3::z());
        assert!(intersect_ray_triangle(&ray, &flat, ZERO).is_none());
    }
}

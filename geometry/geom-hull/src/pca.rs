//! Principal-axes oriented box.
//!
//! Aligns the box with the eigenvectors of the point covariance and takes the
//! extents in that frame. Much cheaper than the hull search, but the result
//! can be well above the minimum volume.

use geom_bounds::Oobb3;
use geom_types::{Point3, Vector3};

use crate::dimension::{centroid, covariance, principal_axes};

/// Box aligned with the principal axes of `points`. Empty for no points.
///
/// # Example
///
/// ```
/// use geom_hull::principal_box;
/// use geom_types::Point3;
///
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
///     Point3::new(4.0, 2.0, 0.0),
///     Point3::new(0.0, 2.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(4.0, 0.0, 1.0),
///     Point3::new(4.0, 2.0, 1.0),
///     Point3::new(0.0, 2.0, 1.0),
/// ];
/// let oobb = principal_box(&points);
/// assert!((oobb.volume() - 8.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn principal_box(points: &[Point3<f64>]) -> Oobb3 {
    if points.is_empty() {
        return Oobb3::empty();
    }
    let mean = centroid(points);
    let (axes, _) = principal_axes(&covariance(points, &mean));

    let mut local_min = Vector3::repeat(f64::INFINITY);
    let mut local_max = Vector3::repeat(f64::NEG_INFINITY);
    for p in points {
        let d = p - mean;
        let local = Vector3::new(d.dot(&axes[0]), d.dot(&axes[1]), d.dot(&axes[2]));
        local_min = local_min.inf(&local);
        local_max = local_max.sup(&local);
    }

    let half = (local_max - local_min) * 0.5;
    let mid = (local_max + local_min) * 0.5;
    let center: Point3<f64> = mean + axes[0] * mid.x + axes[1] * mid.y + axes[2] * mid.z;
    Oobb3::new(center, half, axes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Rotation3;

    #[test]
    fn test_empty() {
        assert!(principal_box(&[]).is_empty());
    }

    #[test]
    fn test_single_point() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let oobb = principal_box(&[p]);
        assert_relative_eq!(oobb.center, p);
        assert_relative_eq!(oobb.volume(), 0.0);
    }

    #[test]
    fn test_elongated_rotated_cloud() {
        let rotation = Rotation3::from_euler_angles(0.2, 0.5, -0.7);
        let mut pts = Vec::new();
        for i in 0..=20 {
            for j in 0..=4 {
                for k in 0..=2 {
                    let local =
                        Vector3::new(f64::from(i) - 10.0, f64::from(j) - 2.0, f64::from(k) - 1.0);
                    pts.push(Point3::from(rotation * local));
                }
            }
        }
        let oobb = principal_box(&pts);
        assert!(oobb.is_orthonormal(1e-9));
        assert_relative_eq!(oobb.extent, Vector3::new(10.0, 2.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(oobb.center, Point3::origin(), epsilon = 1e-9);
        for p in &pts {
            assert!(oobb.contains_point(p, 1e-9));
        }
    }
}

//! Oriented box fitting entry points.
//!
//! ```text
//! points ─► classify ─┬─ rank < 2 ─► Empty
//!                     ├─ rank 2 ───► plane projection ─► 2D hull ─► calipers ─► lift
//!                     └─ rank 3 ───► 3D hull ─► per-face calipers ─► minimum volume
//! ```

use geom_bounds::{Oobb2, Oobb3};
use geom_types::{Point2, Point3, Tolerance, Vector3};
use tracing::{debug, info, warn};

use crate::calipers::min_area_box;
use crate::config::{FitConfig, FitMethod};
use crate::dimension::{Dimension, DimensionInfo, any_perpendicular, classify};
use crate::fit3::min_volume_box;
use crate::hull2::convex_hull_2d;
use crate::hull3::{HullBuilder, IncrementalHull};
use crate::pca::principal_box;

/// Minimum-area oriented box of a 2D point set.
///
/// Returns [`Oobb2::empty`] when the points do not span an area (fewer than
/// three hull vertices).
///
/// # Example
///
/// ```
/// use geom_hull::fit_oobb2;
/// use geom_types::{Point2, Tolerance};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let oobb = fit_oobb2(&square, &Tolerance::default());
/// assert!((oobb.area() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn fit_oobb2(points: &[Point2<f64>], tolerance: &Tolerance) -> Oobb2 {
    let hull = convex_hull_2d(points, tolerance);
    if hull.len() < 3 {
        return Oobb2::empty();
    }
    min_area_box(&hull, tolerance.zero).map_or_else(Oobb2::empty, |(rect, _)| rect)
}

/// Minimum-volume oriented box of a 3D point set, using [`IncrementalHull`].
///
/// See [`fit_oobb3_with`].
///
/// # Example
///
/// ```
/// use geom_hull::{FitConfig, fit_oobb3};
/// use geom_types::Point3;
///
/// let corners: Vec<_> = (0..8)
///     .map(|i| Point3::new(f64::from(i & 1), f64::from((i >> 1) & 1), f64::from((i >> 2) & 1)))
///     .collect();
/// let oobb = fit_oobb3(&corners, &FitConfig::default());
/// assert!((oobb.volume() - 1.0).abs() < 1e-9);
///
/// // Collinear points enclose no volume.
/// let line = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)];
/// assert!(fit_oobb3(&line, &FitConfig::default()).is_empty());
/// ```
#[must_use]
pub fn fit_oobb3(points: &[Point3<f64>], config: &FitConfig) -> Oobb3 {
    fit_oobb3_with(points, config, &IncrementalHull::new(config.tolerance))
}

/// Oriented box of a 3D point set with a caller-supplied hull builder.
///
/// - Empty input, coincident or collinear points give [`Oobb3::empty`].
/// - Coplanar points take the planar path ([`fit_planar`]).
/// - Volumetric points use `config.method`: the per-face minimum-volume
///   search over the hull from `builder`, or the principal-axes box. A hull
///   builder failure, or a hull without any positive volume face, falls back
///   to the planar path.
#[must_use]
pub fn fit_oobb3_with<B>(points: &[Point3<f64>], config: &FitConfig, builder: &B) -> Oobb3
where
    B: HullBuilder + ?Sized,
{
    let Some(dim) = classify(points, config) else {
        return Oobb3::empty();
    };
    info!(
        points = points.len(),
        dimension = ?dim.dimension,
        method = ?config.method,
        "fitting oriented box"
    );

    match dim.dimension {
        Dimension::Point | Dimension::Line => {
            debug!("point set spans no area");
            Oobb3::empty()
        }
        Dimension::Plane => fit_planar(points, &dim, &config.tolerance),
        Dimension::Volume => match config.method {
            FitMethod::Principal => principal_box(points),
            FitMethod::MinimumVolume => {
                let Some(hull) = builder.compute(points, false) else {
                    warn!(points = points.len(), "hull construction failed, using planar fit");
                    return fit_planar(points, &dim, &config.tolerance);
                };
                min_volume_box(&hull, config).unwrap_or_else(|| {
                    debug!("no hull face encloses volume, using planar fit");
                    fit_planar(points, &dim, &config.tolerance)
                })
            }
        },
    }
}

/// Oriented box of a (near-)planar point set as a zero-thickness slab.
///
/// `dim.axes[2]` is taken as the plane normal. Two cross products build an
/// in-plane basis, the points are projected onto it, and the minimum-area
/// rectangle of their hull is rotated back into the plane. The third extent
/// covers whatever spread remains along the normal (zero for exactly
/// coplanar input).
///
/// Returns [`Oobb3::empty`] when the projected points span no area (fewer
/// than three hull vertices), as for collinear input.
#[must_use]
pub fn fit_planar(points: &[Point3<f64>], dim: &DimensionInfo, tolerance: &Tolerance) -> Oobb3 {
    let normal = dim.axes[2];
    let b1 = any_perpendicular(&normal);
    let b2 = normal.cross(&b1);
    let origin = dim.origin;

    let mut h_min = f64::INFINITY;
    let mut h_max = f64::NEG_INFINITY;
    let projected: Vec<Point2<f64>> = points
        .iter()
        .map(|p| {
            let d = p - origin;
            let h = d.dot(&normal);
            h_min = h_min.min(h);
            h_max = h_max.max(h);
            Point2::new(d.dot(&b1), d.dot(&b2))
        })
        .collect();

    let hull = convex_hull_2d(&projected, tolerance);
    if hull.len() < 3 {
        debug!(hull = hull.len(), "projected points span no area");
        return Oobb3::empty();
    }
    let Some((rect, area)) = min_area_box(&hull, tolerance.zero) else {
        return Oobb3::empty();
    };
    debug!(area, angle = rect.angle(), "planar fit");

    // Rotate the in-plane basis by the fitted angle.
    let (s, c) = rect.angle().sin_cos();
    let axis_x = b1 * c + b2 * s;
    let axis_y = normal.cross(&axis_x);
    let center =
        origin + b1 * rect.center.x + b2 * rect.center.y + normal * (0.5 * (h_min + h_max));
    Oobb3::new(
        center,
        Vector3::new(rect.extent.x, rect.extent.y, 0.5 * (h_max - h_min)),
        [axis_x, axis_y, normal],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierKind;
    use approx::assert_relative_eq;
    use nalgebra::Rotation3;

    struct FailingBuilder;

    impl HullBuilder for FailingBuilder {
        fn compute(&self, _points: &[Point3<f64>], _want_normals: bool) -> Option<crate::Hull3> {
            None
        }
    }

    fn rotated_box_cloud(rotation: &Rotation3<f64>, half: Vector3<f64>) -> Vec<Point3<f64>> {
        let mut pts = Vec::new();
        for i in 0..8 {
            pts.push(Point3::from(
                rotation
                    * Vector3::new(
                        if i & 1 == 0 { -half.x } else { half.x },
                        if i & 2 == 0 { -half.y } else { half.y },
                        if i & 4 == 0 { -half.z } else { half.z },
                    ),
            ));
        }
        for k in 0..20 {
            let t = f64::from(k) * 0.37;
            let wobble = Vector3::new(t.sin(), (2.0 * t).cos(), (3.0 * t).sin());
            pts.push(Point3::from(rotation * half.component_mul(&wobble) * 0.9));
        }
        pts
    }

    #[test]
    fn test_unit_square_2d() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let oobb = fit_oobb2(&square, &Tolerance::default());
        assert_relative_eq!(oobb.extent, geom_types::Vector2::new(0.5, 0.5));
        assert_relative_eq!(oobb.area(), 1.0);
    }

    #[test]
    fn test_fit_oobb2_degenerate() {
        let tol = Tolerance::default();
        assert!(fit_oobb2(&[], &tol).is_empty());
        let diagonal = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)];
        assert!(fit_oobb2(&diagonal, &tol).is_empty());
    }

    #[test]
    fn test_fit_volume_both_methods() {
        let rotation = Rotation3::from_euler_angles(0.3, 0.9, -0.4);
        let half = Vector3::new(2.0, 1.0, 0.25);
        let pts = rotated_box_cloud(&rotation, half);

        let exact = fit_oobb3(&pts, &FitConfig::default());
        assert_relative_eq!(exact.volume(), 8.0 * 2.0 * 1.0 * 0.25, epsilon = 1e-8);

        let fast = fit_oobb3(&pts, &FitConfig::fast());
        assert!(fast.volume() >= exact.volume() - 1e-9);

        for oobb in [exact, fast] {
            assert!(oobb.is_orthonormal(1e-9));
            assert!(pts.iter().all(|p| oobb.contains_point(p, 1e-8)));
        }
    }

    #[test]
    fn test_fit_planar_points() {
        let rotation = Rotation3::from_euler_angles(0.5, -0.2, 0.8);
        let pts: Vec<_> = [(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0), (2.0, 0.5), (1.0, 0.2)]
            .iter()
            .map(|&(x, y)| Point3::from(rotation * Vector3::new(x, y, 0.0)))
            .collect();

        for classifier in [ClassifierKind::Covariance, ClassifierKind::Directional] {
            let config = FitConfig::default().with_classifier(classifier);
            let oobb = fit_oobb3(&pts, &config);
            assert!(!oobb.is_empty());
            assert!(oobb.is_orthonormal(1e-9));
            assert_relative_eq!(oobb.extent.z, 0.0, epsilon = 1e-9);
            assert_relative_eq!(4.0 * oobb.extent.x * oobb.extent.y, 4.0, epsilon = 1e-9);
            assert!(pts.iter().all(|p| oobb.contains_point(p, 1e-9)));
        }
    }

    #[test]
    fn test_fit_low_rank_is_empty() {
        let config = FitConfig::default();
        assert!(fit_oobb3(&[], &config).is_empty());
        assert!(fit_oobb3(&[Point3::new(1.0, 1.0, 1.0); 5], &config).is_empty());
        let line: Vec<_> = (0..6).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        assert!(fit_oobb3(&line, &config).is_empty());
    }

    #[test]
    fn test_failed_builder_falls_back_to_planar() {
        let pts = rotated_box_cloud(&Rotation3::identity(), Vector3::new(1.0, 1.0, 1.0));
        let oobb = fit_oobb3_with(&pts, &FitConfig::default(), &FailingBuilder);
        assert!(!oobb.is_empty());
        assert!(oobb.is_orthonormal(1e-9));
        assert!(pts.iter().all(|p| oobb.contains_point(p, 1e-9)));
    }

    #[test]
    fn test_collinear_triple_is_empty() {
        let config = FitConfig::default();
        let triple = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        assert_eq!(classify(&triple, &config).unwrap().dimension, Dimension::Plane);
        assert!(fit_oobb3(&triple, &config).is_empty());
        let dim = classify(&triple, &config).unwrap();
        assert!(fit_planar(&triple, &dim, &config.tolerance).is_empty());

        let offset = Vector3::new(1.0e5, -3.0e4, 7.0e4);
        let far: Vec<_> = triple.iter().map(|p| p + offset).collect();
        assert!(fit_oobb3(&far, &config).is_empty());
    }

    #[test]
    fn test_coplanar_at_large_coordinates() {
        let n = Vector3::new(1.0, 2.0, 3.0).normalize();
        let u = any_perpendicular(&n);
        let v = n.cross(&u);
        let base = Point3::new(1.0e5, 1.0e5, 1.0e5);
        let mut pts = Vec::new();
        for i in 0..6 {
            for j in 0..6 {
                pts.push(base + (u * f64::from(i) + v * f64::from(j)) * 1.0e4);
            }
        }
        let oobb = fit_oobb3(&pts, &FitConfig::default());
        assert!(!oobb.is_empty());
        assert_relative_eq!(oobb.extent.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(4.0 * oobb.extent.x * oobb.extent.y, 2.5e9, max_relative = 1e-9);
        assert!(pts.iter().all(|p| oobb.contains_point(p, 1e-6)));
    }
}

//! Minimum-volume oriented box over the faces of a 3D hull.
//!
//! For each distinct face plane, the hull is projected onto the plane and the
//! 2D rotating calipers pick the best in-plane frame; the height along the
//! face normal closes the box. The smallest volume across faces wins.

// Rounded plane coefficients stay far inside the i64 range.
#![allow(clippy::cast_possible_truncation)]

use geom_bounds::{Oobb2, Oobb3};
use geom_types::{Point2, Point3, Tolerance, Vector2, Vector3};
use hashbrown::HashSet;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

use crate::calipers::min_area_box;
use crate::config::FitConfig;
use crate::hull2::convex_hull_2d;
use crate::hull3::Hull3;

/// Orthonormal frame of one hull face: edge direction, in-plane
/// perpendicular, outward normal.
#[derive(Debug, Clone, Copy)]
struct FaceFrame {
    origin: Point3<f64>,
    axes: [Vector3<f64>; 3],
}

fn plane_key(normal: &Vector3<f64>, constant: f64, decimals: i32) -> [i64; 4] {
    let scale = 10f64.powi(decimals);
    let q = |v: f64| (v * scale).round() as i64;
    [q(normal.x), q(normal.y), q(normal.z), q(constant)]
}

/// One frame per distinct face plane, in face order.
fn face_frames(hull: &Hull3, config: &FitConfig) -> Vec<(usize, FaceFrame)> {
    let zero = config.tolerance.zero;
    let mut seen = HashSet::new();
    let mut frames = Vec::new();
    for (index, tri) in hull.triangles().enumerate() {
        let a = tri.v[0];
        let Some(normal) = tri.normal_unnormalized().try_normalize(zero) else {
            continue;
        };
        if !seen.insert(plane_key(&normal, normal.dot(&a.coords), config.plane_decimals)) {
            continue;
        }
        let Some(e1) = (tri.v[1] - a).try_normalize(zero) else {
            continue;
        };
        let e2 = normal.cross(&e1);
        frames.push((
            index,
            FaceFrame {
                origin: a,
                axes: [e1, e2, normal],
            },
        ));
    }
    frames
}

/// Best box whose third axis is the face normal, with its volume.
fn fit_face(
    vertices: &[Point3<f64>],
    frame: &FaceFrame,
    tolerance: &Tolerance,
) -> Option<(f64, Oobb3)> {
    let [e1, e2, n] = frame.axes;
    let mut h_min = f64::INFINITY;
    let mut h_max = f64::NEG_INFINITY;
    let projected: Vec<Point2<f64>> = vertices
        .iter()
        .map(|p| {
            let d = p - frame.origin;
            let h = d.dot(&n);
            h_min = h_min.min(h);
            h_max = h_max.max(h);
            Point2::new(d.dot(&e1), d.dot(&e2))
        })
        .collect();

    let polygon = convex_hull_2d(&projected, tolerance);
    let (rect, area) = min_area_box(&polygon, tolerance.zero)?;
    let height = h_max - h_min;
    let volume = area * height;
    if volume <= 0.0 {
        return None;
    }
    Some((volume, lift_rect(&frame.origin, frame.axes, &rect, h_min, h_max)))
}

/// Lift a rectangle in a face frame back to 3D, spanning `[h_min, h_max]`
/// along the frame normal.
fn lift_rect(
    origin: &Point3<f64>,
    basis: [Vector3<f64>; 3],
    rect: &Oobb2,
    h_min: f64,
    h_max: f64,
) -> Oobb3 {
    let [e1, e2, n] = basis;
    let to_world = |v: &Vector2<f64>| e1 * v.x + e2 * v.y;
    let center = origin
        + e1 * rect.center.x
        + e2 * rect.center.y
        + n * (0.5 * (h_min + h_max));
    Oobb3::new(
        center,
        Vector3::new(rect.extent.x, rect.extent.y, 0.5 * (h_max - h_min)),
        [to_world(&rect.axis_x), to_world(&rect.axis_y), n],
    )
}

/// Minimum-volume oriented box with one face flush against a hull face.
///
/// Faces with a zero normal, and faces on a plane already searched, are
/// skipped. Candidates with zero volume are discarded. Among equal volumes
/// the first face in hull order wins, also when `config.parallel` spreads
/// the search over rayon's thread pool.
///
/// Returns `None` when no face yields a positive volume (for example a flat
/// hull); the caller falls back to a planar fit.
///
/// # Example
///
/// ```
/// use geom_hull::{FitConfig, HullBuilder, IncrementalHull, min_volume_box};
/// use geom_types::Point3;
///
/// let corners: Vec<_> = (0..8)
///     .map(|i| {
///         let bit = |k: u32| f64::from((i >> k) & 1);
///         Point3::new(bit(0) * 3.0, bit(1), bit(2) * 2.0)
///     })
///     .collect();
/// let hull = IncrementalHull::default().compute(&corners, false).unwrap();
/// let oobb = min_volume_box(&hull, &FitConfig::default()).unwrap();
/// assert!((oobb.volume() - 6.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn min_volume_box(hull: &Hull3, config: &FitConfig) -> Option<Oobb3> {
    let frames = face_frames(hull, config);
    debug!(
        triangles = hull.triangle_count(),
        planes = frames.len(),
        parallel = config.parallel,
        "searching hull faces"
    );

    let tolerance = &config.tolerance;
    let best = if config.parallel {
        frames
            .par_iter()
            .filter_map(|(index, frame)| {
                fit_face(&hull.vertices, frame, tolerance)
                    .map(|(volume, oobb)| (volume, *index, oobb))
            })
            .reduce_with(|a, b| match a.0.total_cmp(&b.0) {
                Ordering::Less => a,
                Ordering::Greater => b,
                Ordering::Equal => {
                    if a.1 <= b.1 {
                        a
                    } else {
                        b
                    }
                }
            })
            .map(|(volume, _, oobb)| (volume, oobb))
    } else {
        let mut best: Option<(f64, Oobb3)> = None;
        for (_, frame) in &frames {
            if let Some((volume, oobb)) = fit_face(&hull.vertices, frame, tolerance) {
                if best.as_ref().is_none_or(|(v, _)| volume < *v) {
                    best = Some((volume, oobb));
                }
            }
        }
        best
    };

    if let Some((volume, _)) = &best {
        debug!(volume, "minimum-volume box found");
    }
    best.map(|(_, oobb)| oobb)
}

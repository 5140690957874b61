//! Dimension classification of point sets.
//!
//! Decides whether a point set spans a point, a line, a plane or a volume,
//! and returns a frame aligned with that subspace. The fitter uses the rank
//! to choose between the planar and the volumetric path.

// Point counts are far below 2^52.
#![allow(clippy::cast_precision_loss)]

use geom_types::{Point3, Tolerance, Vector3};
use nalgebra::Matrix3;

use crate::config::{ClassifierKind, FitConfig};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Affine dimension of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dimension {
    /// All points coincide (rank 0).
    Point,
    /// Points are collinear (rank 1).
    Line,
    /// Points are coplanar (rank 2).
    Plane,
    /// Points span a volume (rank 3).
    Volume,
}

impl Dimension {
    /// Rank in `0..=3`.
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Point => 0,
            Self::Line => 1,
            Self::Plane => 2,
            Self::Volume => 3,
        }
    }

    /// Dimension for a rank; anything above 3 is a volume.
    #[must_use]
    pub const fn from_rank(rank: usize) -> Self {
        match rank {
            0 => Self::Point,
            1 => Self::Line,
            2 => Self::Plane,
            _ => Self::Volume,
        }
    }
}

/// Classification result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionInfo {
    /// Affine dimension.
    pub dimension: Dimension,
    /// Reference point of the frame (mean or first point).
    pub origin: Point3<f64>,
    /// Right-handed orthonormal frame. The first `rank` axes span the
    /// subspace; for a plane, `axes[2]` is its normal.
    pub axes: [Vector3<f64>; 3],
    /// Spread along each axis, largest first: covariance eigenvalues for the
    /// covariance classifier, farthest distances for the directional one.
    pub spread: Vector3<f64>,
}

/// Classify with the classifier selected in `config`.
///
/// Returns `None` for an empty point set.
#[must_use]
pub fn classify(points: &[Point3<f64>], config: &FitConfig) -> Option<DimensionInfo> {
    match config.classifier {
        ClassifierKind::Covariance => classify_covariance(points, &config.tolerance),
        ClassifierKind::Directional => classify_directional(points, &config.tolerance),
    }
}

/// Mean of a non-empty point set.
pub(crate) fn centroid(points: &[Point3<f64>]) -> Point3<f64> {
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f64)
}

/// Sample covariance (divided by `n - 1`; by 1 for a single point).
pub(crate) fn covariance(points: &[Point3<f64>], mean: &Point3<f64>) -> Matrix3<f64> {
    let sum = points.iter().fold(Matrix3::zeros(), |acc, p| {
        let d = p - mean;
        acc + d * d.transpose()
    });
    let denom = points.len().saturating_sub(1).max(1) as f64;
    sum / denom
}

/// Principal axes of a point set, sorted by decreasing variance.
///
/// The frame is right-handed. Returns the axes and matching eigenvalues.
pub(crate) fn principal_axes(cov: &Matrix3<f64>) -> ([Vector3<f64>; 3], Vector3<f64>) {
    let eigen = cov.symmetric_eigen();
    let mut order = [0usize, 1, 2];
    order.sort_by(|&a, &b| eigen.eigenvalues[b].total_cmp(&eigen.eigenvalues[a]));
    let values = Vector3::new(
        eigen.eigenvalues[order[0]],
        eigen.eigenvalues[order[1]],
        eigen.eigenvalues[order[2]],
    );
    let x = eigen.eigenvectors.column(order[0]).into_owned();
    let y = eigen.eigenvectors.column(order[1]).into_owned();
    ([x, y, x.cross(&y)], values)
}

fn count_distinct(points: &[Point3<f64>], zero: f64) -> usize {
    let mut distinct: Vec<&Point3<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if distinct.iter().all(|q| (p - *q).norm() > zero) {
            distinct.push(p);
        }
    }
    distinct.len()
}

/// Classify by covariance eigenvalues.
///
/// Up to three points are decided directly from the number of distinct
/// points (one → point, two → line, three → plane). Larger sets count the
/// eigenvalues above `tolerance.rank` times the largest eigenvalue, so the
/// result does not change when the points are translated or scaled. A set
/// whose largest eigenvalue is itself at or below `tolerance.rank` is a
/// point.
///
/// # Example
///
/// ```
/// use geom_hull::{Dimension, classify_covariance};
/// use geom_types::{Point3, Tolerance};
///
/// let line: Vec<_> = (0..10)
///     .map(|i| Point3::new(f64::from(i), 2.0 * f64::from(i), 0.0))
///     .collect();
/// let info = classify_covariance(&line, &Tolerance::default()).unwrap();
/// assert_eq!(info.dimension, Dimension::Line);
/// ```
#[must_use]
pub fn classify_covariance(points: &[Point3<f64>], tolerance: &Tolerance) -> Option<DimensionInfo> {
    if points.is_empty() {
        return None;
    }
    let mean = centroid(points);
    let (axes, spread) = principal_axes(&covariance(points, &mean));

    let rank = if points.len() <= 3 {
        count_distinct(points, tolerance.zero).saturating_sub(1)
    } else {
        let largest = spread[0].abs();
        if largest <= tolerance.rank {
            0
        } else {
            let threshold = tolerance.rank * largest;
            spread.iter().filter(|l| l.abs() > threshold).count()
        }
    };

    Some(DimensionInfo {
        dimension: Dimension::from_rank(rank),
        origin: mean,
        axes,
        spread,
    })
}

fn farthest<F>(points: &[Point3<f64>], measure: F) -> Option<(&Point3<f64>, f64)>
where
    F: Fn(&Point3<f64>) -> f64,
{
    points
        .iter()
        .map(|p| (p, measure(p)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

/// Classify by successive farthest points.
///
/// Finds the point farthest from the first point, then the point farthest
/// from that line, then the point farthest from that plane. The first
/// distance is compared against `tolerance.zero`; the other two against
/// `tolerance.zero` times the first.
#[must_use]
pub fn classify_directional(
    points: &[Point3<f64>],
    tolerance: &Tolerance,
) -> Option<DimensionInfo> {
    let origin = *points.first()?;
    let world = [Vector3::x(), Vector3::y(), Vector3::z()];
    let info = |dimension, axes, spread| DimensionInfo {
        dimension,
        origin,
        axes,
        spread,
    };

    let (p1, d1) = farthest(points, |p| (p - origin).norm())?;
    let Some(u) = (p1 - origin).try_normalize(tolerance.zero).filter(|_| d1 > tolerance.zero) else {
        return Some(info(Dimension::Point, world, Vector3::zeros()));
    };

    let off_line = |p: &Point3<f64>| {
        let d = p - origin;
        d - u * d.dot(&u)
    };
    let (p2, d2) = farthest(points, |p| off_line(p).norm())?;
    let line_frame = || {
        let v = any_perpendicular(&u);
        [u, v, u.cross(&v)]
    };
    let threshold = tolerance.zero * d1;
    let Some(v) = off_line(p2).try_normalize(threshold).filter(|_| d2 > threshold) else {
        return Some(info(Dimension::Line, line_frame(), Vector3::new(d1, 0.0, 0.0)));
    };

    let n = u.cross(&v);
    let (_, d3) = farthest(points, |p| (p - origin).dot(&n).abs())?;
    let dimension = if d3 > threshold {
        Dimension::Volume
    } else {
        Dimension::Plane
    };
    Some(info(dimension, [u, v, n], Vector3::new(d1, d2, d3)))
}

/// A unit vector perpendicular to the unit vector `v`.
pub(crate) fn any_perpendicular(v: &Vector3<f64>) -> Vector3<f64> {
    // Cross with the world axis least aligned with v.
    let helper = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector3::y()
    } else {
        Vector3::z()
    };
    v.cross(&helper).normalize()
}

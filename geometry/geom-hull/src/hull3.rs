//! 3D convex hull contract and an incremental builder.
//!
//! The fitter only needs the [`HullBuilder`] contract: a point list in,
//! deduplicated hull vertices, a flat triangle index list and optional
//! per-corner normals out. [`IncrementalHull`] is the built-in
//! implementation; callers with their own hull code can plug it in through
//! [`crate::fit_oobb3_with`].

use geom_types::{Point3, Tolerance, Triangle3, Vector3};
use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::error::{HullError, HullResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangulated convex hull.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hull3 {
    /// Hull vertices, each used by at least one triangle.
    pub vertices: Vec<Point3<f64>>,
    /// Flat triangle list; every three entries index one outward-facing
    /// counter-clockwise triangle.
    pub indices: Vec<usize>,
    /// Outward unit normals parallel to `indices` (each face normal repeated
    /// for its three corners), or empty when normals were not requested.
    pub normals: Vec<Vector3<f64>>,
}

impl Hull3 {
    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the hull has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index triples of the triangles.
    pub fn faces(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Triangles with resolved vertex positions.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle3> + '_ {
        self.faces().map(|[a, b, c]| {
            Triangle3::new(self.vertices[a], self.vertices[b], self.vertices[c])
        })
    }

    /// Whether `point` is inside or on every face plane, within `epsilon`.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>, epsilon: f64) -> bool {
        self.triangles().all(|t| {
            t.normal()
                .is_none_or(|n| n.dot(&(point - t.v[0])) <= epsilon)
        })
    }
}

/// Anything that can build a 3D convex hull.
pub trait HullBuilder {
    /// Build the hull of `points`, with per-corner normals when
    /// `want_normals` is set. Returns `None` when no 3D hull exists
    /// (fewer than four distinct points, or all points coplanar).
    fn compute(&self, points: &[Point3<f64>], want_normals: bool) -> Option<Hull3>;
}

/// Incremental (beneath-beyond) convex hull builder.
///
/// Starts from the largest tetrahedron found by extreme-point search, then
/// adds points one by one: faces that see the point are removed and the
/// horizon is stitched to it. Points within `tolerance.zero` of a face plane
/// count as on it, so coplanar boundary points are dropped.
///
/// # Example
///
/// ```
/// use geom_hull::{HullBuilder, IncrementalHull};
/// use geom_types::Point3;
///
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.1, 0.1, 0.1),
/// ];
/// let hull = IncrementalHull::default().compute(&points, true).unwrap();
/// assert_eq!(hull.vertices.len(), 4);
/// assert_eq!(hull.triangle_count(), 4);
/// assert_eq!(hull.normals.len(), hull.indices.len());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncrementalHull {
    /// Tolerances for deduplication and visibility.
    pub tolerance: Tolerance,
}

#[derive(Debug, Clone, Copy)]
struct Face {
    v: [usize; 3],
    normal: Vector3<f64>,
    alive: bool,
}

impl IncrementalHull {
    /// Create a builder with the given tolerances.
    #[must_use]
    pub const fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Build the hull, reporting why it could not be built.
    ///
    /// # Errors
    ///
    /// - [`HullError::TooFewPoints`] with fewer than four distinct points.
    /// - [`HullError::Degenerate`] when the points are collinear or coplanar.
    pub fn try_compute(&self, points: &[Point3<f64>], want_normals: bool) -> HullResult<Hull3> {
        let zero = self.tolerance.zero;
        let pts = self.dedup(points);
        if pts.len() < 4 {
            return Err(HullError::too_few_points(4, pts.len()));
        }

        let simplex = initial_simplex(&pts, zero)?;
        let interior = Point3::from(
            simplex
                .iter()
                .map(|&i| pts[i].coords)
                .sum::<Vector3<f64>>()
                / 4.0,
        );

        let make_face = |a: usize, b: usize, c: usize| {
            let mut n = (pts[b] - pts[a]).cross(&(pts[c] - pts[a]));
            let (b, c) = if n.dot(&(pts[a] - interior)) < 0.0 {
                n = -n;
                (c, b)
            } else {
                (b, c)
            };
            let len = n.norm();
            Face {
                v: [a, b, c],
                normal: if len > 0.0 { n / len } else { n },
                alive: true,
            }
        };

        let [s0, s1, s2, s3] = simplex;
        let mut faces = vec![
            make_face(s0, s1, s2),
            make_face(s0, s1, s3),
            make_face(s0, s2, s3),
            make_face(s1, s2, s3),
        ];

        for (p_index, p) in pts.iter().enumerate() {
            if simplex.contains(&p_index) {
                continue;
            }
            let visible: Vec<usize> = faces
                .iter()
                .enumerate()
                .filter(|(_, f)| f.alive && f.normal.dot(&(p - pts[f.v[0]])) > zero)
                .map(|(i, _)| i)
                .collect();
            if visible.is_empty() {
                continue;
            }

            let edges: HashSet<(usize, usize)> = visible
                .iter()
                .flat_map(|&i| {
                    let [a, b, c] = faces[i].v;
                    [(a, b), (b, c), (c, a)]
                })
                .collect();
            let horizon: Vec<(usize, usize)> = edges
                .iter()
                .filter(|(a, b)| !edges.contains(&(*b, *a)))
                .copied()
                .collect();

            for &i in &visible {
                faces[i].alive = false;
            }
            for (a, b) in horizon {
                faces.push(make_face(a, b, p_index));
            }
        }

        let hull = compact(&pts, &faces, want_normals);
        debug!(
            input = points.len(),
            vertices = hull.vertices.len(),
            triangles = hull.triangle_count(),
            "built convex hull"
        );
        Ok(hull)
    }

    fn dedup(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        let key = |v: f64| (self.tolerance.round(v) + 0.0).to_bits();
        let mut seen = HashSet::with_capacity(points.len());
        points
            .iter()
            .filter(|p| seen.insert([key(p.x), key(p.y), key(p.z)]))
            .copied()
            .collect()
    }
}

impl HullBuilder for IncrementalHull {
    fn compute(&self, points: &[Point3<f64>], want_normals: bool) -> Option<Hull3> {
        self.try_compute(points, want_normals).ok()
    }
}

fn farthest_by<F>(points: &[Point3<f64>], measure: F) -> (usize, f64)
where
    F: Fn(&Point3<f64>) -> f64,
{
    points
        .iter()
        .map(&measure)
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, d)| if d > best.1 { (i, d) } else { best })
}

fn initial_simplex(pts: &[Point3<f64>], zero: f64) -> HullResult<[usize; 4]> {
    let (i0, _) = farthest_by(pts, |p| -p.x);
    let a = pts[i0];
    let (i1, d1) = farthest_by(pts, |p| (p - a).norm());
    if d1 <= zero {
        return Err(HullError::degenerate("all points coincide"));
    }
    let u = (pts[i1] - a) / d1;
    let (i2, d2) = farthest_by(pts, |p| {
        let d = p - a;
        (d - u * d.dot(&u)).norm()
    });
    if d2 <= zero {
        return Err(HullError::degenerate("points are collinear"));
    }
    let n = u.cross(&(pts[i2] - a)).normalize();
    let (i3, d3) = farthest_by(pts, |p| (p - a).dot(&n).abs());
    if d3 <= zero {
        return Err(HullError::degenerate("points are coplanar"));
    }
    Ok([i0, i1, i2, i3])
}

fn compact(pts: &[Point3<f64>], faces: &[Face], want_normals: bool) -> Hull3 {
    let mut remap: HashMap<usize, usize> = HashMap::new();
    let mut hull = Hull3::default();
    for face in faces.iter().filter(|f| f.alive) {
        for &v in &face.v {
            let next = remap.len();
            let index = *remap.entry(v).or_insert_with(|| {
                hull.vertices.push(pts[v]);
                next
            });
            hull.indices.push(index);
            if want_normals {
                hull.normals.push(face.normal);
            }
        }
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cube(size: f64) -> Vec<Point3<f64>> {
        (0..8)
            .map(|i| {
                Point3::new(
                    if i & 1 == 0 { 0.0 } else { size },
                    if i & 2 == 0 { 0.0 } else { size },
                    if i & 4 == 0 { 0.0 } else { size },
                )
            })
            .collect()
    }

    fn builder() -> IncrementalHull {
        IncrementalHull::default()
    }

    #[test]
    fn test_cube_hull() {
        let mut pts = cube(2.0);
        pts.push(Point3::new(1.0, 1.0, 1.0));
        pts.push(Point3::new(0.5, 1.5, 0.2));
        pts.push(Point3::new(2.0, 2.0, 2.0));
        let hull = builder().compute(&pts, true).unwrap();
        assert_eq!(hull.vertices.len(), 8);
        assert_eq!(hull.triangle_count(), 12);
        assert_eq!(hull.normals.len(), hull.indices.len());
        for p in &pts {
            assert!(hull.contains(p, 1e-9));
        }
    }

    #[test]
    fn test_normals_point_outward() {
        let hull = builder().compute(&cube(1.0), true).unwrap();
        let center = Point3::new(0.5, 0.5, 0.5);
        for (k, tri) in hull.triangles().enumerate() {
            let n = hull.normals[3 * k];
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
            assert!(n.dot(&(tri.centroid() - center)) > 0.0);
            assert_relative_eq!(tri.normal().unwrap(), n, epsilon = 1e-12);
        }
        let total_area: f64 = hull.triangles().map(|t| t.area()).sum();
        assert_relative_eq!(total_area, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sphere_points() {
        let mut pts = Vec::new();
        for i in 0..12 {
            for j in 1..6 {
                let theta = f64::from(i) * std::f64::consts::TAU / 12.0;
                let phi = f64::from(j) * std::f64::consts::PI / 6.0;
                pts.push(Point3::new(
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                ));
            }
        }
        pts.push(Point3::new(0.0, 0.0, 1.0));
        pts.push(Point3::new(0.0, 0.0, -1.0));
        let hull = builder().compute(&pts, false).unwrap();
        assert!(hull.normals.is_empty());
        assert_eq!(hull.vertices.len(), pts.len());
        // Closed triangulated sphere: F = 2V - 4.
        assert_eq!(hull.triangle_count(), 2 * hull.vertices.len() - 4);
        assert!(pts.iter().all(|p| hull.contains(p, 1e-9)));
    }

    #[test]
    fn test_failures() {
        let b = builder();
        let three = [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        assert_eq!(b.try_compute(&three, false), Err(HullError::too_few_points(4, 3)));

        let dup = [Point3::origin(); 6];
        assert_eq!(b.try_compute(&dup, false), Err(HullError::too_few_points(4, 1)));

        let mut flat: Vec<_> = cube(1.0)
            .into_iter()
            .map(|p| Point3::new(p.x, p.y, 0.0))
            .collect();
        flat.push(Point3::new(0.5, 0.2, 0.0));
        assert!(matches!(b.try_compute(&flat, false), Err(HullError::Degenerate(_))));

        let line: Vec<_> = (0..5).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect();
        assert!(matches!(b.try_compute(&line, false), Err(HullError::Degenerate(_))));
        assert!(b.compute(&line, false).is_none());
    }
}

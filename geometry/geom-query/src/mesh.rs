//! Borrowed triangle mesh for bounding and hit-testing.

use geom_bounds::{Aabb3, Oobb3};
use geom_hull::{FitConfig, fit_oobb3};
use geom_types::{GeomResult, Point3, Ray3, Triangle3, check_index};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ray_triangle::intersect_ray_triangle;

/// Nearest triangle hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshHit {
    /// Index of the face that was hit.
    pub face: usize,
    /// Ray parameter of the hit.
    pub t: f64,
    /// Hit point.
    pub point: Point3<f64>,
    /// Barycentric coordinates of the hit on the face.
    pub barycentric: [f64; 3],
}

/// A vertex list and triangle-index list, with their bounds precomputed.
///
/// The view borrows the mesh data; bounds are built once at construction.
///
/// # Example
///
/// ```
/// use geom_query::MeshView;
/// use geom_types::{Point3, Ray3, Vector3};
///
/// let vertices = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let faces = [[0, 1, 2]];
/// let mesh = MeshView::new(&vertices, &faces).unwrap();
///
/// let ray = Ray3::new(Point3::new(0.2, 0.2, 1.0), -Vector3::z());
/// let hit = mesh.raycast(&ray, 1e-12).unwrap();
/// assert_eq!(hit.face, 0);
/// assert!((hit.t - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct MeshView<'a> {
    vertices: &'a [Point3<f64>],
    faces: &'a [[u32; 3]],
    bounds: Aabb3,
    triangle_bounds: Vec<Aabb3>,
}

impl<'a> MeshView<'a> {
    /// Wrap a mesh, checking every face index against the vertex list.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::IndexOutOfRange`](geom_types::GeomError::IndexOutOfRange)
    /// for the first face that refers past the end of `vertices`.
    pub fn new(vertices: &'a [Point3<f64>], faces: &'a [[u32; 3]]) -> GeomResult<Self> {
        let mut triangle_bounds = Vec::with_capacity(faces.len());
        for face in faces {
            let mut corners = [Point3::origin(); 3];
            for (corner, &index) in corners.iter_mut().zip(face) {
                *corner = vertices[check_index("vertex", index as usize, vertices.len())?];
            }
            triangle_bounds.push(Aabb3::from_points(&corners));
        }
        let bounds = Aabb3::from_points(vertices);
        debug!(vertices = vertices.len(), faces = faces.len(), "mesh view built");
        Ok(Self {
            vertices,
            faces,
            bounds,
            triangle_bounds,
        })
    }

    /// The vertex list.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &'a [Point3<f64>] {
        self.vertices
    }

    /// The triangle-index list.
    #[inline]
    #[must_use]
    pub const fn faces(&self) -> &'a [[u32; 3]] {
        self.faces
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Bounds of all vertices. Empty for an empty vertex list.
    #[inline]
    #[must_use]
    pub const fn aabb(&self) -> &Aabb3 {
        &self.bounds
    }

    /// Bounds of each triangle, indexed like the faces.
    #[inline]
    #[must_use]
    pub fn triangle_aabbs(&self) -> &[Aabb3] {
        &self.triangle_bounds
    }

    /// The triangle for face `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::IndexOutOfRange`](geom_types::GeomError::IndexOutOfRange)
    /// if `index` is not a face.
    pub fn triangle(&self, index: usize) -> GeomResult<Triangle3> {
        let [a, b, c] = self.faces[check_index("face", index, self.faces.len())?];
        // Indices were validated in `new`.
        Ok(Triangle3::new(
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ))
    }

    /// Oriented box fitted to the vertices.
    #[must_use]
    pub fn oobb(&self, config: &FitConfig) -> Oobb3 {
        fit_oobb3(self.vertices, config)
    }

    /// Nearest face hit by `ray`, from either side.
    ///
    /// Faces whose bounding box the ray misses, or enters beyond the best hit
    /// so far, are skipped before the exact triangle test.
    #[must_use]
    pub fn raycast(&self, ray: &Ray3, zero: f64) -> Option<MeshHit> {
        if self.bounds.ray_interval(ray, zero).is_none() {
            return None;
        }
        let mut best: Option<MeshHit> = None;
        for (face, bounds) in self.triangle_bounds.iter().enumerate() {
            let Some(interval) = bounds.ray_interval(ray, zero) else {
                continue;
            };
            if best.as_ref().is_some_and(|hit| interval.a > hit.t) {
                continue;
            }
            let Ok(triangle) = self.triangle(face) else {
                continue;
            };
            if let Some(hit) = intersect_ray_triangle(ray, &triangle, zero) {
                if best.as_ref().is_none_or(|b| hit.t < b.t) {
                    best = Some(MeshHit {
                        face,
                        t: hit.t,
                        point: hit.point,
                        barycentric: hit.barycentric,
                    });
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geom_types::{GeomError, Vector3};

    /// Unit cube surface, 12 outward-wound triangles.
    fn cube() -> (Vec<Point3<f64>>, Vec<[u32; 3]>) {
        let vertices = (0..8)
            .map(|i| {
                Point3::new(
                    f64::from(i & 1),
                    f64::from((i >> 1) & 1),
                    f64::from((i >> 2) & 1),
                )
            })
            .collect();
        let faces = vec![
            [0, 2, 1],
            [1, 2, 3],
            [4, 5, 6],
            [5, 7, 6],
            [0, 1, 4],
            [1, 5, 4],
            [2, 6, 3],
            [3, 6, 7],
            [0, 4, 2],
            [2, 4, 6],
            [1, 3, 5],
            [3, 7, 5],
        ];
        (vertices, faces)
    }

    #[test]
    fn test_rejects_bad_index() {
        let vertices = [Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let faces = [[0, 1, 2]];
        let err = MeshView::new(&vertices, &faces).unwrap_err();
        assert_eq!(err, GeomError::index_out_of_range("vertex", 2, 2));
    }

    #[test]
    fn test_bounds() {
        let (vertices, faces) = cube();
        let mesh = MeshView::new(&vertices, &faces).unwrap();
        assert_eq!(mesh.triangle_count(), 12);
        assert_relative_eq!(mesh.aabb().volume(), 1.0);
        assert_eq!(mesh.triangle_aabbs().len(), 12);
        // Each face of the cube is flat along one axis.
        for bounds in mesh.triangle_aabbs() {
            let size = bounds.size();
            assert_eq!(size.iter().filter(|s| s.abs() < 1e-15).count(), 1);
        }
        assert!(mesh.triangle(12).is_err());
    }

    #[test]
    fn test_oobb_matches_cube() {
        let (vertices, faces) = cube();
        let mesh = MeshView::new(&vertices, &faces).unwrap();
        let oobb = mesh.oobb(&FitConfig::default());
        assert_relative_eq!(oobb.volume(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_raycast_finds_nearest_face() {
        let (vertices, faces) = cube();
        let mesh = MeshView::new(&vertices, &faces).unwrap();
        let ray = Ray3::new(Point3::new(0.3, 0.4, 5.0), -Vector3::z());
        let hit = mesh.raycast(&ray, 1e-12).unwrap();
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point, Point3::new(0.3, 0.4, 1.0), epsilon = 1e-12);
        assert!(hit.face == 2 || hit.face == 3);
        let tri = mesh.triangle(hit.face).unwrap();
        assert_relative_eq!(tri.from_barycentric(hit.barycentric), hit.point, epsilon = 1e-12);
    }

    #[test]
    fn test_raycast_from_inside_and_miss() {
        let (vertices, faces) = cube();
        let mesh = MeshView::new(&vertices, &faces).unwrap();
        let inside = Ray3::new(Point3::new(0.5, 0.5, 0.5), Vector3::x());
        let hit = mesh.raycast(&inside, 1e-12).unwrap();
        assert_relative_eq!(hit.t, 0.5, epsilon = 1e-12);
        assert!(hit.face == 10 || hit.face == 11);

        let away = Ray3::new(Point3::new(3.0, 0.5, 0.5), Vector3::x());
        assert!(mesh.raycast(&away, 1e-12).is_none());
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshView::new(&[], &[]).unwrap();
        assert!(mesh.aabb().is_empty());
        assert!(mesh.raycast(&Ray3::new(Point3::origin(), Vector3::x()), 1e-12).is_none());
    }
}

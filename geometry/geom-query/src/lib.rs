//! Intersection and distance queries for the geom kernel.
//!
//! This crate provides:
//!
//! - [`IntersectionResult`] / [`DistanceResult`] - Uniform query results
//! - [`clip_polygon2`] / [`clip_triangle`] / [`clip_segment`] - Halfspace clipping
//! - [`intersect_oobb2`] / [`intersect_aabb2`] - Overlap region of two 2D boxes
//! - [`intersect_line_oobb3`] and friends - Line, ray and segment against a box
//! - [`classify_lines2`] - Intersecting, parallel or coincident 2D lines
//! - [`intersect_ray_triangle`] - Möller–Trumbore ray/triangle
//! - [`distance`] - Closest points between points, lines, segments,
//!   triangles and boxes
//! - [`closest_pair`] / [`par_closest_pair`] - Sweepline closest pairs
//! - [`MeshView`] - Bounds and raycasting over a borrowed triangle mesh
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering dependencies**.
//!
//! # Conventions
//!
//! Halfspaces keep the side `n . x >= c`. A query that receives an Empty box
//! returns an [`IntersectionStatus::Invalid`] result, or a NaN distance.
//! Zero thresholds are passed explicitly where a query tests for parallel
//! directions.
//!
//! # Example
//!
//! ```
//! use geom_bounds::Oobb3;
//! use geom_query::{intersect_ray_oobb3, point_oobb3};
//! use geom_types::{Point3, Ray3, Vector3};
//!
//! let oobb = Oobb3::axis_aligned(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
//! let ray = Ray3::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());
//!
//! let hit = intersect_ray_oobb3(&ray, &oobb, 1e-12);
//! assert!(hit.intersects());
//! assert!((hit.interval.a - 4.0).abs() < 1e-12);
//!
//! let d = point_oobb3(&Point3::new(4.0, 0.0, 0.0), &oobb);
//! assert!((d.distance - 3.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

mod clip;
mod closest_pair;
pub mod distance;
mod line_box;
mod line_line;
mod mesh;
mod ray_triangle;
mod result;

pub use clip::{
    clip_polygon2, clip_polygon3, clip_segment, clip_triangle, intersect_aabb2, intersect_oobb2,
};
pub use closest_pair::{ClosestPairs, closest_pair, par_closest_pair};
pub use distance::{
    aabb_aabb3, line_line3, line_segment3, line_triangle3, point_aabb2, point_aabb3, point_line3,
    point_oobb2, point_oobb3, point_plane, point_ray3, point_segment2, point_segment3,
    point_triangle3, segment_segment3, segment_triangle3,
};
pub use line_box::{
    intersect_line_oobb3, intersect_ray_oobb2, intersect_ray_oobb3, intersect_segment_oobb3,
};
pub use line_line::{LineRelation2, classify_lines2};
pub use mesh::{MeshHit, MeshView};
pub use ray_triangle::{RayTriangleHit, intersect_ray_triangle};
pub use result::{DistanceResult, IntersectionKind, IntersectionResult, IntersectionStatus};

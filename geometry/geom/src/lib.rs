//! Geometric query kernel for collision, picking and culling.
//!
//! This umbrella crate re-exports the geom-* crates behind one dependency.
//! All crates are Layer 0 (zero rendering dependencies) and work on `f64`
//! nalgebra points and vectors.
//!
//! # Quick Start
//!
//! ```
//! use geom::prelude::*;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(3.0, 0.0, 0.0),
//!     Point3::new(0.0, 2.0, 0.0),
//!     Point3::new(3.0, 2.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(3.0, 0.0, 1.0),
//!     Point3::new(0.0, 2.0, 1.0),
//!     Point3::new(3.0, 2.0, 1.0),
//! ];
//!
//! // Fit a minimum-volume box
//! let oobb = fit_oobb3(&points, &FitConfig::default());
//! assert!((oobb.volume() - 6.0).abs() < 1e-9);
//!
//! // Hit-test it
//! let ray = Ray3::new(Point3::new(1.5, 1.0, -5.0), Vector3::z());
//! let hit = intersect_ray_oobb3(&ray, &oobb, 1e-12);
//! assert!(hit.intersects());
//!
//! // Measure against it
//! let d = point_oobb3(&Point3::new(1.5, 1.0, 4.0), &oobb);
//! assert!((d.distance - 3.0).abs() < 1e-9);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Primitives: intervals, lines, rays, segments, planes,
//!   triangles, tolerances and checked conversions
//! - [`bounds`] - AABB and OOBB in 2D and 3D, SAT overlap, slab ray tests
//! - [`hull`] - Dimension classification, convex hulls, rotating calipers,
//!   minimum-volume box fitting
//! - [`query`] - Halfspace clipping, line/box and ray/triangle intersection,
//!   distance queries, closest pairs, mesh view
//!
//! # Feature Flags
//!
//! - `serde` - Serialize and deserialize every value type

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Primitives, tolerances and checked conversions.
pub use geom_types as types;

/// Axis-aligned and oriented bounding boxes.
pub use geom_bounds as bounds;

/// Dimension classification, convex hulls and box fitting.
pub use geom_hull as hull;

/// Clipping, intersection and distance queries.
pub use geom_query as query;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for geometric queries.
///
/// # Usage
///
/// ```
/// use geom::prelude::*;
/// ```
pub mod prelude {
    // Primitives
    pub use geom_types::{
        GeomError, GeomResult, Halfspace2, Halfspace3, Interval, Line2, Line3, Plane3, Point2,
        Point3, Ray2, Ray3, Segment2, Segment3, Tolerance, Triangle2, Triangle3, Vector2, Vector3,
    };

    // Bounding volumes
    pub use geom_bounds::{Aabb2, Aabb3, Oobb2, Oobb3};

    // Hulls and fitting
    pub use geom_hull::{
        Dimension, FitConfig, FitMethod, HullBuilder, IncrementalHull, classify, convex_hull_2d,
        fit_oobb2, fit_oobb3, min_area_box,
    };

    // Queries
    pub use geom_query::{
        DistanceResult, IntersectionKind, IntersectionResult, IntersectionStatus, MeshView,
        clip_polygon2, closest_pair, intersect_oobb2, intersect_ray_oobb3,
        intersect_ray_triangle, point_oobb3, point_triangle3,
    };
}

//! Core geometric primitives for the geom kernel.
//!
//! This crate provides the value types every other geom crate builds on:
//!
//! - [`Interval`] - Scalar interval with overlap finding
//! - [`Plane3`] / [`Halfspace3`] / [`Halfspace2`] - Planes and halfspaces
//! - [`Line3`], [`Ray3`], [`Segment3`] (and 2D counterparts)
//! - [`Triangle3`] / [`Triangle2`] - Triangles with concrete vertices
//! - [`Tolerance`] - Shared numeric tolerances with presets
//! - Checked conversions such as [`point3_from_slice`]
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Other game engines
//!
//! # Conventions
//!
//! All coordinates are `f64`. Directions on lines, rays, segments and planes
//! are unit vectors. Segments use the centered form
//! `center ± extent * direction`.
//!
//! # Example
//!
//! ```
//! use geom_types::{Segment3, Plane3, Point3, Vector3};
//!
//! let seg = Segment3::from_endpoints(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 3.0));
//! let plane = Plane3::new(Vector3::z(), 0.0);
//!
//! assert!(plane.signed_distance(&seg.p0()) < 0.0);
//! assert!(plane.signed_distance(&seg.p1()) > 0.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod convert;
mod error;
mod interval;
mod line;
mod plane;
mod tolerance;
mod triangle;

pub use convert::{drop_axis, lift_point, point2_from_slice, point3_from_slice, points3_from_flat};
pub use error::{GeomError, GeomResult, check_index};
pub use interval::{Interval, IntervalOverlap};
pub use line::{Line2, Line3, Ray2, Ray3, Segment2, Segment3};
pub use plane::{Halfspace2, Halfspace3, Plane3};
pub use tolerance::Tolerance;
pub use triangle::{Triangle2, Triangle3};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

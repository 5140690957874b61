//! Bounding volumes for the geom kernel.
//!
//! This crate provides:
//!
//! - [`Aabb2`] / [`Aabb3`] - Axis-aligned boxes with an Empty (NaN) sentinel
//! - [`Oobb2`] / [`Oobb3`] - Oriented boxes with SAT overlap and slab ray tests
//! - [`clip_slabs`] - Liang–Barsky clipping of a line against a centered box
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. Renderers
//! consume [`Oobb3::to_matrix`] and [`Oobb3::vertices`] to draw debug boxes.
//!
//! # Empty boxes
//!
//! Every box type has an Empty value with NaN components. It is the identity
//! of `contain`, never collides, and contains nothing. Equality treats NaN as
//! equal to NaN so Empty boxes compare equal to each other.
//!
//! # Example
//!
//! ```
//! use geom_bounds::{Aabb3, Oobb3};
//! use geom_types::Point3;
//!
//! let aabb = Aabb3::from_points(&[Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0)]);
//! let oobb = Oobb3::from_aabb(&aabb);
//!
//! assert!(oobb.to_aabb().contains(&aabb));
//! assert!(oobb.collide(&oobb, 1e-6));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

mod aabb2;
mod aabb3;
mod oobb2;
mod oobb3;
mod slab;

pub use aabb2::Aabb2;
pub use aabb3::Aabb3;
pub use oobb2::Oobb2;
pub use oobb3::Oobb3;
pub use slab::clip_slabs;

/// Float equality where NaN equals NaN.
#[inline]
#[allow(clippy::float_cmp)]
pub(crate) fn nan_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

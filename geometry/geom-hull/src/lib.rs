//! Convex hulls and oriented box fitting.
//!
//! This crate provides:
//!
//! - [`classify`] - Dimension of a point set (point, line, plane, volume)
//! - [`convex_hull_2d`] - Monotone-chain 2D hull
//! - [`HullBuilder`] / [`IncrementalHull`] - 3D hull contract and builder
//! - [`min_area_box`] - Rotating calipers over a convex polygon
//! - [`min_volume_box`] - Per-face minimum-volume box over a 3D hull
//! - [`principal_box`] - Principal-axes box
//! - [`fit_oobb2`] / [`fit_oobb3`] - End-to-end fitting from raw points
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering dependencies**.
//!
//! # Degenerate input
//!
//! Fitting never fails loudly: point sets that enclose no area or volume, and
//! hulls that cannot be built, produce an Empty box. [`IncrementalHull::try_compute`]
//! reports the reason as a [`HullError`] for callers who want it.
//!
//! # Example
//!
//! ```
//! use geom_hull::{FitConfig, fit_oobb3};
//! use geom_types::Point3;
//!
//! let points = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(2.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(2.0, 0.0, 1.0),
//!     Point3::new(0.0, 1.0, 1.0),
//!     Point3::new(2.0, 1.0, 1.0),
//! ];
//!
//! let oobb = fit_oobb3(&points, &FitConfig::default());
//! assert!((oobb.volume() - 2.0).abs() < 1e-9);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

mod calipers;
mod config;
mod dimension;
mod error;
mod fit;
mod fit3;
mod hull2;
mod hull3;
mod pca;

pub use calipers::{min_area_box, min_area_box_of_points};
pub use config::{ClassifierKind, FitConfig, FitMethod};
pub use dimension::{Dimension, DimensionInfo, classify, classify_covariance, classify_directional};
pub use error::{HullError, HullResult};
pub use fit::{fit_oobb2, fit_oobb3, fit_oobb3_with, fit_planar};
pub use fit3::min_volume_box;
pub use hull2::convex_hull_2d;
pub use hull3::{Hull3, HullBuilder, IncrementalHull};
pub use pca::principal_box;

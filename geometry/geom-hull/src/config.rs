//! Configuration and presets for box fitting.
//!
//! # Presets
//!
//! - [`FitConfig::default()`] - Minimum-volume fit with balanced tolerances
//! - [`FitConfig::for_cad()`] - Tighter tolerances for precise CAD geometry
//! - [`FitConfig::for_scans()`] - Looser tolerances for noisy scan data
//! - [`FitConfig::fast()`] - Principal-axes fit, no hull search
//!
//! # Example
//!
//! ```
//! use geom_hull::{ClassifierKind, FitConfig, FitMethod};
//!
//! let config = FitConfig::for_scans()
//!     .with_classifier(ClassifierKind::Directional)
//!     .with_parallel(false);
//! assert_eq!(config.method, FitMethod::MinimumVolume);
//! ```

use geom_types::Tolerance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy used to fit an oriented box to a volumetric point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FitMethod {
    /// Per-face rotating calipers over the 3D hull.
    /// Exact over hull-face orientations; cost grows with hull size.
    #[default]
    MinimumVolume,

    /// Box aligned with the covariance eigenvectors.
    /// Fast approximation; can be noticeably larger than the minimum.
    Principal,
}

/// How the dimension of a point set is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassifierKind {
    /// Eigenvalues of the sample covariance.
    #[default]
    Covariance,

    /// Successive farthest points (line, then plane, then volume).
    /// Robust to a few outliers dominating the covariance.
    Directional,
}

/// Configuration for oriented box fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitConfig {
    /// Numeric tolerances for classification, hull turns and rounding.
    pub tolerance: Tolerance,

    /// Fitting strategy for rank-3 input.
    pub method: FitMethod,

    /// Dimension classifier.
    pub classifier: ClassifierKind,

    /// Whether to search hull faces in parallel (via rayon).
    pub parallel: bool,

    /// Decimal digits used to identify hull faces lying on the same plane.
    pub plane_decimals: i32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            method: FitMethod::default(),
            classifier: ClassifierKind::default(),
            parallel: false,
            plane_decimals: 6,
        }
    }
}

impl FitConfig {
    /// Tighter tolerances for CAD geometry.
    ///
    /// ```
    /// use geom_hull::FitConfig;
    ///
    /// let config = FitConfig::for_cad();
    /// assert!(config.tolerance.zero < FitConfig::default().tolerance.zero);
    /// ```
    #[must_use]
    pub fn for_cad() -> Self {
        Self {
            tolerance: Tolerance::for_cad(),
            plane_decimals: 9,
            ..Self::default()
        }
    }

    /// Looser tolerances for noisy scans; searches hull faces in parallel.
    #[must_use]
    pub fn for_scans() -> Self {
        Self {
            tolerance: Tolerance::for_scans(),
            parallel: true,
            plane_decimals: 4,
            ..Self::default()
        }
    }

    /// Principal-axes fit; skips the hull search entirely.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            method: FitMethod::Principal,
            ..Self::default()
        }
    }

    /// Set the tolerances.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the fitting method.
    #[must_use]
    pub const fn with_method(mut self, method: FitMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the dimension classifier.
    #[must_use]
    pub const fn with_classifier(mut self, classifier: ClassifierKind) -> Self {
        self.classifier = classifier;
        self
    }

    /// Enable or disable the parallel face search.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the plane identity precision.
    #[must_use]
    pub const fn with_plane_decimals(mut self, plane_decimals: i32) -> Self {
        self.plane_decimals = plane_decimals;
        self
    }
}

//! Numeric tolerances shared by the geometry crates.
//!
//! # Presets
//!
//! - [`Tolerance::default()`] - Balanced settings for general use
//! - [`Tolerance::for_cad()`] - Tighter tolerances for precise CAD geometry
//! - [`Tolerance::for_scans()`] - Looser tolerances for noisy scan data
//! - [`Tolerance::strict()`] - Exact comparisons wherever possible
//!
//! # Example
//!
//! ```
//! use geom_types::Tolerance;
//!
//! let tol = Tolerance::for_scans().with_rank(1e-4);
//! assert!(tol.zero > Tolerance::default().zero);
//! assert!((tol.rank - 1e-4).abs() < f64::EPSILON);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerances used by classification, hull and query routines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Values with magnitude at or below this are treated as zero
    /// (turn tests, slab directions, denominators).
    pub zero: f64,

    /// Two unit axes are parallel when `|dot| > 1 - parallel`.
    pub parallel: f64,

    /// Relative threshold for dimension classification: a fraction of the
    /// largest covariance eigenvalue, or of the largest extent for the
    /// directional classifier.
    pub rank: f64,

    /// Decimal digits kept when rounding coordinates to remove float noise
    /// before sorting and deduplicating hull input.
    pub round_decimals: i32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            zero: 1e-10,
            parallel: 1e-6,
            rank: 1e-10,
            round_decimals: 9,
        }
    }
}

impl Tolerance {
    /// Tighter tolerances for CAD geometry.
    #[must_use]
    pub fn for_cad() -> Self {
        Self {
            zero: 1e-12,
            parallel: 1e-9,
            rank: 1e-14,
            round_decimals: 12,
        }
    }

    /// Looser tolerances for noisy scan data.
    ///
    /// ```
    /// use geom_types::Tolerance;
    ///
    /// let tol = Tolerance::for_scans();
    /// assert!(tol.round_decimals < Tolerance::default().round_decimals);
    /// ```
    #[must_use]
    pub fn for_scans() -> Self {
        Self {
            zero: 1e-7,
            parallel: 1e-4,
            rank: 1e-6,
            round_decimals: 6,
        }
    }

    /// Exact comparisons; only for well-conditioned input.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            zero: 0.0,
            parallel: f64::EPSILON,
            rank: 0.0,
            round_decimals: 15,
        }
    }

    /// Set the zero threshold.
    #[must_use]
    pub const fn with_zero(mut self, zero: f64) -> Self {
        self.zero = zero;
        self
    }

    /// Set the parallel-axis threshold.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: f64) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the rank threshold.
    #[must_use]
    pub const fn with_rank(mut self, rank: f64) -> Self {
        self.rank = rank;
        self
    }

    /// Set the rounding precision.
    #[must_use]
    pub const fn with_round_decimals(mut self, round_decimals: i32) -> Self {
        self.round_decimals = round_decimals;
        self
    }

    /// Round `value` to [`Self::round_decimals`] decimal digits.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.round_decimals);
        (value * scale).round() / scale
    }
}

//! Error types for hull construction.

use thiserror::Error;

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

/// Errors that can occur while building a 3D convex hull.
///
/// Fitting entry points never surface these; they map a failed hull to an
/// Empty box. Callers driving [`crate::IncrementalHull`] directly can use
/// them to find out why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// Fewer distinct points than a hull of the requested dimension needs.
    #[error("not enough distinct points: need {needed}, got {got}")]
    TooFewPoints {
        /// Minimum distinct points required.
        needed: usize,
        /// Distinct points supplied.
        got: usize,
    },

    /// Every point lies on a common plane (or lower-dimensional subspace).
    #[error("points are degenerate: {0}")]
    Degenerate(String),
}

impl HullError {
    /// Create a too-few-points error.
    #[must_use]
    pub const fn too_few_points(needed: usize, got: usize) -> Self {
        Self::TooFewPoints { needed, got }
    }

    /// Create a degenerate-input error.
    #[must_use]
    pub fn degenerate(details: impl Into<String>) -> Self {
        Self::Degenerate(details.into())
    }
}

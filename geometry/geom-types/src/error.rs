//! Error types for checked geometric conversions and accessors.

use thiserror::Error;

/// Result type alias for checked geometry operations.
pub type GeomResult<T> = Result<T, GeomError>;

/// Errors raised by checked conversions and fixed-size accessors.
///
/// These signal programmer error (a slice of the wrong length, an index past
/// the end of a fixed-size tuple). Degenerate *data* never produces a
/// `GeomError`; it is reported through empty sentinels instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeomError {
    /// A coordinate slice had the wrong number of components.
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Number of components the target type needs.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },

    /// An index was outside the valid range of a fixed-size accessor.
    #[error("index {index} out of range for {what} (len {len})")]
    IndexOutOfRange {
        /// What was being indexed.
        what: &'static str,
        /// The offending index.
        index: usize,
        /// Number of valid indices.
        len: usize,
    },
}

impl GeomError {
    /// Create a dimension mismatch error.
    #[must_use]
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an index out of range error.
    #[must_use]
    pub const fn index_out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { what, index, len }
    }
}

/// Check `index < len`, returning [`GeomError::IndexOutOfRange`] otherwise.
///
/// # Errors
///
/// Returns an error when `index >= len`.
pub const fn check_index(what: &'static str, index: usize, len: usize) -> GeomResult<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(GeomError::index_out_of_range(what, index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeomError::dimension_mismatch(3, 2);
        let msg = format!("{err}");
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("got 2"));

        let err = GeomError::index_out_of_range("triangle vertex", 5, 3);
        assert!(format!("{err}").contains("triangle vertex"));
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index("axis", 2, 3), Ok(2));
        assert_eq!(
            check_index("axis", 3, 3),
            Err(GeomError::index_out_of_range("axis", 3, 3))
        );
    }
}

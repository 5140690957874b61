//! Checked conversions between coordinate slices and points.
//!
//! Converting data of the wrong dimensionality is a caller bug, reported as
//! [`GeomError::DimensionMismatch`] rather than a panic.

use nalgebra::{Point2, Point3};

use crate::error::{GeomError, GeomResult, check_index};

/// Build a 2D point from a slice of exactly two coordinates.
///
/// # Errors
///
/// Returns [`GeomError::DimensionMismatch`] unless `coords.len() == 2`.
///
/// # Example
///
/// ```
/// use geom_types::point2_from_slice;
///
/// let p = point2_from_slice(&[1.0, 2.0]).unwrap();
/// assert!((p.y - 2.0).abs() < 1e-12);
/// assert!(point2_from_slice(&[1.0, 2.0, 3.0]).is_err());
/// ```
pub fn point2_from_slice(coords: &[f64]) -> GeomResult<Point2<f64>> {
    match coords {
        [x, y] => Ok(Point2::new(*x, *y)),
        _ => Err(GeomError::dimension_mismatch(2, coords.len())),
    }
}

/// Build a 3D point from a slice of exactly three coordinates.
///
/// # Errors
///
/// Returns [`GeomError::DimensionMismatch`] unless `coords.len() == 3`.
pub fn point3_from_slice(coords: &[f64]) -> GeomResult<Point3<f64>> {
    match coords {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(GeomError::dimension_mismatch(3, coords.len())),
    }
}

/// Convert a flat `[x0, y0, z0, x1, ...]` buffer into 3D points.
///
/// # Errors
///
/// Returns [`GeomError::DimensionMismatch`] when the buffer length is not a
/// multiple of three.
pub fn points3_from_flat(buffer: &[f64]) -> GeomResult<Vec<Point3<f64>>> {
    if buffer.len() % 3 != 0 {
        return Err(GeomError::dimension_mismatch(3, buffer.len() % 3));
    }
    Ok(buffer
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect())
}

/// Lift a 2D point into 3D by inserting `value` at coordinate `axis`.
///
/// # Errors
///
/// Returns [`GeomError::IndexOutOfRange`] for `axis > 2`.
pub fn lift_point(point: &Point2<f64>, axis: usize, value: f64) -> GeomResult<Point3<f64>> {
    match check_index("lift axis", axis, 3)? {
        0 => Ok(Point3::new(value, point.x, point.y)),
        1 => Ok(Point3::new(point.x, value, point.y)),
        _ => Ok(Point3::new(point.x, point.y, value)),
    }
}

/// Drop coordinate `axis` from a 3D point.
///
/// # Errors
///
/// Returns [`GeomError::IndexOutOfRange`] for `axis > 2`.
pub fn drop_axis(point: &Point3<f64>, axis: usize) -> GeomResult<Point2<f64>> {
    match check_index("drop axis", axis, 3)? {
        0 => Ok(Point2::new(point.y, point.z)),
        1 => Ok(Point2::new(point.x, point.z)),
        _ => Ok(Point2::new(point.x, point.y)),
    }
}

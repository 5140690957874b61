//! Slab clipping of a parametric line against a centered box.
//!
//! A box centered at the origin with half-widths `extent` is the intersection
//! of one slab per axis. Each slab is two halfspaces; clipping the running
//! parameter interval against all of them (Liang–Barsky) leaves the part of
//! the line inside the box.

use geom_types::Interval;

/// Clip `interval` against the halfspace `denom * t >= numer`.
///
/// Returns `false` when the interval becomes empty.
fn clip(denom: f64, numer: f64, interval: &mut Interval) -> bool {
    if denom > 0.0 {
        if numer > denom * interval.b {
            return false;
        }
        if numer > denom * interval.a {
            interval.a = numer / denom;
        }
        true
    } else {
        if numer > denom * interval.a {
            return false;
        }
        if numer > denom * interval.b {
            interval.b = numer / denom;
        }
        true
    }
}

/// Clip the line `origin + t * direction` against a box centered at the
/// origin with half-widths `extent`, starting from parameter range `interval`.
///
/// `origin` and `direction` are expressed in box-local coordinates. A
/// direction component with magnitude at or below `zero` is treated as
/// parallel to that slab: the line is rejected unless the origin already lies
/// within the slab.
///
/// Returns the clipped parameter range, or `None` when the line misses.
///
/// # Example
///
/// ```
/// use geom_bounds::clip_slabs;
/// use geom_types::Interval;
///
/// let hit = clip_slabs(
///     &[0.0, 0.0, -5.0],
///     &[0.0, 0.0, 1.0],
///     &[1.0, 1.0, 1.0],
///     Interval::new(0.0, f64::INFINITY),
///     1e-12,
/// )
/// .unwrap();
/// assert!((hit.a - 4.0).abs() < 1e-12);
/// assert!((hit.b - 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn clip_slabs<const D: usize>(
    origin: &[f64; D],
    direction: &[f64; D],
    extent: &[f64; D],
    interval: Interval,
    zero: f64,
) -> Option<Interval> {
    let mut range = interval;
    for i in 0..D {
        let (o, d, e) = (origin[i], direction[i], extent[i]);
        if d.abs() <= zero {
            if o < -e || o > e {
                return None;
            }
            continue;
        }
        if !(clip(d, -o - e, &mut range) && clip(-d, o - e, &mut range)) {
            return None;
        }
    }
    if range.a <= range.b { Some(range) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO: f64 = 1e-12;

    #[test]
    fn test_line_through_box() {
        let hit = clip_slabs(
            &[-3.0, 0.5],
            &[1.0, 0.0],
            &[1.0, 1.0],
            Interval::unbounded(),
            ZERO,
        )
        .unwrap();
        assert!((hit.a - 2.0).abs() < 1e-12);
        assert!((hit.b - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_outside_slab_rejected() {
        let hit = clip_slabs(
            &[-3.0, 2.0],
            &[1.0, 0.0],
            &[1.0, 1.0],
            Interval::unbounded(),
            ZERO,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_ray_pointing_away() {
        let hit = clip_slabs(
            &[0.0, 0.0, 5.0],
            &[0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0],
            Interval::new(0.0, f64::INFINITY),
            ZERO,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_origin_inside() {
        let hit = clip_slabs(
            &[0.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0],
            &[1.0, 2.0, 1.0],
            Interval::new(0.0, f64::INFINITY),
            ZERO,
        )
        .unwrap();
        assert!(hit.a.abs() < 1e-12);
        assert!((hit.b - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_leaving_from_face_is_single_point() {
        let hit = clip_slabs(
            &[1.0, 0.0],
            &[1.0, 0.0],
            &[1.0, 1.0],
            Interval::new(0.0, f64::INFINITY),
            ZERO,
        )
        .unwrap();
        assert!(hit.a.abs() < 1e-12);
        assert!(hit.b.abs() < 1e-12);
    }
}

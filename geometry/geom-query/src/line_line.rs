//! Classification of two lines in the plane.

use geom_types::{Line2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How two 2D lines relate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineRelation2 {
    /// The lines cross at `point`, reached at `parameters[i]` along line `i`.
    Intersect {
        /// Line parameters of the crossing.
        parameters: [f64; 2],
        /// The crossing point.
        point: Point2<f64>,
    },
    /// Distinct parallel lines.
    Parallel,
    /// The same line.
    Coincident,
}

/// `a.x * b.y - a.y * b.x`.
#[inline]
fn dot_perp(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Classify two lines as crossing, parallel or coincident.
///
/// Directions are parallel when `|dot_perp(d0, d1)| <= zero`. Parallel lines
/// are coincident when the normalized offset between their origins is also
/// parallel to them (or the origins coincide).
///
/// # Example
///
/// ```
/// use geom_query::{LineRelation2, classify_lines2};
/// use geom_types::{Line2, Point2, Vector2};
///
/// let a = Line2::new(Point2::origin(), Vector2::x());
/// let b = Line2::new(Point2::new(2.0, -1.0), Vector2::y());
/// let LineRelation2::Intersect { point, .. } = classify_lines2(&a, &b, 1e-12) else {
///     panic!("lines cross");
/// };
/// assert!((point - Point2::new(2.0, 0.0)).norm() < 1e-12);
/// ```
#[must_use]
pub fn classify_lines2(l0: &Line2, l1: &Line2, zero: f64) -> LineRelation2 {
    let diff = l1.origin - l0.origin;
    let d0_perp_d1 = dot_perp(&l0.direction, &l1.direction);
    if d0_perp_d1.abs() > zero {
        let s0 = dot_perp(&diff, &l1.direction) / d0_perp_d1;
        let s1 = dot_perp(&diff, &l0.direction) / d0_perp_d1;
        return LineRelation2::Intersect {
            parameters: [s0, s1],
            point: l0.point_at(s0),
        };
    }

    match diff.try_normalize(0.0) {
        Some(offset) if dot_perp(&offset, &l1.direction).abs() > zero => LineRelation2::Parallel,
        _ => LineRelation2::Coincident,
    }
}

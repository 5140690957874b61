//! 2D convex hull (Andrew's monotone chain).

use geom_types::{Point2, Tolerance};

/// Twice the signed area of the triangle `(o, a, b)`; positive for a
/// counter-clockwise turn.
#[inline]
pub(crate) fn cross(o: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn push_turning(chain: &mut Vec<Point2<f64>>, p: Point2<f64>, zero: f64) {
    while chain.len() >= 2 && cross(&chain[chain.len() - 2], &chain[chain.len() - 1], &p) <= zero {
        chain.pop();
    }
    chain.push(p);
}

/// Convex hull of a 2D point set, counter-clockwise.
///
/// Coordinates are rounded to `tolerance.round_decimals` before sorting and
/// deduplicating so that float noise does not produce near-duplicate hull
/// vertices; the returned points are the original, unrounded inputs. Points
/// that do not make a strict left turn (cross product at or below
/// `tolerance.zero`) are dropped, so collinear boundary points never appear.
///
/// Fewer than three distinct points come back unchanged (deduplicated and
/// sorted); a collinear set yields its two extreme points.
///
/// # Example
///
/// ```
/// use geom_hull::convex_hull_2d;
/// use geom_types::{Point2, Tolerance};
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 0.5),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let hull = convex_hull_2d(&points, &Tolerance::default());
/// assert_eq!(hull.len(), 4);
/// ```
#[must_use]
pub fn convex_hull_2d(points: &[Point2<f64>], tolerance: &Tolerance) -> Vec<Point2<f64>> {
    // Adding 0.0 folds -0.0 into 0.0 so total_cmp sees them as equal.
    let key = |v: f64| tolerance.round(v) + 0.0;
    let mut keyed: Vec<((f64, f64), Point2<f64>)> =
        points.iter().map(|p| ((key(p.x), key(p.y)), *p)).collect();
    keyed.sort_by(|(a, _), (b, _)| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    keyed.dedup_by(|(a, _), (b, _)| a.0.total_cmp(&b.0).is_eq() && a.1.total_cmp(&b.1).is_eq());

    let sorted: Vec<Point2<f64>> = keyed.into_iter().map(|(_, p)| p).collect();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower = Vec::with_capacity(sorted.len());
    for p in &sorted {
        push_turning(&mut lower, *p, tolerance.zero);
    }
    let mut upper = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        push_turning(&mut upper, *p, tolerance.zero);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

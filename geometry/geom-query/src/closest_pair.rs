//! Closest pair of points in the plane.
//!
//! Both searches report every pair at the minimum distance, as index pairs
//! `(i, j)` with `i < j`, sorted.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};

use geom_types::Point2;
use rayon::prelude::*;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum distance of a point set and the pairs that attain it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClosestPairs {
    /// Minimum distance between two distinct indices.
    pub distance: f64,
    /// All index pairs at `distance`.
    pub pairs: Vec<(usize, usize)>,
}

/// Active-set key: y first, then index.
#[derive(Debug, Clone, Copy)]
struct YKey(f64, usize);

impl PartialEq for YKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for YKey {}

impl PartialOrd for YKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0).then(self.1.cmp(&other.1))
    }
}

#[inline]
const fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i < j { (i, j) } else { (j, i) }
}

/// Indices sorted by `(x, y)`.
fn sweep_order(points: &[Point2<f64>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| {
        points[i]
            .x
            .total_cmp(&points[j].x)
            .then(points[i].y.total_cmp(&points[j].y))
    });
    order
}

/// Closest pairs by a left-to-right sweep.
///
/// Points within the current best distance in x are kept in a set ordered by
/// y; each new point is compared only against the band of that set within the
/// best distance in y. Returns `None` for fewer than two points.
///
/// # Example
///
/// ```
/// use geom_query::closest_pair;
/// use geom_types::Point2;
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(5.0, 5.0),
///     Point2::new(5.0, 6.0),
///     Point2::new(9.0, 0.0),
/// ];
/// let result = closest_pair(&points).unwrap();
/// assert!((result.distance - 1.0).abs() < 1e-12);
/// assert_eq!(result.pairs, vec![(1, 2)]);
/// ```
#[must_use]
pub fn closest_pair(points: &[Point2<f64>]) -> Option<ClosestPairs> {
    if points.len() < 2 {
        return None;
    }
    let order = sweep_order(points);
    let mut active: BTreeSet<YKey> = BTreeSet::new();
    let mut best_sq = f64::INFINITY;
    let mut pairs = Vec::new();
    let mut tail = 0;

    for (k, &i) in order.iter().enumerate() {
        let p = points[i];
        while tail < k {
            let j = order[tail];
            let dx = p.x - points[j].x;
            if dx * dx <= best_sq {
                break;
            }
            active.remove(&YKey(points[j].y, j));
            tail += 1;
        }

        // Widened so a tie whose gap is all in y survives the rounded sqrt.
        let band = best_sq.sqrt() * (1.0 + 4.0 * f64::EPSILON);
        let lo = YKey(p.y - band, 0);
        let hi = YKey(p.y + band, usize::MAX);
        for &YKey(_, j) in active.range(lo..=hi) {
            let d2 = (p - points[j]).norm_squared();
            match d2.total_cmp(&best_sq) {
                Ordering::Less => {
                    best_sq = d2;
                    pairs.clear();
                    pairs.push(ordered(i, j));
                }
                Ordering::Equal => pairs.push(ordered(i, j)),
                Ordering::Greater => {}
            }
        }
        active.insert(YKey(p.y, i));
    }

    pairs.sort_unstable();
    let distance = best_sq.sqrt();
    debug!(points = points.len(), pairs = pairs.len(), distance, "closest pair sweep");
    Some(ClosestPairs { distance, pairs })
}

/// Running minimum and its pairs, shared between sweep tasks.
struct Shared {
    best_sq: f64,
    pairs: BTreeSet<(usize, usize)>,
}

/// Closest pairs with the sweep split across rayon tasks.
///
/// Each point scans forward in x order until the gap in x exceeds the
/// current minimum. The running minimum and the tied-pair set live behind one
/// mutex, which every compare-and-update takes; tasks re-read the minimum
/// after each update to tighten their scan. The result matches
/// [`closest_pair`] regardless of task order.
#[must_use]
pub fn par_closest_pair(points: &[Point2<f64>]) -> Option<ClosestPairs> {
    if points.len() < 2 {
        return None;
    }
    let order = sweep_order(points);

    // Neighbours in sweep order bound the minimum from above.
    let seed = order
        .par_windows(2)
        .map(|w| (points[w[0]] - points[w[1]]).norm_squared())
        .min_by(f64::total_cmp)
        .unwrap_or(f64::INFINITY);

    let shared = Mutex::new(Shared {
        best_sq: seed,
        pairs: BTreeSet::new(),
    });

    order.par_iter().enumerate().for_each(|(k, &i)| {
        let p = points[i];
        let mut bound = shared.lock().unwrap_or_else(PoisonError::into_inner).best_sq;
        for &j in &order[k + 1..] {
            let q = points[j];
            let dx = q.x - p.x;
            if dx * dx > bound {
                break;
            }
            let d2 = (p - q).norm_squared();
            if d2 > bound {
                continue;
            }
            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            match d2.total_cmp(&state.best_sq) {
                Ordering::Less => {
                    state.best_sq = d2;
                    state.pairs.clear();
                    state.pairs.insert(ordered(i, j));
                }
                Ordering::Equal => {
                    state.pairs.insert(ordered(i, j));
                }
                Ordering::Greater => {}
            }
            bound = state.best_sq;
        }
    });

    let state = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
    let distance = state.best_sq.sqrt();
    let pairs: Vec<_> = state.pairs.into_iter().collect();
    debug!(points = points.len(), pairs = pairs.len(), distance, "parallel closest pair sweep");
    Some(ClosestPairs { distance, pairs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(n: i32) -> Vec<Point2<f64>> {
        (0..n)
            .flat_map(|i| (0..n).map(move |j| Point2::new(f64::from(i), f64::from(j))))
            .collect()
    }

    /// Quadratic reference.
    fn brute_force(points: &[Point2<f64>]) -> ClosestPairs {
        let mut best = f64::INFINITY;
        let mut pairs = Vec::new();
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                let d2 = (points[i] - points[j]).norm_squared();
                match d2.total_cmp(&best) {
                    Ordering::Less => {
                        best = d2;
                        pairs = vec![(i, j)];
                    }
                    Ordering::Equal => pairs.push((i, j)),
                    Ordering::Greater => {}
                }
            }
        }
        ClosestPairs {
            distance: best.sqrt(),
            pairs,
        }
    }

    #[test]
    fn test_too_few_points() {
        assert!(closest_pair(&[]).is_none());
        assert!(par_closest_pair(&[Point2::new(1.0, 1.0)]).is_none());
    }

    #[test]
    fn test_grid_reports_all_ties() {
        let points = grid(3);
        let seq = closest_pair(&points).unwrap();
        assert_relative_eq!(seq.distance, 1.0);
        assert_eq!(seq.pairs.len(), 12);
        assert_eq!(seq, par_closest_pair(&points).unwrap());
        assert_eq!(seq, brute_force(&points));
    }

    #[test]
    fn test_duplicates_have_zero_distance() {
        let points = [
            Point2::new(1.0, 2.0),
            Point2::new(4.0, 0.0),
            Point2::new(1.0, 2.0),
        ];
        let result = closest_pair(&points).unwrap();
        assert_relative_eq!(result.distance, 0.0);
        assert_eq!(result.pairs, vec![(0, 2)]);
        assert_eq!(result, par_closest_pair(&points).unwrap());
    }

    #[test]
    fn test_vertical_line_of_points() {
        let points: Vec<_> = [0.0, 3.0, 1.0, 7.0, 5.0]
            .iter()
            .map(|&y| Point2::new(2.0, y))
            .collect();
        let result = closest_pair(&points).unwrap();
        assert_relative_eq!(result.distance, 1.0);
        assert_eq!(result.pairs, vec![(0, 2)]);
    }

    #[test]
    fn test_matches_brute_force_on_scattered_points() {
        // Deterministic scatter with a few coincident distances.
        let points: Vec<_> = (0..200)
            .map(|i| {
                let t = f64::from(i);
                Point2::new((t * 7.31).sin() * 50.0, (t * 3.17).cos() * 50.0)
            })
            .collect();
        let expected = brute_force(&points);
        let seq = closest_pair(&points).unwrap();
        let par = par_closest_pair(&points).unwrap();
        assert_eq!(seq.pairs, expected.pairs);
        assert_eq!(par.pairs, expected.pairs);
        assert_relative_eq!(seq.distance, expected.distance);
        assert_relative_eq!(par.distance, expected.distance);
    }
}

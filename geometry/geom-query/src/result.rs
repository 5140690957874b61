//! Result types shared by the intersection and distance queries.

use geom_types::Interval;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of an intersection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntersectionStatus {
    /// The query has not been run.
    #[default]
    NotComputed,
    /// The objects intersect.
    Intersect,
    /// The objects do not intersect.
    NotIntersect,
    /// An input was degenerate or Empty.
    Invalid,
}

/// Shape of the intersection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntersectionKind {
    /// No common points.
    #[default]
    Empty,
    /// A single point.
    Point,
    /// A bounded segment.
    Segment,
    /// A whole line.
    Line,
    /// A convex polygon (triangle, quadrilateral or more).
    Polygon,
}

/// Intersection set of two objects.
///
/// `interval` holds the parameter range on the line, ray or segment for
/// linear queries and is unused otherwise. `points` lists the intersection
/// set: one point, two segment endpoints, or polygon vertices in order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntersectionResult<P> {
    /// Whether the objects intersect.
    pub status: IntersectionStatus,
    /// Shape of the intersection set.
    pub kind: IntersectionKind,
    /// Parameter range for linear queries.
    pub interval: Interval,
    /// Points of the intersection set.
    pub points: Vec<P>,
}

impl<P> Default for IntersectionResult<P> {
    fn default() -> Self {
        Self {
            status: IntersectionStatus::NotComputed,
            kind: IntersectionKind::Empty,
            interval: Interval::default(),
            points: Vec::new(),
        }
    }
}

impl<P> IntersectionResult<P> {
    /// Objects known not to intersect.
    #[must_use]
    pub fn not_intersect() -> Self {
        Self {
            status: IntersectionStatus::NotIntersect,
            kind: IntersectionKind::Empty,
            interval: Interval::default(),
            points: Vec::new(),
        }
    }

    /// Query on degenerate or Empty input.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            status: IntersectionStatus::Invalid,
            kind: IntersectionKind::Empty,
            interval: Interval::default(),
            points: Vec::new(),
        }
    }

    /// Intersection at a single point with line parameter `t`.
    #[must_use]
    pub fn point(t: f64, point: P) -> Self {
        Self {
            status: IntersectionStatus::Intersect,
            kind: IntersectionKind::Point,
            interval: Interval::new(t, t),
            points: vec![point],
        }
    }

    /// Intersection along a segment spanning `interval`.
    #[must_use]
    pub fn segment(interval: Interval, p0: P, p1: P) -> Self {
        Self {
            status: IntersectionStatus::Intersect,
            kind: IntersectionKind::Segment,
            interval,
            points: vec![p0, p1],
        }
    }

    /// Intersection set with the given shape and points.
    #[must_use]
    pub fn with_points(kind: IntersectionKind, points: Vec<P>) -> Self {
        Self {
            status: IntersectionStatus::Intersect,
            kind,
            interval: Interval::default(),
            points,
        }
    }

    /// Whether the query found an intersection.
    #[inline]
    #[must_use]
    pub fn intersects(&self) -> bool {
        self.status == IntersectionStatus::Intersect
    }
}

/// Distance between two objects with their closest points.
///
/// `closest[0]` lies on the first query argument, `closest[1]` on the
/// second. `parameters` holds the solver's parameters at the closest points
/// (line parameters, segment parameters, barycentric coordinates), in the
/// order documented on each query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceResult<P> {
    /// Euclidean distance.
    pub distance: f64,
    /// Squared distance.
    pub sqr_distance: f64,
    /// Closest points on the first and second argument.
    pub closest: [P; 2],
    /// Solver parameters at the closest points.
    pub parameters: SmallVec<[f64; 3]>,
}

impl<P> DistanceResult<P> {
    /// Build a result from a squared distance. Negative round-off is clamped
    /// to zero; NaN passes through.
    #[must_use]
    pub fn new(sqr_distance: f64, closest: [P; 2], parameters: &[f64]) -> Self {
        let sqr_distance = if sqr_distance < 0.0 { 0.0 } else { sqr_distance };
        Self {
            distance: sqr_distance.sqrt(),
            sqr_distance,
            closest,
            parameters: SmallVec::from_slice(parameters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom_types::Point3;

    #[test]
    fn test_default_is_not_computed() {
        let result: IntersectionResult<Point3<f64>> = IntersectionResult::default();
        assert_eq!(result.status, IntersectionStatus::NotComputed);
        assert_eq!(result.kind, IntersectionKind::Empty);
        assert!(!result.intersects());
    }

    #[test]
    fn test_point_result() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = IntersectionResult::point(2.5, p);
        assert!(result.intersects());
        assert_eq!(result.kind, IntersectionKind::Point);
        assert_eq!(result.points, vec![p]);
        assert!((result.interval.a - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_clamps_round_off() {
        let p = Point3::<f64>::origin();
        let result = DistanceResult::new(-1e-18, [p, p], &[0.5]);
        assert!(result.sqr_distance.abs() < f64::EPSILON);
        assert!(result.distance.abs() < f64::EPSILON);
        assert_eq!(result.parameters.as_slice(), &[0.5]);
    }

    #[test]
    fn test_distance_keeps_nan() {
        let p = Point3::<f64>::origin();
        assert!(DistanceResult::new(f64::NAN, [p, p], &[]).distance.is_nan());
    }
}

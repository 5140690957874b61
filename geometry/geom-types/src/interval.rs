//! Closed scalar intervals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeomResult, check_index};

/// An ordered pair `(a, b)` of scalars.
///
/// `a <= b` is not enforced at construction; consumers that need an ordered
/// interval check it themselves (see [`Interval::is_ordered`]).
///
/// # Example
///
/// ```
/// use geom_types::{Interval, IntervalOverlap};
///
/// let a = Interval::new(0.0, 2.0);
/// let b = Interval::new(1.0, 5.0);
///
/// assert!((a.length() - 2.0).abs() < 1e-12);
/// assert_eq!(a.overlap(&b), IntervalOverlap::Segment(Interval::new(1.0, 2.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    /// Lower end.
    pub a: f64,
    /// Upper end.
    pub b: f64,
}

/// Outcome of intersecting two intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntervalOverlap {
    /// The intervals are disjoint.
    Empty,
    /// The intervals touch at a single value.
    Point(f64),
    /// The intervals share a segment of positive length.
    Segment(Interval),
}

impl Interval {
    /// Create an interval from its two ends.
    #[inline]
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// The unbounded interval `(-inf, +inf)`.
    #[inline]
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// `b - a`. Negative for unordered intervals.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.b - self.a
    }

    /// Midpoint of the interval.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Whether `a <= b`.
    #[inline]
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.a <= self.b
    }

    /// Whether `t` lies in `[a, b]`.
    #[inline]
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        self.a <= t && t <= self.b
    }

    /// Clamp `t` into `[a, b]`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        if t < self.a {
            self.a
        } else if t > self.b {
            self.b
        } else {
            t
        }
    }

    /// Checked access to the ends: index 0 is `a`, index 1 is `b`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeomError::IndexOutOfRange`] for any index above 1.
    pub fn get(&self, index: usize) -> GeomResult<f64> {
        check_index("interval end", index, 2).map(|i| if i == 0 { self.a } else { self.b })
    }

    /// Find the overlap of two ordered intervals.
    ///
    /// Touching intervals report a single [`IntervalOverlap::Point`].
    #[must_use]
    pub fn overlap(&self, other: &Self) -> IntervalOverlap {
        if self.b < other.a || self.a > other.b {
            return IntervalOverlap::Empty;
        }
        if self.b > other.a {
            if self.a < other.b {
                let lo = self.a.max(other.a);
                let hi = self.b.min(other.b);
                if lo < hi {
                    IntervalOverlap::Segment(Self::new(lo, hi))
                } else {
                    IntervalOverlap::Point(lo)
                }
            } else {
                // self.a == other.b
                IntervalOverlap::Point(self.a)
            }
        } else {
            // self.b == other.a
            IntervalOverlap::Point(self.b)
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

//! Closest-point distance queries.
//!
//! Each pair of primitives has its own solver built from projections and
//! clamped parameters. All solvers are pure functions returning a
//! [`DistanceResult`](crate::DistanceResult) whose `closest[0]` lies on the
//! first argument.
//!
//! Parameter conventions:
//!
//! | Query | `parameters` |
//! |-------|--------------|
//! | point/line, point/ray | line parameter |
//! | point/segment | `[0, 1]` from `p0` to `p1` |
//! | point/plane | signed distance |
//! | point/box, box/box | none |
//! | point/triangle | barycentric `[b0, b1, b2]` |
//! | line/line | both line parameters |
//! | line/segment | line parameter, centered segment parameter |
//! | segment/segment | both `[0, 1]` endpoint parameters |
//! | line/triangle, segment/triangle | linear parameter, then barycentric |
//!
//! Empty boxes give NaN distances.

mod box_distance;
mod linear;
mod point_linear;
mod point_triangle;
mod triangle;

pub use box_distance::{aabb_aabb3, point_aabb2, point_aabb3, point_oobb2, point_oobb3};
pub use linear::{line_line3, line_segment3, segment_segment3};
pub use point_linear::{point_line3, point_plane, point_ray3, point_segment2, point_segment3};
pub use point_triangle::point_triangle3;
pub use triangle::{line_triangle3, segment_triangle3};

/// Below this, `1 - (d0 . d1)^2` is treated as parallel directions.
pub(crate) const PARALLEL_EPSILON: f64 = 1e-8;

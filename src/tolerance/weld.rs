//! Vertex welding.
//!
//! Obstacles that share corners must resolve to the same graph node. Exact
//! welding keys points by their coordinate bits; grid welding first snaps
//! coordinates so that points closer than the grid size collapse together.
//!
//! # Example
//!
//! ```
//! use visgraph::tolerance::{snap_to_grid, PointKey};
//! use visgraph::Point2;
//!
//! let points = vec![Point2::new(0.0_f64, 0.0), Point2::new(0.001, -0.001)];
//! let snapped = snap_to_grid(&points, 0.01);
//!
//! assert_eq!(PointKey::new(snapped[0]), PointKey::new(snapped[1]));
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// Hashable identity of a point's exact coordinates.
///
/// Two points produce equal keys exactly when their coordinates compare
/// equal, so `0.0` and `-0.0` share a key. NaN coordinates never reach
/// a key because obstacles are validated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: (u64, i16, i8),
    y: (u64, i16, i8),
}

impl PointKey {
    /// Builds the key for `p`.
    #[inline]
    pub fn new<F: Float>(p: Point2<F>) -> Self {
        // Adding +0.0 turns -0.0 into +0.0 and leaves every other value alone.
        Self {
            x: (p.x + F::zero()).integer_decode(),
            y: (p.y + F::zero()).integer_decode(),
        }
    }
}

/// Rounds a single point to the nearest multiple of `grid_size`.
#[inline]
pub fn snap_point<F: Float>(p: Point2<F>, grid_size: F) -> Point2<F> {
    let x = (p.x / grid_size).round() * grid_size;
    let y = (p.y / grid_size).round() * grid_size;
    Point2::new(x, y)
}

/// Snaps points to a regular grid.
///
/// Each coordinate is rounded to the nearest multiple of `grid_size`.
pub fn snap_to_grid<F: Float>(points: &[Point2<F>], grid_size: F) -> Vec<Point2<F>> {
    points.iter().map(|&p| snap_point(p, grid_size)).collect()
}

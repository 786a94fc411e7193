//! Obstacle validation.
//!
//! The sweep assumes closed, simple rings whose edges never cross. These
//! checks reject input that breaks that assumption before any work starts.
//!
//! # Example
//!
//! ```
//! use visgraph::polygon::validate_obstacles;
//! use visgraph::{Obstacle, Point2};
//!
//! // A figure-8 crosses itself.
//! let figure8 = Obstacle::from_exterior(vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert!(validate_obstacles(&[figure8]).is_err());
//! ```

use super::core::{Obstacle, Ring};
use crate::error::{RingDefect, VisGraphError};
use crate::tolerance::segments_properly_intersect;
use num_traits::Float;

/// Checks every ring of every obstacle.
///
/// Rings are checked one at a time for point count, finiteness, closure and
/// self-crossings, then every pair of rings is checked for crossings. Zero
/// length edges and collinear corners are accepted.
///
/// Touching is allowed: rings may share vertices or run along each other,
/// but no two edges may cross at a point interior to both.
pub fn validate_obstacles<F: Float>(obstacles: &[Obstacle<F>]) -> Result<(), VisGraphError> {
    let rings: Vec<(usize, usize, &Ring<F>)> = obstacles
        .iter()
        .enumerate()
        .flat_map(|(o, obstacle)| obstacle.rings().enumerate().map(move |(r, ring)| (o, r, ring)))
        .collect();

    for &(obstacle, ring, points) in &rings {
        validate_ring(points).map_err(|defect| VisGraphError::InvalidObstacle {
            obstacle,
            ring,
            defect,
        })?;
    }

    for (i, &(obstacle, ring, a)) in rings.iter().enumerate() {
        for &(other_obstacle, other_ring, b) in &rings[i + 1..] {
            if rings_cross(a, b) {
                return Err(VisGraphError::InvalidObstacle {
                    obstacle,
                    ring,
                    defect: RingDefect::CrossesRing {
                        other_obstacle,
                        other_ring,
                    },
                });
            }
        }
    }

    Ok(())
}

/// Checks a single ring in isolation.
pub fn validate_ring<F: Float>(ring: &Ring<F>) -> Result<(), RingDefect> {
    let points = ring.points();

    if points.len() < 4 {
        return Err(RingDefect::TooFewPoints {
            count: points.len(),
        });
    }
    if !points.iter().all(|p| p.is_finite()) {
        return Err(RingDefect::NonFiniteCoordinate);
    }
    if !ring.is_closed() {
        return Err(RingDefect::NotClosed);
    }

    match find_self_intersection(ring) {
        Some((first_edge, second_edge)) => Err(RingDefect::SelfIntersecting {
            first_edge,
            second_edge,
        }),
        None => Ok(()),
    }
}

/// Returns the indices of the first pair of edges that cross, if any.
pub fn find_self_intersection<F: Float>(ring: &Ring<F>) -> Option<(usize, usize)> {
    let edges: Vec<_> = ring.segments().collect();
    let n = edges.len();

    for i in 0..n {
        // Adjacent edges share an endpoint and cannot cross properly.
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_properly_intersect(edges[i], edges[j]) {
                return Some((i, j));
            }
        }
    }

    None
}

fn rings_cross<F: Float>(a: &Ring<F>, b: &Ring<F>) -> bool {
    a.segments()
        .any(|ea| b.segments().any(|eb| segments_properly_intersect(ea, eb)))
}

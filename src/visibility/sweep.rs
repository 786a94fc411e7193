//! Rotational sweep around a single pivot vertex.

use super::angular::angular_order;
use super::status::{enters, leaves, StatusStructure, SweepRay};
use super::vertices::{VertexId, VertexTable};
use crate::polygon::Obstacle;
use crate::primitives::Segment2;
use crate::tolerance::{same_ray, segments_intersect};
use log::trace;
use num_traits::Float;

/// Returns every vertex visible from `pivot`, in sweep order.
///
/// A vertex is visible when the segment to it does not pass through the
/// material of any obstacle. Running along a boundary or touching a corner
/// does not block; ring neighbours always see each other.
pub(crate) fn visible_from<F: Float>(
    table: &VertexTable<F>,
    obstacles: &[Obstacle<F>],
    pivot: VertexId,
) -> Vec<VertexId> {
    let origin = table.point(pivot);
    let mut status = StatusStructure::seed(table, origin);
    let seeded = status.len();

    let mut visible = Vec::new();
    // The vertex swept just before this one, and whether it was visible.
    let mut previous: Option<(VertexId, bool)> = None;

    for w in angular_order(origin, table.points()).into_iter().map(VertexId) {
        let point = table.point(w);
        let ray = SweepRay::new(origin, point);

        for &e in table.incident(w) {
            let n = table.edge(e).other(w);
            if n != pivot && leaves(origin, point, table.point(n)) {
                status.remove(e);
            }
        }

        let is_visible = table.are_adjacent(pivot, w) || {
            let clear = match previous {
                Some((u, u_visible)) if same_ray(origin, table.point(u), point) => {
                    u_visible && !stretch_blocked(table, obstacles, &status, u, w)
                }
                _ => status
                    .nearest_distance(table, &ray)
                    .map_or(true, |d| d >= origin.distance(point)),
            };
            clear && !through_interior(table, obstacles, pivot, w)
        };

        for &e in table.incident(w) {
            let n = table.edge(e).other(w);
            if n != pivot && enters(origin, point, table.point(n)) {
                status.insert(table, &ray, e);
            }
        }

        if is_visible {
            visible.push(w);
        }
        previous = Some((w, is_visible));
    }

    trace!(
        "pivot {:?}: {} edges seeded, {} vertices visible",
        pivot,
        seeded,
        visible.len()
    );
    visible
}

/// Checks the stretch between two vertices on the same ray, `u` nearer.
///
/// Only edges crossing the ray can block it, and those are exactly the
/// active ones. Edges ending at `u` or `w` merely touch the stretch.
fn stretch_blocked<F: Float>(
    table: &VertexTable<F>,
    obstacles: &[Obstacle<F>],
    status: &StatusStructure,
    u: VertexId,
    w: VertexId,
) -> bool {
    let stretch = Segment2::new(table.point(u), table.point(w));
    let crossed = status.iter().any(|e| {
        let edge = table.edge(e);
        !edge.touches(u) && !edge.touches(w) && segments_intersect(table.segment(e), stretch)
    });
    crossed || through_interior(table, obstacles, u, w)
}

/// Returns `true` if the segment between two vertices touching the same
/// obstacle runs through its material.
///
/// Such a chord crosses none of the obstacle's edges, so the status test
/// cannot see it; its midpoint can. A vertex touches an obstacle as one of
/// its corners or by lying on one of its edges.
fn through_interior<F: Float>(
    table: &VertexTable<F>,
    obstacles: &[Obstacle<F>],
    a: VertexId,
    b: VertexId,
) -> bool {
    let midpoint = table.point(a).midpoint(table.point(b));
    table
        .shared_obstacles(a, b)
        .any(|o| obstacles[o].contains_strictly(midpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    fn obstacle(corners: &[(f64, f64)]) -> Obstacle<f64> {
        Obstacle::from_exterior(corners.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn visible_points(obstacles: &[Obstacle<f64>], pivot: (f64, f64)) -> Vec<(f64, f64)> {
        let table = VertexTable::build(obstacles);
        let id = VertexId(
            table
                .points()
                .iter()
                .position(|&p| p == Point2::new(pivot.0, pivot.1))
                .unwrap(),
        );
        visible_from(&table, obstacles, id)
            .into_iter()
            .map(|v| {
                let p = table.point(v);
                (p.x, p.y)
            })
            .collect()
    }

    #[test]
    fn test_triangle_sees_its_corners() {
        let obstacles = vec![obstacle(&[(1.0, 1.0), (4.0, 4.0), (6.0, 0.0)])];
        assert_eq!(visible_points(&obstacles, (1.0, 1.0)), vec![(6.0, 0.0), (4.0, 4.0)]);
        assert_eq!(visible_points(&obstacles, (4.0, 4.0)), vec![(6.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_square_diagonal_is_hidden() {
        let obstacles = vec![obstacle(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])];
        assert_eq!(visible_points(&obstacles, (0.0, 0.0)), vec![(0.0, 2.0), (2.0, 0.0)]);
    }

    #[test]
    fn test_edge_blocks_far_vertices() {
        let obstacles = vec![
            obstacle(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
            obstacle(&[(3.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 1.0)]),
        ];
        // (3, 1) and (4, 1) sit behind the first square's right edge; the
        // bottom row stays visible along the shared axis.
        assert_eq!(
            visible_points(&obstacles, (0.0, 0.0)),
            vec![(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 0.0)]
        );
    }

    #[test]
    fn test_collinear_vertices_inherit_blocking() {
        let obstacles = vec![
            obstacle(&[(0.0, 0.0), (-1.0, 1.0), (-1.0, -1.0)]),
            obstacle(&[(2.0, 0.0), (3.0, -1.0), (4.0, 0.0), (3.0, 1.0)]),
            obstacle(&[(6.0, 0.0), (7.0, -1.0), (8.0, 0.0), (7.0, 1.0)]),
        ];
        // Past (2, 0) the axis runs through the first diamond, so nothing
        // further along it can be seen.
        assert_eq!(
            visible_points(&obstacles, (0.0, 0.0)),
            vec![(3.0, -1.0), (-1.0, -1.0), (-1.0, 1.0), (3.0, 1.0), (2.0, 0.0)]
        );
    }
}

//! Vertex extraction.
//!
//! Collects the distinct corners of all obstacle rings, the boundary edges
//! between them, and which edges and obstacles touch each corner. An
//! obstacle touches a corner when the corner is one of its own or lies on
//! one of its edges, as where two obstacles abut.

use crate::polygon::Obstacle;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{point_on_segment, PointKey};
use log::warn;
use num_traits::Float;
use std::collections::HashMap;

/// Stable index of a graph node.
///
/// Ids are assigned in order of first appearance while walking the
/// obstacles, their rings, and the ring points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Position of the node in [`VisibilityGraph::nodes`](super::VisibilityGraph::nodes).
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a boundary edge in a [`VertexTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct EdgeId(pub(crate) usize);

/// An edge between two consecutive corners of an obstacle ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoundaryEdge {
    pub start: VertexId,
    pub end: VertexId,
}

impl BoundaryEdge {
    #[inline]
    pub fn touches(&self, v: VertexId) -> bool {
        self.start == v || self.end == v
    }

    /// The endpoint that is not `v`.
    #[inline]
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.start == v {
            self.end
        } else {
            self.start
        }
    }
}

/// Deduplicated obstacle corners and the boundary edges between them.
///
/// Every distinct coordinate becomes exactly one vertex, however many rings
/// or obstacles reference it. Incident-edge lookups return edges from every
/// ring that touches the vertex.
#[derive(Debug, Clone)]
pub(crate) struct VertexTable<F> {
    points: Vec<Point2<F>>,
    edges: Vec<BoundaryEdge>,
    incident: Vec<Vec<EdgeId>>,
    obstacles_of: Vec<Vec<usize>>,
}

impl<F: Float> VertexTable<F> {
    /// Extracts vertices and boundary edges from `obstacles`.
    ///
    /// Zero-length edges (a ring repeating a point) are skipped.
    pub fn build(obstacles: &[Obstacle<F>]) -> Self {
        let mut table = Self {
            points: Vec::new(),
            edges: Vec::new(),
            incident: Vec::new(),
            obstacles_of: Vec::new(),
        };
        let mut lookup: HashMap<PointKey, VertexId> = HashMap::new();
        let mut edge_obstacle = Vec::new();

        for (obstacle_index, obstacle) in obstacles.iter().enumerate() {
            for (ring_index, ring) in obstacle.rings().enumerate() {
                let ids: Vec<VertexId> = ring
                    .points()
                    .iter()
                    .map(|&p| table.intern(&mut lookup, p, obstacle_index))
                    .collect();

                for (i, pair) in ids.windows(2).enumerate() {
                    let (start, end) = (pair[0], pair[1]);
                    if start == end {
                        warn!(
                            "skipping zero-length edge {} of obstacle {}, ring {}",
                            i, obstacle_index, ring_index
                        );
                        continue;
                    }
                    let id = EdgeId(table.edges.len());
                    table.edges.push(BoundaryEdge { start, end });
                    table.incident[start.0].push(id);
                    table.incident[end.0].push(id);
                    edge_obstacle.push(obstacle_index);
                }
            }
        }

        table.record_edge_contacts(&edge_obstacle);
        table
    }

    /// Marks the owner of an edge as touching every vertex lying in the
    /// middle of that edge.
    fn record_edge_contacts(&mut self, edge_obstacle: &[usize]) {
        for v in 0..self.points.len() {
            let id = VertexId(v);
            for (e, &obstacle) in edge_obstacle.iter().enumerate() {
                let edge = EdgeId(e);
                if self.edges[e].touches(id) || self.obstacles_of[v].contains(&obstacle) {
                    continue;
                }
                if point_on_segment(self.points[v], self.segment(edge)) {
                    self.obstacles_of[v].push(obstacle);
                }
            }
        }
    }

    fn intern(
        &mut self,
        lookup: &mut HashMap<PointKey, VertexId>,
        p: Point2<F>,
        obstacle: usize,
    ) -> VertexId {
        let id = *lookup.entry(PointKey::new(p)).or_insert_with(|| {
            let id = VertexId(self.points.len());
            self.points.push(p);
            self.incident.push(Vec::new());
            self.obstacles_of.push(Vec::new());
            id
        });

        let owners = &mut self.obstacles_of[id.0];
        if owners.last() != Some(&obstacle) {
            owners.push(obstacle);
        }
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    #[inline]
    pub fn point(&self, v: VertexId) -> Point2<F> {
        self.points[v.0]
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edge(&self, e: EdgeId) -> &BoundaryEdge {
        &self.edges[e.0]
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    #[inline]
    pub fn segment(&self, e: EdgeId) -> Segment2<F> {
        let edge = &self.edges[e.0];
        Segment2::new(self.point(edge.start), self.point(edge.end))
    }

    /// Boundary edges with `v` as an endpoint.
    #[inline]
    pub fn incident(&self, v: VertexId) -> &[EdgeId] {
        &self.incident[v.0]
    }

    /// Returns `true` if a boundary edge joins `a` and `b`.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.incident(a)
            .iter()
            .any(|&e| self.edge(e).other(a) == b)
    }

    /// Obstacles touching both `a` and `b`, as a corner or on an edge.
    pub fn shared_obstacles(&self, a: VertexId, b: VertexId) -> impl Iterator<Item = usize> + '_ {
        let of_b = &self.obstacles_of[b.0];
        self.obstacles_of[a.0]
            .iter()
            .copied()
            .filter(move |o| of_b.contains(o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Ring;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ]
    }

    #[test]
    fn test_empty() {
        let table: VertexTable<f64> = VertexTable::build(&[]);
        assert_eq!(table.len(), 0);
        assert_eq!(table.edge_count(), 0);
    }

    #[test]
    fn test_triangle() {
        let obstacles = vec![Obstacle::from_exterior(vec![
            Point2::new(1.0, 1.0),
            Point2::new(4.0, 4.0),
            Point2::new(6.0, 0.0),
        ])];
        let table = VertexTable::build(&obstacles);

        assert_eq!(table.len(), 3);
        assert_eq!(table.edge_count(), 3);
        for i in 0..3 {
            assert_eq!(table.incident(VertexId(i)).len(), 2);
        }
        assert!(table.are_adjacent(VertexId(0), VertexId(1)));
        assert!(table.are_adjacent(VertexId(2), VertexId(0)));
    }

    #[test]
    fn test_shared_vertex_across_obstacles() {
        let obstacles = vec![
            Obstacle::from_exterior(square(0.0, 0.0, 1.0, 1.0)),
            Obstacle::from_exterior(square(1.0, 1.0, 2.0, 2.0)),
        ];
        let table = VertexTable::build(&obstacles);

        assert_eq!(table.len(), 7);
        assert_eq!(table.edge_count(), 8);

        let corner = VertexId(2);
        assert_eq!(table.point(corner), Point2::new(1.0, 1.0));
        assert_eq!(table.incident(corner).len(), 4);
        assert_eq!(table.shared_obstacles(corner, corner).count(), 2);
        assert_eq!(table.shared_obstacles(VertexId(0), corner).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_negative_zero_dedup() {
        let obstacles = vec![Obstacle::from_exterior(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ])];
        let mut ring = obstacles[0].exterior.points().to_vec();
        ring[3] = Point2::new(-0.0, 0.0);
        let table = VertexTable::build(&[Obstacle::new(Ring::new(ring), Vec::new())]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_zero_length_edge_skipped() {
        let obstacles = vec![Obstacle::from_exterior(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ])];
        let table = VertexTable::build(&obstacles);
        assert_eq!(table.len(), 3);
        assert_eq!(table.edge_count(), 3);
    }

    #[test]
    fn test_corner_on_neighbour_edge_touches_it() {
        // The second box sits on top of the first, its lower corners on the
        // first box's upper edge.
        let obstacles = vec![
            Obstacle::from_exterior(square(0.0, 0.0, 4.0, 2.0)),
            Obstacle::from_exterior(square(1.0, 2.0, 3.0, 4.0)),
        ];
        let table = VertexTable::build(&obstacles);
        assert_eq!(table.len(), 8);

        let (lower_left, on_edge) = (VertexId(0), VertexId(4));
        assert_eq!(table.point(on_edge), Point2::new(1.0, 2.0));
        assert_eq!(table.shared_obstacles(lower_left, on_edge).collect::<Vec<_>>(), vec![0]);
        assert_eq!(table.shared_obstacles(on_edge, VertexId(5)).count(), 2);
        // Top corners of the second box touch only their own obstacle.
        assert_eq!(table.shared_obstacles(lower_left, VertexId(6)).count(), 0);
    }

    #[test]
    fn test_hole_edges_are_extracted() {
        let obstacles = vec![Obstacle::new(
            Ring::closed(square(0.0, 0.0, 10.0, 10.0)),
            vec![Ring::closed(square(4.0, 4.0, 6.0, 6.0))],
        )];
        let table = VertexTable::build(&obstacles);
        assert_eq!(table.len(), 8);
        assert_eq!(table.edge_count(), 8);
        assert!(!table.are_adjacent(VertexId(0), VertexId(4)));
        assert_eq!(table.shared_obstacles(VertexId(0), VertexId(4)).count(), 1);
    }
}

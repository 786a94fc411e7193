//! The visibility graph and its builder.

use super::vertices::VertexId;
use crate::error::VisGraphError;
use crate::primitives::Point2;
use crate::tolerance::PointKey;
use num_traits::Float;
use std::collections::{BTreeSet, HashMap};

/// Accumulates visible pairs into a [`VisibilityGraph`].
///
/// Pairs are unordered: `(a, b)` and `(b, a)` are the same edge, and
/// self-loops are dropped.
#[derive(Debug, Clone)]
pub(crate) struct GraphBuilder<F> {
    nodes: Vec<Point2<F>>,
    edges: BTreeSet<(VertexId, VertexId)>,
}

impl<F: Float> GraphBuilder<F> {
    pub fn new(nodes: Vec<Point2<F>>) -> Self {
        Self {
            nodes,
            edges: BTreeSet::new(),
        }
    }

    /// Records that `a` and `b` see each other.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) {
        if a != b {
            self.edges.insert((a.min(b), a.max(b)));
        }
    }

    /// Records every pair `(pivot, w)` for `w` in `visible`.
    pub fn add_visible(&mut self, pivot: VertexId, visible: &[VertexId]) {
        for &w in visible {
            self.add_edge(pivot, w);
        }
    }

    pub fn build(self) -> VisibilityGraph<F> {
        let mut adjacency = vec![Vec::new(); self.nodes.len()];
        for &(a, b) in &self.edges {
            adjacency[a.0].push(b);
            adjacency[b.0].push(a);
        }

        let lookup = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &p)| (PointKey::new(p), VertexId(i)))
            .collect();

        VisibilityGraph {
            nodes: self.nodes,
            edges: self.edges.into_iter().collect(),
            adjacency,
            lookup,
        }
    }
}

/// Obstacle vertices and the pairs of them that can see each other.
///
/// Nodes are the distinct obstacle corners, indexed by [`VertexId`]. Edges
/// are unordered pairs stored once each, smaller id first, sorted. A graph
/// is an immutable value: computing it again from the same obstacles gives
/// an equal graph.
#[derive(Debug, Clone)]
pub struct VisibilityGraph<F> {
    nodes: Vec<Point2<F>>,
    edges: Vec<(VertexId, VertexId)>,
    adjacency: Vec<Vec<VertexId>>,
    lookup: HashMap<PointKey, VertexId>,
}

impl<F: Float> VisibilityGraph<F> {
    /// All nodes, indexed by [`VertexId`].
    #[inline]
    pub fn nodes(&self) -> &[Point2<F>] {
        &self.nodes
    }

    /// Coordinates of the node `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this graph. Use [`node_count`]
    /// to check ids that may come from elsewhere.
    ///
    /// [`node_count`]: VisibilityGraph::node_count
    #[inline]
    pub fn point(&self, id: VertexId) -> Point2<F> {
        self.nodes[id.0]
    }

    /// Iterates over the edges as coordinate pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<F>, Point2<F>)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (self.nodes[a.0], self.nodes[b.0]))
    }

    /// The edges as id pairs, smaller id first.
    #[inline]
    pub fn edge_ids(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Looks up the node at exactly `point`.
    pub fn node_id(&self, point: Point2<F>) -> Option<VertexId> {
        self.lookup.get(&PointKey::new(point)).copied()
    }

    /// Ids of the nodes visible from `id`, in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this graph.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.adjacency[id.0]
    }

    /// Coordinates of the nodes visible from `point`.
    ///
    /// # Errors
    ///
    /// Returns [`VisGraphError::NotFound`] if `point` is not a node.
    ///
    /// # Example
    ///
    /// ```
    /// use visgraph::{compute_visibility_graph, Obstacle, Point2};
    ///
    /// let triangle = Obstacle::from_exterior(vec![
    ///     Point2::new(1.0_f64, 1.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(6.0, 0.0),
    /// ]);
    /// let graph = compute_visibility_graph(&[triangle]).unwrap();
    ///
    /// let neighbors = graph.edges_of(Point2::new(1.0, 1.0)).unwrap();
    /// assert_eq!(neighbors, vec![Point2::new(4.0, 4.0), Point2::new(6.0, 0.0)]);
    /// assert!(graph.edges_of(Point2::new(0.0, 0.0)).is_err());
    /// ```
    pub fn edges_of(&self, point: Point2<F>) -> Result<Vec<Point2<F>>, VisGraphError> {
        let id = self.node_id(point).ok_or_else(|| VisGraphError::NotFound {
            x: point.x.to_f64().unwrap_or(f64::NAN),
            y: point.y.to_f64().unwrap_or(f64::NAN),
        })?;
        Ok(self.neighbors(id).iter().map(|&n| self.point(n)).collect())
    }

    /// Returns `true` if the nodes at `a` and `b` see each other.
    pub fn contains_edge(&self, a: Point2<F>, b: Point2<F>) -> bool {
        match (self.node_id(a), self.node_id(b)) {
            (Some(a), Some(b)) => self.neighbors(a).binary_search(&b).is_ok(),
            _ => false,
        }
    }

    /// Euclidean length of the edge between `a` and `b`, if there is one.
    pub fn edge_length(&self, a: VertexId, b: VertexId) -> Option<F> {
        if a.0 >= self.nodes.len() || self.neighbors(a).binary_search(&b).is_err() {
            return None;
        }
        Some(self.point(a).distance(self.point(b)))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<F: Float> PartialEq for VisibilityGraph<F> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> GraphBuilder<f64> {
        GraphBuilder::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 4.0),
        ])
    }

    #[test]
    fn test_pairs_are_unordered_and_deduplicated() {
        let mut b = builder();
        b.add_edge(VertexId(1), VertexId(0));
        b.add_edge(VertexId(0), VertexId(1));
        b.add_visible(VertexId(2), &[VertexId(0), VertexId(2)]);
        let graph = b.build();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edge_ids(),
            &[(VertexId(0), VertexId(1)), (VertexId(0), VertexId(2))]
        );
        assert_eq!(graph.neighbors(VertexId(0)), &[VertexId(1), VertexId(2)]);
        assert!(graph.neighbors(VertexId(1)).contains(&VertexId(0)));
    }

    #[test]
    fn test_lookup_and_lengths() {
        let mut b = builder();
        b.add_edge(VertexId(0), VertexId(2));
        let graph = b.build();

        assert_eq!(graph.node_id(Point2::new(3.0, 4.0)), Some(VertexId(2)));
        assert_eq!(graph.node_id(Point2::new(9.0, 9.0)), None);
        assert!(graph.contains_edge(Point2::new(3.0, 4.0), Point2::new(0.0, 0.0)));
        assert!(!graph.contains_edge(Point2::new(3.0, 0.0), Point2::new(0.0, 0.0)));
        assert_eq!(graph.edge_length(VertexId(2), VertexId(0)), Some(5.0));
        assert_eq!(graph.edge_length(VertexId(1), VertexId(0)), None);
        assert_eq!(graph.edge_length(VertexId(7), VertexId(0)), None);
    }

    #[test]
    fn test_edges_of_unknown_point() {
        let graph = builder().build();
        assert_eq!(
            graph.edges_of(Point2::new(1.5, -2.0)),
            Err(VisGraphError::NotFound { x: 1.5, y: -2.0 })
        );
        assert_eq!(graph.edges_of(Point2::new(3.0, 0.0)), Ok(Vec::new()));
    }

    #[test]
    #[should_panic]
    fn test_foreign_id_panics() {
        let graph = builder().build();
        let _ = graph.neighbors(VertexId(3));
    }

    #[test]
    fn test_empty_graph() {
        let graph: VisibilityGraph<f64> = GraphBuilder::new(Vec::new()).build();
        assert!(graph.is_empty());
        assert_eq!(graph.edges().count(), 0);
    }
}

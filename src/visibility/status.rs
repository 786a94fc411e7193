//! The sweep's active-edge set.
//!
//! Holds the boundary edges crossed by the current sweep ray, nearest to the
//! pivot first. Entries are not keyed by a stored distance: they are compared
//! by where they cross the ray being processed. Boundary edges of valid input
//! never cross, so two edges that are both active keep their relative order
//! for the whole time they are active and the sequence never needs re-sorting.
//! Edges at equal distance coexist; nothing is overwritten.

use super::vertices::{EdgeId, VertexTable};
use crate::primitives::{Point2, Ray2};
use crate::tolerance::{orientation, Orientation};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A ray from the pivot through the vertex currently being swept.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SweepRay<F> {
    pub pivot: Point2<F>,
    pub through: Point2<F>,
}

impl<F: Float> SweepRay<F> {
    #[inline]
    pub fn new(pivot: Point2<F>, through: Point2<F>) -> Self {
        Self { pivot, through }
    }

    /// The starting ray, along the positive x-axis.
    #[inline]
    pub fn initial(pivot: Point2<F>) -> Self {
        let ray = Ray2::along_x_axis(pivot);
        Self::new(pivot, ray.point_at(F::one()))
    }

    /// Distance from the pivot to where `edge` meets this ray.
    ///
    /// Exact for edges ending at `through`. Edges that never meet the ray
    /// are infinitely far.
    pub fn distance_to(&self, table: &VertexTable<F>, edge: EdgeId) -> F {
        let segment = table.segment(edge);
        if segment.has_endpoint(self.through) {
            return self.pivot.distance(self.through);
        }
        Ray2::from_points(self.pivot, self.through)
            .distance_to_line(&segment)
            .unwrap_or_else(F::infinity)
    }

    /// Orders two edges by where they meet this ray.
    ///
    /// Edges meeting at a shared endpoint on the ray are ordered by the
    /// angle they make with the direction back to the pivot: the edge
    /// hugging that direction is nearer on the rays that follow.
    pub fn compare(&self, table: &VertexTable<F>, a: EdgeId, b: EdgeId) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        let da = self.distance_to(table, a);
        let db = self.distance_to(table, b);
        match da.partial_cmp(&db) {
            Some(Ordering::Equal) | None => {}
            Some(ordering) => return ordering,
        }

        let (ea, eb) = (table.edge(a), table.edge(b));
        let shared = [ea.start, ea.end].into_iter().find(|&v| eb.touches(v));
        if let Some(s) = shared {
            let corner = table.point(s);
            let back = self.pivot - corner;
            let angle_a = back.angle_between(table.point(ea.other(s)) - corner);
            let angle_b = back.angle_between(table.point(eb.other(s)) - corner);
            match angle_a.partial_cmp(&angle_b) {
                Some(Ordering::Equal) | None => {}
                Some(ordering) => return ordering,
            }
        }

        a.cmp(&b)
    }
}

const NIL: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node {
    edge: EdgeId,
    priority: u64,
    left: usize,
    right: usize,
    parent: usize,
}

/// Distance-ordered set of active boundary edges.
///
/// A treap over an arena of nodes. Inserting descends by comparing against
/// the current ray; removing finds the node through `slots` and rotates it
/// down to a leaf, so it never depends on distances. Both take expected
/// `O(log k)` for `k` active edges.
#[derive(Debug, Clone)]
pub(crate) struct StatusStructure {
    nodes: Vec<Node>,
    free: Vec<usize>,
    slots: HashMap<EdgeId, usize>,
    root: usize,
}

impl Default for StatusStructure {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            slots: HashMap::new(),
            root: NIL,
        }
    }
}

impl StatusStructure {
    /// Builds the status for the sweep's starting ray from `pivot`.
    ///
    /// An edge is active on the starting ray if it crosses the positive
    /// x-axis through the pivot, or has one endpoint on that axis and the
    /// other below it (the side the clockwise sweep turns into). Edges
    /// touching the pivot or lying along the axis are left out.
    pub fn seed<F: Float>(table: &VertexTable<F>, pivot: Point2<F>) -> Self {
        let axis = Ray2::along_x_axis(pivot);
        let below = |p: Point2<F>| p.y < pivot.y;
        let on_axis = |p: Point2<F>| p.y == pivot.y && p.x > pivot.x;

        let crossing = table.edge_ids().filter(|&e| {
            let segment = table.segment(e);
            let (a, b) = (segment.start, segment.end);
            if segment.has_endpoint(pivot) || (a.y == pivot.y && b.y == pivot.y) {
                return false;
            }
            if a.y == pivot.y {
                return on_axis(a) && below(b);
            }
            if b.y == pivot.y {
                return on_axis(b) && below(a);
            }
            below(a) != below(b) && axis.crossing_distance(&segment).is_some()
        });

        let ray = SweepRay::initial(pivot);
        let mut status = Self::default();
        for e in crossing {
            status.insert(table, &ray, e);
        }
        status
    }

    /// Adds `edge` at its place along `ray`. Adding an edge twice is a no-op.
    pub fn insert<F: Float>(&mut self, table: &VertexTable<F>, ray: &SweepRay<F>, edge: EdgeId) {
        if self.slots.contains_key(&edge) {
            return;
        }

        let mut parent = NIL;
        let mut left = false;
        let mut current = self.root;
        while current != NIL {
            parent = current;
            left = ray.compare(table, edge, self.nodes[current].edge) == Ordering::Less;
            current = if left {
                self.nodes[current].left
            } else {
                self.nodes[current].right
            };
        }

        let node = self.allocate(edge, parent);
        if parent == NIL {
            self.root = node;
        } else if left {
            self.nodes[parent].left = node;
        } else {
            self.nodes[parent].right = node;
        }

        while self.nodes[node].parent != NIL
            && self.nodes[self.nodes[node].parent].priority < self.nodes[node].priority
        {
            self.rotate_up(node);
        }
    }

    /// Removes `edge` if present.
    pub fn remove(&mut self, edge: EdgeId) {
        let Some(node) = self.slots.remove(&edge) else {
            return;
        };

        loop {
            let child = match (self.nodes[node].left, self.nodes[node].right) {
                (NIL, NIL) => break,
                (NIL, child) | (child, NIL) => child,
                (l, r) if self.nodes[l].priority > self.nodes[r].priority => l,
                (_, r) => r,
            };
            self.rotate_up(child);
        }

        let parent = self.nodes[node].parent;
        self.replace_child(parent, node, NIL);
        self.free.push(node);
    }

    /// The nearest active edge.
    pub fn nearest(&self) -> Option<EdgeId> {
        let mut current = self.root;
        if current == NIL {
            return None;
        }
        while self.nodes[current].left != NIL {
            current = self.nodes[current].left;
        }
        Some(self.nodes[current].edge)
    }

    /// Distance along `ray` to the nearest active edge.
    pub fn nearest_distance<F: Float>(&self, table: &VertexTable<F>, ray: &SweepRay<F>) -> Option<F> {
        self.nearest().map(|e| ray.distance_to(table, e))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Active edges, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        let mut iter = InOrder {
            status: self,
            stack: Vec::new(),
        };
        iter.descend(self.root);
        iter
    }

    fn allocate(&mut self, edge: EdgeId, parent: usize) -> usize {
        let node = Node {
            edge,
            priority: priority(edge),
            left: NIL,
            right: NIL,
            parent,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.slots.insert(edge, slot);
        slot
    }

    /// Rotates `node` above its parent, keeping the in-order sequence.
    fn rotate_up(&mut self, node: usize) {
        let parent = self.nodes[node].parent;
        let grandparent = self.nodes[parent].parent;

        if self.nodes[parent].left == node {
            let moved = self.nodes[node].right;
            self.nodes[parent].left = moved;
            self.nodes[node].right = parent;
            if moved != NIL {
                self.nodes[moved].parent = parent;
            }
        } else {
            let moved = self.nodes[node].left;
            self.nodes[parent].right = moved;
            self.nodes[node].left = parent;
            if moved != NIL {
                self.nodes[moved].parent = parent;
            }
        }

        self.nodes[parent].parent = node;
        self.nodes[node].parent = grandparent;
        self.replace_child(grandparent, parent, node);
    }

    fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
        if parent == NIL {
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            self.nodes[parent].right = new;
        }
    }

    #[cfg(test)]
    fn height(&self) -> usize {
        fn walk(status: &StatusStructure, node: usize) -> usize {
            if node == NIL {
                return 0;
            }
            let n = &status.nodes[node];
            1 + walk(status, n.left).max(walk(status, n.right))
        }
        walk(self, self.root)
    }
}

/// In-order walk over a [`StatusStructure`].
struct InOrder<'a> {
    status: &'a StatusStructure,
    stack: Vec<usize>,
}

impl InOrder<'_> {
    fn descend(&mut self, mut node: usize) {
        while node != NIL {
            self.stack.push(node);
            node = self.status.nodes[node].left;
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        let node = self.stack.pop()?;
        self.descend(self.status.nodes[node].right);
        Some(self.status.nodes[node].edge)
    }
}

/// Heap priority of an edge's node; a splitmix64 hash of its id, so the
/// tree shape is deterministic.
fn priority(edge: EdgeId) -> u64 {
    let mut z = (edge.0 as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Returns `true` if the edge `(w, n)` lies clockwise of the ray from
/// `pivot` through `w`, i.e. the sweep is about to start crossing it.
#[inline]
pub(crate) fn enters<F: Float>(pivot: Point2<F>, w: Point2<F>, n: Point2<F>) -> bool {
    orientation(pivot, w, n) == Orientation::Clockwise
}

/// Returns `true` if the edge `(w, n)` lies counter-clockwise of the ray
/// from `pivot` through `w`, i.e. the sweep has finished crossing it.
#[inline]
pub(crate) fn leaves<F: Float>(pivot: Point2<F>, w: Point2<F>, n: Point2<F>) -> bool {
    orientation(pivot, w, n) == Orientation::CounterClockwise
}

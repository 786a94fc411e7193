//! Obstacle rings and point containment.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::point_on_segment;
use num_traits::Float;

/// A closed polygon boundary.
///
/// The point sequence repeats its first point at the end, so a triangle is
/// stored as four points. Consecutive points form the ring's edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a ring from an already closed point sequence.
    ///
    /// No checks are made here; `validate_obstacles` reports rings that are
    /// open, too short or self-crossing.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Creates a ring from corner points, appending the closing point if the
    /// sequence does not already end where it starts.
    ///
    /// # Example
    ///
    /// ```
    /// use visgraph::{Point2, Ring};
    ///
    /// let ring = Ring::closed(vec![
    ///     Point2::new(1.0_f64, 1.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(6.0, 0.0),
    /// ]);
    /// assert_eq!(ring.points().len(), 4);
    /// assert_eq!(ring.corners().len(), 3);
    /// ```
    pub fn closed(mut points: Vec<Point2<F>>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// All points, closing point included.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Corner points, without the closing repeat.
    #[inline]
    pub fn corners(&self) -> &[Point2<F>] {
        match self.points.split_last() {
            Some((_, rest)) if self.is_closed() => rest,
            _ => &self.points,
        }
    }

    /// Returns `true` if the last point repeats the first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!((self.points.first(), self.points.last()), (Some(a), Some(b)) if a == b)
    }

    /// Iterates over the ring's edges in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.points.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns `true` if `point` lies exactly on one of the ring's edges.
    pub fn on_boundary(&self, point: Point2<F>) -> bool {
        self.segments().any(|s| point_on_segment(point, s))
    }

    /// Tests if `point` is inside the area enclosed by the ring.
    ///
    /// Points on the boundary may return either true or false.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        ring_contains(self.corners(), point)
    }
}

/// A polygonal obstacle: an exterior ring and zero or more holes.
///
/// The obstacle's material is the area inside the exterior and outside
/// every hole.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle<F> {
    /// Outer boundary.
    pub exterior: Ring<F>,
    /// Interior rings.
    pub holes: Vec<Ring<F>>,
}

impl<F: Float> Obstacle<F> {
    /// Creates an obstacle with holes.
    #[inline]
    pub fn new(exterior: Ring<F>, holes: Vec<Ring<F>>) -> Self {
        Self { exterior, holes }
    }

    /// Creates an obstacle without holes from its corner points.
    ///
    /// The ring is closed automatically.
    pub fn from_exterior(corners: Vec<Point2<F>>) -> Self {
        Self {
            exterior: Ring::closed(corners),
            holes: Vec::new(),
        }
    }

    /// Iterates over all rings, exterior first.
    ///
    /// The position in this sequence is the ring index used by errors and
    /// boundary edges.
    pub fn rings(&self) -> impl Iterator<Item = &Ring<F>> + '_ {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Returns `true` if `point` lies in the obstacle's material and not on
    /// any of its boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use visgraph::{Obstacle, Point2};
    ///
    /// let square = Obstacle::from_exterior(vec![
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(2.0, 2.0),
    ///     Point2::new(0.0, 2.0),
    /// ]);
    /// assert!(square.contains_strictly(Point2::new(1.0, 1.0)));
    /// assert!(!square.contains_strictly(Point2::new(2.0, 1.0)));
    /// assert!(!square.contains_strictly(Point2::new(3.0, 1.0)));
    /// ```
    pub fn contains_strictly(&self, point: Point2<F>) -> bool {
        if self.rings().any(|r| r.on_boundary(point)) {
            return false;
        }
        self.exterior.contains(point) && !self.holes.iter().any(|h| h.contains(point))
    }
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// `vertices` lists the corners without a closing repeat. Points on the
/// boundary may return either true or false.
pub fn ring_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

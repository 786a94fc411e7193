//! Geometric predicates.
//!
//! `orient2d` takes an explicit tolerance. The remaining predicates are the
//! exact forms (tolerance zero) that the sweep relies on; the visibility
//! graph never invents an epsilon of its own.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// `eps` is compared against the absolute value of the cross product
/// (twice the signed area of the triangle).
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Exact orientation of `c` relative to the directed line `a -> b`.
///
/// # Example
///
/// ```
/// use visgraph::tolerance::{orientation, Orientation};
/// use visgraph::Point2;
///
/// let a = Point2::new(1.0_f64, 1.0);
/// let b = Point2::new(4.0, 4.0);
/// assert_eq!(orientation(a, b, Point2::new(6.0, 0.0)), Orientation::Clockwise);
/// assert_eq!(orientation(a, b, Point2::new(0.0, 3.0)), Orientation::CounterClockwise);
/// assert_eq!(orientation(a, b, Point2::new(7.0, 7.0)), Orientation::Collinear);
/// ```
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    orient2d(a, b, c, F::zero())
}

/// Returns `true` if `a` and `b` lie on the same ray leaving `origin`.
///
/// Both points must differ from `origin`; collinear points on opposite
/// sides of it are not on the same ray.
#[inline]
pub fn same_ray<F: Float>(origin: Point2<F>, a: Point2<F>, b: Point2<F>) -> bool {
    orientation(origin, a, b) == Orientation::Collinear && (a - origin).dot(b - origin) > F::zero()
}

/// Returns `true` if `p` lies exactly on the closed segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>) -> bool {
    orientation(segment.start, segment.end, p) == Orientation::Collinear
        && within_bounds(p, segment)
}

/// Returns `true` if the closed segments share at least one point.
///
/// Touching endpoints and collinear overlaps count as intersections.
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    let o1 = orientation(s1.start, s1.end, s2.start);
    let o2 = orientation(s1.start, s1.end, s2.end);
    let o3 = orientation(s2.start, s2.end, s1.start);
    let o4 = orientation(s2.start, s2.end, s1.end);

    if o1 != o2
        && o3 != o4
        && o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear
    {
        return true;
    }

    (o1 == Orientation::Collinear && within_bounds(s2.start, s1))
        || (o2 == Orientation::Collinear && within_bounds(s2.end, s1))
        || (o3 == Orientation::Collinear && within_bounds(s1.start, s2))
        || (o4 == Orientation::Collinear && within_bounds(s1.end, s2))
}

/// Returns `true` if the segments cross at a single point interior to both.
///
/// Shared endpoints, T-junctions and collinear overlaps are not proper
/// intersections.
pub fn segments_properly_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    let o1 = orientation(s1.start, s1.end, s2.start);
    let o2 = orientation(s1.start, s1.end, s2.end);
    let o3 = orientation(s2.start, s2.end, s1.start);
    let o4 = orientation(s2.start, s2.end, s1.end);

    o1 != Orientation::Collinear
        && o2 != Orientation::Collinear
        && o3 != Orientation::Collinear
        && o4 != Orientation::Collinear
        && o1 != o2
        && o3 != o4
}

// Bounding-box test; only meaningful once `p` is known to be collinear.
#[inline]
fn within_bounds<F: Float>(p: Point2<F>, segment: Segment2<F>) -> bool {
    let (a, b) = (segment.start, segment.end);
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

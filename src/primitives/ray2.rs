//! 2D ray type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A 2D ray defined by an origin point and direction.
///
/// A ray extends infinitely from its origin in the direction specified.
/// The direction is stored as-is (not necessarily normalized).
///
/// # Example
///
/// ```
/// use visgraph::primitives::{Point2, Ray2, Segment2};
///
/// let ray: Ray2<f64> = Ray2::along_x_axis(Point2::origin());
/// let segment = Segment2::new(Point2::new(5.0, -1.0), Point2::new(5.0, 1.0));
///
/// assert_eq!(ray.crossing_distance(&segment), Some(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2<F> {
    /// Origin point of the ray
    pub origin: Point2<F>,
    /// Direction vector (not necessarily normalized)
    pub direction: Vec2<F>,
}

impl<F: Float> Ray2<F> {
    /// Creates a new ray from origin and direction.
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// Creates a ray from an origin point through a target point.
    #[inline]
    pub fn from_points(origin: Point2<F>, through: Point2<F>) -> Self {
        Self {
            origin,
            direction: through - origin,
        }
    }

    /// Creates the ray leaving `origin` along the positive x-axis.
    ///
    /// This is the zero direction of every angular measurement in the crate.
    #[inline]
    pub fn along_x_axis(origin: Point2<F>) -> Self {
        Self {
            origin,
            direction: Vec2::new(F::one(), F::zero()),
        }
    }

    /// Returns the point along the ray at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Intersects this ray with a line segment.
    ///
    /// Returns `Some((point, t_ray, t_segment))` if they intersect, where:
    /// - `point` is the intersection point
    /// - `t_ray` is the parameter along the ray (>= 0)
    /// - `t_segment` is the parameter along the segment (in [0, 1])
    ///
    /// Returns `None` if there is no intersection or the ray is exactly
    /// parallel to the segment.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Option<(Point2<F>, F, F)> {
        let seg_dir = segment.direction();
        let cross = self.direction.cross(seg_dir);

        if cross == F::zero() {
            return None;
        }

        let delta = segment.start - self.origin;
        let t_ray = delta.cross(seg_dir) / cross;
        let t_seg = delta.cross(self.direction) / cross;

        if t_ray >= F::zero() && t_seg >= F::zero() && t_seg <= F::one() {
            Some((self.point_at(t_ray), t_ray, t_seg))
        } else {
            None
        }
    }

    /// Distance from the origin to the point where the ray crosses `segment`.
    ///
    /// Returns `None` when the ray misses the segment, runs parallel to it,
    /// or only meets it at the origin itself. Endpoints of the segment lying
    /// on the ray count as crossings.
    pub fn crossing_distance(&self, segment: &Segment2<F>) -> Option<F> {
        let (_, t_ray, _) = self.intersect_segment(segment)?;
        if t_ray > F::zero() {
            Some(t_ray * self.direction.magnitude())
        } else {
            None
        }
    }

    /// Distance from the origin to where the segment's supporting line meets
    /// the ray, ignoring the segment's extent.
    ///
    /// Returns `None` if the line is parallel to the ray or meets it behind
    /// the origin.
    pub fn distance_to_line(&self, segment: &Segment2<F>) -> Option<F> {
        let seg_dir = segment.direction();
        let cross = self.direction.cross(seg_dir);

        if cross == F::zero() {
            return None;
        }

        let t_ray = (segment.start - self.origin).cross(seg_dir) / cross;
        if t_ray >= F::zero() {
            Some(t_ray * self.direction.magnitude())
        } else {
            None
        }
    }
}

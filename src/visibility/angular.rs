//! Angular ordering of vertices around a pivot.
//!
//! The sweep turns clockwise, starting at the positive x-axis. A vertex's
//! sort key is its clockwise angle from that axis in `(0, 2π]`: points just
//! below the axis come first, points on the axis itself come last.

use crate::primitives::Point2;
use crate::tolerance::{orientation, same_ray, Orientation};
use num_traits::Float;
use std::cmp::Ordering;

/// Clockwise angle of `point` around `pivot`, measured from the positive
/// x-axis, in `(0, 2π]`.
///
/// `point` must differ from `pivot`.
#[inline]
pub fn sweep_angle<F: Float>(pivot: Point2<F>, point: Point2<F>) -> F {
    let two_pi = F::from(std::f64::consts::TAU).unwrap();
    let ccw = pivot.angle_from_axis(point);
    if ccw == F::zero() {
        two_pi
    } else {
        two_pi - ccw
    }
}

/// Sorts `vertices` around `pivot` in sweep order.
///
/// Vertices equal to `pivot` are dropped. Vertices on the same ray from the
/// pivot are ordered nearest first; exact duplicates keep their input order.
///
/// # Example
///
/// ```
/// use visgraph::visibility::angular_sort;
/// use visgraph::Point2;
///
/// let pivot = Point2::new(1.0_f64, 1.0);
/// let sorted = angular_sort(
///     pivot,
///     &[Point2::new(7.0, 1.0), Point2::new(4.0, 4.0), Point2::new(6.0, 1.0)],
/// );
///
/// assert_eq!(
///     sorted,
///     vec![Point2::new(4.0, 4.0), Point2::new(6.0, 1.0), Point2::new(7.0, 1.0)]
/// );
/// ```
pub fn angular_sort<F: Float>(pivot: Point2<F>, vertices: &[Point2<F>]) -> Vec<Point2<F>> {
    angular_order(pivot, vertices)
        .into_iter()
        .map(|i| vertices[i])
        .collect()
}

/// Indices of `points` in sweep order around `pivot`, pivot excluded.
pub(crate) fn angular_order<F: Float>(pivot: Point2<F>, points: &[Point2<F>]) -> Vec<usize> {
    let mut keyed: Vec<(usize, F)> = points
        .iter()
        .enumerate()
        .filter(|&(_, &p)| p != pivot)
        .map(|(i, &p)| (i, sweep_angle(pivot, p)))
        .collect();

    keyed.sort_by(|&(ia, angle_a), &(ib, angle_b)| {
        compare_around(pivot, (points[ia], angle_a), (points[ib], angle_b)).then(ia.cmp(&ib))
    });

    keyed.into_iter().map(|(i, _)| i).collect()
}

fn compare_around<F: Float>(pivot: Point2<F>, a: (Point2<F>, F), b: (Point2<F>, F)) -> Ordering {
    let (pa, angle_a) = a;
    let (pb, angle_b) = b;

    if same_ray(pivot, pa, pb) {
        return pivot
            .distance_squared(pa)
            .partial_cmp(&pivot.distance_squared(pb))
            .unwrap_or(Ordering::Equal);
    }

    match angle_a.partial_cmp(&angle_b) {
        Some(Ordering::Equal) | None => {}
        Some(ordering) => return ordering,
    }

    // Angles rounded together; the orientation still separates the rays.
    match orientation(pivot, pa, pb) {
        Orientation::Clockwise => Ordering::Less,
        Orientation::CounterClockwise => Ordering::Greater,
        Orientation::Collinear => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_sweep_angle_range() {
        let pivot = p(0.0, 0.0);
        assert_eq!(sweep_angle(pivot, p(3.0, 0.0)), 2.0 * PI);
        assert_relative_eq!(sweep_angle(pivot, p(0.0, -1.0)), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(sweep_angle(pivot, p(-1.0, 0.0)), PI, epsilon = 1e-12);
        assert_relative_eq!(sweep_angle(pivot, p(0.0, 1.0)), 1.5 * PI, epsilon = 1e-12);

        let just_below = sweep_angle(pivot, p(1.0, -1e-9));
        assert!(just_below > 0.0 && just_below < 1e-8);
    }

    #[test]
    fn test_pivot_is_excluded() {
        let sorted = angular_sort(p(1.0, 1.0), &[p(1.0, 1.0), p(4.0, 4.0), p(6.0, 0.0)]);
        assert_eq!(sorted, vec![p(6.0, 0.0), p(4.0, 4.0)]);
    }

    #[test]
    fn test_triangle_pivots() {
        let vertices = [p(1.0, 1.0), p(4.0, 4.0), p(6.0, 0.0)];
        assert_eq!(angular_sort(p(4.0, 4.0), &vertices), vec![p(6.0, 0.0), p(1.0, 1.0)]);
        assert_eq!(angular_sort(p(6.0, 0.0), &vertices), vec![p(1.0, 1.0), p(4.0, 4.0)]);
    }

    #[test]
    fn test_collinear_tie_break() {
        let pivot = p(1.0, 1.0);
        let expected = vec![p(4.0, 4.0), p(6.0, 1.0), p(7.0, 1.0)];

        assert_eq!(angular_sort(pivot, &[p(4.0, 4.0), p(6.0, 1.0), p(7.0, 1.0)]), expected);
        assert_eq!(angular_sort(pivot, &[p(7.0, 1.0), p(6.0, 1.0), p(4.0, 4.0)]), expected);
    }

    #[test]
    fn test_collinear_off_axis() {
        let pivot = p(0.0, 0.0);
        let sorted = angular_sort(pivot, &[p(3.0, -3.0), p(-1.0, 0.0), p(1.0, -1.0), p(2.0, -2.0)]);
        assert_eq!(sorted, vec![p(1.0, -1.0), p(2.0, -2.0), p(3.0, -3.0), p(-1.0, 0.0)]);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let pivot = p(0.5, 0.25);
        let mut vertices = vec![
            p(3.0, 1.0),
            p(-2.0, 4.0),
            p(1.0, -3.0),
            p(2.5, 0.25),
            p(-1.0, -1.0),
            p(0.5, 2.0),
            p(4.5, 0.25),
        ];
        let forward = angular_sort(pivot, &vertices);
        vertices.reverse();
        let backward = angular_sort(pivot, &vertices);
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 7);
    }

    #[test]
    fn test_order_indices_skip_pivot() {
        let points = [p(0.0, 0.0), p(1.0, 1.0), p(1.0, -1.0)];
        assert_eq!(angular_order(points[0], &points), vec![2, 1]);
    }
}

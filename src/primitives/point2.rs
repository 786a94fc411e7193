//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). Equality is exact
/// coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    ///
    /// Non-negative, symmetric, and zero only for equal points.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Angle of `point` as seen from `self`, measured counter-clockwise from
    /// the positive x-axis, in `[0, 2π)`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `point == self`; the angle is undefined
    /// there and callers must never ask for it.
    ///
    /// # Example
    ///
    /// ```
    /// use visgraph::Point2;
    ///
    /// let pivot = Point2::new(1.0_f64, 1.0);
    /// let angle = pivot.angle_from_axis(Point2::new(1.0, 0.0));
    /// assert!((angle - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn angle_from_axis(self, point: Self) -> F {
        debug_assert!(
            self != point,
            "angle_from_axis called with coincident pivot and point"
        );

        let two_pi = F::from(std::f64::consts::TAU).unwrap();
        let angle = (point.y - self.y).atan2(point.x - self.x);
        let angle = if angle < F::zero() {
            angle + two_pi
        } else {
            angle
        };

        // -0.0 and tiny negative angles that round up to 2π both belong at 0.
        if angle >= two_pi || angle == F::zero() {
            F::zero()
        } else {
            angle
        }
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

//! Error types for visibility graph construction.

use thiserror::Error;

/// Errors that can occur while building or querying a visibility graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisGraphError {
    /// An obstacle ring failed validation before the sweep started.
    ///
    /// `ring` is 0 for the exterior and `1 + hole index` for holes.
    #[error("obstacle {obstacle}, ring {ring}: {defect}")]
    InvalidObstacle {
        /// Index of the obstacle in the input slice.
        obstacle: usize,
        /// Index of the ring within the obstacle.
        ring: usize,
        /// What is wrong with the ring.
        defect: RingDefect,
    },

    /// The queried point is not a node of the graph.
    #[error("point ({x}, {y}) is not a graph node")]
    NotFound {
        /// X coordinate of the queried point.
        x: f64,
        /// Y coordinate of the queried point.
        y: f64,
    },
}

/// The ways an obstacle ring can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingDefect {
    /// A closed ring needs at least three corners plus the closing point.
    #[error("ring has {count} points, at least 4 are required")]
    TooFewPoints {
        /// Number of points in the ring, closing point included.
        count: usize,
    },

    /// The last point does not repeat the first.
    #[error("ring is not closed")]
    NotClosed,

    /// A coordinate is NaN or infinite.
    #[error("ring has a non-finite coordinate")]
    NonFiniteCoordinate,

    /// Two edges of the ring cross each other.
    #[error("edges {first_edge} and {second_edge} cross")]
    SelfIntersecting {
        /// Index of the first crossing edge.
        first_edge: usize,
        /// Index of the second crossing edge.
        second_edge: usize,
    },

    /// An edge of the ring crosses an edge of another ring.
    #[error("ring crosses obstacle {other_obstacle}, ring {other_ring}")]
    CrossesRing {
        /// Obstacle owning the other ring.
        other_obstacle: usize,
        /// Index of the other ring within its obstacle.
        other_ring: usize,
    },
}

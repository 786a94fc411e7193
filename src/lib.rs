//! visgraph - Visibility graphs over polygonal obstacles
//!
//! Given polygons with optional holes, computes the graph whose nodes are the
//! polygon corners and whose edges join every pair of corners that can see
//! each other. Shortest paths around the obstacles run along this graph.
//!
//! Geometry is generic over `f32` and `f64`.

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;
pub mod visibility;

pub use error::{RingDefect, VisGraphError};
pub use polygon::{Obstacle, Ring};
pub use primitives::{Point2, Ray2, Segment2, Vec2};
pub use tolerance::{orient2d, orientation, Orientation};
pub use visibility::{
    angular_sort, compute_visibility_graph, compute_visibility_graph_with, VertexId,
    VisibilityGraph, VisibilityOptions,
};

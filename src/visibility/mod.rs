//! Visibility graphs over polygonal obstacles.
//!
//! For every obstacle vertex, the other vertices are visited in clockwise
//! order while a ray sweeps around it. The boundary edges the ray currently
//! crosses are kept nearest first, so each vertex's visibility is decided
//! against a single edge instead of every edge in the scene.
//!
//! # Example
//!
//! ```
//! use visgraph::visibility::{compute_visibility_graph_with, VisibilityOptions};
//! use visgraph::{Obstacle, Point2};
//!
//! let triangle = Obstacle::from_exterior(vec![
//!     Point2::new(1.0_f64, 1.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(6.0, 0.0),
//! ]);
//!
//! let options = VisibilityOptions::default().parallel(false);
//! let graph = compute_visibility_graph_with(&[triangle], &options).unwrap();
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! ```

mod angular;
mod compute;
mod graph;
mod status;
mod sweep;
mod vertices;

pub use angular::{angular_sort, sweep_angle};
pub use compute::{compute_visibility_graph, compute_visibility_graph_with, VisibilityOptions};
pub use graph::VisibilityGraph;
pub use vertices::VertexId;

//! Visibility graph construction entry points.

use super::graph::{GraphBuilder, VisibilityGraph};
use super::sweep::visible_from;
use super::vertices::{VertexId, VertexTable};
use crate::error::VisGraphError;
use crate::polygon::{validate_obstacles, Obstacle, Ring};
use crate::tolerance::snap_to_grid;
use log::debug;
use num_traits::Float;
use rayon::prelude::*;
use std::borrow::Cow;

/// Options for visibility graph construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityOptions<F> {
    /// Run the per-vertex sweeps on the rayon thread pool.
    ///
    /// The result is identical either way.
    pub parallel: bool,
    /// Reject malformed obstacles before sweeping.
    ///
    /// With validation off, malformed input gives an unspecified graph.
    pub validate: bool,
    /// Snap every coordinate to a grid of this size before merging
    /// vertices. `None` merges only exactly equal coordinates. Values that
    /// are not positive are ignored.
    pub weld_tolerance: Option<F>,
}

impl<F: Float> Default for VisibilityOptions<F> {
    fn default() -> Self {
        Self {
            parallel: true,
            validate: true,
            weld_tolerance: None,
        }
    }
}

impl<F: Float> VisibilityOptions<F> {
    /// Options that run single-threaded.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Sets whether sweeps run in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets whether obstacles are validated first.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Sets the grid size used to weld nearby vertices.
    pub fn weld_tolerance(mut self, tolerance: F) -> Self {
        self.weld_tolerance = Some(tolerance);
        self
    }
}

/// Computes the visibility graph of `obstacles` with default options.
///
/// # Example
///
/// ```
/// use visgraph::{compute_visibility_graph, Obstacle, Point2};
///
/// let square = Obstacle::from_exterior(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let triangle = Obstacle::from_exterior(vec![
///     Point2::new(5.0, 0.5),
///     Point2::new(5.0, 1.5),
///     Point2::new(8.0, 1.8),
/// ]);
///
/// let graph = compute_visibility_graph(&[square, triangle]).unwrap();
/// assert_eq!(graph.node_count(), 7);
/// assert_eq!(graph.edge_count(), 12);
/// ```
pub fn compute_visibility_graph<F: Float + Send + Sync>(
    obstacles: &[Obstacle<F>],
) -> Result<VisibilityGraph<F>, VisGraphError> {
    compute_visibility_graph_with(obstacles, &VisibilityOptions::default())
}

/// Computes the visibility graph of `obstacles`.
///
/// Nodes are the distinct ring corners; an edge joins two nodes when the
/// segment between them does not pass through any obstacle's material.
/// The computation is pure: the same input always gives an equal graph.
///
/// # Errors
///
/// With validation on, returns [`VisGraphError::InvalidObstacle`] for the
/// first ring that is too short, open, non-finite, self-crossing, or
/// crossing another ring.
pub fn compute_visibility_graph_with<F: Float + Send + Sync>(
    obstacles: &[Obstacle<F>],
    options: &VisibilityOptions<F>,
) -> Result<VisibilityGraph<F>, VisGraphError> {
    let snapped: Cow<'_, [Obstacle<F>]> = match options.weld_tolerance {
        Some(grid) if grid > F::zero() => Cow::Owned(snap_obstacles(obstacles, grid)),
        _ => Cow::Borrowed(obstacles),
    };
    let obstacles: &[Obstacle<F>] = &snapped;

    if options.validate {
        validate_obstacles(obstacles)?;
    }

    let table = VertexTable::build(obstacles);
    debug!(
        "computing visibility graph: {} obstacles, {} vertices, {} boundary edges",
        obstacles.len(),
        table.len(),
        table.edge_count()
    );

    let pivots: Vec<VertexId> = (0..table.len()).map(VertexId).collect();
    let sweeps: Vec<Vec<VertexId>> = if options.parallel {
        pivots
            .par_iter()
            .map(|&v| visible_from(&table, obstacles, v))
            .collect()
    } else {
        pivots
            .iter()
            .map(|&v| visible_from(&table, obstacles, v))
            .collect()
    };

    let mut builder = GraphBuilder::new(table.points().to_vec());
    for (&pivot, visible) in pivots.iter().zip(&sweeps) {
        builder.add_visible(pivot, visible);
    }
    let graph = builder.build();

    debug!(
        "visibility graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn snap_obstacles<F: Float>(obstacles: &[Obstacle<F>], grid: F) -> Vec<Obstacle<F>> {
    let snap = |ring: &Ring<F>| Ring::new(snap_to_grid(ring.points(), grid));
    obstacles
        .iter()
        .map(|o| Obstacle::new(snap(&o.exterior), o.holes.iter().map(&snap).collect()))
        .collect()
}

//! Geometric predicates and vertex welding.
//!
//! Tolerances are always explicit. No hidden epsilons are used.

mod predicates;
mod weld;

pub use predicates::{
    orient2d, orientation, point_on_segment, same_ray, segments_intersect,
    segments_properly_intersect, Orientation,
};
pub use weld::{snap_point, snap_to_grid, PointKey};

//! Polygonal obstacles.
//!
//! An [`Obstacle`] is an exterior [`Ring`] plus zero or more hole rings.
//! This module provides the ring types, point containment, and the
//! validation run before a visibility graph is computed.
//!
//! # Example
//!
//! ```
//! use visgraph::polygon::{Obstacle, Ring};
//! use visgraph::Point2;
//!
//! let room = Obstacle::new(
//!     Ring::closed(vec![
//!         Point2::new(0.0_f64, 0.0),
//!         Point2::new(10.0, 0.0),
//!         Point2::new(10.0, 10.0),
//!         Point2::new(0.0, 10.0),
//!     ]),
//!     vec![Ring::closed(vec![
//!         Point2::new(4.0, 4.0),
//!         Point2::new(6.0, 4.0),
//!         Point2::new(6.0, 6.0),
//!         Point2::new(4.0, 6.0),
//!     ])],
//! );
//!
//! assert!(room.contains_strictly(Point2::new(1.0, 1.0)));
//! assert!(!room.contains_strictly(Point2::new(5.0, 5.0)));
//! ```

mod core;
mod validate;

pub use core::{ring_contains, Obstacle, Ring};
pub use validate::{find_self_intersection, validate_obstacles, validate_ring};

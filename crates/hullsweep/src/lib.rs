//! Planar hulls and axis-aligned segment sweeps.
//!
//! Three independent algorithms over a caller-owned point set:
//! - Graham's scan (upper/lower monotone chains, clockwise output).
//! - Jarvis' march (gift wrapping from the lowest point, counterclockwise output).
//! - A left-to-right sweep reporting horizontal/vertical segment crossings.
//!
//! Each builder is a pure function over a read-only slice. The interactive
//! state that feeds them (current point set, active algorithm, snapping of
//! paired sweep input) lives in [`scene::Scene`].
//!
//! API Policy
//! - Silent entry points (`graham_hull`, `jarvis_hull`, `sweep_intersections`)
//!   return empty results on invalid input.
//! - `try_*` entry points validate first and return [`GeometryError`].

pub mod api;
pub mod error;
pub mod geom2;
pub mod hull;
pub mod rand;
pub mod scene;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomResult, GeometryError};
pub use geom2::{Axis, Point, Segment};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomResult, GeometryError};
    pub use crate::geom2::{
        axis_angle, cmp_x_then_y, cmp_y_then_x, is_left_turn, orientation, turning_angle, Axis,
        Point, Segment,
    };
    pub use crate::hull::{compute_hull, graham_hull, jarvis_hull, HullAlgo};
    pub use crate::scene::{Mode, Scene, SceneOutput, SnapCfg};
    pub use crate::sweep::{sweep_intersections, sweep_intersections_with, SweepCfg, SweepOutput};
}

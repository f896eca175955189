//! 2D primitives and numerical predicates shared by all builders.
//!
//! Purpose
//! - `Point` is a plain `Vector2<f64>` with exact coordinate equality.
//! - `Segment` is an ordered endpoint pair; the sweep restricts it to
//!   horizontal/vertical via [`Segment::axis`].
//! - Predicates keep the exact-float semantics of the builders: strict `> 0`
//!   for left turns, no epsilon on equality.
//!
//! Code cross-refs: `hull::{graham, jarvis}`, `sweep`, `scene`

mod predicates;
mod types;

pub use predicates::{axis_angle, is_left_turn, orientation, turning_angle};
pub use types::{cmp_x_then_y, cmp_y_then_x, Axis, Point, Segment};

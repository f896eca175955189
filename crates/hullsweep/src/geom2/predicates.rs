//! Orientation and angle predicates.
//!
//! Sign convention: `orientation(a, b, c) > 0` is a left (counterclockwise)
//! turn in a y-up frame. Collinear triples give exactly 0.

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::types::Point;

/// Cross product `(b − a) × (c − a)`: twice the signed area of triangle abc.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Strict left turn; collinear triples are not turns.
#[inline]
pub fn is_left_turn(a: Point, b: Point, c: Point) -> bool {
    orientation(a, b, c) > 0.0
}

/// Exterior turning angle at `b` when walking `a → b → c`, in `[0, π]`.
///
/// Computed as `π − acos(⟨b−a, b−c⟩ / (|b−a|·|b−c|))`: 0 for going straight
/// on, π for doubling back. `None` if either vector has zero length.
pub fn turning_angle(a: Point, b: Point, c: Point) -> Option<f64> {
    let ab = b - a;
    let cb = b - c;
    let module = ab.norm() * cb.norm();
    if !(module.is_finite()) || module <= 0.0 {
        return None;
    }
    // clamp: rounding on collinear input can leave |cos| slightly above 1
    let cos = (ab.dot(&cb) / module).clamp(-1.0, 1.0);
    Some(PI - cos.acos())
}

/// Unsigned angle in `[0, π]` between the +x axis and `to − from`.
#[inline]
pub fn axis_angle(from: Point, to: Point) -> Option<f64> {
    turning_angle(from - Vector2::x(), from, to)
}

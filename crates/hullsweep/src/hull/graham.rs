use tracing::debug;

use super::MIN_HULL_POINTS;
use crate::error::{ensure_at_least, ensure_finite, GeomResult};
use crate::geom2::{cmp_x_then_y, is_left_turn, Point};

/// Graham's scan (monotone chain variant), clockwise from the leftmost point.
///
/// Returns an empty vector for fewer than 3 points. Collinear points on the
/// boundary are kept (only strict left turns are eliminated). For input that
/// is entirely collinear both chains run along the same line, so interior
/// points appear twice: `[(0,0), (1,0), (2,0)]` gives
/// `[(0,0), (1,0), (2,0), (1,0)]`. No area check is made.
pub fn graham_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < MIN_HULL_POINTS {
        return Vec::new();
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(cmp_x_then_y);

    let mut upper = chain(sorted.iter().copied());
    let lower = chain(sorted.iter().rev().copied());
    // lower shares both endpoints with upper
    if lower.len() >= 2 {
        upper.extend_from_slice(&lower[1..lower.len() - 1]);
    }
    debug!(n = points.len(), hull = upper.len(), "graham_hull");
    upper
}

/// Checked variant: rejects undersized or non-finite input.
pub fn try_graham_hull(points: &[Point]) -> GeomResult<Vec<Point>> {
    ensure_at_least("graham", MIN_HULL_POINTS, points)?;
    ensure_finite(points)?;
    Ok(graham_hull(points))
}

/// One monotone chain: the first two points are taken as-is, then every new
/// point pops the top while top-of-stack would make a strict left turn.
fn chain(mut pts: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::new();
    stack.extend(pts.by_ref().take(2));
    for p in pts {
        while stack.len() >= 2 && is_left_turn(stack[stack.len() - 2], stack[stack.len() - 1], p) {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

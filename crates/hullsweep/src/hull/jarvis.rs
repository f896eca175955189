use tracing::debug;

use super::MIN_HULL_POINTS;
use crate::error::{ensure_at_least, ensure_finite, GeomResult, GeometryError};
use crate::geom2::{cmp_y_then_x, orientation, turning_angle, Point};

/// Jarvis' march, counterclockwise from the lowest (then leftmost) point.
///
/// The first edge leaves the start point along +x. Each step picks the
/// candidate with the smallest turning angle from the current edge; on equal
/// angles the later candidate in (y, x) order wins. The start point is not
/// repeated at the end.
///
/// Returns an empty vector for fewer than 3 input points, when the walk
/// closes with fewer than 3 vertices (coincident input), or when every
/// vertex of the walk lies on one line (collinear input, zero area).
pub fn jarvis_hull(points: &[Point]) -> Vec<Point> {
    march(points).unwrap_or_default()
}

/// Checked variant: rejects undersized, non-finite and degenerate input.
pub fn try_jarvis_hull(points: &[Point]) -> GeomResult<Vec<Point>> {
    ensure_at_least("jarvis", MIN_HULL_POINTS, points)?;
    ensure_finite(points)?;
    march(points).ok_or_else(|| {
        GeometryError::DegenerateGeometry(
            "gift wrapping found no hull with positive area".to_string(),
        )
    })
}

fn march(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < MIN_HULL_POINTS {
        return None;
    }
    let mut candidates = points.to_vec();
    candidates.sort_by(cmp_y_then_x);
    let start = candidates[0];

    let mut hull = vec![start];
    // synthetic predecessor: the first edge points along +x
    let mut prev = start - Point::x();
    let mut cur = start;
    // every step removes at least one candidate, so this bounds the walk
    for _ in 0..points.len() {
        let next = select_next(prev, cur, &candidates)?;
        if next == start {
            break;
        }
        candidates.retain(|c| *c != next);
        hull.push(next);
        prev = cur;
        cur = next;
    }
    debug!(n = points.len(), hull = hull.len(), "jarvis_hull");
    (hull.len() >= MIN_HULL_POINTS && !all_collinear(&hull)).then_some(hull)
}

/// Every consecutive triple (wrapping) has zero orientation.
fn all_collinear(hull: &[Point]) -> bool {
    let n = hull.len();
    (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) == 0.0)
}

/// Candidate with minimum turning angle at `cur` (`<=`: last one wins ties).
/// Candidates coincident with `cur` have no angle and are skipped.
fn select_next(prev: Point, cur: Point, candidates: &[Point]) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &c in candidates {
        let Some(angle) = turning_angle(prev, cur, c) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, smallest)| angle <= *smallest) {
            best = Some((c, angle));
        }
    }
    best.map(|(p, _)| p)
}

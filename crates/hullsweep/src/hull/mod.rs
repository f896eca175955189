//! Convex hull builders.
//!
//! - `graham`: monotone upper/lower chains over an x-sorted copy; clockwise
//!   output starting at the leftmost point.
//! - `jarvis`: gift wrapping by minimum turning angle; counterclockwise output
//!   starting at the lowest point.
//!
//! Both keep the exact-float tie rules of the predicates in `geom2`; collinear
//! boundary points may therefore appear in Graham's output.

mod graham;
mod jarvis;

pub use graham::{graham_hull, try_graham_hull};
pub use jarvis::{jarvis_hull, try_jarvis_hull};

use crate::geom2::{orientation, Point};

/// Minimum input size for either builder.
pub const MIN_HULL_POINTS: usize = 3;

/// Hull algorithm selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullAlgo {
    Graham,
    Jarvis,
}

impl HullAlgo {
    pub fn name(self) -> &'static str {
        match self {
            HullAlgo::Graham => "graham",
            HullAlgo::Jarvis => "jarvis",
        }
    }
}

impl std::str::FromStr for HullAlgo {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graham" => Ok(HullAlgo::Graham),
            "jarvis" => Ok(HullAlgo::Jarvis),
            other => Err(format!("unknown hull algorithm '{other}'")),
        }
    }
}

/// Run the selected builder (silent variant).
pub fn compute_hull(algo: HullAlgo, points: &[Point]) -> Vec<Point> {
    match algo {
        HullAlgo::Graham => graham_hull(points),
        HullAlgo::Jarvis => jarvis_hull(points),
    }
}

/// True if no consecutive triple (wrapping) turns against `ccw`.
///
/// `ccw = true` forbids right turns, `ccw = false` forbids left turns;
/// collinear triples are accepted either way.
pub fn is_convex_chain(hull: &[Point], ccw: bool) -> bool {
    let n = hull.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| {
        let o = orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
        if ccw {
            o >= 0.0
        } else {
            o <= 0.0
        }
    })
}

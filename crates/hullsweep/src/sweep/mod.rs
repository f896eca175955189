//! Sweep-line crossings of horizontal and vertical segments.
//!
//! Input convention: consecutive points `(2i, 2i+1)` are the endpoints of
//! segment `i`. The sweep walks endpoints left to right, keeps horizontal
//! segments in [`ActiveSegments`] while the line is inside their x-extent,
//! and at each vertical segment reports every active horizontal whose y lies
//! in the vertical's y-range.
//!
//! Touching counts: a vertical at x meets every horizontal whose closed
//! x-extent contains x, including T-junctions at either horizontal endpoint.
//!
//! Preconditions (not repaired)
//! - Segments are axis-aligned; oblique ones are skipped (silent variant) or
//!   rejected (checked variant).
//! - No two horizontal segments share a y while both are active.

mod events;
mod status;

pub use status::ActiveSegments;

use tracing::debug;

use crate::error::{ensure_at_least, ensure_finite, GeomResult, GeometryError};
use crate::geom2::{Point, Segment};
use events::EventKind;

/// Minimum input: two segments.
pub const MIN_SWEEP_POINTS: usize = 4;

/// Sweep options.
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepCfg {
    /// Count a horizontal at exactly `y_max` of a vertical as crossing.
    /// Default `false`: the vertical range is `[y_min, y_max)`.
    pub include_upper: bool,
}

/// Sweep result: all input segments, the segments taking part in a crossing
/// (per vertical: its horizontals in increasing y, then the vertical itself),
/// and the crossing points, one per (horizontal, vertical) pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepOutput {
    pub segments: Vec<Segment>,
    pub intersecting: Vec<Segment>,
    pub points: Vec<Point>,
}

impl SweepOutput {
    /// True if the sweep ran over at least one segment. Odd or undersized
    /// input produces an output without segments. For "no crossings" use
    /// [`SweepOutput::crossing_count`].
    #[inline]
    pub fn has_input(&self) -> bool {
        !self.segments.is_empty()
    }

    #[inline]
    pub fn crossing_count(&self) -> usize {
        self.points.len()
    }
}

/// Pair consecutive points into segments; a trailing unpaired point is dropped.
pub fn pair_segments(points: &[Point]) -> Vec<Segment> {
    points
        .chunks_exact(2)
        .map(|p| Segment::new(p[0], p[1]))
        .collect()
}

/// Sweep with default options. Odd or undersized input yields an empty output.
pub fn sweep_intersections(points: &[Point]) -> SweepOutput {
    sweep_intersections_with(points, SweepCfg::default())
}

/// Sweep with explicit options (silent variant).
pub fn sweep_intersections_with(points: &[Point], cfg: SweepCfg) -> SweepOutput {
    if points.len() < MIN_SWEEP_POINTS || points.len() % 2 != 0 {
        return SweepOutput::default();
    }
    run(pair_segments(points), cfg)
}

/// Checked variant: size, pairing, finiteness and axis alignment are validated
/// before sweeping.
pub fn try_sweep_intersections(points: &[Point], cfg: SweepCfg) -> GeomResult<SweepOutput> {
    ensure_at_least("sweep", MIN_SWEEP_POINTS, points)?;
    if points.len() % 2 != 0 {
        return Err(GeometryError::OddPointCount(points.len()));
    }
    ensure_finite(points)?;
    let segments = pair_segments(points);
    if let Some((index, segment)) = segments
        .iter()
        .enumerate()
        .find(|(_, s)| s.axis().is_none())
    {
        return Err(GeometryError::MalformedSegment {
            index,
            segment: *segment,
        });
    }
    Ok(run(segments, cfg))
}

fn run(segments: Vec<Segment>, cfg: SweepCfg) -> SweepOutput {
    let queue = events::build(&segments);
    let mut active = ActiveSegments::new();
    let mut out = SweepOutput::default();
    for ev in &queue {
        let seg = segments[ev.seg];
        match ev.kind {
            EventKind::Insert => {
                active.insert(seg.p1.y, seg);
            }
            EventKind::Remove => {
                active.remove(seg.p1.y);
            }
            EventKind::Query => report_crossings(&seg, &active, cfg, &mut out),
            EventKind::Pass => {}
        }
    }
    debug!(
        segments = segments.len(),
        crossings = out.points.len(),
        "sweep_intersections"
    );
    out.segments = segments;
    out
}

fn report_crossings(
    vertical: &Segment,
    active: &ActiveSegments,
    cfg: SweepCfg,
    out: &mut SweepOutput,
) {
    let (y_min, y_max) = vertical.y_range();
    let x = vertical.p1.x;
    let before = out.points.len();
    for (y, horizontal) in active.range(y_min, y_max, cfg.include_upper) {
        out.intersecting.push(*horizontal);
        out.points.push(Point::new(x, y));
    }
    if out.points.len() > before {
        out.intersecting.push(*vertical);
    }
}

//! Event queue for the sweep: every endpoint of a classified segment, sorted
//! by x, then by kind (insert, query, remove), then by y.
//!
//! At a shared x every horizontal starting there is already active and every
//! horizontal ending there is still active when a vertical is queried, so a
//! vertical sees each horizontal whose closed x-extent contains its x,
//! independent of input order.

use std::cmp::Ordering;

use tracing::warn;

use crate::geom2::{Axis, Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EventKind {
    /// Left endpoint of a horizontal segment.
    Insert,
    /// Right endpoint of a horizontal segment.
    Remove,
    /// Lower endpoint of a vertical segment; triggers the range query.
    Query,
    /// Upper endpoint of a vertical segment; no status change.
    Pass,
}

impl EventKind {
    #[inline]
    fn rank(self) -> u8 {
        match self {
            EventKind::Insert => 0,
            EventKind::Query | EventKind::Pass => 1,
            EventKind::Remove => 2,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Event {
    pub at: Point,
    pub seg: usize,
    pub kind: EventKind,
}

/// Build the sorted queue. Oblique or non-finite segments contribute no events.
pub(crate) fn build(segments: &[Segment]) -> Vec<Event> {
    let mut q = Vec::with_capacity(segments.len() * 2);
    for (seg, s) in segments.iter().enumerate() {
        match s.axis() {
            Some(Axis::Horizontal) => {
                q.push(Event {
                    at: s.left(),
                    seg,
                    kind: EventKind::Insert,
                });
                q.push(Event {
                    at: s.right(),
                    seg,
                    kind: EventKind::Remove,
                });
            }
            Some(Axis::Vertical) => {
                let lower = s.lower();
                let upper = if lower == s.p1 { s.p2 } else { s.p1 };
                q.push(Event {
                    at: lower,
                    seg,
                    kind: EventKind::Query,
                });
                q.push(Event {
                    at: upper,
                    seg,
                    kind: EventKind::Pass,
                });
            }
            None => warn!(index = seg, segment = ?s, "skipping segment that is not axis-aligned"),
        }
    }
    q.sort_by(cmp_events);
    q
}

fn cmp_events(a: &Event, b: &Event) -> Ordering {
    a.at.x
        .partial_cmp(&b.at.x)
        .unwrap_or(Ordering::Equal)
        .then(a.kind.rank().cmp(&b.kind.rank()))
        .then(a.at.y.partial_cmp(&b.at.y).unwrap_or(Ordering::Equal))
}

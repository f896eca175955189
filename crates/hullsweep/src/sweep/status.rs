//! Active segment structure: horizontal segments crossed by the sweep line,
//! ordered by their y-coordinate.

use std::collections::BTreeMap;
use std::ops::Bound;

use ordered_float::OrderedFloat;
use tracing::warn;

use crate::geom2::Segment;

/// Horizontal segments keyed by y.
///
/// Keys are unique: inserting a second segment at an occupied y replaces the
/// first, and removal is by key. Callers must not feed two horizontal
/// segments on the same y that overlap in x.
#[derive(Clone, Debug, Default)]
pub struct ActiveSegments {
    by_y: BTreeMap<OrderedFloat<f64>, Segment>,
}

impl ActiveSegments {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_y.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_y.is_empty()
    }

    /// Activate `seg` at height `y`. Returns the segment it displaced, if any.
    pub fn insert(&mut self, y: f64, seg: Segment) -> Option<Segment> {
        let displaced = self.by_y.insert(OrderedFloat(y), seg);
        if let Some(old) = &displaced {
            warn!(y, ?old, new = ?seg, "active segment replaced at equal y");
        }
        displaced
    }

    /// Deactivate whatever segment is stored at height `y`.
    pub fn remove(&mut self, y: f64) -> Option<Segment> {
        self.by_y.remove(&OrderedFloat(y))
    }

    pub fn get(&self, y: f64) -> Option<&Segment> {
        self.by_y.get(&OrderedFloat(y))
    }

    /// Active segments with `y_min <= y < y_max` (or `<= y_max` when
    /// `include_upper`), in increasing y. Bounds may be given in either order.
    pub fn range(
        &self,
        y_min: f64,
        y_max: f64,
        include_upper: bool,
    ) -> impl Iterator<Item = (f64, &Segment)> + '_ {
        let (lo, hi) = if y_min <= y_max {
            (y_min, y_max)
        } else {
            (y_max, y_min)
        };
        let upper = if include_upper {
            Bound::Included(OrderedFloat(hi))
        } else {
            Bound::Excluded(OrderedFloat(hi))
        };
        self.by_y
            .range((Bound::Included(OrderedFloat(lo)), upper))
            .map(|(k, s)| (k.0, s))
    }

    /// Snapshot of the active keys in increasing order.
    pub fn keys(&self) -> Vec<f64> {
        self.by_y.keys().map(|k| k.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn h(y: f64, x0: f64, x1: f64) -> Segment {
        Segment::new(vector![x0, y], vector![x1, y])
    }

    #[test]
    fn range_is_closed_open_by_default() {
        let mut l = ActiveSegments::new();
        for y in [-1.0, 0.0, 1.0, 2.0, 3.0] {
            l.insert(y, h(y, 0.0, 1.0));
        }
        let ys: Vec<f64> = l.range(0.0, 2.0, false).map(|(y, _)| y).collect();
        assert_eq!(ys, vec![0.0, 1.0]);
        let ys: Vec<f64> = l.range(0.0, 2.0, true).map(|(y, _)| y).collect();
        assert_eq!(ys, vec![0.0, 1.0, 2.0]);
        // reversed bounds
        let ys: Vec<f64> = l.range(2.0, 0.0, false).map(|(y, _)| y).collect();
        assert_eq!(ys, vec![0.0, 1.0]);
    }

    #[test]
    fn degenerate_range_is_empty_unless_closed() {
        let mut l = ActiveSegments::new();
        l.insert(1.0, h(1.0, 0.0, 1.0));
        assert_eq!(l.range(1.0, 1.0, false).count(), 0);
        assert_eq!(l.range(1.0, 1.0, true).count(), 1);
    }

    #[test]
    fn equal_y_overwrites_and_remove_is_by_key() {
        let mut l = ActiveSegments::new();
        let a = h(0.0, 0.0, 4.0);
        let b = h(0.0, 1.0, 2.0);
        assert!(l.insert(0.0, a).is_none());
        assert_eq!(l.insert(0.0, b), Some(a));
        assert_eq!(l.len(), 1);
        assert_eq!(l.get(0.0), Some(&b));
        assert_eq!(l.remove(0.0), Some(b));
        assert!(l.is_empty());
        assert!(l.remove(0.0).is_none());
    }

    #[test]
    fn keys_are_sorted() {
        let mut l = ActiveSegments::new();
        for y in [3.0, -2.0, 0.5] {
            l.insert(y, h(y, 0.0, 1.0));
        }
        assert_eq!(l.keys(), vec![-2.0, 0.5, 3.0]);
    }
}

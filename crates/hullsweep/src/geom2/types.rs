//! Point and segment value types plus the two sort orders used by the builders.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point = Vector2<f64>;

/// Orientation class of an axis-aligned segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Ordered endpoint pair `(p1, p2)`; click order is preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Axis class, or `None` for oblique or non-finite segments.
    ///
    /// Shared x wins over shared y, so a zero-length segment is vertical.
    pub fn axis(&self) -> Option<Axis> {
        let finite = [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            None
        } else if self.p1.x == self.p2.x {
            Some(Axis::Vertical)
        } else if self.p1.y == self.p2.y {
            Some(Axis::Horizontal)
        } else {
            None
        }
    }

    /// Endpoint with the smaller x (first endpoint on ties).
    #[inline]
    pub fn left(&self) -> Point {
        if self.p2.x < self.p1.x {
            self.p2
        } else {
            self.p1
        }
    }

    /// Endpoint with the larger x (second endpoint on ties).
    #[inline]
    pub fn right(&self) -> Point {
        if self.p2.x < self.p1.x {
            self.p1
        } else {
            self.p2
        }
    }

    /// Endpoint with the smaller y (first endpoint on ties).
    #[inline]
    pub fn lower(&self) -> Point {
        if self.p2.y < self.p1.y {
            self.p2
        } else {
            self.p1
        }
    }

    /// `(y_min, y_max)` over both endpoints.
    #[inline]
    pub fn y_range(&self) -> (f64, f64) {
        (self.p1.y.min(self.p2.y), self.p1.y.max(self.p2.y))
    }
}

/// Increasing x, ties by increasing y.
pub fn cmp_x_then_y(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Increasing y, ties by increasing x.
pub fn cmp_y_then_x(a: &Point, b: &Point) -> Ordering {
    match a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal),
        o => o,
    }
}

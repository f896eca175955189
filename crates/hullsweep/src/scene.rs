//! Interactive context: the live point set and the selected algorithm.
//!
//! A front end owns one `Scene`, feeds it clicks through [`Scene::add_point`]
//! and asks for results with [`Scene::compute`]. Results are recomputed from
//! the current points on every call; nothing is cached between calls.

use std::f64::consts::FRAC_PI_4;

use tracing::debug;

use crate::geom2::{axis_angle, Point};
use crate::hull::{graham_hull, jarvis_hull};
use crate::sweep::{sweep_intersections_with, SweepCfg, SweepOutput};

/// Selected algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Graham,
    Jarvis,
    Sweep,
}

/// Snapping of the second endpoint of a sweep segment.
#[derive(Clone, Copy, Debug)]
pub struct SnapCfg {
    /// Angles from +x within `threshold` of 0 or π snap horizontal,
    /// everything else snaps vertical.
    pub threshold: f64,
}

impl Default for SnapCfg {
    fn default() -> Self {
        Self {
            threshold: FRAC_PI_4,
        }
    }
}

/// What [`Scene::compute`] produced for the active mode.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOutput {
    None,
    Hull(Vec<Point>),
    Sweep(SweepOutput),
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    points: Vec<Point>,
    mode: Mode,
    pub snap: SnapCfg,
    pub sweep: SweepCfg,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch algorithms. Entering `Sweep` starts from an empty point set,
    /// since hull input is not paired.
    pub fn select(&mut self, mode: Mode) {
        if mode == Mode::Sweep {
            self.reset();
        }
        self.mode = mode;
    }

    /// Append a point. In `Sweep` mode the second point of each pair is
    /// snapped so the pair forms a horizontal or vertical segment.
    /// Returns the point actually stored.
    pub fn add_point(&mut self, p: Point) -> Point {
        let stored = match (self.mode, self.points.last()) {
            (Mode::Sweep, Some(&prev)) if self.points.len() % 2 == 1 => {
                snap_to_axis(prev, p, self.snap)
            }
            _ => p,
        };
        self.points.push(stored);
        stored
    }

    /// Drop all points and return to `Idle`.
    pub fn reset(&mut self) {
        self.points.clear();
        self.mode = Mode::Idle;
    }

    /// Run the active algorithm over the current points.
    pub fn compute(&self) -> SceneOutput {
        debug!(mode = ?self.mode, n = self.points.len(), "scene compute");
        match self.mode {
            Mode::Idle => SceneOutput::None,
            Mode::Graham => SceneOutput::Hull(graham_hull(&self.points)),
            Mode::Jarvis => SceneOutput::Hull(jarvis_hull(&self.points)),
            Mode::Sweep => SceneOutput::Sweep(sweep_intersections_with(&self.points, self.sweep)),
        }
    }
}

/// Keep `prev.y` (horizontal) when `p` lies within `threshold` of the x-axis
/// direction through `prev`, otherwise keep `prev.x` (vertical).
pub fn snap_to_axis(prev: Point, p: Point, cfg: SnapCfg) -> Point {
    // coincident click: no direction, treat as horizontal
    let angle = axis_angle(prev, p).unwrap_or(0.0);
    if angle <= cfg.threshold || angle >= std::f64::consts::PI - cfg.threshold {
        Point::new(p.x, prev.y)
    } else {
        Point::new(prev.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn snapping_picks_the_dominant_axis() {
        let cfg = SnapCfg::default();
        let prev = vector![1.0, 1.0];
        assert_eq!(snap_to_axis(prev, vector![3.0, 1.5], cfg), vector![3.0, 1.0]);
        assert_eq!(snap_to_axis(prev, vector![-2.0, 0.2], cfg), vector![-2.0, 1.0]);
        assert_eq!(snap_to_axis(prev, vector![1.3, 4.0], cfg), vector![1.0, 4.0]);
        assert_eq!(snap_to_axis(prev, vector![0.8, -3.0], cfg), vector![1.0, -3.0]);
        assert_eq!(snap_to_axis(prev, prev, cfg), prev);
    }

    #[test]
    fn sweep_mode_snaps_every_second_point() {
        let mut s = Scene::new();
        s.select(Mode::Sweep);
        assert_eq!(s.add_point(vector![0.0, 0.0]), vector![0.0, 0.0]);
        assert_eq!(s.add_point(vector![4.0, 0.3]), vector![4.0, 0.0]);
        // first point of the next pair is stored as clicked
        assert_eq!(s.add_point(vector![2.0, -2.0]), vector![2.0, -2.0]);
        assert_eq!(s.add_point(vector![2.2, 2.0]), vector![2.0, 2.0]);
        match s.compute() {
            SceneOutput::Sweep(out) => assert_eq!(out.points, vec![vector![2.0, 0.0]]),
            other => panic!("expected sweep output, got {other:?}"),
        }
    }

    #[test]
    fn hull_modes_keep_points_and_store_clicks_verbatim() {
        let mut s = Scene::new();
        s.select(Mode::Graham);
        for p in [vector![0.0, 0.0], vector![1.0, 0.1], vector![0.5, 1.0]] {
            assert_eq!(s.add_point(p), p);
        }
        assert!(matches!(s.compute(), SceneOutput::Hull(h) if h.len() == 3));
        s.select(Mode::Jarvis);
        assert_eq!(s.points().len(), 3);
        assert!(matches!(s.compute(), SceneOutput::Hull(h) if h.len() == 3));
    }

    #[test]
    fn selecting_sweep_and_reset_clear_points() {
        let mut s = Scene::new();
        s.select(Mode::Jarvis);
        s.add_point(vector![0.0, 0.0]);
        s.select(Mode::Sweep);
        assert!(s.points().is_empty());
        assert_eq!(s.mode(), Mode::Sweep);
        s.add_point(vector![0.0, 0.0]);
        s.reset();
        assert!(s.points().is_empty());
        assert_eq!(s.mode(), Mode::Idle);
        assert_eq!(s.compute(), SceneOutput::None);
    }
}

//! Curated entry points for callers (UI layers, the CLI, benches).
//!
//! The three builders mirror the operations a front end invokes; the
//! checked variants are the library-facing surface.

// Hull builders
pub use crate::hull::{
    compute_hull, graham_hull, jarvis_hull, try_graham_hull, try_jarvis_hull, HullAlgo,
};
// Sweep
pub use crate::sweep::{
    sweep_intersections, sweep_intersections_with, try_sweep_intersections, ActiveSegments,
    SweepCfg, SweepOutput,
};
// Interactive context
pub use crate::scene::{Mode, Scene, SceneOutput, SnapCfg};
// Random inputs
pub use crate::rand::{
    draw_axis_segments, draw_point_cloud, CloudCfg, ReplayToken, SegmentsCfg,
};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hullsweep::hull::{compute_hull, try_graham_hull, try_jarvis_hull, HullAlgo};
use hullsweep::rand::{draw_axis_segments, draw_point_cloud, CloudCfg, ReplayToken, SegmentsCfg};
use hullsweep::sweep::{sweep_intersections_with, try_sweep_intersections, SweepCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{ensure_parent, read_points, write_points_csv, PointRow, SegmentRow};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "hullsweep")]
#[command(about = "Convex hulls and axis-aligned segment crossings from point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algo {
    Graham,
    Jarvis,
}

impl From<Algo> for HullAlgo {
    fn from(a: Algo) -> Self {
        match a {
            Algo::Graham => HullAlgo::Graham,
            Algo::Jarvis => HullAlgo::Jarvis,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum GenKind {
    /// Uniform point cloud (hull input)
    Cloud,
    /// Paired endpoints of horizontal/vertical segments (sweep input)
    Segments,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point file
    Hull {
        #[arg(long, value_enum, default_value_t = Algo::Graham)]
        algo: Algo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Fail on invalid input instead of writing an empty hull
        #[arg(long)]
        checked: bool,
    },
    /// Sweep-line crossings; consecutive points pair into segments
    Sweep {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Count crossings at the upper end of a vertical segment
        #[arg(long)]
        include_upper: bool,
        #[arg(long)]
        checked: bool,
    },
    /// Write a seeded random input file (CSV)
    Gen {
        #[arg(long, value_enum, default_value_t = GenKind::Cloud)]
        kind: GenKind,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct HullDoc {
    algo: &'static str,
    input_count: usize,
    hull: Vec<PointRow>,
}

#[derive(Debug, Serialize)]
struct SweepDoc {
    input_count: usize,
    segments: Vec<SegmentRow>,
    intersecting: Vec<SegmentRow>,
    points: Vec<PointRow>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            algo,
            input,
            out,
            checked,
        } => hull(algo.into(), &input, &out, checked).map(|_| ()),
        Action::Sweep {
            input,
            out,
            include_upper,
            checked,
        } => sweep(&input, &out, SweepCfg { include_upper }, checked).map(|_| ()),
        Action::Gen {
            kind,
            count,
            seed,
            index,
            extent,
            out,
        } => gen(kind, count, ReplayToken { seed, index }, extent, &out),
        Action::Report => report(),
    }
}

fn hull(algo: HullAlgo, input: &Path, out: &Path, checked: bool) -> Result<HullDoc> {
    let points = read_points(input)?;
    tracing::info!(algo = algo.name(), n = points.len(), input = %input.display(), "hull");
    let hull = if checked {
        match algo {
            HullAlgo::Graham => try_graham_hull(&points)?,
            HullAlgo::Jarvis => try_jarvis_hull(&points)?,
        }
    } else {
        compute_hull(algo, &points)
    };
    let doc = HullDoc {
        algo: algo.name(),
        input_count: points.len(),
        hull: hull.into_iter().map(PointRow::from).collect(),
    };
    write_json(out, &doc)?;
    write_sidecar(
        out,
        Payload::new("hull")
            .param("algo", algo.name())
            .param("checked", checked)
            .input(input)
            .count("input_points", doc.input_count)
            .count("vertices", doc.hull.len()),
    )?;
    tracing::info!(vertices = doc.hull.len(), out = %out.display(), "hull written");
    Ok(doc)
}

fn sweep(input: &Path, out: &Path, cfg: SweepCfg, checked: bool) -> Result<SweepDoc> {
    let points = read_points(input)?;
    tracing::info!(n = points.len(), input = %input.display(), "sweep");
    let res = if checked {
        try_sweep_intersections(&points, cfg)?
    } else {
        sweep_intersections_with(&points, cfg)
    };
    let doc = SweepDoc {
        input_count: points.len(),
        segments: res.segments.into_iter().map(SegmentRow::from).collect(),
        intersecting: res.intersecting.into_iter().map(SegmentRow::from).collect(),
        points: res.points.into_iter().map(PointRow::from).collect(),
    };
    write_json(out, &doc)?;
    write_sidecar(
        out,
        Payload::new("sweep")
            .param("include_upper", cfg.include_upper)
            .param("checked", checked)
            .input(input)
            .count("segments", doc.segments.len())
            .count("intersecting", doc.intersecting.len())
            .count("crossings", doc.points.len()),
    )?;
    tracing::info!(crossings = doc.points.len(), out = %out.display(), "sweep written");
    Ok(doc)
}

fn gen(kind: GenKind, count: usize, tok: ReplayToken, extent: f64, out: &Path) -> Result<()> {
    let (name, points) = match kind {
        GenKind::Cloud => (
            "cloud",
            draw_point_cloud(
                CloudCfg {
                    count,
                    half_extent: extent,
                },
                tok,
            ),
        ),
        GenKind::Segments => (
            "segments",
            draw_axis_segments(
                SegmentsCfg {
                    horizontals: count,
                    verticals: count,
                    half_extent: extent,
                },
                tok,
            ),
        ),
    };
    tracing::info!(kind = name, n = points.len(), seed = tok.seed, index = tok.index, "gen");
    write_points_csv(out, &points)?;
    write_sidecar(
        out,
        Payload::new("gen")
            .param("kind", name)
            .param("count", count)
            .param("seed", tok.seed)
            .param("index", tok.index)
            .param("extent", extent)
            .count("points", points.len()),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": hullsweep::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, doc: &T) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)?;
    Ok(())
}

//! Point files: CSV or Parquet with `x`,`y` columns (polars), or a JSON array
//! of `{x, y}` objects.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hullsweep::{Point, Segment};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointRow {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Point::new(r.x, r.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentRow {
    pub p1: PointRow,
    pub p2: PointRow,
}

impl From<Segment> for SegmentRow {
    fn from(s: Segment) -> Self {
        Self {
            p1: s.p1.into(),
            p2: s.p2.into(),
        }
    }
}

/// Read points in file order; the extension picks the format.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()?;
            points_from_frame(lf, path)
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
            points_from_frame(lf, path)
        }
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let rows: Vec<PointRow> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(rows.into_iter().map(Point::from).collect())
        }
        _ => bail!(
            "unsupported input {} (expected .csv, .parquet or .json)",
            path.display()
        ),
    }
}

fn points_from_frame(lf: LazyFrame, path: &Path) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(i, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {i} of {} has a missing coordinate", path.display()),
        })
        .collect()
}

/// Write points as CSV with an `x,y` header.
pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

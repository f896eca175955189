use thiserror::Error;

use crate::geom2::Segment;

/// Input validation failures reported by the checked (`try_*`) entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{algo} needs at least {required} points, got {found}")]
    InsufficientInput {
        algo: &'static str,
        required: usize,
        found: usize,
    },

    #[error("sweep input must pair up endpoints, got an odd count of {0} points")]
    OddPointCount(usize),

    #[error("segment {index} is neither horizontal nor vertical: {segment:?}")]
    MalformedSegment { index: usize, segment: Segment },

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

pub type GeomResult<T> = Result<T, GeometryError>;

/// Reject NaN/inf coordinates; they break the exact comparators.
pub(crate) fn ensure_finite(points: &[crate::geom2::Point]) -> GeomResult<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(GeometryError::NonFinite { index }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_at_least(
    algo: &'static str,
    required: usize,
    points: &[crate::geom2::Point],
) -> GeomResult<()> {
    if points.len() < required {
        return Err(GeometryError::InsufficientInput {
            algo,
            required,
            found: points.len(),
        });
    }
    Ok(())
}

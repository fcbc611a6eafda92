use thiserror::Error;

/// Top-level error type for knodia.
#[derive(Debug, Error)]
pub enum KnodiaError {
    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Decomposition(#[from] DecompositionError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Errors raised while normalizing a diagram curve.
///
/// A failed assignment never touches the curve that was in effect before.
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("point {index} has a non-finite coordinate")]
    InvalidCoordinate { index: usize },

    #[error("a closed curve needs at least 3 distinct points, got {distinct}")]
    TooFewPoints { distinct: usize },
}

/// Errors raised when the planar decomposition breaks one of its contracts.
///
/// These point at a geometrically degenerate curve (or a robustness bug in the
/// arrangement) and are never replaced by a best-effort result.
#[derive(Debug, Error, PartialEq)]
pub enum DecompositionError {
    #[error("face {index} is not a simple polygon")]
    NonSimpleRegion { index: usize },

    #[error("face {index} has zero area")]
    DegenerateFace { index: usize },

    #[error("a component of the arrangement is nested inside face {index}")]
    NestedComponent { index: usize },

    #[error("degenerate boundary: {0}")]
    DegenerateBoundary(String),

    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

/// Errors related to interactive edit sessions.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("an edit session is already open on this diagram")]
    Busy,

    #[error("marked index {index} is out of range for a curve with {len} vertices")]
    MarkedOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`KnodiaError`].
pub type Result<T> = std::result::Result<T, KnodiaError>;

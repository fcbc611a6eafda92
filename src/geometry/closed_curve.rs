use crate::error::{CurveError, Result};
use crate::math::{coincident, Point2};

/// A closed, possibly self-intersecting polyline: the diagram curve.
///
/// The point sequence always ends with a copy of its first point. Curves are
/// replaced wholesale; there is no in-place mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedCurve {
    points: Vec<Point2>,
}

impl ClosedCurve {
    /// Normalizes an open or closed point sequence into a closed curve.
    ///
    /// If the first and last points differ, the first point is appended.
    /// Closing is additive only: interior points are never altered and a
    /// matching trailing point is never removed, so closing is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCoordinate` if a coordinate is NaN or
    /// infinite, and `CurveError::TooFewPoints` if fewer than 3 distinct points
    /// remain.
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut points: Vec<Point2> = points.into_iter().collect();

        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(CurveError::InvalidCoordinate { index }.into());
        }

        let distinct = count_distinct(&points);
        if distinct < 3 {
            return Err(CurveError::TooFewPoints { distinct }.into());
        }

        if points.first() != points.last() {
            points.push(points[0]);
        }

        Ok(Self { points })
    }

    /// Builds a curve from plain `(x, y)` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Same as [`ClosedCurve::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)))
    }

    /// The closed point sequence, ending with a copy of the first point.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The vertices without the closing duplicate. Marked indices refer to
    /// this sequence.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.points[..self.points.len() - 1]
    }

    /// Number of vertices, not counting the closing duplicate.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterates over the segments `(points[i], points[i + 1])`.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl Default for ClosedCurve {
    /// The minimal valid curve: a closed triangle.
    fn default() -> Self {
        Self {
            points: vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(0.0, 0.0),
            ],
        }
    }
}

/// Counts points that are pairwise farther apart than the snap tolerance.
fn count_distinct(points: &[Point2]) -> usize {
    let mut seen: Vec<&Point2> = Vec::new();
    for p in points {
        if !seen.iter().any(|q| coincident(p, q)) {
            seen.push(p);
        }
    }
    seen.len()
}

use crate::editor::{CommitSink, EditLatch, EditSession, ScreenTransform};
use crate::error::Result;
use crate::geometry::{ClosedCurve, Ring};
use crate::math::Point2;
use crate::operations::{ComputeBoundary, ComputeRegions};

/// A knot diagram: the closed curve plus its lazily computed regions and
/// boundary.
///
/// The derived values are cached until the curve changes by value. Failed
/// computations are not cached and are retried on the next read.
#[derive(Debug)]
pub struct Diagram {
    curve: ClosedCurve,
    regions: Option<Vec<Ring>>,
    boundary: Option<Ring>,
    latch: EditLatch,
}

impl Diagram {
    /// Creates a diagram from an open or closed point sequence.
    ///
    /// # Errors
    ///
    /// Returns a `CurveError` if the points do not form a valid curve.
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        Ok(Self::from_curve(ClosedCurve::new(points)?))
    }

    /// Creates a diagram from an already normalized curve.
    #[must_use]
    pub fn from_curve(curve: ClosedCurve) -> Self {
        Self {
            curve,
            regions: None,
            boundary: None,
            latch: EditLatch::default(),
        }
    }

    /// The current closed curve.
    #[must_use]
    pub fn curve(&self) -> &ClosedCurve {
        &self.curve
    }

    /// Replaces the curve. On error the previous curve stays in effect.
    ///
    /// # Errors
    ///
    /// Returns a `CurveError` if the points do not form a valid curve.
    pub fn set_curve<I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = Point2>,
    {
        let curve = ClosedCurve::new(points)?;
        self.set_closed_curve(curve);
        Ok(())
    }

    /// Replaces the curve with an already normalized one. Assigning a curve
    /// equal to the current one keeps the cached regions and boundary.
    pub fn set_closed_curve(&mut self, curve: ClosedCurve) {
        if curve == self.curve {
            tracing::trace!("curve unchanged");
            return;
        }
        let cached = self.regions.is_some() || self.boundary.is_some();
        self.curve = curve;
        self.regions = None;
        self.boundary = None;
        if cached {
            tracing::debug!(vertices = self.curve.vertex_count(), "derived geometry invalidated");
        }
    }

    /// The simple regions carved out by the curve, computed on first use.
    ///
    /// # Errors
    ///
    /// Returns a `DecompositionError` if the curve cannot be decomposed.
    pub fn regions(&mut self) -> Result<&[Ring]> {
        let regions = match self.regions.take() {
            Some(regions) => regions,
            None => ComputeRegions::new(&self.curve).execute()?,
        };
        Ok(self.regions.insert(regions).as_slice())
    }

    /// The outer ring of the union of all regions, computed on first use.
    ///
    /// # Errors
    ///
    /// Returns a `DecompositionError` if the regions cannot be computed or do
    /// not form a single simple outline.
    pub fn boundary(&mut self) -> Result<&Ring> {
        let boundary = match self.boundary.take() {
            Some(boundary) => boundary,
            None => ComputeBoundary::new(self.regions()?).execute()?,
        };
        Ok(self.boundary.insert(boundary))
    }

    /// Index of the region whose filled polygon contains `point`, if any.
    ///
    /// # Errors
    ///
    /// Same as [`Diagram::regions`].
    pub fn region_at(&mut self, point: &Point2) -> Result<Option<usize>> {
        Ok(self.regions()?.iter().position(|r| r.contains_point(point)))
    }

    /// Returns `true` while an edit session is open on this diagram.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.latch.is_held()
    }

    /// Opens an interactive edit session on a working copy of the curve.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::Busy` if a session is already open and
    /// `EditorError::MarkedOutOfRange` if `marked` is not a vertex of the
    /// curve.
    pub fn begin_edit<T, S>(
        &self,
        marked: Option<usize>,
        transform: T,
        sink: S,
    ) -> Result<EditSession<T, S>>
    where
        T: ScreenTransform,
        S: CommitSink,
    {
        let guard = self.latch.acquire()?;
        EditSession::open(&self.curve, marked, transform, sink, guard)
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::from_curve(ClosedCurve::default())
    }
}

use std::cmp::Ordering;

use crate::error::{DecompositionError, Result};
use crate::math::intersect_2d::point_at;
use crate::math::polygon_2d::{
    is_simple_ring, point_in_polygon, point_on_ring, rotate_to_canonical_start, signed_area_2d,
};
use crate::math::{lex_cmp, Point2};
use crate::tessellation::{TessellateRing, Triangle};

/// A closed polygon outline: a region of the diagram or its boundary.
///
/// Points are stored open; the closing edge from the last point back to the
/// first is implicit. Rings produced by the decomposition are simple,
/// counter-clockwise, and start at their lexicographically smallest vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

impl Ring {
    /// Wraps an open point sequence without any validation.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Orients the points counter-clockwise and rotates them to the canonical
    /// start vertex.
    #[must_use]
    pub(crate) fn canonical(mut points: Vec<Point2>) -> Self {
        if signed_area_2d(&points) < 0.0 {
            points.reverse();
        }
        Self {
            points: rotate_to_canonical_start(&points),
        }
    }

    /// The open point sequence.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The point sequence with the first point repeated at the end.
    #[must_use]
    pub fn closed_points(&self) -> Vec<Point2> {
        let mut closed = self.points.clone();
        if let Some(&first) = self.points.first() {
            closed.push(first);
        }
        closed
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if the outline does not touch or cross itself.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        is_simple_ring(&self.points)
    }

    /// Returns `true` if `p` lies inside the filled polygon or on its outline.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        point_on_ring(p, &self.points) || point_in_polygon(p, &self.points)
    }

    /// Returns `true` if every vertex and every edge midpoint of `other` lies
    /// inside or on this ring.
    #[must_use]
    pub fn contains_ring(&self, other: &Ring) -> bool {
        let n = other.points.len();
        (0..n).all(|i| {
            let a = &other.points[i];
            let b = &other.points[(i + 1) % n];
            self.contains_point(a) && self.contains_point(&point_at(a, b, 0.5))
        })
    }

    /// Triangulates the filled interior.
    ///
    /// # Errors
    ///
    /// Returns `DecompositionError::Triangulation` if the ring is degenerate.
    pub fn triangulate(&self) -> Result<Vec<Triangle>> {
        TessellateRing::new(&self.points).execute()
    }

    /// A point strictly inside the filled polygon: the centroid of its
    /// largest interior triangle.
    ///
    /// # Errors
    ///
    /// Returns `DecompositionError::Triangulation` if the ring encloses no
    /// area.
    pub fn interior_point(&self) -> Result<Point2> {
        self.triangulate()?
            .iter()
            .map(|t| (signed_area_2d(t), t))
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, [a, b, c])| Point2::from((a.coords + b.coords + c.coords) / 3.0))
            .ok_or_else(|| {
                DecompositionError::Triangulation("ring encloses no area".to_owned()).into()
            })
    }

    /// Deterministic total order: lexicographic over the point sequences,
    /// comparing points by `(x, y)`. Carries no geometric meaning.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Ring) -> Ordering {
        self.points
            .iter()
            .zip(&other.points)
            .map(|(a, b)| lex_cmp(a, b))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| self.points.len().cmp(&other.points.len()))
    }
}

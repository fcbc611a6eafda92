use std::collections::HashMap;

use crate::error::{DecompositionError, Result};
use crate::geometry::Ring;
use crate::math::{coincident, Point2};

/// Computes the outer ring of the union of a set of regions.
///
/// Edges shared by two regions are interior to the union and cancel out; the
/// edges that remain must chain into exactly one simple ring.
pub struct ComputeBoundary<'a> {
    regions: &'a [Ring],
}

impl<'a> ComputeBoundary<'a> {
    /// Creates a new boundary computation over counter-clockwise regions.
    #[must_use]
    pub fn new(regions: &'a [Ring]) -> Self {
        Self { regions }
    }

    /// Executes the union, returning a counter-clockwise ring starting at its
    /// lexicographically smallest vertex.
    ///
    /// # Errors
    ///
    /// Returns `DecompositionError::DegenerateBoundary` if there are no
    /// regions, if the regions fall apart into several rings, or if the
    /// outline touches itself.
    pub fn execute(&self) -> Result<Ring> {
        if self.regions.is_empty() {
            return Err(
                DecompositionError::DegenerateBoundary("no regions to bound".to_owned()).into(),
            );
        }

        let mut points: Vec<Point2> = Vec::new();
        let mut directed: Vec<(usize, usize)> = Vec::new();
        let mut uses: HashMap<(usize, usize), usize> = HashMap::new();
        for region in self.regions {
            let pts = region.points();
            for i in 0..pts.len() {
                let a = ensure_point(&mut points, pts[i]);
                let b = ensure_point(&mut points, pts[(i + 1) % pts.len()]);
                if a == b {
                    continue;
                }
                directed.push((a, b));
                *uses.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }

        // point index -> successor along the union outline.
        let mut successor: HashMap<usize, usize> = HashMap::new();
        for &(a, b) in &directed {
            if uses[&(a.min(b), a.max(b))] != 1 {
                continue;
            }
            if successor.insert(a, b).is_some() {
                return Err(DecompositionError::DegenerateBoundary(format!(
                    "outline touches itself at ({}, {})",
                    points[a].x, points[a].y
                ))
                .into());
            }
        }

        let Some(&start) = successor.keys().min() else {
            return Err(DecompositionError::DegenerateBoundary(
                "regions leave no outline".to_owned(),
            )
            .into());
        };

        let mut ring = vec![points[start]];
        let mut current = start;
        loop {
            let Some(&next) = successor.get(&current) else {
                return Err(
                    DecompositionError::DegenerateBoundary("outline is not closed".to_owned())
                        .into(),
                );
            };
            if next == start {
                break;
            }
            if ring.len() >= successor.len() {
                return Err(
                    DecompositionError::DegenerateBoundary("outline is not closed".to_owned())
                        .into(),
                );
            }
            ring.push(points[next]);
            current = next;
        }

        if ring.len() != successor.len() {
            return Err(DecompositionError::DegenerateBoundary(format!(
                "regions form {} outline edges but the ring closes after {}",
                successor.len(),
                ring.len()
            ))
            .into());
        }

        let boundary = Ring::canonical(ring);
        if !boundary.is_simple() {
            return Err(
                DecompositionError::DegenerateBoundary("outline is not simple".to_owned()).into(),
            );
        }
        tracing::debug!(vertices = boundary.len(), "computed boundary");
        Ok(boundary)
    }
}

/// Finds or inserts a point, returning its index.
fn ensure_point(points: &mut Vec<Point2>, p: Point2) -> usize {
    if let Some(i) = points.iter().position(|q| coincident(q, &p)) {
        return i;
    }
    points.push(p);
    points.len() - 1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::KnodiaError;
    use crate::geometry::ClosedCurve;
    use crate::operations::decompose::ComputeRegions;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64) -> Ring {
        Ring::canonical(vec![p(x0, y0), p(x0 + 1.0, y0), p(x0 + 1.0, y0 + 1.0), p(x0, y0 + 1.0)])
    }

    fn degenerate(result: Result<Ring>) -> bool {
        matches!(
            result,
            Err(KnodiaError::Decomposition(DecompositionError::DegenerateBoundary(_)))
        )
    }

    #[test]
    fn single_region_is_its_own_boundary() {
        let sq = square(0.0, 0.0);
        let boundary = ComputeBoundary::new(std::slice::from_ref(&sq)).execute().unwrap();
        assert_eq!(boundary, sq);
    }

    #[test]
    fn adjacent_squares_merge() {
        let regions = [square(0.0, 0.0), square(1.0, 0.0)];
        let boundary = ComputeBoundary::new(&regions).execute().unwrap();
        // The shared edge disappears; (1,0) and (1,1) stay as collinear vertices.
        assert_eq!(boundary.len(), 6);
        assert!((boundary.area() - 2.0).abs() < 1e-10);
        assert!(boundary.is_simple());
        assert_eq!(boundary.points()[0], p(0.0, 0.0));
    }

    #[test]
    fn disjoint_regions_fail() {
        let regions = [square(0.0, 0.0), square(5.0, 0.0)];
        assert!(degenerate(ComputeBoundary::new(&regions).execute()));
    }

    #[test]
    fn regions_touching_at_a_point_fail() {
        let regions = [square(0.0, 0.0), square(1.0, 1.0)];
        assert!(degenerate(ComputeBoundary::new(&regions).execute()));
    }

    #[test]
    fn no_regions_fail() {
        assert!(degenerate(ComputeBoundary::new(&[]).execute()));
    }

    #[test]
    fn boundary_of_curve_with_inner_crossing() {
        // A square with an extra loop that dips below its bottom side.
        let curve = ClosedCurve::from_coords(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (0.0, 1.0),
            (2.0, -1.0),
            (2.0, 1.0),
            (0.0, 1.0),
        ])
        .unwrap();
        let regions = ComputeRegions::new(&curve).execute().unwrap();
        assert_eq!(regions.len(), 4);
        let boundary = ComputeBoundary::new(&regions).execute().unwrap();
        assert!(boundary.is_simple());
        for region in &regions {
            assert!(boundary.contains_ring(region));
        }
    }
}

use std::collections::HashSet;

use crate::error::{DecompositionError, Result};
use crate::geometry::{ClosedCurve, Ring};
use crate::math::polygon_2d::point_in_polygon;
use crate::topology::VertexId;

use super::faces::{reduce_and_trace, FaceCycle};
use super::split::build_arrangement;

/// Decomposes a closed curve into the simple regions it carves out of the
/// plane.
///
/// The unbounded face is never part of the result. Regions are
/// counter-clockwise, start at their lexicographically smallest vertex, and
/// are ordered by [`Ring::canonical_cmp`]. The order is deterministic for
/// coordinate-identical curves and carries no other meaning.
pub struct ComputeRegions<'a> {
    curve: &'a ClosedCurve,
}

impl<'a> ComputeRegions<'a> {
    /// Creates a new region decomposition.
    #[must_use]
    pub fn new(curve: &'a ClosedCurve) -> Self {
        Self { curve }
    }

    /// Executes the decomposition.
    ///
    /// # Errors
    ///
    /// Returns `DecompositionError::NonSimpleRegion` if a bounded face is not
    /// a simple polygon, `DecompositionError::NestedComponent` if part of the
    /// curve floats inside a face without touching it, and
    /// `DecompositionError::DegenerateFace` for faces without area.
    pub fn execute(&self) -> Result<Vec<Ring>> {
        let mut arrangement = build_arrangement(self.curve);
        let faces = reduce_and_trace(&mut arrangement)?;

        let mut bounded: Vec<(Ring, HashSet<VertexId>)> = faces
            .iter()
            .filter(|f| f.is_bounded())
            .map(|f| {
                (
                    Ring::canonical(f.points.clone()),
                    f.vertices.iter().copied().collect(),
                )
            })
            .collect();
        bounded.sort_by(|a, b| a.0.canonical_cmp(&b.0));

        for (index, (ring, _)) in bounded.iter().enumerate() {
            if !ring.is_simple() {
                tracing::warn!(index, vertices = ring.len(), "non-simple region");
                return Err(DecompositionError::NonSimpleRegion { index }.into());
            }
        }

        let outer: Vec<&FaceCycle> = faces.iter().filter(|f| !f.is_bounded()).collect();
        if outer.len() > 1 {
            check_not_nested(&outer, &bounded)?;
        }

        tracing::debug!(
            vertices = self.curve.vertex_count(),
            nodes = arrangement.vertex_count(),
            regions = bounded.len(),
            "decomposed curve"
        );
        Ok(bounded.into_iter().map(|(ring, _)| ring).collect())
    }
}

/// Fails if a connected component lies inside a region of another component,
/// which would leave a hole in that region.
fn check_not_nested(outer: &[&FaceCycle], bounded: &[(Ring, HashSet<VertexId>)]) -> Result<()> {
    for face in outer {
        let (Some(&probe_id), Some(probe)) = (face.vertices.first(), face.points.first()) else {
            continue;
        };
        for (index, (ring, ids)) in bounded.iter().enumerate() {
            // Regions of the same component share its nodes.
            if ids.contains(&probe_id) {
                continue;
            }
            if point_in_polygon(probe, ring.points()) {
                tracing::warn!(index, "component nested inside region");
                return Err(DecompositionError::NestedComponent { index }.into());
            }
        }
    }
    Ok(())
}

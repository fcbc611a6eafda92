use std::collections::HashSet;

use slotmap::SecondaryMap;

use crate::error::{DecompositionError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};
use crate::topology::{Arrangement, EdgeId, VertexId};

/// A closed walk around one face of the arrangement.
#[derive(Debug, Clone)]
pub struct FaceCycle {
    /// Half-edges in walk order; the face lies on their left.
    pub edges: Vec<EdgeId>,
    /// Origin node of each half-edge.
    pub vertices: Vec<VertexId>,
    /// Origin position of each half-edge.
    pub points: Vec<Point2>,
    /// Positive for bounded faces, negative for the outer face of a connected
    /// component.
    pub signed_area: f64,
}

impl FaceCycle {
    /// Returns `true` for a bounded face.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.signed_area > 0.0
    }
}

/// Reduces the arrangement to the edges that separate two different faces
/// and returns its face cycles.
///
/// Dangling chains and cut edges (bridges: the same face on both sides) are
/// removed until none remain.
///
/// # Errors
///
/// Returns `DecompositionError::DegenerateFace` if a walk does not close or a
/// face encloses no area.
pub fn reduce_and_trace(arrangement: &mut Arrangement) -> Result<Vec<FaceCycle>> {
    loop {
        let pruned = arrangement.prune_dangling();
        arrangement.sort_outgoing();
        let faces = trace_faces(arrangement)?;

        let mut face_of: SecondaryMap<EdgeId, usize> = SecondaryMap::new();
        for (index, face) in faces.iter().enumerate() {
            for &e in &face.edges {
                face_of.insert(e, index);
            }
        }

        let bridges: Vec<EdgeId> = arrangement
            .edge_ids()
            .filter(|&e| {
                arrangement
                    .edge(e)
                    .is_some_and(|d| e < d.twin && face_of.get(e) == face_of.get(d.twin))
            })
            .collect();

        if bridges.is_empty() {
            tracing::trace!(pruned, faces = faces.len(), "arrangement reduced");
            for (index, face) in faces.iter().enumerate() {
                if face.signed_area.abs() < TOLERANCE {
                    return Err(DecompositionError::DegenerateFace { index }.into());
                }
            }
            return Ok(faces);
        }

        tracing::trace!(bridges = bridges.len(), "removing cut edges");
        for e in bridges {
            arrangement.remove_edge(e);
        }
    }
}

/// Walks every face cycle of an arrangement whose outgoing edges are sorted.
fn trace_faces(arrangement: &Arrangement) -> Result<Vec<FaceCycle>> {
    let mut visited: HashSet<EdgeId> = HashSet::new();
    let mut faces = Vec::new();
    let limit = arrangement.half_edge_count();

    for start in arrangement.edge_ids() {
        if visited.contains(&start) {
            continue;
        }

        let mut edges = Vec::new();
        let mut current = start;
        loop {
            if !visited.insert(current) || edges.len() > limit {
                return Err(DecompositionError::DegenerateFace { index: faces.len() }.into());
            }
            edges.push(current);
            match arrangement.next_in_face(current) {
                Some(next) if next == start => break,
                Some(next) => current = next,
                None => {
                    return Err(DecompositionError::DegenerateFace { index: faces.len() }.into())
                }
            }
        }

        let vertices: Vec<VertexId> = edges
            .iter()
            .filter_map(|&e| arrangement.edge(e).map(|d| d.origin))
            .collect();
        let points: Vec<Point2> = vertices
            .iter()
            .filter_map(|&v| arrangement.point(v))
            .collect();
        let signed_area = signed_area_2d(&points);
        faces.push(FaceCycle {
            edges,
            vertices,
            points,
            signed_area,
        });
    }

    Ok(faces)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::ClosedCurve;
    use crate::operations::decompose::split::build_arrangement;

    fn faces_of(coords: &[(f64, f64)]) -> Vec<FaceCycle> {
        let curve = ClosedCurve::from_coords(coords).unwrap();
        let mut arr = build_arrangement(&curve);
        reduce_and_trace(&mut arr).unwrap()
    }

    #[test]
    fn square_has_one_bounded_and_one_outer_face() {
        let faces = faces_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(faces.len(), 2);
        let bounded: Vec<_> = faces.iter().filter(|f| f.is_bounded()).collect();
        assert_eq!(bounded.len(), 1);
        assert!((bounded[0].signed_area - 1.0).abs() < 1e-10);
    }

    #[test]
    fn clockwise_square_still_bounded_ccw() {
        let faces = faces_of(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let bounded: Vec<_> = faces.iter().filter(|f| f.is_bounded()).collect();
        assert_eq!(bounded.len(), 1);
        assert!(bounded[0].signed_area > 0.0);
    }

    #[test]
    fn figure_eight_has_two_lobes() {
        let faces = faces_of(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
        let bounded = faces.iter().filter(|f| f.is_bounded()).count();
        assert_eq!(bounded, 2);
    }

    #[test]
    fn spike_is_pruned() {
        // Triangle with a spike going out to (5, 0) and straight back.
        let faces = faces_of(&[(0.0, 0.0), (2.0, 0.0), (5.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
        assert_eq!(faces.len(), 2);
        let bounded: Vec<_> = faces.iter().filter(|f| f.is_bounded()).collect();
        assert_eq!(bounded.len(), 1);
        assert!((bounded[0].signed_area - 2.0).abs() < 1e-10);
    }

    #[test]
    fn bridge_between_loops_is_removed() {
        // Two squares joined by a corridor walked in both directions.
        let faces = faces_of(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (3.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (3.0, 1.0),
            (3.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
        ]);
        let bounded = faces.iter().filter(|f| f.is_bounded()).count();
        let outer = faces.iter().filter(|f| !f.is_bounded()).count();
        assert_eq!(bounded, 2);
        assert_eq!(outer, 2);
    }

    #[test]
    fn collinear_curve_has_no_faces() {
        let faces = faces_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!(faces.is_empty());
    }
}

use std::collections::{HashMap, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{DecompositionError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

use super::Triangle;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the filled interior of a simple ring.
pub struct TessellateRing<'a> {
    points: &'a [Point2],
}

impl<'a> TessellateRing<'a> {
    /// Creates a new `TessellateRing` operation over an open simple ring.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the triangulation, returning counter-clockwise triangles that
    /// exactly cover the ring's interior.
    ///
    /// # Errors
    ///
    /// Returns `DecompositionError::Triangulation` if the ring has fewer than
    /// 3 points or a point cannot be inserted.
    pub fn execute(&self) -> Result<Vec<Triangle>> {
        if self.points.len() < 3 {
            return Err(DecompositionError::Triangulation(
                "constraint loop needs at least 3 points".to_owned(),
            )
            .into());
        }

        let mut cdt = Cdt::new();
        let mut handles = Vec::with_capacity(self.points.len());
        for p in self.points {
            let h = cdt.insert(SpadePoint2::new(p.x, p.y)).map_err(|e: InsertionError| {
                DecompositionError::Triangulation(format!("CDT insert: {e}"))
            })?;
            handles.push(h);
        }
        for i in 0..handles.len() {
            let from = handles[i];
            let to = handles[(i + 1) % handles.len()];
            if from != to {
                cdt.add_constraint(from, to);
            }
        }

        let depths = constraint_depths(&cdt);
        let mut triangles = Vec::new();
        for face in cdt.inner_faces() {
            if depths.get(&face.fix().index()).is_none_or(|d| d % 2 == 0) {
                continue;
            }
            let [a, b, c] = face.vertices().map(|v| {
                let pos = v.position();
                Point2::new(pos.x, pos.y)
            });
            let mut tri = [a, b, c];
            if signed_area_2d(&tri) < 0.0 {
                tri.swap(1, 2);
            }
            triangles.push(tri);
        }
        Ok(triangles)
    }
}

/// Number of constraint edges crossed to reach each inner face from the
/// outside. Odd depth means the face is inside the ring.
fn constraint_depths(cdt: &Cdt) -> HashMap<usize, u32> {
    let mut depths: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();
    let outer = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depths.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depths.insert(idx, depth);
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((fix, depth)) = queue.pop_front() {
        for edge in cdt.face(fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let idx = neighbor.fix().index();
            if depths.contains_key(&idx) {
                continue;
            }
            let next = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depths.insert(idx, next);
            queue.push_back((neighbor.fix(), next));
        }
    }

    depths
}

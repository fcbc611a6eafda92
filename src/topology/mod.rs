pub mod edge;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use vertex::{VertexData, VertexId};

use slotmap::SlotMap;

use crate::math::{coincident, Point2};

/// Planar arrangement: the graph of curve sub-segments split at every
/// crossing.
///
/// Nodes and half-edges live in arenas and refer to each other via typed IDs
/// (generational indices), so edges can be removed while walking the graph.
#[derive(Debug, Default)]
pub struct Arrangement {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
}

impl Arrangement {
    /// Creates a new, empty arrangement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Returns the node at `point`, inserting one if no existing node lies
    /// within the snap tolerance.
    pub fn ensure_vertex(&mut self, point: Point2) -> VertexId {
        if let Some((id, _)) = self
            .vertices
            .iter()
            .find(|(_, v)| coincident(&v.point, &point))
        {
            return id;
        }
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns the node data, or `None` if the node does not exist.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&VertexData> {
        self.vertices.get(id)
    }

    /// Position of a node, or `None` if the node does not exist.
    #[must_use]
    pub fn point(&self, id: VertexId) -> Option<Point2> {
        self.vertices.get(id).map(|v| v.point)
    }

    /// Iterates over all nodes.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Connects two nodes with a pair of twin half-edges and returns the one
    /// leaving `from`.
    ///
    /// Returns `None` for a loop (`from == to`). If the nodes are already
    /// connected the existing half-edge is returned, so overlapping curve
    /// stretches collapse into a single edge.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        if from == to || !self.vertices.contains_key(from) || !self.vertices.contains_key(to) {
            return None;
        }
        if let Some(existing) = self.find_edge(from, to) {
            return Some(existing);
        }

        let forward = self.edges.insert(EdgeData {
            origin: from,
            target: to,
            twin: EdgeId::default(),
        });
        let backward = self.edges.insert(EdgeData {
            origin: to,
            target: from,
            twin: forward,
        });
        if let Some(edge) = self.edges.get_mut(forward) {
            edge.twin = backward;
        }
        if let Some(v) = self.vertices.get_mut(from) {
            v.outgoing.push(forward);
        }
        if let Some(v) = self.vertices.get_mut(to) {
            v.outgoing.push(backward);
        }
        Some(forward)
    }

    /// Finds the half-edge going from `from` to `to`.
    #[must_use]
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.vertices
            .get(from)?
            .outgoing
            .iter()
            .copied()
            .find(|&e| self.edges.get(e).is_some_and(|d| d.target == to))
    }

    /// Returns the half-edge data, or `None` if the half-edge does not exist.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&EdgeData> {
        self.edges.get(id)
    }

    /// Iterates over all half-edge IDs.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys()
    }

    /// Number of half-edges (twice the number of edges).
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Removes a half-edge together with its twin.
    pub fn remove_edge(&mut self, id: EdgeId) {
        let Some(data) = self.edges.remove(id) else {
            return;
        };
        self.edges.remove(data.twin);
        if let Some(v) = self.vertices.get_mut(data.origin) {
            v.outgoing.retain(|&e| e != id);
        }
        if let Some(v) = self.vertices.get_mut(data.target) {
            v.outgoing.retain(|&e| e != data.twin);
        }
    }

    /// Repeatedly removes edges ending in a node of degree 1. Such dangling
    /// chains never bound a face. Returns the number of edges removed.
    pub fn prune_dangling(&mut self) -> usize {
        let mut removed = 0;
        loop {
            let dangling: Vec<EdgeId> = self
                .vertices
                .values()
                .filter(|v| v.degree() == 1)
                .filter_map(|v| v.outgoing.first().copied())
                .collect();
            if dangling.is_empty() {
                break;
            }
            for e in dangling {
                if self.edges.contains_key(e) {
                    self.remove_edge(e);
                    removed += 1;
                }
            }
        }
        self.vertices.retain(|_, v| v.degree() > 0);
        removed
    }

    /// Sorts the outgoing half-edges of every node counter-clockwise by
    /// direction angle.
    pub fn sort_outgoing(&mut self) {
        let sorted: Vec<(VertexId, Vec<EdgeId>)> = self
            .vertices
            .iter()
            .map(|(id, v)| {
                let mut keyed: Vec<(f64, EdgeId)> = v
                    .outgoing
                    .iter()
                    .filter_map(|&e| {
                        let target = self.point(self.edges.get(e)?.target)?;
                        let d = target - v.point;
                        Some((d.y.atan2(d.x), e))
                    })
                    .collect();
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
                (id, keyed.into_iter().map(|(_, e)| e).collect())
            })
            .collect();
        for (id, outgoing) in sorted {
            if let Some(v) = self.vertices.get_mut(id) {
                v.outgoing = outgoing;
            }
        }
    }

    /// The half-edge following `id` around its face, keeping the face on the
    /// left: at the target node, the outgoing edge just clockwise of the twin.
    ///
    /// Requires [`Arrangement::sort_outgoing`] to have run since the last
    /// structural change.
    #[must_use]
    pub fn next_in_face(&self, id: EdgeId) -> Option<EdgeId> {
        let edge = self.edges.get(id)?;
        let around = &self.vertices.get(edge.target)?.outgoing;
        let k = around.iter().position(|&e| e == edge.twin)?;
        Some(around[(k + around.len() - 1) % around.len()])
    }
}

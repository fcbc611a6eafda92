use crate::math::Point2;

use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a node of the planar arrangement.
    pub struct VertexId;
}

/// A node of the arrangement: a curve vertex or a crossing.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The position of the node.
    pub point: Point2,
    /// Half-edges leaving this node. Counter-clockwise by direction angle
    /// once [`Arrangement::sort_outgoing`](super::Arrangement::sort_outgoing)
    /// has run.
    pub outgoing: Vec<EdgeId>,
}

impl VertexData {
    /// Creates a new node at the given point with no incident edges.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            outgoing: Vec::new(),
        }
    }

    /// Number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.outgoing.len()
    }
}

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge of the planar arrangement.
    pub struct EdgeId;
}

/// One direction of an arrangement edge.
///
/// Every sub-segment of the curve is stored as two half-edges pointing in
/// opposite directions and referring to each other through `twin`.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Node this half-edge leaves from.
    pub origin: VertexId,
    /// Node this half-edge points to.
    pub target: VertexId,
    /// The opposite half-edge.
    pub twin: EdgeId,
}

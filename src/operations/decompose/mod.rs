//! Planar decomposition of a diagram curve.
//!
//! The curve is split at all of its self-intersections into a planar
//! arrangement, reduced to the edges that separate faces and
//! walked face by face. Bounded faces become the regions; their
//! union yields the boundary.

mod boundary;
mod faces;
mod regions;
mod split;

pub use boundary::ComputeBoundary;
pub use regions::ComputeRegions;

mod tessellate_ring;

pub use tessellate_ring::TessellateRing;

use crate::math::Point2;

/// A triangle of a ring tessellation, counter-clockwise.
pub type Triangle = [Point2; 3];

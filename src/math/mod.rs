pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons of parameters,
/// cross products and areas.
pub const TOLERANCE: f64 = 1e-10;

/// Distance under which two points of the planar arrangement are treated as
/// the same node (crossings landing on a vertex, near-coincident vertices).
pub const SNAP_TOLERANCE: f64 = 1e-7;

/// Returns `true` if `a` and `b` are within [`SNAP_TOLERANCE`] of each other.
#[must_use]
pub fn coincident(a: &Point2, b: &Point2) -> bool {
    nalgebra::distance_squared(a, b) < SNAP_TOLERANCE * SNAP_TOLERANCE
}

/// Total lexicographic order on points: by x, then by y.
#[must_use]
pub fn lex_cmp(a: &Point2, b: &Point2) -> std::cmp::Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

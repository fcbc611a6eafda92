use super::distance_2d::point_to_segment_dist;
use super::intersect_2d::{segment_contact_2d, SegmentContact};
use super::{coincident, lex_cmp, Point2, SNAP_TOLERANCE, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// The polygon is given open: the closing edge from the last point back to
/// the first is implicit. Positive for counter-clockwise, negative for
/// clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates an open polygon so it starts at its lexicographically smallest
/// vertex (smallest x, ties broken by smallest y).
///
/// For a ring with distinct vertices this is the lexicographically smallest
/// rotation of its coordinate sequence, which makes the output deterministic.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    let Some(best) = (0..points.len()).min_by(|&i, &j| lex_cmp(&points[i], &points[j])) else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Checks whether an open polygon is a simple ring.
///
/// A simple ring has at least 3 distinct vertices, no repeated vertex, and no
/// two edges that meet anywhere except at the shared vertex of neighbouring
/// edges.
#[must_use]
pub fn is_simple_ring(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if coincident(&points[i], &points[j]) {
                return false;
            }
        }
    }

    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in (i + 1)..n {
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match segment_contact_2d(a0, a1, b0, b1) {
                None => {}
                // Neighbours share exactly one vertex; anything more is a fold.
                Some(SegmentContact::Overlap { on_a, .. }) => {
                    if !adjacent || shared_extent(on_a) > TOLERANCE {
                        return false;
                    }
                }
                Some(SegmentContact::Crossing { .. }) if !adjacent => return false,
                Some(SegmentContact::Crossing { t, u }) => {
                    let shared = if j == i + 1 {
                        (t - 1.0).abs() < TOLERANCE && u.abs() < TOLERANCE
                    } else {
                        t.abs() < TOLERANCE && (u - 1.0).abs() < TOLERANCE
                    };
                    if !shared {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Length, in parameter units of the first segment, of the stretch a collinear
/// segment shares with it.
fn shared_extent(on_a: [f64; 2]) -> f64 {
    let lo = on_a[0].min(on_a[1]).max(0.0);
    let hi = on_a[0].max(on_a[1]).min(1.0);
    hi - lo
}

/// Returns `true` if `p` lies within [`SNAP_TOLERANCE`] of one of the edges of
/// the open polygon.
#[must_use]
pub fn point_on_ring(p: &Point2, points: &[Point2]) -> bool {
    let n = points.len();
    (0..n).any(|i| point_to_segment_dist(p, &points[i], &points[(i + 1) % n]) < SNAP_TOLERANCE)
}

/// Even-odd point-in-polygon test. Points on the outline give an unspecified
/// answer; use [`point_on_ring`] first when that matters.
#[must_use]
pub fn point_in_polygon(p: &Point2, points: &[Point2]) -> bool {
    let n = points.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let pi = &points[i];
        let pj = &points[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pj.x + (p.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

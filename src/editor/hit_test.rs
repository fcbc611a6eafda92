use crate::math::distance_2d::{point_dist, point_to_segment_dist};
use crate::math::Point2;

use super::transform::ScreenTransform;

/// Index of the point nearest to `cursor` in screen space, if it is closer
/// than `epsilon` pixels. Ties go to the lowest index.
#[must_use]
pub fn vertex_under<T: ScreenTransform + ?Sized>(
    points: &[Point2],
    cursor: &Point2,
    transform: &T,
    epsilon: f64,
) -> Option<usize> {
    let cursor = transform.to_screen(cursor);
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = point_dist(&transform.to_screen(p), &cursor);
        if best.is_none_or(|(_, min)| d < min) {
            best = Some((i, d));
        }
    }
    best.filter(|&(_, d)| d < epsilon).map(|(i, _)| i)
}

/// Index `i` of the first segment `(points[i], points[i + 1])` within
/// `epsilon` pixels of `cursor`.
#[must_use]
pub fn segment_under<T: ScreenTransform + ?Sized>(
    points: &[Point2],
    cursor: &Point2,
    transform: &T,
    epsilon: f64,
) -> Option<usize> {
    let cursor = transform.to_screen(cursor);
    points.windows(2).position(|w| {
        let a = transform.to_screen(&w[0]);
        let b = transform.to_screen(&w[1]);
        point_to_segment_dist(&cursor, &a, &b) <= epsilon
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{IdentityTransform, ViewTransform};
    use crate::math::Vector2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 100.0), p(0.0, 0.0)]
    }

    #[test]
    fn nearest_vertex_within_epsilon() {
        let pts = square();
        assert_eq!(vertex_under(&pts, &p(98.0, 3.0), &IdentityTransform, 5.0), Some(1));
        assert_eq!(vertex_under(&pts, &p(50.0, 50.0), &IdentityTransform, 5.0), None);
    }

    #[test]
    fn exactly_epsilon_away_is_a_miss() {
        let pts = square();
        assert_eq!(vertex_under(&pts, &p(105.0, 0.0), &IdentityTransform, 5.0), None);
    }

    #[test]
    fn closing_point_resolves_to_first_vertex() {
        let pts = square();
        assert_eq!(vertex_under(&pts, &p(1.0, 1.0), &IdentityTransform, 5.0), Some(0));
    }

    #[test]
    fn tolerance_is_in_screen_pixels() {
        // One curve unit is 100 pixels, so 0.03 units is 3 pixels.
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        let view = ViewTransform::new(100.0, Vector2::zeros());
        assert_eq!(vertex_under(&pts, &p(1.03, 0.0), &view, 5.0), Some(1));
        assert_eq!(vertex_under(&pts, &p(1.03, 0.0), &IdentityTransform, 0.01), None);
    }

    #[test]
    fn first_segment_in_traversal_order_wins() {
        let pts = square();
        assert_eq!(segment_under(&pts, &p(50.0, 2.0), &IdentityTransform, 5.0), Some(0));
        assert_eq!(segment_under(&pts, &p(101.0, 50.0), &IdentityTransform, 5.0), Some(1));
        // Near the corner both segment 0 and 1 qualify.
        assert_eq!(segment_under(&pts, &p(99.0, 1.0), &IdentityTransform, 5.0), Some(0));
        assert_eq!(segment_under(&pts, &p(50.0, 50.0), &IdentityTransform, 5.0), None);
    }

    #[test]
    fn segment_distance_is_clamped_to_endpoints() {
        let pts = square();
        assert_eq!(segment_under(&pts, &p(120.0, -3.0), &IdentityTransform, 5.0), None);
    }
}

use crate::geometry::ClosedCurve;
use crate::math::intersect_2d::{point_at, segment_contact_2d, SegmentContact};
use crate::math::{coincident, Point2, TOLERANCE};
use crate::topology::Arrangement;

/// Builds the planar arrangement of a closed curve.
///
/// Every segment is split at the parameters where any other segment crosses,
/// touches, or runs along it. Split points within the snap tolerance share a
/// node, and sub-segments covered more than once become a single edge.
pub fn build_arrangement(curve: &ClosedCurve) -> Arrangement {
    let segments = collect_segments(curve);
    let splits = split_parameters(&segments);

    let mut arrangement = Arrangement::new();
    for ((a, b), mut params) in segments.into_iter().zip(splits) {
        params.sort_by(f64::total_cmp);
        params.dedup_by(|x, y| (*x - *y).abs() < TOLERANCE);

        let nodes: Vec<_> = params
            .iter()
            .map(|&t| arrangement.ensure_vertex(point_at(&a, &b, t)))
            .collect();
        for w in nodes.windows(2) {
            arrangement.add_edge(w[0], w[1]);
        }
    }
    arrangement
}

/// Collects the curve's segments, skipping zero-length ones.
fn collect_segments(curve: &ClosedCurve) -> Vec<(Point2, Point2)> {
    curve
        .segments()
        .filter(|(a, b)| !coincident(a, b))
        .map(|(a, b)| (*a, *b))
        .collect()
}

/// For each segment, the parameters at which it must be split, unsorted and
/// always including both endpoints.
fn split_parameters(segments: &[(Point2, Point2)]) -> Vec<Vec<f64>> {
    let mut splits = vec![vec![0.0, 1.0]; segments.len()];

    for i in 0..segments.len() {
        let (a0, a1) = &segments[i];
        for j in (i + 1)..segments.len() {
            let (b0, b1) = &segments[j];
            match segment_contact_2d(a0, a1, b0, b1) {
                None => {}
                Some(SegmentContact::Crossing { t, u }) => {
                    splits[i].push(t);
                    splits[j].push(u);
                }
                Some(SegmentContact::Overlap { on_a, on_b }) => {
                    splits[i].extend(on_a.into_iter().filter(|t| *t > 0.0 && *t < 1.0));
                    splits[j].extend(on_b.into_iter().filter(|u| *u > 0.0 && *u < 1.0));
                }
            }
        }
    }

    splits
}

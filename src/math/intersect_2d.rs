use super::{Point2, SNAP_TOLERANCE, TOLERANCE};

/// How two line segments `a0→a1` and `b0→b1` meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentContact {
    /// The segments meet in a single point at parameter `t` on `a` and `u`
    /// on `b`, both clamped to `[0, 1]`.
    Crossing { t: f64, u: f64 },
    /// The segments are collinear and share a stretch. `on_a` holds the
    /// parameters of `b0`, `b1` projected onto `a`; `on_b` those of `a0`, `a1`
    /// projected onto `b`. Projections may fall outside `[0, 1]`.
    Overlap { on_a: [f64; 2], on_b: [f64; 2] },
}

/// Bounded segment-segment intersection in 2D.
///
/// Endpoint touches count as crossings. Parallel segments only meet if they
/// are collinear (within [`SNAP_TOLERANCE`]) and their extents overlap.
#[must_use]
pub fn segment_contact_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<SegmentContact> {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return None;
    }

    let cross = da.perp(&db);
    let w = b0 - a0;

    if cross.abs() <= TOLERANCE * len_a * len_b {
        // Parallel: only collinear overlaps matter.
        if w.perp(&da).abs() / len_a > SNAP_TOLERANCE {
            return None;
        }
        let on_a = [
            w.dot(&da) / (len_a * len_a),
            (b1 - a0).dot(&da) / (len_a * len_a),
        ];
        let on_b = [
            (a0 - b0).dot(&db) / (len_b * len_b),
            (a1 - b0).dot(&db) / (len_b * len_b),
        ];
        let lo = on_a[0].min(on_a[1]);
        let hi = on_a[0].max(on_a[1]);
        let eps = SNAP_TOLERANCE / len_a;
        if hi < -eps || lo > 1.0 + eps {
            return None;
        }
        return Some(SegmentContact::Overlap { on_a, on_b });
    }

    let t = w.perp(&db) / cross;
    let u = w.perp(&da) / cross;

    // Small slack so crossings at vertices are not lost to rounding.
    let eps_t = SNAP_TOLERANCE / len_a;
    let eps_u = SNAP_TOLERANCE / len_b;
    if t >= -eps_t && t <= 1.0 + eps_t && u >= -eps_u && u <= 1.0 + eps_u {
        Some(SegmentContact::Crossing {
            t: t.clamp(0.0, 1.0),
            u: u.clamp(0.0, 1.0),
        })
    } else {
        None
    }
}

/// Linear interpolation along a segment: `a + (b - a) * t`.
#[must_use]
pub fn point_at(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn crossing_x_shape() {
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0));
        let Some(SegmentContact::Crossing { t, u }) = hit else {
            panic!("expected crossing, got {hit:?}");
        };
        assert!((t - 0.5).abs() < TOL);
        assert!((u - 0.5).abs() < TOL);
    }

    #[test]
    fn disjoint_segments() {
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, -1.0), &p(2.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn endpoint_touch_is_crossing() {
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0));
        let Some(SegmentContact::Crossing { t, u }) = hit else {
            panic!("expected crossing, got {hit:?}");
        };
        assert!((t - 1.0).abs() < TOL);
        assert!(u.abs() < TOL);
    }

    #[test]
    fn t_junction() {
        // b starts in the middle of a.
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(1.0, 0.0), &p(1.0, 3.0));
        let Some(SegmentContact::Crossing { t, u }) = hit else {
            panic!("expected crossing, got {hit:?}");
        };
        assert!((t - 0.25).abs() < TOL);
        assert!(u.abs() < TOL);
    }

    #[test]
    fn parallel_offset_segments_do_not_meet() {
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 1.0), &p(4.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn collinear_overlap_reports_projections() {
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(3.0, 0.0), &p(1.0, 0.0));
        let Some(SegmentContact::Overlap { on_a, on_b }) = hit else {
            panic!("expected overlap, got {hit:?}");
        };
        assert!((on_a[0] - 0.75).abs() < TOL);
        assert!((on_a[1] - 0.25).abs() < TOL);
        // a0 = (0,0) projects to u = 1.5 on b, a1 = (4,0) to u = -0.5.
        assert!((on_b[0] - 1.5).abs() < TOL);
        assert!((on_b[1] + 0.5).abs() < TOL);
    }

    #[test]
    fn collinear_disjoint_segments_do_not_meet() {
        let hit = segment_contact_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), &p(3.0, 0.0));
        assert!(hit.is_none());
    }

    #[test]
    fn point_at_midpoint() {
        let m = point_at(&p(0.0, 0.0), &p(2.0, 4.0), 0.5);
        assert!((m.x - 1.0).abs() < TOL);
        assert!((m.y - 2.0).abs() < TOL);
    }
}

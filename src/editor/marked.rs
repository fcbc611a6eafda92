//! Renumbering of vertex indices (the marked and the dragged vertex) across
//! structural edits.

/// Marked index after removing vertex `removed`: cleared if the marked
/// vertex itself goes, shifted down if it sat after the removed one.
#[must_use]
pub fn after_delete(marked: Option<usize>, removed: usize) -> Option<usize> {
    match marked {
        Some(m) if m == removed => None,
        Some(m) if m > removed => Some(m - 1),
        other => other,
    }
}

/// Marked index after inserting a vertex into segment `segment`, which puts
/// the new vertex at `segment + 1`.
#[must_use]
pub fn after_insert(marked: Option<usize>, segment: usize) -> Option<usize> {
    match marked {
        Some(m) if m > segment => Some(m + 1),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_before_marked_shifts_down() {
        assert_eq!(after_delete(Some(5), 3), Some(4));
    }

    #[test]
    fn delete_marked_clears() {
        assert_eq!(after_delete(Some(4), 4), None);
    }

    #[test]
    fn delete_after_marked_keeps() {
        assert_eq!(after_delete(Some(2), 6), Some(2));
        assert_eq!(after_delete(None, 1), None);
    }

    #[test]
    fn insert_shifts_only_later_indices() {
        // Segment 2 is (v2, v3); the new vertex becomes index 3.
        assert_eq!(after_insert(Some(3), 2), Some(4));
        assert_eq!(after_insert(Some(2), 2), Some(2));
        assert_eq!(after_insert(Some(0), 5), Some(0));
        assert_eq!(after_insert(None, 0), None);
    }
}

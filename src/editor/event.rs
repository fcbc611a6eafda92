/// Pointer button reported with press and release events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input event delivered to an [`EditSession`](super::EditSession).
///
/// Pointer positions are in curve coordinates; the session maps them to the
/// screen through its [`ScreenTransform`](super::ScreenTransform) for hit
/// testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    PointerDown { x: f64, y: f64, button: PointerButton },
    PointerMove { x: f64, y: f64 },
    PointerUp { button: PointerButton },
    KeyPress { key: char },
}

/// Editing commands bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// `d`: delete the vertex under the pointer.
    Delete,
    /// `i`: insert a vertex into the segment under the pointer.
    Insert,
    /// `x`: insert a vertex and make it the marked point.
    InsertMarked,
}

impl EditKey {
    /// Maps a key to its command, or `None` for unbound keys.
    #[must_use]
    pub fn from_char(key: char) -> Option<Self> {
        match key {
            'd' => Some(Self::Delete),
            'i' => Some(Self::Insert),
            'x' => Some(Self::InsertMarked),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys() {
        assert_eq!(EditKey::from_char('d'), Some(EditKey::Delete));
        assert_eq!(EditKey::from_char('i'), Some(EditKey::Insert));
        assert_eq!(EditKey::from_char('x'), Some(EditKey::InsertMarked));
        assert_eq!(EditKey::from_char('D'), None);
        assert_eq!(EditKey::from_char(' '), None);
    }
}

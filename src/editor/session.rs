use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::diagram::Diagram;
use crate::error::{EditorError, Result};
use crate::geometry::ClosedCurve;
use crate::math::Point2;

use super::event::{EditKey, EditorEvent, PointerButton};
use super::hit_test::{segment_under, vertex_under};
use super::marked::{after_delete, after_insert};
use super::transform::ScreenTransform;

/// Parameters for interactive editing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Hit tolerance in screen pixels for vertices and segments.
    pub epsilon: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { epsilon: 5.0 }
    }
}

/// Whether the session is currently moving a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Dragging(usize),
}

/// A snapshot of the working curve handed to the host after each user
/// action.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Closed point sequence.
    pub points: Vec<Point2>,
    /// Marked vertex, indexing `points` without the closing duplicate.
    pub marked: Option<usize>,
}

/// Receives the commits of an edit session.
pub trait CommitSink {
    /// Applies a commit.
    ///
    /// # Errors
    ///
    /// Whatever the receiver fails with; the error is returned from
    /// [`EditSession::handle_event`].
    fn commit(&mut self, commit: &Commit) -> Result<()>;
}

impl<F> CommitSink for F
where
    F: FnMut(&Commit) -> Result<()>,
{
    fn commit(&mut self, commit: &Commit) -> Result<()> {
        self(commit)
    }
}

impl CommitSink for Vec<Commit> {
    fn commit(&mut self, commit: &Commit) -> Result<()> {
        self.push(commit.clone());
        Ok(())
    }
}

impl CommitSink for Rc<RefCell<Diagram>> {
    fn commit(&mut self, commit: &Commit) -> Result<()> {
        self.borrow_mut().set_curve(commit.points.iter().copied())
    }
}

/// Non-reentrant flag marking a diagram as being edited.
#[derive(Debug, Clone, Default)]
pub(crate) struct EditLatch(Rc<Cell<bool>>);

impl EditLatch {
    pub(crate) fn acquire(&self) -> Result<BusyGuard> {
        if self.0.get() {
            return Err(EditorError::Busy.into());
        }
        self.0.set(true);
        Ok(BusyGuard(Rc::clone(&self.0)))
    }

    pub(crate) fn is_held(&self) -> bool {
        self.0.get()
    }
}

/// Releases its latch when dropped.
#[derive(Debug)]
pub(crate) struct BusyGuard(Rc<Cell<bool>>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// An open interactive editing session over a working copy of a curve.
///
/// Events are processed one at a time. Every pointer release and every
/// structural edit hands a [`Commit`] to the sink. The diagram the session
/// was opened on stays locked against other sessions until this one is
/// closed or dropped.
pub struct EditSession<T, S> {
    points: Vec<Point2>,
    marked: Option<usize>,
    state: EditorState,
    cursor: Option<Point2>,
    config: EditorConfig,
    transform: T,
    sink: S,
    _guard: BusyGuard,
}

impl<T, S> EditSession<T, S>
where
    T: ScreenTransform,
    S: CommitSink,
{
    pub(crate) fn open(
        curve: &ClosedCurve,
        marked: Option<usize>,
        transform: T,
        sink: S,
        guard: BusyGuard,
    ) -> Result<Self> {
        let len = curve.vertex_count();
        if let Some(index) = marked.filter(|&m| m >= len) {
            return Err(EditorError::MarkedOutOfRange { index, len }.into());
        }
        tracing::debug!(vertices = len, ?marked, "edit session opened");
        Ok(Self {
            points: curve.points().to_vec(),
            marked,
            state: EditorState::Idle,
            cursor: None,
            config: EditorConfig::default(),
            transform,
            sink,
            _guard: guard,
        })
    }

    /// Starts a session that is not attached to a diagram.
    ///
    /// # Errors
    ///
    /// Returns the curve error if `points` do not form a valid closed curve,
    /// and `EditorError::MarkedOutOfRange` for a bad marked index.
    pub fn from_points<I>(points: I, marked: Option<usize>, transform: T, sink: S) -> Result<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let curve = ClosedCurve::new(points)?;
        let guard = EditLatch::default().acquire()?;
        Self::open(&curve, marked, transform, sink, guard)
    }

    /// Replaces the editor configuration.
    #[must_use]
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// The working closed point sequence.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The working marked index.
    #[must_use]
    pub fn marked(&self) -> Option<usize> {
        self.marked
    }

    /// The current drag state.
    #[must_use]
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The editor configuration in effect.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Gives access to the sink, e.g. to inspect what it has received.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Ends the session and releases the diagram.
    pub fn close(self) {
        tracing::debug!("edit session closed");
    }

    /// Processes one input event.
    ///
    /// # Errors
    ///
    /// Only errors returned by the commit sink; events that do not apply in
    /// the current state are ignored.
    pub fn handle_event(&mut self, event: EditorEvent) -> Result<()> {
        match event {
            EditorEvent::PointerDown { x, y, button } => {
                self.pointer_down(Point2::new(x, y), button);
                Ok(())
            }
            EditorEvent::PointerMove { x, y } => {
                self.pointer_move(Point2::new(x, y));
                Ok(())
            }
            EditorEvent::PointerUp { button } => self.pointer_up(button),
            EditorEvent::KeyPress { key } => self.key_press(key),
        }
    }

    fn pointer_down(&mut self, pos: Point2, button: PointerButton) {
        self.cursor = Some(pos);
        if button != PointerButton::Primary {
            return;
        }
        self.state = match vertex_under(&self.points, &pos, &self.transform, self.config.epsilon) {
            Some(i) => EditorState::Dragging(i),
            None => EditorState::Idle,
        };
        tracing::trace!(state = ?self.state, "pointer down");
    }

    fn pointer_move(&mut self, pos: Point2) {
        self.cursor = Some(pos);
        let EditorState::Dragging(i) = self.state else {
            return;
        };
        let last = self.points.len() - 1;
        self.points[i] = pos;
        if i == 0 {
            self.points[last] = pos;
        } else if i == last {
            self.points[0] = pos;
        }
        tracing::trace!(vertex = i, x = pos.x, y = pos.y, "dragged");
    }

    fn pointer_up(&mut self, button: PointerButton) -> Result<()> {
        if button != PointerButton::Primary {
            return Ok(());
        }
        self.state = EditorState::Idle;
        self.commit()
    }

    fn key_press(&mut self, key: char) -> Result<()> {
        let (Some(command), Some(cursor)) = (EditKey::from_char(key), self.cursor) else {
            return Ok(());
        };
        match command {
            EditKey::Delete => self.delete_vertex(&cursor),
            EditKey::Insert => self.insert_vertex(cursor, false),
            EditKey::InsertMarked => self.insert_vertex(cursor, true),
        }
    }

    fn delete_vertex(&mut self, cursor: &Point2) -> Result<()> {
        let Some(j) = vertex_under(&self.points, cursor, &self.transform, self.config.epsilon)
        else {
            return Ok(());
        };
        // Vertex 0 anchors the closing point; the closing point never wins a
        // hit because it ties with vertex 0.
        if j == 0 || j == self.points.len() - 1 {
            return Ok(());
        }

        let mut remaining = self.points.clone();
        remaining.remove(j);
        if ClosedCurve::new(remaining.iter().copied()).is_err() {
            tracing::trace!(vertex = j, "delete would leave too few vertices");
            return Ok(());
        }

        self.points = remaining;
        self.marked = after_delete(self.marked, j);
        if let EditorState::Dragging(i) = self.state {
            self.state = after_delete(Some(i), j).map_or(EditorState::Idle, EditorState::Dragging);
        }
        tracing::trace!(vertex = j, marked = ?self.marked, state = ?self.state, "deleted vertex");
        self.commit()
    }

    fn insert_vertex(&mut self, cursor: Point2, mark: bool) -> Result<()> {
        let Some(i) = segment_under(&self.points, &cursor, &self.transform, self.config.epsilon)
        else {
            return Ok(());
        };
        self.points.insert(i + 1, cursor);
        self.marked = if mark {
            Some(i + 1)
        } else {
            after_insert(self.marked, i)
        };
        if let EditorState::Dragging(d) = self.state {
            self.state = after_insert(Some(d), i).map_or(EditorState::Idle, EditorState::Dragging);
        }
        tracing::trace!(segment = i, marked = ?self.marked, state = ?self.state, "inserted vertex");
        self.commit()
    }

    fn commit(&mut self) -> Result<()> {
        let commit = Commit {
            points: self.points.clone(),
            marked: self.marked,
        };
        tracing::debug!(points = commit.points.len(), marked = ?commit.marked, "commit");
        self.sink.commit(&commit)
    }
}

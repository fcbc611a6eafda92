//! Pointer and keyboard editing of a diagram curve.
//!
//! An [`EditSession`] owns a working copy of the curve. Vertices are dragged
//! with the primary button; `d` deletes the vertex under the pointer, `i`
//! inserts one into the segment under the pointer and `x` does the same and
//! makes the new vertex the marked point. Each release and each structural
//! edit is handed to a [`CommitSink`].

mod event;
mod hit_test;
mod marked;
mod session;
mod transform;

pub use event::{EditKey, EditorEvent, PointerButton};
pub use hit_test::{segment_under, vertex_under};
pub use marked::{after_delete, after_insert};
pub(crate) use session::EditLatch;
pub use session::{Commit, CommitSink, EditSession, EditorConfig, EditorState};
pub use transform::{IdentityTransform, ScreenTransform, ViewTransform};

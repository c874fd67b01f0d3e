//! Capabilities the folding core borrows from its host editor.
//!
//! The core never owns document text, cursor state or collapsed ranges; it
//! reaches them through these traits. [`crate::TextBuffer`] is an in-memory
//! implementation used by the CLI and the tests.

/// Cursor position as a zero-based line and a byte column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    #[must_use]
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Read-only line access, stable for the duration of one invocation.
pub trait Document {
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator; empty past the end.
    fn line_text(&self, index: usize) -> &str;
}

/// Document access plus cursor and offset conversion.
pub trait Editor: Document {
    fn offset_to_position(&self, offset: usize) -> Position;
    fn position_to_offset(&self, position: Position) -> usize;
    fn cursor(&self) -> Position;
    fn set_cursor(&mut self, position: Position);
}

/// The primitive that actually collapses and expands ranges.
pub trait FoldEngine {
    /// Run the host's toggle-fold command at the current selection.
    ///
    /// Returns `false` when the command did not execute.
    fn toggle_fold_at_selection(&mut self) -> bool;

    /// Whether `offset` lies inside any collapsed range.
    fn is_offset_folded(&self, offset: usize) -> bool;

    /// Move the selection to `offset` without scrolling the view.
    fn set_selection_silent(&mut self, offset: usize);
}

/// A focused document view able to fold.
pub trait EditorView: Editor + FoldEngine {
    /// Make this view the active one. Returns once activation has settled.
    fn activate(&mut self);

    /// Yield one rendering step so pending selection or fold updates land.
    fn next_frame(&mut self);

    /// Whether the view exposes an addressable fold engine.
    fn has_fold_engine(&self) -> bool {
        true
    }
}

/// Offset of the trailing boundary of `line`, where fold state is sampled.
#[must_use]
pub fn line_end_offset<E: Editor + ?Sized>(editor: &E, line: usize) -> usize {
    let ch = editor.line_text(line).len();
    editor.position_to_offset(Position::new(line, ch))
}

/// Whether the block headed by `line` is currently collapsed.
#[must_use]
pub fn is_line_folded<V: EditorView + ?Sized>(view: &V, line: usize) -> bool {
    view.is_offset_folded(line_end_offset(view, line))
}

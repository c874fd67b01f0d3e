//! An in-memory editor view.
//!
//! `TextBuffer` stands in for a real editor: it holds the lines, a single
//! cursor that doubles as the selection, and a [`FoldMap`]. Its toggle command
//! folds the block headed by the cursor line, or expands it when already
//! folded.

use tracing::trace;

use crate::{
    fold::{FoldMap, fold_extent},
    host::{Document, Editor, EditorView, FoldEngine, Position, line_end_offset},
};

/// Marker appended to a header line whose block is collapsed.
pub const FOLD_MARKER: &str = " …";

/// Lines, a cursor and collapsed ranges behind the [`EditorView`] traits.
///
/// The cursor doubles as the selection, as it does in single-cursor editors.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
    folds: FoldMap,
    toggle_command: bool,
    fold_engine: bool,
    active: bool,
    frames: usize,
}

impl TextBuffer {
    /// Build a buffer from individual lines. An empty input yields one empty
    /// line.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: Position::default(),
            folds: FoldMap::new(),
            toggle_command: true,
            fold_engine: true,
            active: false,
            frames: 0,
        }
    }

    /// Split `text` into lines on `\n` or `\r\n`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Enable or disable the host toggle command.
    #[must_use]
    pub fn with_toggle_command(mut self, enabled: bool) -> Self {
        self.toggle_command = enabled;
        self
    }

    /// Attach or detach the fold engine.
    #[must_use]
    pub fn with_fold_engine(mut self, enabled: bool) -> Self {
        self.fold_engine = enabled;
        self
    }

    /// Collapsed ranges currently in effect.
    #[must_use]
    pub fn folds(&self) -> &FoldMap {
        &self.folds
    }

    /// Whether [`EditorView::activate`] has been called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of rendering steps yielded so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn line_start_offset(&self, line: usize) -> usize {
        self.lines[..line.min(self.lines.len())]
            .iter()
            .map(|l| l.len() + 1)
            .sum()
    }

    /// Lines as currently displayed: hidden lines are dropped and collapsed
    /// headers carry [`FOLD_MARKER`].
    #[must_use]
    pub fn visible_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .enumerate()
            .filter(|&(idx, _)| !self.folds.hides(self.line_start_offset(idx)))
            .map(|(idx, line)| {
                let end = line_end_offset(self, idx);
                if self.folds.contains(end) && !self.folds.hides(end) {
                    format!("{line}{FOLD_MARKER}")
                } else {
                    line.clone()
                }
            })
            .collect()
    }
}

impl Document for TextBuffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, index: usize) -> &str {
        self.lines.get(index).map_or("", String::as_str)
    }
}

impl Editor for TextBuffer {
    fn offset_to_position(&self, offset: usize) -> Position {
        let mut start = 0;
        for (line, text) in self.lines.iter().enumerate() {
            let end = start + text.len();
            if offset <= end {
                return Position::new(line, offset - start);
            }
            start = end + 1;
        }
        let last = self.lines.len() - 1;
        Position::new(last, self.lines[last].len())
    }

    fn position_to_offset(&self, position: Position) -> usize {
        let line = position.line.min(self.lines.len() - 1);
        self.line_start_offset(line) + position.ch.min(self.lines[line].len())
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, position: Position) {
        let offset = self.position_to_offset(position);
        self.cursor = self.offset_to_position(offset);
    }
}

impl FoldEngine for TextBuffer {
    fn toggle_fold_at_selection(&mut self) -> bool {
        if !self.toggle_command {
            return false;
        }
        let header = self.cursor.line;
        let start = line_end_offset(&*self, header);
        if self.folds.unfold_at(start) {
            trace!(header, "expanded");
        } else if let Some(last) = fold_extent(&*self, header) {
            let end = line_end_offset(&*self, last);
            self.folds.fold(start, end);
            trace!(header, last, "collapsed");
        }
        true
    }

    fn is_offset_folded(&self, offset: usize) -> bool {
        self.folds.contains(offset)
    }

    fn set_selection_silent(&mut self, offset: usize) {
        self.cursor = self.offset_to_position(offset);
    }
}

impl EditorView for TextBuffer {
    fn activate(&mut self) {
        self.active = true;
    }

    fn next_frame(&mut self) {
        self.frames += 1;
    }

    fn has_fold_engine(&self) -> bool {
        self.fold_engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        let buf = TextBuffer::from_text("");
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_text(0), "");
        assert_eq!(buf.line_text(5), "");
    }

    #[test]
    fn offsets_round_trip_through_positions() {
        let buf = TextBuffer::from_lines(["ab", "", "cde"]);
        assert_eq!(buf.position_to_offset(Position::new(2, 1)), 5);
        assert_eq!(buf.offset_to_position(5), Position::new(2, 1));
        assert_eq!(buf.offset_to_position(3), Position::new(1, 0));
        assert_eq!(buf.offset_to_position(99), Position::new(2, 3));
        assert_eq!(buf.position_to_offset(Position::new(0, 10)), 2);
    }

    #[test]
    fn toggle_folds_and_unfolds_heading_section() {
        let mut buf = TextBuffer::from_lines(["# A", "## B", "- x", "  - y"]);
        buf.set_cursor(Position::new(1, 0));
        assert!(buf.toggle_fold_at_selection());
        assert_eq!(buf.visible_lines(), vec!["# A", "## B …"]);
        assert!(buf.toggle_fold_at_selection());
        assert_eq!(buf.visible_lines(), vec!["# A", "## B", "- x", "  - y"]);
    }

    #[test]
    fn toggle_on_leaf_is_a_successful_noop() {
        let mut buf = TextBuffer::from_lines(["- x", "- y"]);
        assert!(buf.toggle_fold_at_selection());
        assert!(buf.folds().is_empty());
    }

    #[test]
    fn disabled_command_reports_failure() {
        let mut buf = TextBuffer::from_lines(["# A", "text"]).with_toggle_command(false);
        assert!(!buf.toggle_fold_at_selection());
    }
}

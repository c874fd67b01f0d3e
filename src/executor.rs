//! Running the host fold command without losing the user's place.
//!
//! The host folds whatever block the selection sits in, so the selection is
//! parked on the target line first. Afterwards the cursor goes back to where
//! it was, unless that spot has just been hidden.

use tracing::{trace, warn};

use crate::{
    classify::fold_friendly_anchor,
    error::FoldError,
    host::{EditorView, Position},
};

/// Cursor restoration to run once the fold has visually settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the cursor is only restored when the pending restore is settled"]
pub struct PendingRestore {
    original_offset: usize,
}

impl PendingRestore {
    /// Put the cursor back at its original offset unless it is now folded.
    ///
    /// Returns whether the cursor was moved.
    pub fn settle<V: EditorView + ?Sized>(self, view: &mut V) -> bool {
        if view.is_offset_folded(self.original_offset) {
            trace!(offset = self.original_offset, "original cursor is hidden; leaving it");
            return false;
        }
        let position = view.offset_to_position(self.original_offset);
        view.set_cursor(position);
        true
    }
}

/// Toggle the fold at `target_line` and schedule cursor restoration.
///
/// # Errors
/// Returns [`FoldError::ToggleRejected`] when the host command does not run;
/// the cursor is then restored to `original` immediately.
pub fn toggle_with_safe_cursor<V: EditorView + ?Sized>(
    view: &mut V,
    target_line: usize,
    original: Position,
) -> Result<PendingRestore, FoldError> {
    let original_offset = view.position_to_offset(original);

    if target_line != original.line {
        let anchor = fold_friendly_anchor(view.line_text(target_line));
        let offset = view.position_to_offset(Position::new(target_line, anchor));
        view.set_selection_silent(offset);
        view.next_frame();
    }

    if !view.toggle_fold_at_selection() {
        warn!(line = target_line, "toggle fold command did not run");
        view.set_cursor(original);
        return Err(FoldError::ToggleRejected { line: target_line });
    }

    Ok(PendingRestore { original_offset })
}

//! Choosing which line a toggle acts on.

use tracing::debug;

use crate::{
    classify::classify,
    hierarchy::{find_heading_above, find_list_parent, heading_has_children, list_has_children},
    host::Document,
};

/// Pick the line whose block a toggle at `cursor_line` should fold.
///
/// Prefers the container under the cursor when it has children, then the
/// enclosing list item, then the enclosing heading. A bare top-level list item
/// targets itself so the toggle is still attempted.
///
/// # Examples
///
/// ```
/// use smartfold::{TextBuffer, resolve_target};
///
/// let doc = TextBuffer::from_lines(["# A", "## B", "- x", "  - y"]);
/// assert_eq!(resolve_target(&doc, 1), Some(1));
/// assert_eq!(resolve_target(&doc, 3), Some(2));
/// ```
#[must_use]
pub fn resolve_target<D: Document + ?Sized>(doc: &D, cursor_line: usize) -> Option<usize> {
    let info = classify(doc.line_text(cursor_line));
    let has_children = (info.is_list && list_has_children(doc, cursor_line, info.indent))
        || (info.is_heading && heading_has_children(doc, cursor_line, info.heading_level));
    let target = if has_children {
        Some(cursor_line)
    } else {
        info.is_list
            .then(|| find_list_parent(doc, cursor_line, info.indent))
            .flatten()
            .or_else(|| find_heading_above(doc, cursor_line))
            .or_else(|| (info.is_list && info.indent == 0).then_some(cursor_line))
    };
    debug!(cursor_line, ?target, "resolved toggle target");
    target
}

/// Secondary candidate consulted when [`resolve_target`] finds nothing: the
/// list parent of a list item, else the nearest heading above.
#[must_use]
pub fn find_fallback_parent<D: Document + ?Sized>(doc: &D, from_line: usize) -> Option<usize> {
    let info = classify(doc.line_text(from_line));
    info.is_list
        .then(|| find_list_parent(doc, from_line, info.indent))
        .flatten()
        .or_else(|| find_heading_above(doc, from_line))
}

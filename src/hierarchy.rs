//! Ancestor and descendant discovery over flat lines.
//!
//! Structure is inferred on demand from indentation and heading levels by
//! walking forward or backward from a line until a stop condition holds. No
//! tree is built; the document may change between invocations.

use crate::{
    classify::{LineInfo, classify},
    host::Document,
};

fn info_at<D: Document + ?Sized>(doc: &D, line: usize) -> LineInfo<'_> {
    classify(doc.line_text(line))
}

/// Whether the list item at `line` has a deeper list item beneath it.
///
/// Blank lines are skipped. The walk stops at the first heading, non-list
/// line, or list item at `indent` or shallower.
#[must_use]
pub fn list_has_children<D: Document + ?Sized>(doc: &D, line: usize, indent: usize) -> bool {
    for l in line + 1..doc.line_count() {
        let info = info_at(doc, l);
        if info.is_blank() {
            continue;
        }
        return !info.is_heading && info.is_list && info.indent > indent;
    }
    false
}

/// Whether the heading at `line` has any content before the next heading of
/// `level` or higher rank.
#[must_use]
pub fn heading_has_children<D: Document + ?Sized>(doc: &D, line: usize, level: usize) -> bool {
    for l in line + 1..doc.line_count() {
        let info = info_at(doc, l);
        if info.is_heading && info.heading_level <= level {
            return false;
        }
        if !info.is_blank() {
            return true;
        }
    }
    false
}

/// Nearest list item above `from_line` that is shallower than `child_indent`.
///
/// Never crosses a heading, and stops at a non-list line indented at or
/// below `child_indent`.
#[must_use]
pub fn find_list_parent<D: Document + ?Sized>(
    doc: &D,
    from_line: usize,
    child_indent: usize,
) -> Option<usize> {
    for l in (0..from_line).rev() {
        let info = info_at(doc, l);
        if info.is_heading {
            return None;
        }
        if info.is_blank() {
            continue;
        }
        if info.is_list && info.indent < child_indent {
            return Some(l);
        }
        if !info.is_list && info.indent <= child_indent {
            return None;
        }
    }
    None
}

/// First heading at or above `from_line`, of any level.
#[must_use]
pub fn find_heading_above<D: Document + ?Sized>(doc: &D, from_line: usize) -> Option<usize> {
    (0..=from_line)
        .rev()
        .find(|&l| l < doc.line_count() && info_at(doc, l).is_heading)
}

/// The structural parent exactly one level above `child_line`.
///
/// List items climb to their list parent, falling back to the enclosing
/// heading. Headings climb to the nearest preceding heading of strictly
/// higher rank. Plain lines resolve to the enclosing heading.
#[must_use]
pub fn find_immediate_parent<D: Document + ?Sized>(doc: &D, child_line: usize) -> Option<usize> {
    let info = info_at(doc, child_line);
    if info.is_list {
        return find_list_parent(doc, child_line, info.indent)
            .or_else(|| find_heading_above(doc, child_line));
    }
    if info.is_heading {
        let level = info.heading_level;
        return (0..child_line).rev().find(|&l| {
            let parent = info_at(doc, l);
            parent.is_heading && parent.heading_level < level
        });
    }
    find_heading_above(doc, child_line)
}

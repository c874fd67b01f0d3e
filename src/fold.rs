//! Collapsed-range bookkeeping for the in-memory host.
//!
//! Mirrors how a Markdown editor decides what a fold covers: a heading hides
//! its section, a list item hides the deeper-indented lines below it.
//! Trailing blank lines stay visible.

use std::ops::RangeInclusive;

use crate::{classify::classify, host::Document};

/// Last line hidden when folding the block headed by `line`, if any.
#[must_use]
pub fn fold_extent<D: Document + ?Sized>(doc: &D, line: usize) -> Option<usize> {
    let header = classify(doc.line_text(line));
    let mut last = None;
    for l in line + 1..doc.line_count() {
        let info = classify(doc.line_text(l));
        if header.is_heading {
            if info.is_heading && info.heading_level <= header.heading_level {
                break;
            }
        } else if header.is_list {
            if info.is_blank() {
                continue;
            }
            if info.indent <= header.indent {
                break;
            }
        } else {
            break;
        }
        if !info.is_blank() {
            last = Some(l);
        }
    }
    last
}

/// Collapsed ranges as inclusive byte offsets, from the end of the header
/// line to the end of the last hidden line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FoldMap {
    ranges: Vec<RangeInclusive<usize>>,
}

impl FoldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Whether `offset` falls inside any collapsed range, boundaries included.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(&offset))
    }

    /// Whether `offset` is strictly past the start of some range.
    #[must_use]
    pub fn hides(&self, offset: usize) -> bool {
        self.ranges
            .iter()
            .any(|r| offset > *r.start() && offset <= *r.end())
    }

    pub fn fold(&mut self, start: usize, end: usize) {
        self.ranges.push(start..=end);
    }

    /// Expand the range starting at `start`. Returns `false` if there was none.
    pub fn unfold_at(&mut self, start: usize) -> bool {
        let before = self.ranges.len();
        self.ranges.retain(|r| *r.start() != start);
        self.ranges.len() != before
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::TextBuffer;

    #[rstest]
    #[case(&["# A", "## B", "- x", "  - y"], 0, Some(3))]
    #[case(&["# A", "## B", "- x", "  - y"], 1, Some(3))]
    #[case(&["# A", "## B", "- x", "  - y"], 2, Some(3))]
    #[case(&["# A", "## B", "- x", "  - y"], 3, None)]
    #[case(&["## A", "text", "", "## B"], 0, Some(1))]
    #[case(&["- a", "", "  - b", "", "- c"], 0, Some(2))]
    #[case(&["- a", "  continued", "text"], 0, Some(1))]
    #[case(&["plain", "  indented"], 0, None)]
    #[case(&["## A", "## B"], 0, None)]
    fn extents(#[case] lines: &[&str], #[case] line: usize, #[case] expected: Option<usize>) {
        let doc = TextBuffer::from_lines(lines.iter().copied());
        assert_eq!(fold_extent(&doc, line), expected);
    }

    #[test]
    fn fold_then_unfold() {
        let mut folds = FoldMap::new();
        folds.fold(3, 10);
        assert!(folds.contains(3));
        assert!(folds.contains(10));
        assert!(!folds.contains(11));
        assert!(folds.hides(4));
        assert!(!folds.hides(3));
        assert!(!folds.unfold_at(4));
        assert!(folds.unfold_at(3));
        assert!(folds.is_empty());
    }
}

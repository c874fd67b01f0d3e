//! Structural classification of single lines.
//!
//! A line is reduced to the handful of facts the folding logic needs: its
//! indentation width, whether it opens a list item and whether it is an ATX
//! heading (and at which level).

lazy_regex!(LIST_RE = r"^\s*(?:[-*+]\s+|\d+\.\s+)", "valid list marker regex");
lazy_regex!(HEADING_RE = r"^(#{1,6})(\s)\s*", "valid heading regex");

/// Width contributed by a tab in leading whitespace.
const TAB_WIDTH: usize = 2;

/// Structural facts about one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo<'a> {
    /// Width of the leading whitespace, with tabs counting as two.
    pub indent: usize,
    /// Starts with a bullet (`-`, `*`, `+`) or ordered (`1.`) marker and a space.
    pub is_list: bool,
    /// Starts with one to six `#` characters and whitespace.
    pub is_heading: bool,
    /// Number of leading `#` characters, or `0` when not a heading.
    pub heading_level: usize,
    /// The unmodified line text.
    pub raw: &'a str,
}

impl LineInfo<'_> {
    /// Whether the line holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Classify a single line.
///
/// Heading classification takes precedence: a line matching both patterns is
/// reported with `is_list` cleared.
///
/// # Examples
///
/// ```
/// use smartfold::classify;
///
/// let info = classify("  - item");
/// assert_eq!(info.indent, 2);
/// assert!(info.is_list);
/// assert!(!info.is_heading);
/// ```
#[must_use]
pub fn classify(raw: &str) -> LineInfo<'_> {
    let indent = indent_width(raw);
    let heading_level = HEADING_RE
        .captures(raw)
        .and_then(|cap| cap.get(1))
        .map_or(0, |m| m.len());
    let is_heading = heading_level > 0;
    LineInfo {
        indent,
        is_list: !is_heading && LIST_RE.is_match(raw),
        is_heading,
        heading_level,
        raw,
    }
}

fn indent_width(raw: &str) -> usize {
    raw.chars()
        .take_while(|c| c.is_whitespace())
        .fold(0, |acc, ch| acc + if ch == '\t' { TAB_WIDTH } else { 1 })
}

/// Byte offset inside `raw` where a selection can sit without landing on a
/// structural marker.
///
/// Prefers the position just past a list marker, then just past the heading
/// hashes and the whitespace character after them, then the first
/// non-whitespace character, then `0`. The result is always a char boundary.
#[must_use]
pub fn fold_friendly_anchor(raw: &str) -> usize {
    if let Some(m) = LIST_RE.find(raw) {
        return m.end();
    }
    if let Some(separator) = HEADING_RE.captures(raw).and_then(|cap| cap.get(2)) {
        return separator.end();
    }
    raw.find(|c: char| !c.is_whitespace()).unwrap_or(0)
}

//! Utility helpers shared across integration tests.

use smartfold::{Editor, Position, TextBuffer};

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Build a view over `lines` with the cursor at `line`, `ch`.
pub fn view_at(lines: &[&str], line: usize, ch: usize) -> TextBuffer {
    let mut view = TextBuffer::from_lines(lines.iter().copied());
    view.set_cursor(Position::new(line, ch));
    view
}

//! Structure-aware folding for Markdown-like documents.
//!
//! Given a cursor line, the library works out which heading or list item
//! should be collapsed or expanded, escalates to the parent block on a fast
//! double tap, and drives the host's fold command without stranding the
//! cursor inside hidden text. Structure is inferred from indentation and
//! heading levels on every call; no tree is kept.

#[macro_use]
mod macros;

pub mod buffer;
pub mod classify;
pub mod command;
pub mod error;
pub mod escalate;
pub mod executor;
pub mod fold;
pub mod hierarchy;
pub mod host;
pub mod settings;
pub mod target;

pub use buffer::{FOLD_MARKER, TextBuffer};
pub use classify::{LineInfo, classify, fold_friendly_anchor};
pub use command::{COMMAND_NAME, SmartFold, Toggled};
pub use error::FoldError;
pub use escalate::{Clock, DoubleTap, FoldTransition, ManualClock, MonotonicClock, Tap};
pub use executor::{PendingRestore, toggle_with_safe_cursor};
pub use fold::{FoldMap, fold_extent};
pub use hierarchy::{
    find_heading_above, find_immediate_parent, find_list_parent, heading_has_children,
    list_has_children,
};
pub use host::{
    Document, Editor, EditorView, FoldEngine, Position, is_line_folded, line_end_offset,
};
pub use settings::{
    DEFAULT_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS, MIN_DOUBLE_TAP_WINDOW_MS, Settings,
};
pub use target::{find_fallback_parent, resolve_target};

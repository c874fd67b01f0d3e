//! Reasons a toggle did nothing.

use thiserror::Error;

/// Why an invocation ended without toggling anything.
///
/// Every variant is local to one invocation; callers usually log and move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error("no active document view")]
    NoActiveView,
    #[error("the editor exposes no fold engine")]
    NoFoldEngineBinding,
    #[error("no foldable block at line {line}")]
    NoTarget { line: usize },
    #[error("the fold engine rejected the toggle at line {line}")]
    ToggleRejected { line: usize },
}

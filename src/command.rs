//! The "Toggle Smart Fold" action.
//!
//! Ties the pieces together: resolve the block under the cursor, escalate to
//! its parent on a fast repeat, toggle it with the cursor kept safe, then arm
//! or cancel the double-tap window from the fold change actually observed.

use tracing::{debug, trace};

use crate::{
    error::FoldError,
    escalate::{Clock, DoubleTap, FoldTransition, MonotonicClock},
    executor::toggle_with_safe_cursor,
    host::{EditorView, is_line_folded},
    settings::Settings,
    target::{find_fallback_parent, resolve_target},
};

/// User-facing name of the action.
pub const COMMAND_NAME: &str = "Toggle Smart Fold";

/// What one successful invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// Line whose block was toggled.
    pub target: usize,
    /// Whether a double tap moved the target to a parent.
    pub escalated: bool,
    pub transition: FoldTransition,
}

/// Owner of the settings and the double-tap state for one editor session.
#[derive(Debug)]
pub struct SmartFold<C = MonotonicClock> {
    settings: Settings,
    double_tap: DoubleTap,
    clock: C,
}

impl Default for SmartFold {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SmartFold {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, MonotonicClock)
    }
}

impl<C: Clock> SmartFold<C> {
    #[must_use]
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        Self {
            settings,
            double_tap: DoubleTap::new(),
            clock,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    #[must_use]
    pub fn double_tap(&self) -> &DoubleTap {
        &self.double_tap
    }

    /// Run the action against the focused view.
    ///
    /// # Errors
    /// Returns a [`FoldError`] when there is no view, no fold engine, nothing
    /// to fold, or the host rejects the toggle. The double-tap state is left
    /// untouched in every error case.
    pub fn toggle<V: EditorView + ?Sized>(
        &mut self,
        view: Option<&mut V>,
    ) -> Result<Toggled, FoldError> {
        let view = view.ok_or(FoldError::NoActiveView)?;
        if !view.has_fold_engine() {
            return Err(FoldError::NoFoldEngineBinding);
        }
        view.activate();
        view.next_frame();

        let original = view.cursor();
        let resolved = resolve_target(&*view, original.line)
            .or_else(|| find_fallback_parent(&*view, original.line))
            .ok_or(FoldError::NoTarget {
                line: original.line,
            })?;

        let tap = self
            .double_tap
            .tap(self.clock.now(), self.settings.double_tap_window());
        let target = self
            .double_tap
            .escalate(tap, &self.settings, &*view, resolved);

        let was_folded = is_line_folded(&*view, target);
        let pending = toggle_with_safe_cursor(view, target, original)?;

        view.next_frame();
        pending.settle(view);

        let is_folded = is_line_folded(&*view, target);
        let transition = FoldTransition::from_samples(was_folded, is_folded);
        trace!(line = target, was_folded, is_folded, "sampled fold state");
        self.double_tap.record(tap, transition);
        debug!(line = target, ?transition, within_window = tap.within_window, "toggled");

        Ok(Toggled {
            target,
            escalated: target != resolved,
            transition,
        })
    }
}

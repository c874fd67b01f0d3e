//! Double-tap escalation to the parent block.
//!
//! Two toggles inside the configured window fold the parent of whatever the
//! second toggle would otherwise have targeted. The only state carried between
//! invocations is the time of the last one that armed the window.

use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{hierarchy::find_immediate_parent, host::Document, settings::Settings};

/// Source of monotonic time.
pub trait Clock {
    /// The current instant; never earlier than a previous reading.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// The system monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Advancing past the furthest representable instant leaves the clock where
/// it is.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    elapsed: Cell<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// A clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let next = self.elapsed.get().saturating_add(by);
        if self.base.checked_add(next).is_some() {
            self.elapsed.set(next);
        }
    }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }
}

/// Fold state change observed at a target across one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldTransition {
    /// Expanded before, collapsed after.
    Folded,
    /// Collapsed before, expanded after.
    Unfolded,
    /// No visible change at the target.
    Unchanged,
}

impl FoldTransition {
    /// Classify a before/after pair of fold-state samples.
    #[must_use]
    pub fn from_samples(was_folded: bool, is_folded: bool) -> Self {
        match (was_folded, is_folded) {
            (false, true) => Self::Folded,
            (true, false) => Self::Unfolded,
            _ => Self::Unchanged,
        }
    }
}

/// One invocation as seen by the escalator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub now: Instant,
    pub within_window: bool,
}

/// Tracks the last arming invocation. `None` means "never".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTap {
    last_invoke: Option<Instant>,
}

impl DoubleTap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_invoke(&self) -> Option<Instant> {
        self.last_invoke
    }

    /// Start an invocation at `now`.
    #[must_use]
    pub fn tap(&self, now: Instant, window: Duration) -> Tap {
        let within_window = self
            .last_invoke
            .is_some_and(|last| now.saturating_duration_since(last) <= window);
        Tap { now, within_window }
    }

    /// Replace `target` with its immediate parent when the tap escalates.
    #[must_use]
    pub fn escalate<D: Document + ?Sized>(
        &self,
        tap: Tap,
        settings: &Settings,
        doc: &D,
        target: usize,
    ) -> usize {
        if !(settings.double_tap_folds_parent && tap.within_window) {
            return target;
        }
        match find_immediate_parent(doc, target) {
            Some(parent) => {
                debug!(child = target, escalated = parent, "double tap escalated to parent");
                parent
            }
            None => target,
        }
    }

    /// Update the window after a toggle completed with `transition`.
    pub fn record(&mut self, tap: Tap, transition: FoldTransition) {
        match transition {
            FoldTransition::Folded => self.last_invoke = Some(tap.now),
            // An unfold inside the window completes a pair already consumed.
            FoldTransition::Unfolded if tap.within_window => {}
            FoldTransition::Unfolded => self.last_invoke = Some(tap.now),
            FoldTransition::Unchanged => self.last_invoke = None,
        }
    }
}

//! User-tunable behaviour of the toggle command.

use std::time::Duration;

/// Shortest accepted double-tap window in milliseconds.
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 120;
/// Longest accepted double-tap window in milliseconds.
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1500;
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 350;

/// Settings read by [`crate::SmartFold`].
///
/// The window is clamped to
/// [`MIN_DOUBLE_TAP_WINDOW_MS`]..=[`MAX_DOUBLE_TAP_WINDOW_MS`] on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Escalate a fast repeat to the parent block.
    pub double_tap_folds_parent: bool,
    double_tap_window_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            double_tap_folds_parent: true,
            double_tap_window_ms: DEFAULT_DOUBLE_TAP_WINDOW_MS,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn new(double_tap_folds_parent: bool, double_tap_window_ms: u64) -> Self {
        let mut settings = Self {
            double_tap_folds_parent,
            ..Self::default()
        };
        settings.set_double_tap_window_ms(double_tap_window_ms);
        settings
    }

    #[must_use]
    pub fn double_tap_window_ms(&self) -> u64 {
        self.double_tap_window_ms
    }

    #[must_use]
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }

    pub fn set_double_tap_window_ms(&mut self, ms: u64) {
        self.double_tap_window_ms = ms.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS);
    }

    /// Parse a window typed by the user.
    ///
    /// Accepts any positive finite number, rounding to whole milliseconds and
    /// clamping into range. Returns `None` for anything else so the caller can
    /// keep the previous value.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartfold::Settings;
    ///
    /// assert_eq!(Settings::parse_window_ms("80"), Some(120));
    /// assert_eq!(Settings::parse_window_ms("400.6"), Some(401));
    /// assert_eq!(Settings::parse_window_ms("abc"), None);
    /// ```
    #[must_use]
    pub fn parse_window_ms(input: &str) -> Option<u64> {
        let value: f64 = input.trim().parse().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss,
            reason = "value is positive and capped at the window maximum before the cast"
        )]
        let ms = value
            .round()
            .min(MAX_DOUBLE_TAP_WINDOW_MS as f64) as u64;
        Some(ms.clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS))
    }
}

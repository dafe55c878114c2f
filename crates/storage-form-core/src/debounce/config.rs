//! Debounce configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default quiet period in milliseconds.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 500;

/// Configuration for debounced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds.
    ///
    /// After a keystroke, the value is propagated once no further keystroke
    /// arrived for this long. Additional keystrokes reset the timer.
    pub quiet_period_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
        }
    }
}

impl DebounceConfig {
    /// Create a config with the given quiet period.
    pub fn from_millis(quiet_period_ms: u64) -> Self {
        Self { quiet_period_ms }
    }

    /// The quiet period as a `Duration`.
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

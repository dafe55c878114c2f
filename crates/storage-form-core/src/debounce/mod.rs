//! Input debouncing.
//!
//! Provides:
//! - `DebounceConfig` - quiet period settings
//! - `DebouncedInput` - per-key schedule-and-replace of pending values

mod config;
mod input;

pub use config::{DEFAULT_QUIET_PERIOD_MS, DebounceConfig};
pub use input::DebouncedInput;

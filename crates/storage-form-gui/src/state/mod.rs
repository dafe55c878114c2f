//! Application state management.
//!
//! - **AppState**: form state, raw input text, debouncer and last snapshot
//! - **Settings**: persisted user preferences

mod app_state;
mod settings;

pub use app_state::AppState;
pub use settings::{DisplaySettings, LoggingSettings, Settings};

//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: Settings fallbacks, rejected submits
//! - `info`: Startup, successful submits
//! - `debug`: Values applied after the quiet period, validation failures
//! - `trace`: Superseded keystrokes
//!
//! Submitted names are personal data and are redacted unless
//! `logging.log_values` is enabled in the settings.

use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::LoggingSettings;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (error, warn, info, debug, trace).
    pub level: Level,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Build a config from the logging section of the settings.
    ///
    /// Unrecognized level names fall back to `info`.
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.parse().unwrap_or(Level::INFO),
            ..Self::default()
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(
            fmt::layer()
                .with_target(config.with_target)
                .with_ansi(config.with_ansi),
        )
        .try_init()
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // External crates (wgpu, winit, ...) stay at warn to reduce noise
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,storage_form={level},storage_form_core={level},storage_form_gui={level}",
            level = level_str
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_parses_level() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            log_values: false,
        };
        assert_eq!(LogConfig::from_settings(&settings).level, Level::DEBUG);
    }

    #[test]
    fn test_from_settings_falls_back_to_info() {
        let settings = LoggingSettings {
            level: "chatty".to_string(),
            log_values: false,
        };
        assert_eq!(LogConfig::from_settings(&settings).level, Level::INFO);
    }
}

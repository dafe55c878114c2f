//! GUI-specific error types.
//!
//! Nothing in the form itself can fail; these errors cover the settings file.
//! They are logged and the application falls back to defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Settings file errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("Failed to read settings file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for `Settings`.
    #[error("Failed to parse settings file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialized.
    #[error("Failed to serialize settings")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    /// The settings file or its directory could not be written.
    #[error("Failed to write settings file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SettingsError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { path, .. } => {
                format!("Could not read the settings at {}", path.display())
            }
            Self::Parse { path, source } => {
                format!(
                    "The settings at {} are not valid: {}",
                    path.display(),
                    source.message()
                )
            }
            Self::Serialize { .. } => "An error occurred while encoding the settings.".to_string(),
            Self::Write { path, .. } => {
                format!("Could not save the settings to {}", path.display())
            }
        }
    }
}

/// Result type alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

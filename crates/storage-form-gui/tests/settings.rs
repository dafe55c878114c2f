//! Tests for loading and saving settings.

use std::fs;

use storage_form_core::DebounceConfig;
use storage_form_gui::error::SettingsError;
use storage_form_gui::state::{LoggingSettings, Settings};
use storage_form_gui::theme::ThemeMode;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.input.quiet_period_ms, 500);
    assert_eq!(settings.display.theme, ThemeMode::Light);
    assert!(!settings.logging.log_values);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[display]\ntheme = \"dark\"\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.display.theme, ThemeMode::Dark);
    assert_eq!(settings.input, DebounceConfig::default());
    assert_eq!(settings.logging, LoggingSettings::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.input = DebounceConfig::from_millis(250);
    settings.logging.level = "debug".to_string();
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[input]\nquiet_period_ms = \"soon\"\n").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.user_message().contains("not valid"));
}

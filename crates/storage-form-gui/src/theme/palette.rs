//! Color palettes and theme creation.

use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Appearance mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Create the application theme for a mode.
pub fn app_theme(mode: ThemeMode) -> Theme {
    let palette = match mode {
        ThemeMode::Light => light(),
        ThemeMode::Dark => dark(),
    };
    Theme::custom(format!("Storage Form {}", mode.label()), palette)
}

/// Light palette.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.10, 0.10, 0.12),
        primary: Color::from_rgb(0.00, 0.47, 0.83), // Fluent blue
        success: Color::from_rgb(0.20, 0.70, 0.40),
        warning: Color::from_rgb(0.95, 0.65, 0.05),
        danger: Color::from_rgb(0.64, 0.15, 0.18),
    }
}

/// Dark palette.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.11, 0.11, 0.13),
        text: Color::from_rgb(0.93, 0.93, 0.95),
        primary: Color::from_rgb(0.28, 0.63, 0.95),
        success: Color::from_rgb(0.35, 0.80, 0.50),
        warning: Color::from_rgb(1.00, 0.75, 0.20),
        danger: Color::from_rgb(0.95, 0.40, 0.40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            theme: ThemeMode,
        }

        let toml = toml::to_string(&Wrapper {
            theme: ThemeMode::Dark,
        })
        .unwrap();
        assert_eq!(toml.trim(), r#"theme = "dark""#);

        let parsed: Wrapper = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(parsed.theme, ThemeMode::Light);
    }

    #[test]
    fn test_dark_theme_is_dark() {
        assert!(app_theme(ThemeMode::Dark).extended_palette().is_dark);
        assert!(!app_theme(ThemeMode::Light).extended_palette().is_dark);
    }
}

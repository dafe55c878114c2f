//! Custom widget styles.
//!
//! Style functions receive `&Theme` and read colors from its extended palette.

use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Theme};

use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the Save action.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border = Border {
        radius: spacing::BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border,
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.weak.color.into()),
            text_color: palette.primary.weak.text,
            border,
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.weak.text,
            border,
            ..Default::default()
        },
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let (border_color, border_width) = match status {
        text_input::Status::Focused { .. } => (palette.primary.base.color, spacing::BORDER_WIDTH_MEDIUM),
        text_input::Status::Hovered => (palette.background.base.text, spacing::BORDER_WIDTH_THIN),
        _ => (palette.background.strong.color, spacing::BORDER_WIDTH_THIN),
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: palette.background.strong.text,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Text input style for error state
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input_default(theme, status);
    style.border.color = theme.extended_palette().danger.base.color;
    style.border.width = spacing::BORDER_WIDTH_MEDIUM;
    style
}

// =============================================================================
// TEXT STYLES
// =============================================================================

/// Muted text - labels and secondary copy.
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

/// Danger text - validation messages.
pub fn text_danger(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Panel showing the last submitted record.
pub fn snapshot_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

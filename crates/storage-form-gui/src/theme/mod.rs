//! Theme module for the storage form.
//!
//! - Color palettes for light and dark appearance (`palette`)
//! - Spacing constants (`spacing`)
//! - Custom widget styles (`style`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use storage_form_gui::theme::{button_primary, SPACING_MD};
//!
//! button(text("Save")).style(button_primary).padding(SPACING_MD)
//! ```

pub mod palette;
pub mod spacing;
pub mod style;

pub use palette::{ThemeMode, app_theme};
pub use spacing::{
    BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN, FORM_MAX_WIDTH, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use style::{
    button_primary, snapshot_panel, text_danger, text_input_default, text_input_error,
    text_muted,
};
